//! Authentication service
//!
//! Handles account registration, login, and the admin-role gate.

use tracing::{info, instrument, warn};

use store_common::auth::{
    hash_password, validate_password_strength, verify_password, AccessToken, Claims,
};
use store_common::AppError;
use store_core::entities::User;
use store_core::error::DomainError;

use crate::dto::{LoginRequest, SignupRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Username policy: starts with a letter, then letters, digits, or
/// underscores, at least three characters total.
fn validate_username(username: &str) -> Result<(), DomainError> {
    let mut chars = username.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            username.len() >= 3 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidUsername(
            "Username must start with a letter and contain only letters, numbers, and underscores"
                .to_string(),
        ))
    }
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<UserResponse> {
        validate_username(&request.username)?;
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Usernames collide case-insensitively
        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(ServiceError::from(DomainError::UsernameTaken));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = User::new(request.username, request.role.unwrap_or_default());
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(UserResponse::from(user))
    }

    /// Login with username and password, issuing a bearer token
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AccessToken> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.ctx
            .jwt_service()
            .issue_token(&user.username, user.role)
            .map_err(ServiceError::from)
    }

    /// Resolve the account behind validated claims.
    ///
    /// A token can outlive its account; a missing user means the token no
    /// longer grants access.
    #[instrument(skip(self, claims), fields(username = %claims.sub))]
    pub async fn current_user(&self, claims: &Claims) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_username(&claims.sub)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))
    }

    /// Gate for admin-only operations
    pub fn require_admin(claims: &Claims) -> ServiceResult<()> {
        if claims.role.is_admin() {
            Ok(())
        } else {
            Err(ServiceError::from(DomainError::AdminRequired))
        }
    }
}
