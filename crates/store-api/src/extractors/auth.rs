//! Authentication extractor
//!
//! Extracts and validates JWT bearer tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use store_common::auth::Claims;
use store_common::AppError;
use store_core::value_objects::UserRole;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a bearer token.
///
/// The token is the only credential; there is no session or cookie path.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Validated token claims
    pub claims: Claims,
}

impl AuthUser {
    /// Username the token was issued to
    #[must_use]
    pub fn username(&self) -> &str {
        &self.claims.sub
    }

    /// Role carried by the token
    #[must_use]
    pub fn role(&self) -> UserRole {
        self.claims.role
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        // Validate the token; expiry keeps its own error so clients can
        // tell a stale token from a broken one
        let claims = app_state
            .jwt_service()
            .decode_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                match e {
                    AppError::TokenExpired => ApiError::App(AppError::TokenExpired),
                    _ => ApiError::App(AppError::InvalidToken),
                }
            })?;

        Ok(AuthUser { claims })
    }
}
