//! Authentication handlers
//!
//! Endpoints for account registration, login, token verification, and
//! logout.

use axum::{extract::State, Json};
use store_common::auth::AccessToken;
use store_service::{
    AuthService, LoginRequest, MessageResponse, SignupRequest, TokenVerifyResponse, UserResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new account
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(Json(response)))
}

/// Login with username and password
///
/// POST /token
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AccessToken>> {
    let service = AuthService::new(state.service_context());
    let token = service.login(request).await?;
    Ok(Json(token))
}

/// Get the account behind the presented token
///
/// GET /users/me
pub async fn current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let user = service.current_user(&auth.claims).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Report the claims of a valid token.
///
/// The extractor has already rejected missing, malformed, and expired
/// tokens by the time this body runs.
///
/// GET /token/verify
pub async fn verify_token(auth: AuthUser) -> Json<TokenVerifyResponse> {
    Json(TokenVerifyResponse {
        username: auth.claims.sub,
        role: auth.claims.role,
        expires_at: auth.claims.exp,
    })
}

/// Logout.
///
/// Tokens are stateless, so there is nothing to revoke server-side; the
/// endpoint confirms the client should discard its token.
///
/// POST /logout
pub async fn logout(auth: AuthUser) -> Json<MessageResponse> {
    tracing::info!(username = %auth.username(), "User logged out");
    Json(MessageResponse::new("Successfully logged out"))
}
