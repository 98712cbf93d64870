//! User administration handlers
//!
//! Admin-only endpoints for listing and removing accounts.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use store_service::{AuthService, UserResponse, UserService};

use crate::extractors::AuthUser;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List every account (admin only)
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    AuthService::require_admin(&auth.claims)?;

    let service = UserService::new(state.service_context());
    Ok(Json(service.list_users().await?))
}

/// Permanently remove an account (admin only)
///
/// DELETE /delete-user/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    AuthService::require_admin(&auth.claims)?;

    let auth_service = AuthService::new(state.service_context());
    let actor = auth_service.current_user(&auth.claims).await?;

    let service = UserService::new(state.service_context());
    service.delete_user(&actor, user_id).await?;

    Ok(NoContent)
}
