//! Route definitions
//!
//! All API routes, mounted at the server root and organized by domain.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, catalog, health, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(catalog_routes())
}

/// Health and landing routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/token", post(auth::login))
        .route("/token/verify", get(auth::verify_token))
        .route("/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(auth::current_user))
        .route("/users", get(users::list_users))
        .route("/delete-user/:user_id", delete(users::delete_user))
}

/// Catalog routes
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/add-cloth", post(catalog::add_cloth))
        .route("/cloth/:cloth_id", get(catalog::get_cloth))
        .route("/list-clothes", get(catalog::list_clothes))
        .route("/list-active-clothes", get(catalog::list_active_clothes))
        .route("/list-deleted-clothes", get(catalog::list_deleted_clothes))
        .route("/filter-clothes", get(catalog::filter_clothes))
        .route("/paginated-clothes", get(catalog::paginated_clothes))
        .route("/update-cloth/:cloth_id", put(catalog::update_cloth))
        .route("/delete-cloth/:cloth_id", delete(catalog::delete_cloth))
        .route("/restore-cloth/:cloth_id", put(catalog::restore_cloth))
}
