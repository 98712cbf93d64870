//! Business logic services

mod auth;
mod catalog;
mod context;
mod error;
mod user;

pub use auth::AuthService;
pub use catalog::CatalogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
