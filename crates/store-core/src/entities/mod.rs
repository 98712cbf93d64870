//! Domain entities - core business objects

mod cloth;
mod user;

pub use cloth::Cloth;
pub use user::User;
