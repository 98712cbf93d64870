//! PostgreSQL repository implementations

mod cloth;
mod error;
mod user;

pub use cloth::PgClothRepository;
pub use user::PgUserRepository;
