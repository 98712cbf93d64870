//! Database models

mod cloth;
mod user;

pub use cloth::ClothModel;
pub use user::UserModel;
