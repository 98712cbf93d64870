//! Value objects - immutable types that represent domain concepts

mod garment;
mod role;
mod sorting;

pub use garment::{ClothKind, ClothSize};
pub use role::UserRole;
pub use sorting::{SortField, SortOrder};
