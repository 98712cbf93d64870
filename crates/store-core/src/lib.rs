//! # store-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Cloth, User};
pub use error::DomainError;
pub use traits::{ClothFilter, ClothPage, ClothRepository, RepoResult, UserRepository};
pub use value_objects::{ClothKind, ClothSize, SortField, SortOrder, UserRole};
