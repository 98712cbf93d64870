//! Repository traits and query types

mod repositories;

pub use repositories::{ClothFilter, ClothPage, ClothRepository, RepoResult, UserRepository};
