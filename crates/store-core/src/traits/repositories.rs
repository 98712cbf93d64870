//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Cloth, User};
use crate::error::DomainError;
use crate::value_objects::{ClothKind, SortField, SortOrder};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Conjunctive catalog filter; every predicate is optional
#[derive(Debug, Clone, Default)]
pub struct ClothFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub kind: Option<ClothKind>,
    pub is_active: Option<bool>,
}

/// Offset/limit page request over the catalog
#[derive(Debug, Clone)]
pub struct ClothPage {
    pub offset: i64,
    pub limit: i64,
    pub sort_by: SortField,
    pub order: SortOrder,
    pub is_active: Option<bool>,
    pub kind: Option<ClothKind>,
}

impl Default for ClothPage {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
            sort_by: SortField::default(),
            order: SortOrder::default(),
            is_active: None,
            kind: None,
        }
    }
}

// ============================================================================
// Cloth Repository
// ============================================================================

#[async_trait]
pub trait ClothRepository: Send + Sync {
    /// Find a catalog entry by ID (active or not)
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Cloth>>;

    /// List entries; `is_active` filters to active/inactive when set
    async fn list(&self, is_active: Option<bool>) -> RepoResult<Vec<Cloth>>;

    /// Conjunctive filter over price range, category, and active flag
    async fn filter(&self, filter: &ClothFilter) -> RepoResult<Vec<Cloth>>;

    /// Offset-paginated, sorted page of the catalog
    async fn page(&self, page: &ClothPage) -> RepoResult<Vec<Cloth>>;

    /// Insert a new entry
    async fn create(&self, cloth: &Cloth) -> RepoResult<()>;

    /// Persist all mutable fields of an existing entry
    async fn update(&self, cloth: &Cloth) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is taken, case-insensitively
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// List every account
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Create a new account with its credential hash
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Remove an account permanently
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;
}
