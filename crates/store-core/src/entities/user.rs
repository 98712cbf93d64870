//! User entity - an account that can authenticate against the store

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::UserRole;

/// Store account. The password hash is deliberately not part of the
/// entity; it lives behind the repository and is only touched by the
/// credential paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new account with a fresh identifier
    pub fn new(username: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this account holds the admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
