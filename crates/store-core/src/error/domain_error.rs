//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Cloth not found: {0}")]
    ClothNotFound(Uuid),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Unknown username: {0}")]
    UnknownUsername(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Price must be non-negative, got {0}")]
    NegativePrice(f64),

    #[error("Unsortable field: {0}")]
    UnsortableField(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Admin role required")]
    AdminRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken")]
    UsernameTaken,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Accounts cannot delete themselves")]
    SelfDeletionForbidden,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ClothNotFound(_) => "UNKNOWN_CLOTH",
            Self::UserNotFound(_) | Self::UnknownUsername(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::NegativePrice(_) => "NEGATIVE_PRICE",
            Self::UnsortableField(_) => "UNSORTABLE_FIELD",
            Self::SelfDeletionForbidden => "SELF_DELETION_FORBIDDEN",

            // Authorization
            Self::AdminRequired => "ADMIN_REQUIRED",

            // Conflict
            Self::UsernameTaken => "USERNAME_TAKEN",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ClothNotFound(_) | Self::UserNotFound(_) | Self::UnknownUsername(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidUsername(_)
                | Self::WeakPassword(_)
                | Self::NegativePrice(_)
                | Self::UnsortableField(_)
                | Self::SelfDeletionForbidden
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::AdminRequired)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameTaken)
    }
}
