//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies that carry user input
//! also implement `Validate`.

use serde::Deserialize;
use validator::Validate;

use store_core::value_objects::{ClothKind, ClothSize, UserRole};

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,

    /// Defaults to the regular user role when omitted
    #[serde(default)]
    pub role: Option<UserRole>,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Catalog Requests
// ============================================================================

/// Create catalog entry request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClothRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: f64,

    #[serde(rename = "type")]
    pub kind: ClothKind,

    pub size: ClothSize,
}

/// Partial update of a catalog entry; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateClothRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: Option<f64>,

    #[serde(rename = "type")]
    pub kind: Option<ClothKind>,

    pub size: Option<ClothSize>,
}

impl UpdateClothRequest {
    /// Check whether the patch changes anything at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.kind.is_none() && self.size.is_none()
    }
}

/// Catalog filter query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<ClothKind>,
    pub is_active: Option<bool>,
}

/// Pagination query parameters, as they arrive on the wire.
///
/// `sort_by` and `sort_order` stay strings here so unknown values can be
/// rejected with a proper validation error instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ClothKind>,
    pub is_active: Option<bool>,
}
