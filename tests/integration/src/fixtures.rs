//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup request
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            password: "TestPass123!".to_string(),
            role: None,
        }
    }

    pub fn unique_admin() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testadmin{suffix}"),
            password: "TestPass123!".to_string(),
            role: Some("admin".to_string()),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            username: signup.username.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Issued token response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Token verification response
#[derive(Debug, Deserialize)]
pub struct TokenVerifyResponse {
    pub username: String,
    pub role: String,
    pub expires_at: i64,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub role: String,
    pub created_at: String,
}

/// Create catalog entry request
#[derive(Debug, Serialize)]
pub struct CreateClothRequest {
    pub name: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
}

impl CreateClothRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Shirt {suffix}"),
            price: 29.99,
            kind: "tops".to_string(),
            size: "M".to_string(),
        }
    }

    pub fn with_price(price: f64) -> Self {
        Self {
            price,
            ..Self::unique()
        }
    }
}

/// Partial update request for a catalog entry
#[derive(Debug, Default, Serialize)]
pub struct UpdateClothRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Catalog entry response
#[derive(Debug, Deserialize)]
pub struct ClothResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
    pub is_active: bool,
    #[serde(default)]
    pub deleted_at: Option<String>,
    #[serde(default)]
    pub restored_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
