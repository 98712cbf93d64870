//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. The catalog
//! category is serialized under the `type` key clients expect.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use store_core::value_objects::{ClothKind, ClothSize, UserRole};

// ============================================================================
// Catalog Responses
// ============================================================================

/// Catalog entry response
#[derive(Debug, Clone, Serialize)]
pub struct ClothResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: ClothKind,
    pub size: ClothSize,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restored_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// User Responses
// ============================================================================

/// Account response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Token verification response
#[derive(Debug, Serialize)]
pub struct TokenVerifyResponse {
    pub username: String,
    pub role: UserRole,
    pub expires_at: i64,
}

// ============================================================================
// Common Responses
// ============================================================================

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness probe response, including database connectivity
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready() -> Self {
        Self {
            status: "ready",
            database: "up",
        }
    }

    #[must_use]
    pub fn degraded() -> Self {
        Self {
            status: "degraded",
            database: "down",
        }
    }
}
