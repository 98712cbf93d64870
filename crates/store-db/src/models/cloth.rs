//! Cloth database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the clothes table.
///
/// Category and size are stored as TEXT and parsed into their enums in
/// the mapper, keeping the domain crate free of database concerns.
#[derive(Debug, Clone, FromRow)]
pub struct ClothModel {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub size: String,
    pub is_active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub restored_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClothModel {
    /// Check if the entry is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        !self.is_active
    }
}
