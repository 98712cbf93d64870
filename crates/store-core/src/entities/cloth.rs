//! Cloth entity - a catalog entry with soft-delete lifecycle

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{ClothKind, ClothSize};

/// Catalog entry for a single garment listing.
///
/// A cloth is never hard-deleted: `soft_delete` marks it inactive and
/// stamps `deleted_at`, `restore` brings it back and stamps `restored_at`.
/// Invariants: `deleted_at` set implies `is_active == false`; `restored_at`
/// set implies `is_active == true` and `deleted_at == None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloth {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub kind: ClothKind,
    pub size: ClothSize,
    pub is_active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub restored_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cloth {
    /// Create a new active catalog entry with a fresh identifier
    pub fn new(name: String, price: f64, kind: ClothKind, size: ClothSize) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            kind,
            size,
            is_active: true,
            deleted_at: None,
            restored_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the entry is currently listed
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Mark the entry inactive.
    ///
    /// Returns `false` without touching the entry if it is already
    /// inactive; repeat deletions are no-ops.
    pub fn soft_delete(&mut self) -> bool {
        if !self.is_active {
            return false;
        }
        let now = Utc::now();
        self.is_active = false;
        self.deleted_at = Some(now);
        self.updated_at = now;
        true
    }

    /// Bring a soft-deleted entry back into the catalog.
    ///
    /// Returns `false` without touching the entry if it is already active.
    /// Clears `deleted_at` so a restored entry carries no deletion mark.
    pub fn restore(&mut self) -> bool {
        if self.is_active {
            return false;
        }
        let now = Utc::now();
        self.is_active = true;
        self.deleted_at = None;
        self.restored_at = Some(now);
        self.updated_at = now;
        true
    }
}
