//! Cloth entity <-> model mapper

use store_core::entities::Cloth;
use store_core::error::DomainError;
use store_core::value_objects::{ClothKind, ClothSize};

use crate::models::ClothModel;

/// Convert ClothModel to Cloth entity.
///
/// Fallible because category and size live as TEXT in the database; a
/// value outside the known sets means the row is corrupt.
impl TryFrom<ClothModel> for Cloth {
    type Error = DomainError;

    fn try_from(model: ClothModel) -> Result<Self, Self::Error> {
        let kind: ClothKind = model
            .kind
            .parse()
            .map_err(|_| DomainError::DatabaseError(format!("Corrupt cloth type: {}", model.kind)))?;
        let size: ClothSize = model
            .size
            .parse()
            .map_err(|_| DomainError::DatabaseError(format!("Corrupt cloth size: {}", model.size)))?;

        Ok(Cloth {
            id: model.id,
            name: model.name,
            price: model.price,
            kind,
            size,
            is_active: model.is_active,
            deleted_at: model.deleted_at,
            restored_at: model.restored_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
