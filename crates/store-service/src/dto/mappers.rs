//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use store_core::entities::{Cloth, User};

use super::responses::{ClothResponse, UserResponse};

// ============================================================================
// Cloth Mappers
// ============================================================================

impl From<&Cloth> for ClothResponse {
    fn from(cloth: &Cloth) -> Self {
        Self {
            id: cloth.id,
            name: cloth.name.clone(),
            price: cloth.price,
            kind: cloth.kind,
            size: cloth.size,
            is_active: cloth.is_active,
            deleted_at: cloth.deleted_at,
            restored_at: cloth.restored_at,
            created_at: cloth.created_at,
            updated_at: cloth.updated_at,
        }
    }
}

impl From<Cloth> for ClothResponse {
    fn from(cloth: Cloth) -> Self {
        Self::from(&cloth)
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
