//! User entity <-> model mapper

use store_core::entities::User;
use store_core::error::DomainError;
use store_core::value_objects::UserRole;

use crate::models::UserModel;

/// Convert UserModel to User entity.
///
/// The password hash stays behind the repository; it never rides on the
/// entity.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role: UserRole = model
            .role
            .parse()
            .map_err(|_| DomainError::DatabaseError(format!("Corrupt user role: {}", model.role)))?;

        Ok(User {
            id: model.id,
            username: model.username,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
