//! User administration service

use tracing::{info, instrument};
use uuid::Uuid;

use store_core::entities::User;
use store_core::error::DomainError;

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User administration service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every account
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Permanently remove an account.
    ///
    /// The acting admin cannot delete their own account.
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn delete_user(&self, actor: &User, target: Uuid) -> ServiceResult<()> {
        if actor.id == target {
            return Err(ServiceError::from(DomainError::SelfDeletionForbidden));
        }

        self.ctx.user_repo().delete(target).await?;

        info!(user_id = %target, "User deleted");

        Ok(())
    }
}
