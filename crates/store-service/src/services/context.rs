//! Service context - dependency container for services
//!
//! Holds the repositories and shared services every use case needs.

use std::sync::Arc;

use store_common::auth::JwtService;
use store_core::traits::{ClothRepository, UserRepository};
use store_db::PgPool;

/// Service context containing all dependencies
///
/// Passed to every service. Provides access to:
/// - Database repositories
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    cloth_repo: Arc<dyn ClothRepository>,
    user_repo: Arc<dyn UserRepository>,
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        cloth_repo: Arc<dyn ClothRepository>,
        user_repo: Arc<dyn UserRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            cloth_repo,
            user_repo,
            jwt_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the catalog repository
    pub fn cloth_repo(&self) -> &dyn ClothRepository {
        self.cloth_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    cloth_repo: Option<Arc<dyn ClothRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            cloth_repo: None,
            user_repo: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn cloth_repo(mut self, repo: Arc<dyn ClothRepository>) -> Self {
        self.cloth_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.cloth_repo
                .ok_or_else(|| ServiceError::validation("cloth_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
