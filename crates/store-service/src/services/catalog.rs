//! Catalog service
//!
//! Business logic for catalog entries: creation, lookup, listing,
//! filtering, pagination, partial update, and the soft-delete lifecycle.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use store_core::entities::Cloth;
use store_core::error::DomainError;
use store_core::traits::{ClothFilter, ClothPage};
use store_core::value_objects::{SortField, SortOrder};

use crate::dto::{ClothResponse, CreateClothRequest, FilterQuery, PageQuery, UpdateClothRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const DEFAULT_PAGE_LIMIT: i64 = 10;
const MAX_PAGE_LIMIT: i64 = 100;

/// Catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    /// Create a new CatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn fetch(&self, id: Uuid) -> ServiceResult<Cloth> {
        self.ctx
            .cloth_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::from(DomainError::ClothNotFound(id)))
    }

    /// Add a new catalog entry
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn add(&self, request: CreateClothRequest) -> ServiceResult<ClothResponse> {
        if request.price < 0.0 {
            return Err(ServiceError::from(DomainError::NegativePrice(request.price)));
        }

        let cloth = Cloth::new(request.name, request.price, request.kind, request.size);
        self.ctx.cloth_repo().create(&cloth).await?;

        info!(cloth_id = %cloth.id, "Catalog entry created");

        Ok(ClothResponse::from(cloth))
    }

    /// Look up a single entry, active or not
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<ClothResponse> {
        Ok(ClothResponse::from(self.fetch(id).await?))
    }

    /// List every entry in the catalog
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<ClothResponse>> {
        let clothes = self.ctx.cloth_repo().list(None).await?;
        Ok(clothes.iter().map(ClothResponse::from).collect())
    }

    /// List only active entries
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> ServiceResult<Vec<ClothResponse>> {
        let clothes = self.ctx.cloth_repo().list(Some(true)).await?;
        Ok(clothes.iter().map(ClothResponse::from).collect())
    }

    /// List only soft-deleted entries
    #[instrument(skip(self))]
    pub async fn list_deleted(&self) -> ServiceResult<Vec<ClothResponse>> {
        let clothes = self.ctx.cloth_repo().list(Some(false)).await?;
        Ok(clothes.iter().map(ClothResponse::from).collect())
    }

    /// Filter the catalog; every predicate is optional and they combine
    /// conjunctively
    #[instrument(skip(self))]
    pub async fn filter(&self, query: FilterQuery) -> ServiceResult<Vec<ClothResponse>> {
        if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
            if min > max {
                return Err(ServiceError::validation(
                    "min_price must not exceed max_price",
                ));
            }
        }

        let filter = ClothFilter {
            min_price: query.min_price,
            max_price: query.max_price,
            kind: query.kind,
            is_active: query.is_active,
        };

        let clothes = self.ctx.cloth_repo().filter(&filter).await?;
        Ok(clothes.iter().map(ClothResponse::from).collect())
    }

    /// Fetch a sorted page of the catalog.
    ///
    /// The limit is clamped to 1..=100 and defaults to 10; the sort field
    /// must come from the allow-list or the request is rejected.
    #[instrument(skip(self))]
    pub async fn paginate(&self, query: PageQuery) -> ServiceResult<Vec<ClothResponse>> {
        let sort_by = match query.sort_by.as_deref() {
            Some(raw) => raw
                .parse::<SortField>()
                .map_err(|_| DomainError::UnsortableField(raw.to_string()))?,
            None => SortField::default(),
        };
        let order = match query.sort_order.as_deref() {
            Some(raw) => raw
                .parse::<SortOrder>()
                .map_err(|_| ServiceError::validation(format!("Unknown sort order: {raw}")))?,
            None => SortOrder::default(),
        };

        let page = ClothPage {
            offset: query.skip.unwrap_or(0).max(0),
            limit: query
                .limit
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .clamp(1, MAX_PAGE_LIMIT),
            sort_by,
            order,
            is_active: query.is_active,
            kind: query.kind,
        };

        let clothes = self.ctx.cloth_repo().page(&page).await?;
        Ok(clothes.iter().map(ClothResponse::from).collect())
    }

    /// Apply a partial update to an entry; absent fields keep their value
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: UpdateClothRequest) -> ServiceResult<ClothResponse> {
        if let Some(price) = patch.price {
            if price < 0.0 {
                return Err(ServiceError::from(DomainError::NegativePrice(price)));
            }
        }

        let mut cloth = self.fetch(id).await?;

        if patch.is_empty() {
            return Ok(ClothResponse::from(cloth));
        }

        if let Some(name) = patch.name {
            cloth.name = name;
        }
        if let Some(price) = patch.price {
            cloth.price = price;
        }
        if let Some(kind) = patch.kind {
            cloth.kind = kind;
        }
        if let Some(size) = patch.size {
            cloth.size = size;
        }
        cloth.updated_at = Utc::now();

        self.ctx.cloth_repo().update(&cloth).await?;

        info!(cloth_id = %cloth.id, "Catalog entry updated");

        Ok(ClothResponse::from(cloth))
    }

    /// Soft-delete an entry.
    ///
    /// An entry that is absent or already inactive reports not found, so
    /// repeat deletions cannot be told apart from missing ids.
    #[instrument(skip(self))]
    pub async fn soft_delete(&self, id: Uuid) -> ServiceResult<ClothResponse> {
        let mut cloth = self.fetch(id).await?;

        if !cloth.soft_delete() {
            return Err(ServiceError::from(DomainError::ClothNotFound(id)));
        }

        self.ctx.cloth_repo().update(&cloth).await?;

        info!(cloth_id = %cloth.id, "Catalog entry soft-deleted");

        Ok(ClothResponse::from(cloth))
    }

    /// Restore a soft-deleted entry.
    ///
    /// Mirrors `soft_delete`: an absent or already-active entry reports
    /// not found.
    #[instrument(skip(self))]
    pub async fn restore(&self, id: Uuid) -> ServiceResult<ClothResponse> {
        let mut cloth = self.fetch(id).await?;

        if !cloth.restore() {
            return Err(ServiceError::from(DomainError::ClothNotFound(id)));
        }

        self.ctx.cloth_repo().update(&cloth).await?;

        info!(cloth_id = %cloth.id, "Catalog entry restored");

        Ok(ClothResponse::from(cloth))
    }
}
