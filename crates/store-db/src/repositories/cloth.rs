//! PostgreSQL implementation of ClothRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use store_core::entities::Cloth;
use store_core::traits::{ClothFilter, ClothPage, ClothRepository, RepoResult};
use store_core::value_objects::{SortField, SortOrder};

use crate::models::ClothModel;

use super::error::{cloth_not_found, map_db_error};

const CLOTH_COLUMNS: &str =
    "id, name, price, type, size, is_active, deleted_at, restored_at, created_at, updated_at";

/// ORDER BY clause for a page request.
///
/// Both halves come from closed enums, so the resulting string never
/// carries caller input.
fn order_clause(sort_by: SortField, order: SortOrder) -> &'static str {
    match (sort_by, order) {
        (SortField::Name, SortOrder::Asc) => "name ASC",
        (SortField::Name, SortOrder::Desc) => "name DESC",
        (SortField::Price, SortOrder::Asc) => "price ASC",
        (SortField::Price, SortOrder::Desc) => "price DESC",
        (SortField::Kind, SortOrder::Asc) => "type ASC",
        (SortField::Kind, SortOrder::Desc) => "type DESC",
        (SortField::Size, SortOrder::Asc) => "size ASC",
        (SortField::Size, SortOrder::Desc) => "size DESC",
        (SortField::CreatedAt, SortOrder::Asc) => "created_at ASC",
        (SortField::CreatedAt, SortOrder::Desc) => "created_at DESC",
    }
}

/// PostgreSQL implementation of ClothRepository
#[derive(Clone)]
pub struct PgClothRepository {
    pool: PgPool,
}

impl PgClothRepository {
    /// Create a new PgClothRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_rows(rows: Vec<ClothModel>) -> RepoResult<Vec<Cloth>> {
        rows.into_iter().map(Cloth::try_from).collect()
    }
}

#[async_trait]
impl ClothRepository for PgClothRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Cloth>> {
        let result = sqlx::query_as::<_, ClothModel>(&format!(
            "SELECT {CLOTH_COLUMNS} FROM clothes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Cloth::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, is_active: Option<bool>) -> RepoResult<Vec<Cloth>> {
        let rows = sqlx::query_as::<_, ClothModel>(&format!(
            r"
            SELECT {CLOTH_COLUMNS} FROM clothes
            WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
            ORDER BY created_at ASC
            "
        ))
        .bind(is_active)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::map_rows(rows)
    }

    #[instrument(skip(self))]
    async fn filter(&self, filter: &ClothFilter) -> RepoResult<Vec<Cloth>> {
        let rows = sqlx::query_as::<_, ClothModel>(&format!(
            r"
            SELECT {CLOTH_COLUMNS} FROM clothes
            WHERE ($1::DOUBLE PRECISION IS NULL OR price >= $1)
              AND ($2::DOUBLE PRECISION IS NULL OR price <= $2)
              AND ($3::TEXT IS NULL OR type = $3)
              AND ($4::BOOLEAN IS NULL OR is_active = $4)
            ORDER BY created_at ASC
            "
        ))
        .bind(filter.min_price)
        .bind(filter.max_price)
        .bind(filter.kind.map(|k| k.as_str()))
        .bind(filter.is_active)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::map_rows(rows)
    }

    #[instrument(skip(self))]
    async fn page(&self, page: &ClothPage) -> RepoResult<Vec<Cloth>> {
        let order_by = order_clause(page.sort_by, page.order);

        let rows = sqlx::query_as::<_, ClothModel>(&format!(
            r"
            SELECT {CLOTH_COLUMNS} FROM clothes
            WHERE ($1::BOOLEAN IS NULL OR is_active = $1)
              AND ($2::TEXT IS NULL OR type = $2)
            ORDER BY {order_by}
            LIMIT $3 OFFSET $4
            "
        ))
        .bind(page.is_active)
        .bind(page.kind.map(|k| k.as_str()))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Self::map_rows(rows)
    }

    #[instrument(skip(self))]
    async fn create(&self, cloth: &Cloth) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO clothes (id, name, price, type, size, is_active, deleted_at, restored_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(cloth.id)
        .bind(&cloth.name)
        .bind(cloth.price)
        .bind(cloth.kind.as_str())
        .bind(cloth.size.as_str())
        .bind(cloth.is_active)
        .bind(cloth.deleted_at)
        .bind(cloth.restored_at)
        .bind(cloth.created_at)
        .bind(cloth.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, cloth: &Cloth) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE clothes
            SET name = $2, price = $3, type = $4, size = $5, is_active = $6,
                deleted_at = $7, restored_at = $8, updated_at = $9
            WHERE id = $1
            ",
        )
        .bind(cloth.id)
        .bind(&cloth.name)
        .bind(cloth.price)
        .bind(cloth.kind.as_str())
        .bind(cloth.size.as_str())
        .bind(cloth.is_active)
        .bind(cloth.deleted_at)
        .bind(cloth.restored_at)
        .bind(cloth.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(cloth_not_found(cloth.id));
        }

        Ok(())
    }
}
