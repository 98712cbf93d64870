//! Catalog handlers
//!
//! CRUD, filtering, pagination, and the soft-delete lifecycle for
//! catalog entries. Reads are open; mutations require the admin role.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use store_service::{
    AuthService, CatalogService, ClothResponse, CreateClothRequest, FilterQuery, PageQuery,
    UpdateClothRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Add a catalog entry (admin only)
///
/// POST /add-cloth
pub async fn add_cloth(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateClothRequest>,
) -> ApiResult<Created<Json<ClothResponse>>> {
    AuthService::require_admin(&auth.claims)?;

    let service = CatalogService::new(state.service_context());
    let response = service.add(request).await?;
    Ok(Created(Json(response)))
}

/// Fetch a single entry, active or not
///
/// GET /cloth/:cloth_id
pub async fn get_cloth(
    State(state): State<AppState>,
    Path(cloth_id): Path<Uuid>,
) -> ApiResult<Json<ClothResponse>> {
    let service = CatalogService::new(state.service_context());
    let response = service.get(cloth_id).await?;
    Ok(Json(response))
}

/// List the whole catalog, soft-deleted entries included
///
/// GET /list-clothes
pub async fn list_clothes(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ClothResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.list_all().await?))
}

/// List only active entries
///
/// GET /list-active-clothes
pub async fn list_active_clothes(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ClothResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.list_active().await?))
}

/// List only soft-deleted entries
///
/// GET /list-deleted-clothes
pub async fn list_deleted_clothes(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ClothResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.list_deleted().await?))
}

/// Filter the catalog by optional price range, category, and active flag
///
/// GET /filter-clothes
pub async fn filter_clothes(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Json<Vec<ClothResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.filter(query).await?))
}

/// Fetch a sorted page of the catalog
///
/// GET /paginated-clothes
pub async fn paginated_clothes(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Vec<ClothResponse>>> {
    let service = CatalogService::new(state.service_context());
    Ok(Json(service.paginate(query).await?))
}

/// Partially update an entry (admin only)
///
/// PUT /update-cloth/:cloth_id
pub async fn update_cloth(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(cloth_id): Path<Uuid>,
    ValidatedJson(patch): ValidatedJson<UpdateClothRequest>,
) -> ApiResult<Json<ClothResponse>> {
    AuthService::require_admin(&auth.claims)?;

    let service = CatalogService::new(state.service_context());
    let response = service.update(cloth_id, patch).await?;
    Ok(Json(response))
}

/// Soft-delete an entry (admin only)
///
/// DELETE /delete-cloth/:cloth_id
pub async fn delete_cloth(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(cloth_id): Path<Uuid>,
) -> ApiResult<Json<ClothResponse>> {
    AuthService::require_admin(&auth.claims)?;

    let service = CatalogService::new(state.service_context());
    let response = service.soft_delete(cloth_id).await?;
    Ok(Json(response))
}

/// Restore a soft-deleted entry (admin only)
///
/// PUT /restore-cloth/:cloth_id
pub async fn restore_cloth(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(cloth_id): Path<Uuid>,
) -> ApiResult<Json<ClothResponse>> {
    AuthService::require_admin(&auth.claims)?;

    let service = CatalogService::new(state.service_context());
    let response = service.restore(cloth_id).await?;
    Ok(Json(response))
}
