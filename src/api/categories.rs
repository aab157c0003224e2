use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::api::extract::ValidatedJson;
use crate::api::pagination::PageQuery;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories;
use crate::schemas::category::{CategoryPayload, CategoryResponse};
use crate::schemas::page::{self, Page};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:category_id", get(get_category).put(update_category).delete(delete_category))
}

fn not_found(category_id: i64) -> ApiError {
    ApiError::NotFound(format!("Category not found with this id {category_id}"))
}

async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CategoryPayload>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let category = repositories::categories::create(
        state.db(),
        payload.title.trim(),
        &payload.description,
        primitive_now_utc(),
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create category"))?;

    tracing::info!(category_id = category.id, "Category created");
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

async fn list_categories(
    Query(params): Query<PageQuery>,
    State(state): State<AppState>,
) -> Result<Json<Page<CategoryResponse>>, ApiError> {
    let (page, size) = params.window(state.settings().pagination());

    let items = repositories::categories::list(
        state.db(),
        params.keyword(),
        page::offset(page, size),
        size,
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to list categories"))?;
    let total = repositories::categories::count(state.db(), params.keyword())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to count categories"))?;

    Ok(Json(Page::new(items, total, page, size).map(CategoryResponse::from)))
}

async fn get_category(
    Path(category_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = repositories::categories::find_by_id(state.db(), category_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch category"))?
        .ok_or_else(|| not_found(category_id))?;

    Ok(Json(CategoryResponse::from(category)))
}

async fn update_category(
    Path(category_id): Path<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CategoryPayload>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = repositories::categories::update(
        state.db(),
        category_id,
        payload.title.trim(),
        &payload.description,
        primitive_now_utc(),
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to update category"))?
    .ok_or_else(|| not_found(category_id))?;

    Ok(Json(CategoryResponse::from(category)))
}

/// Assessments in the category are kept and lose their category.
async fn delete_category(
    Path(category_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let removed = repositories::categories::delete_by_id(state.db(), category_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete category"))?;
    if removed == 0 {
        return Err(not_found(category_id));
    }

    tracing::info!(category_id, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}
