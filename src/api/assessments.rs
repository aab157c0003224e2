use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::extract::ValidatedJson;
use crate::api::questions;
use crate::api::transaction;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::assessment::{AssessmentPayload, AssessmentResponse};
use crate::schemas::page::{self, Page};
use crate::services;

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentListQuery {
    #[serde(default)]
    keyword: Option<String>,
    #[serde(default)]
    page: Option<i64>,
    #[serde(default)]
    size: Option<i64>,
    #[serde(default)]
    #[serde(alias = "categoryId")]
    category_id: Option<i64>,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assessments).post(create_assessment))
        .route(
            "/:assessment_identifier",
            get(get_assessment).put(update_assessment).delete(delete_assessment),
        )
        .route("/:assessment_identifier/questions", get(questions::list_questions))
        .route("/:assessment_identifier/attempt", get(questions::list_for_attempt))
}

async fn create_assessment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AssessmentPayload>,
) -> Result<(StatusCode, Json<AssessmentResponse>), ApiError> {
    ensure_category(&state, payload.category_id).await?;

    let mut store = transaction::begin(&state).await?;
    let assessment = services::assessments::create(&mut store, state.random(), &payload).await?;
    transaction::commit(store).await?;

    Ok((StatusCode::CREATED, Json(AssessmentResponse::from(assessment).with_question_count(0))))
}

async fn list_assessments(
    Query(params): Query<AssessmentListQuery>,
    State(state): State<AppState>,
) -> Result<Json<Page<AssessmentResponse>>, ApiError> {
    let (page, size) = state.settings().pagination().clamp(params.page, params.size);
    let keyword = params.keyword.as_deref();

    let items = repositories::assessments::list(
        state.db(),
        keyword,
        params.category_id,
        page::offset(page, size),
        size,
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to list assessments"))?;
    let total = repositories::assessments::count(state.db(), keyword, params.category_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to count assessments"))?;

    Ok(Json(Page::new(items, total, page, size).map(AssessmentResponse::from)))
}

async fn get_assessment(
    Path(assessment_identifier): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let mut store = transaction::begin(&state).await?;
    let assessment = services::assessments::detail(&mut store, &assessment_identifier).await?;
    Ok(Json(assessment))
}

async fn update_assessment(
    Path(assessment_identifier): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AssessmentPayload>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    ensure_category(&state, payload.category_id).await?;

    let mut store = transaction::begin(&state).await?;
    let updated =
        services::assessments::update(&mut store, &assessment_identifier, &payload).await?;
    transaction::commit(store).await?;

    Ok(Json(updated))
}

/// Removes the assessment together with all of its questions.
async fn delete_assessment(
    Path(assessment_identifier): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut store = transaction::begin(&state).await?;
    services::assessments::delete(&mut store, &assessment_identifier).await?;
    transaction::commit(store).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_category(state: &AppState, category_id: Option<i64>) -> Result<(), ApiError> {
    let Some(category_id) = category_id else {
        return Ok(());
    };
    repositories::categories::find_by_id(state.db(), category_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch category"))?
        .map(|_| ())
        .ok_or_else(|| ApiError::NotFound(format!("Category not found with this id {category_id}")))
}

#[cfg(test)]
mod tests;
