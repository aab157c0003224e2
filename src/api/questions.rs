use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::api::extract::ValidatedJson;
use crate::api::pagination::PageQuery;
use crate::api::transaction;
use crate::core::state::AppState;
use crate::schemas::page::Page;
use crate::schemas::question::QuestionData;
use crate::services::{questions, quiz_delivery};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_question).put(update_question))
        .route("/:question_identifier", get(get_question).delete(delete_question))
}

async fn add_question(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<QuestionData>,
) -> Result<(StatusCode, Json<QuestionData>), ApiError> {
    let mut store = transaction::begin(&state).await?;
    let created = questions::add_question(&mut store, state.random(), payload).await?;
    transaction::commit(store).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_question(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<QuestionData>,
) -> Result<Json<QuestionData>, ApiError> {
    let mut store = transaction::begin(&state).await?;
    let updated = questions::update_question(&mut store, payload).await?;
    transaction::commit(store).await?;

    Ok(Json(updated))
}

async fn get_question(
    Path(question_identifier): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<QuestionData>, ApiError> {
    let mut store = transaction::begin(&state).await?;
    let question = questions::get_question(&mut store, &question_identifier).await?;
    Ok(Json(question))
}

async fn delete_question(
    Path(question_identifier): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut store = transaction::begin(&state).await?;
    questions::delete_question(&mut store, &question_identifier).await?;
    transaction::commit(store).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /assessments/:assessment_identifier/questions`
pub(crate) async fn list_questions(
    Path(assessment_identifier): Path<String>,
    Query(params): Query<PageQuery>,
    State(state): State<AppState>,
) -> Result<Json<Page<QuestionData>>, ApiError> {
    let (page, size) = params.window(state.settings().pagination());

    let mut store = transaction::begin(&state).await?;
    let result =
        questions::list_questions(&mut store, &assessment_identifier, params.keyword(), page, size)
            .await?;
    Ok(Json(result))
}

/// `GET /assessments/:assessment_identifier/attempt`
pub(crate) async fn list_for_attempt(
    Path(assessment_identifier): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionData>>, ApiError> {
    let mut store = transaction::begin(&state).await?;
    let served =
        quiz_delivery::list_for_attempt(&mut store, state.random(), &assessment_identifier).await?;
    Ok(Json(served))
}
