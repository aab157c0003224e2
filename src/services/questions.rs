//! Question lifecycle: add, update, get, delete and the paginated admin listing.
//!
//! Every write re-resolves the owning assessment so no question can point at an
//! assessment that does not exist. Public identifiers are assigned once, on add.

use crate::core::metrics::{self, QuizEvent};
use crate::core::random::RandomSource;
use crate::core::time::primitive_now_utc;
use crate::db::models::Question;
use crate::repositories::questions::{CreateQuestion, UpdateQuestion};
use crate::schemas::page::{self, Page};
use crate::schemas::question::QuestionData;
use crate::services::assessments;
use crate::services::errors::ServiceError;
use crate::services::identifiers::{self, IdentifierKind};
use crate::services::store::QuizStore;

pub(crate) async fn add_question<S: QuizStore + ?Sized>(
    store: &mut S,
    random: &RandomSource,
    input: QuestionData,
) -> Result<QuestionData, ServiceError> {
    let assessment = assessments::resolve(store, &input.assessment_identifier).await?;
    let question_identifier = identifiers::allocate(store, random, IdentifierKind::Question).await?;

    let fields = input.fields();
    let question = store
        .insert_question(CreateQuestion {
            question_identifier: &question_identifier,
            assessment_id: assessment.id,
            fields: &fields,
            created_at: primitive_now_utc(),
        })
        .await?;

    metrics::record(QuizEvent::QuestionCreated);
    tracing::info!(
        question_identifier = %question.question_identifier,
        assessment_identifier = %assessment.assessment_identifier,
        "Question added"
    );
    Ok(question.into())
}

/// Replaces every writable field of an existing question and re-attaches it to
/// the assessment named in the payload, which may differ from the current one.
pub(crate) async fn update_question<S: QuizStore + ?Sized>(
    store: &mut S,
    input: QuestionData,
) -> Result<QuestionData, ServiceError> {
    let question_identifier = input.question_identifier.clone().unwrap_or_default();
    let existing = resolve_question(store, &question_identifier).await?;
    let assessment = assessments::resolve(store, &input.assessment_identifier).await?;

    if existing.assessment_id != assessment.id {
        tracing::info!(
            question_identifier = %question_identifier,
            from = %existing.assessment_identifier,
            to = %assessment.assessment_identifier,
            "Question moved to another assessment"
        );
    }

    let fields = input.fields();
    let updated = store
        .update_question(
            existing.id,
            UpdateQuestion {
                assessment_id: assessment.id,
                fields: &fields,
                updated_at: primitive_now_utc(),
            },
        )
        .await?
        .ok_or_else(|| ServiceError::not_found("Question", question_identifier.as_str()))?;

    tracing::info!(question_identifier = %updated.question_identifier, "Question updated");
    Ok(updated.into())
}

pub(crate) async fn get_question<S: QuizStore + ?Sized>(
    store: &mut S,
    question_identifier: &str,
) -> Result<QuestionData, ServiceError> {
    resolve_question(store, question_identifier).await.map(QuestionData::from)
}

/// Deleting an identifier that is already gone reports `NotFound`.
pub(crate) async fn delete_question<S: QuizStore + ?Sized>(
    store: &mut S,
    question_identifier: &str,
) -> Result<(), ServiceError> {
    let question = resolve_question(store, question_identifier).await?;
    if !store.delete_question(question.id).await? {
        return Err(ServiceError::not_found("Question", question_identifier));
    }

    metrics::record(QuizEvent::QuestionDeleted);
    tracing::info!(question_identifier = %question_identifier, "Question deleted");
    Ok(())
}

/// Admin listing: filtered by content substring, zero-based pages, stable order.
pub(crate) async fn list_questions<S: QuizStore + ?Sized>(
    store: &mut S,
    assessment_identifier: &str,
    keyword: &str,
    page: i64,
    size: i64,
) -> Result<Page<QuestionData>, ServiceError> {
    let assessment = assessments::resolve(store, assessment_identifier).await?;
    let page = page.max(0);
    let size = size.max(1);

    let (questions, total) = store
        .page_questions(assessment.id, keyword, page::offset(page, size), size)
        .await?;

    Ok(Page::new(questions, total, page, size).map(QuestionData::from))
}

async fn resolve_question<S: QuizStore + ?Sized>(
    store: &mut S,
    question_identifier: &str,
) -> Result<Question, ServiceError> {
    store
        .find_question(question_identifier)
        .await?
        .ok_or_else(|| ServiceError::not_found("Question", question_identifier))
}
