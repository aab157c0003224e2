use crate::core::random::RandomSource;
use crate::core::time::primitive_now_utc;
use crate::db::models::Assessment;
use crate::repositories::assessments::{CreateAssessment, UpdateAssessment};
use crate::schemas::assessment::{AssessmentPayload, AssessmentResponse};
use crate::services::errors::ServiceError;
use crate::services::identifiers::{self, IdentifierKind};
use crate::services::store::QuizStore;

/// Looks up the assessment every question write must be attached to.
pub(crate) async fn resolve<S: QuizStore + ?Sized>(
    store: &mut S,
    assessment_identifier: &str,
) -> Result<Assessment, ServiceError> {
    store
        .find_assessment(assessment_identifier)
        .await?
        .ok_or_else(|| ServiceError::not_found("Assessment", assessment_identifier))
}

/// Creates an assessment under a freshly allocated `A` identifier. The caller
/// is responsible for checking that `category_id`, when set, exists.
pub(crate) async fn create<S: QuizStore + ?Sized>(
    store: &mut S,
    random: &RandomSource,
    payload: &AssessmentPayload,
) -> Result<Assessment, ServiceError> {
    let assessment_identifier =
        identifiers::allocate(store, random, IdentifierKind::Assessment).await?;

    let assessment = store
        .insert_assessment(CreateAssessment {
            assessment_identifier: &assessment_identifier,
            title: payload.title.trim(),
            description: payload.description.as_deref(),
            category_id: payload.category_id,
            created_at: primitive_now_utc(),
        })
        .await?;

    tracing::info!(
        assessment_identifier = %assessment.assessment_identifier,
        category_id = ?assessment.category_id,
        "Assessment created"
    );
    Ok(assessment)
}

/// The assessment together with the number of questions it owns.
pub(crate) async fn detail<S: QuizStore + ?Sized>(
    store: &mut S,
    assessment_identifier: &str,
) -> Result<AssessmentResponse, ServiceError> {
    let assessment = resolve(store, assessment_identifier).await?;
    let question_count = store.count_questions(assessment.id).await?;
    Ok(AssessmentResponse::from(assessment).with_question_count(question_count))
}

/// Replaces title, description and category. The public identifier is kept.
pub(crate) async fn update<S: QuizStore + ?Sized>(
    store: &mut S,
    assessment_identifier: &str,
    payload: &AssessmentPayload,
) -> Result<AssessmentResponse, ServiceError> {
    let existing = resolve(store, assessment_identifier).await?;
    let updated = store
        .update_assessment(
            existing.id,
            UpdateAssessment {
                title: payload.title.trim(),
                description: payload.description.as_deref(),
                category_id: payload.category_id,
                updated_at: primitive_now_utc(),
            },
        )
        .await?
        .ok_or_else(|| ServiceError::not_found("Assessment", assessment_identifier))?;
    let question_count = store.count_questions(updated.id).await?;

    tracing::info!(assessment_identifier = %updated.assessment_identifier, "Assessment updated");
    Ok(AssessmentResponse::from(updated).with_question_count(question_count))
}

/// Deletes the assessment and every question attached to it.
pub(crate) async fn delete<S: QuizStore + ?Sized>(
    store: &mut S,
    assessment_identifier: &str,
) -> Result<(), ServiceError> {
    let existing = resolve(store, assessment_identifier).await?;
    if !store.delete_assessment(existing.id).await? {
        return Err(ServiceError::not_found("Assessment", assessment_identifier));
    }

    tracing::info!(assessment_identifier = %assessment_identifier, "Assessment deleted");
    Ok(())
}
