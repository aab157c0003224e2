use crate::core::metrics::{self, QuizEvent};
use crate::core::random::RandomSource;
use crate::schemas::question::QuestionData;
use crate::services::assessments;
use crate::services::errors::ServiceError;
use crate::services::store::QuizStore;

/// Every question of the assessment, in a fresh random order per call.
pub(crate) async fn list_for_attempt<S: QuizStore + ?Sized>(
    store: &mut S,
    random: &RandomSource,
    assessment_identifier: &str,
) -> Result<Vec<QuestionData>, ServiceError> {
    let assessment = assessments::resolve(store, assessment_identifier).await?;
    let mut questions: Vec<QuestionData> = store
        .questions_of(assessment.id)
        .await?
        .into_iter()
        .map(QuestionData::from)
        .collect();

    random.shuffle(&mut questions);

    metrics::record(QuizEvent::AttemptServed);
    tracing::debug!(
        assessment_identifier = %assessment.assessment_identifier,
        questions = questions.len(),
        "Quiz attempt served"
    );
    Ok(questions)
}
