use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::Assessment;
use crate::schemas::question::not_blank;

/// Body for both create and full update of an assessment.
#[derive(Debug, Deserialize, Validate)]
pub(crate) struct AssessmentPayload {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "title must be at most 255 characters")
    )]
    pub(crate) title: String,
    #[serde(default)]
    #[validate(length(max = 5000, message = "description must be at most 5000 characters"))]
    pub(crate) description: Option<String>,
    #[serde(default)]
    #[serde(alias = "categoryId")]
    pub(crate) category_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) id: i64,
    pub(crate) assessment_identifier: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) question_count: Option<i64>,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl AssessmentResponse {
    pub(crate) fn with_question_count(mut self, count: i64) -> Self {
        self.question_count = Some(count);
        self
    }
}

impl From<Assessment> for AssessmentResponse {
    fn from(assessment: Assessment) -> Self {
        Self {
            id: assessment.id,
            assessment_identifier: assessment.assessment_identifier,
            title: assessment.title,
            description: assessment.description,
            category_id: assessment.category_id,
            question_count: None,
            created_at: format_primitive(assessment.created_at),
            updated_at: format_primitive(assessment.updated_at),
        }
    }
}
