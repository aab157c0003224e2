use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::PrimitiveDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Category {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Assessment {
    pub(crate) id: i64,
    pub(crate) assessment_identifier: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) category_id: Option<i64>,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

/// A stored question joined with the public identifier of its assessment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Question {
    pub(crate) id: i64,
    pub(crate) question_identifier: String,
    pub(crate) assessment_id: i64,
    pub(crate) assessment_identifier: String,
    pub(crate) content: String,
    pub(crate) image: Option<String>,
    #[sqlx(rename = "option_1")]
    pub(crate) option1: String,
    #[sqlx(rename = "option_2")]
    pub(crate) option2: String,
    #[sqlx(rename = "option_3")]
    pub(crate) option3: String,
    #[sqlx(rename = "option_4")]
    pub(crate) option4: String,
    #[sqlx(rename = "option_5")]
    pub(crate) option5: Option<String>,
    pub(crate) answer: String,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}
