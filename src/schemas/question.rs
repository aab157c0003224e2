use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::db::models::Question;
use crate::repositories::questions::QuestionFields;

/// External shape of a question, used for both requests and responses.
///
/// `id` and `question_identifier` are ignored on create; `question_identifier`
/// selects the record on update. `given_answer` is carried for quiz clients and
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "answer_matches_option"))]
pub(crate) struct QuestionData {
    #[serde(default)]
    pub(crate) id: Option<i64>,
    #[serde(default)]
    #[serde(alias = "questionIdentifier")]
    pub(crate) question_identifier: Option<String>,
    #[serde(alias = "assessmentIdentifier")]
    #[validate(custom(function = "not_blank"))]
    pub(crate) assessment_identifier: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 5000, message = "content must be at most 5000 characters")
    )]
    pub(crate) content: String,
    #[serde(default)]
    pub(crate) image: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub(crate) option1: String,
    #[validate(custom(function = "not_blank"))]
    pub(crate) option2: String,
    #[validate(custom(function = "not_blank"))]
    pub(crate) option3: String,
    #[validate(custom(function = "not_blank"))]
    pub(crate) option4: String,
    #[serde(default)]
    pub(crate) option5: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub(crate) answer: String,
    #[serde(default)]
    #[serde(alias = "givenAnswer")]
    pub(crate) given_answer: Option<String>,
}

impl QuestionData {
    /// The writable part of the payload, as handed to the store.
    pub(crate) fn fields(&self) -> QuestionFields {
        QuestionFields {
            content: self.content.clone(),
            image: self.image.clone(),
            option1: self.option1.clone(),
            option2: self.option2.clone(),
            option3: self.option3.clone(),
            option4: self.option4.clone(),
            option5: self.option5.clone(),
            answer: self.answer.clone(),
        }
    }

    fn options(&self) -> impl Iterator<Item = &str> {
        [&self.option1, &self.option2, &self.option3, &self.option4]
            .into_iter()
            .map(String::as_str)
            .chain(self.option5.as_deref())
    }
}

impl From<Question> for QuestionData {
    fn from(question: Question) -> Self {
        Self {
            id: Some(question.id),
            question_identifier: Some(question.question_identifier),
            assessment_identifier: question.assessment_identifier,
            content: question.content,
            image: question.image,
            option1: question.option1,
            option2: question.option2,
            option3: question.option3,
            option4: question.option4,
            option5: question.option5,
            answer: question.answer,
            given_answer: None,
        }
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::from("must not be blank")));
    }
    Ok(())
}

fn answer_matches_option(question: &QuestionData) -> Result<(), ValidationError> {
    if question.options().any(|option| option == question.answer) {
        return Ok(());
    }
    Err(ValidationError::new("answer_not_an_option")
        .with_message(Cow::from("answer must match one of the options")))
}
