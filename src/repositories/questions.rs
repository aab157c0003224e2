use time::PrimitiveDateTime;

use crate::db::models::Question;

pub(crate) const COLUMNS: &str = "\
    q.id, q.question_identifier, q.assessment_id, a.assessment_identifier, q.content, \
    q.image, q.option_1, q.option_2, q.option_3, q.option_4, q.option_5, q.answer, \
    q.created_at, q.updated_at";

const JOINED: &str = "questions q JOIN assessments a ON a.id = q.assessment_id";

/// Every column of a question a caller is allowed to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QuestionFields {
    pub(crate) content: String,
    pub(crate) image: Option<String>,
    pub(crate) option1: String,
    pub(crate) option2: String,
    pub(crate) option3: String,
    pub(crate) option4: String,
    pub(crate) option5: Option<String>,
    pub(crate) answer: String,
}

pub(crate) struct CreateQuestion<'a> {
    pub(crate) question_identifier: &'a str,
    pub(crate) assessment_id: i64,
    pub(crate) fields: &'a QuestionFields,
    pub(crate) created_at: PrimitiveDateTime,
}

pub(crate) struct UpdateQuestion<'a> {
    pub(crate) assessment_id: i64,
    pub(crate) fields: &'a QuestionFields,
    pub(crate) updated_at: PrimitiveDateTime,
}

pub(crate) async fn find_by_identifier(
    executor: impl sqlx::PgExecutor<'_>,
    question_identifier: &str,
) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(&format!(
        "SELECT {COLUMNS} FROM {JOINED} WHERE q.question_identifier = $1"
    ))
    .bind(question_identifier)
    .fetch_optional(executor)
    .await
}

pub(crate) async fn identifier_exists(
    executor: impl sqlx::PgExecutor<'_>,
    question_identifier: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM questions WHERE question_identifier = $1)")
        .bind(question_identifier)
        .fetch_one(executor)
        .await
}

pub(crate) async fn create(
    executor: impl sqlx::PgExecutor<'_>,
    params: CreateQuestion<'_>,
) -> Result<Question, sqlx::Error> {
    let fields = params.fields;
    sqlx::query_as::<_, Question>(&format!(
        "WITH q AS (
            INSERT INTO questions (
                question_identifier, assessment_id, content, image,
                option_1, option_2, option_3, option_4, option_5, answer,
                created_at, updated_at
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$11)
            RETURNING *
         )
         SELECT {COLUMNS} FROM q JOIN assessments a ON a.id = q.assessment_id"
    ))
    .bind(params.question_identifier)
    .bind(params.assessment_id)
    .bind(&fields.content)
    .bind(&fields.image)
    .bind(&fields.option1)
    .bind(&fields.option2)
    .bind(&fields.option3)
    .bind(&fields.option4)
    .bind(&fields.option5)
    .bind(&fields.answer)
    .bind(params.created_at)
    .fetch_one(executor)
    .await
}

/// Replaces every writable column. Returns `None` when the row vanished
/// between lookup and update.
pub(crate) async fn update(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
    params: UpdateQuestion<'_>,
) -> Result<Option<Question>, sqlx::Error> {
    let fields = params.fields;
    sqlx::query_as::<_, Question>(&format!(
        "WITH q AS (
            UPDATE questions SET
                assessment_id = $1,
                content = $2,
                image = $3,
                option_1 = $4,
                option_2 = $5,
                option_3 = $6,
                option_4 = $7,
                option_5 = $8,
                answer = $9,
                updated_at = $10
            WHERE id = $11
            RETURNING *
         )
         SELECT {COLUMNS} FROM q JOIN assessments a ON a.id = q.assessment_id"
    ))
    .bind(params.assessment_id)
    .bind(&fields.content)
    .bind(&fields.image)
    .bind(&fields.option1)
    .bind(&fields.option2)
    .bind(&fields.option3)
    .bind(&fields.option4)
    .bind(&fields.option5)
    .bind(&fields.answer)
    .bind(params.updated_at)
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub(crate) async fn delete_by_id(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1").bind(id).execute(executor).await?;
    Ok(result.rows_affected())
}

/// One page of an assessment's questions whose content contains `keyword`.
/// An empty keyword matches every question.
pub(crate) async fn list_page(
    executor: impl sqlx::PgExecutor<'_>,
    assessment_id: i64,
    keyword: &str,
    offset: i64,
    limit: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(&format!(
        "SELECT {COLUMNS} FROM {JOINED}
         WHERE q.assessment_id = $1 AND strpos(q.content, $2) > 0
         ORDER BY q.id
         OFFSET $3 LIMIT $4"
    ))
    .bind(assessment_id)
    .bind(keyword)
    .bind(offset.max(0))
    .bind(limit.max(1))
    .fetch_all(executor)
    .await
}

pub(crate) async fn count_matching(
    executor: impl sqlx::PgExecutor<'_>,
    assessment_id: i64,
    keyword: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM questions WHERE assessment_id = $1 AND strpos(content, $2) > 0",
    )
    .bind(assessment_id)
    .bind(keyword)
    .fetch_one(executor)
    .await
}

pub(crate) async fn list_by_assessment(
    executor: impl sqlx::PgExecutor<'_>,
    assessment_id: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(&format!(
        "SELECT {COLUMNS} FROM {JOINED} WHERE q.assessment_id = $1 ORDER BY q.id"
    ))
    .bind(assessment_id)
    .fetch_all(executor)
    .await
}

pub(crate) async fn count_by_assessment(
    executor: impl sqlx::PgExecutor<'_>,
    assessment_id: i64,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE assessment_id = $1")
        .bind(assessment_id)
        .fetch_one(executor)
        .await
}
