use sqlx::{Postgres, QueryBuilder};
use time::PrimitiveDateTime;

use crate::db::models::Assessment;

pub(crate) const COLUMNS: &str = "\
    id, assessment_identifier, title, description, category_id, created_at, updated_at";

pub(crate) struct CreateAssessment<'a> {
    pub(crate) assessment_identifier: &'a str,
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
    pub(crate) category_id: Option<i64>,
    pub(crate) created_at: PrimitiveDateTime,
}

pub(crate) struct UpdateAssessment<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
    pub(crate) category_id: Option<i64>,
    pub(crate) updated_at: PrimitiveDateTime,
}

pub(crate) async fn find_by_identifier(
    executor: impl sqlx::PgExecutor<'_>,
    assessment_identifier: &str,
) -> Result<Option<Assessment>, sqlx::Error> {
    sqlx::query_as::<_, Assessment>(&format!(
        "SELECT {COLUMNS} FROM assessments WHERE assessment_identifier = $1"
    ))
    .bind(assessment_identifier)
    .fetch_optional(executor)
    .await
}

pub(crate) async fn identifier_exists(
    executor: impl sqlx::PgExecutor<'_>,
    assessment_identifier: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM assessments WHERE assessment_identifier = $1)",
    )
    .bind(assessment_identifier)
    .fetch_one(executor)
    .await
}

pub(crate) async fn create(
    executor: impl sqlx::PgExecutor<'_>,
    params: CreateAssessment<'_>,
) -> Result<Assessment, sqlx::Error> {
    sqlx::query_as::<_, Assessment>(&format!(
        "INSERT INTO assessments (
            assessment_identifier, title, description, category_id, created_at, updated_at
         ) VALUES ($1,$2,$3,$4,$5,$5)
         RETURNING {COLUMNS}"
    ))
    .bind(params.assessment_identifier)
    .bind(params.title)
    .bind(params.description)
    .bind(params.category_id)
    .bind(params.created_at)
    .fetch_one(executor)
    .await
}

pub(crate) async fn update(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
    params: UpdateAssessment<'_>,
) -> Result<Option<Assessment>, sqlx::Error> {
    sqlx::query_as::<_, Assessment>(&format!(
        "UPDATE assessments SET
            title = $1,
            description = $2,
            category_id = $3,
            updated_at = $4
         WHERE id = $5
         RETURNING {COLUMNS}"
    ))
    .bind(params.title)
    .bind(params.description)
    .bind(params.category_id)
    .bind(params.updated_at)
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Questions of the assessment go with it through the foreign key cascade.
pub(crate) async fn delete_by_id(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("DELETE FROM assessments WHERE id = $1").bind(id).execute(executor).await?;
    Ok(result.rows_affected())
}

pub(crate) async fn list(
    executor: impl sqlx::PgExecutor<'_>,
    keyword: Option<&str>,
    category_id: Option<i64>,
    skip: i64,
    limit: i64,
) -> Result<Vec<Assessment>, sqlx::Error> {
    let mut builder =
        QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM assessments WHERE TRUE"));
    push_filters(&mut builder, keyword, category_id);

    builder.push(" ORDER BY id OFFSET ");
    builder.push_bind(skip.max(0));
    builder.push(" LIMIT ");
    builder.push_bind(limit.max(1));

    builder.build_query_as::<Assessment>().fetch_all(executor).await
}

pub(crate) async fn count(
    executor: impl sqlx::PgExecutor<'_>,
    keyword: Option<&str>,
    category_id: Option<i64>,
) -> Result<i64, sqlx::Error> {
    let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM assessments WHERE TRUE");
    push_filters(&mut builder, keyword, category_id);
    builder.build_query_scalar::<i64>().fetch_one(executor).await
}

fn push_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    keyword: Option<&str>,
    category_id: Option<i64>,
) {
    if let Some(keyword) = keyword.filter(|value| !value.is_empty()) {
        builder.push(" AND strpos(title, ");
        builder.push_bind(keyword.to_string());
        builder.push(") > 0");
    }
    if let Some(category_id) = category_id {
        builder.push(" AND category_id = ");
        builder.push_bind(category_id);
    }
}
