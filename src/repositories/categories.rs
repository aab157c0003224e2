use sqlx::PgPool;
use time::PrimitiveDateTime;

use crate::db::models::Category;

const COLUMNS: &str = "id, title, description, created_at, updated_at";

pub(crate) async fn create(
    pool: &PgPool,
    title: &str,
    description: &str,
    now: PrimitiveDateTime,
) -> Result<Category, sqlx::Error> {
    sqlx::query_as::<_, Category>(&format!(
        "INSERT INTO categories (title, description, created_at, updated_at)
         VALUES ($1, $2, $3, $3)
         RETURNING {COLUMNS}"
    ))
    .bind(title)
    .bind(description)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub(crate) async fn find_by_id(
    executor: impl sqlx::PgExecutor<'_>,
    id: i64,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(&format!("SELECT {COLUMNS} FROM categories WHERE id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub(crate) async fn update(
    pool: &PgPool,
    id: i64,
    title: &str,
    description: &str,
    now: PrimitiveDateTime,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(&format!(
        "UPDATE categories SET title = $1, description = $2, updated_at = $3
         WHERE id = $4
         RETURNING {COLUMNS}"
    ))
    .bind(title)
    .bind(description)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn delete_by_id(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1").bind(id).execute(pool).await?;
    Ok(result.rows_affected())
}

pub(crate) async fn list(
    pool: &PgPool,
    keyword: &str,
    skip: i64,
    limit: i64,
) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(&format!(
        "SELECT {COLUMNS} FROM categories
         WHERE strpos(title, $1) > 0
         ORDER BY id
         OFFSET $2 LIMIT $3"
    ))
    .bind(keyword)
    .bind(skip.max(0))
    .bind(limit.max(1))
    .fetch_all(pool)
    .await
}

pub(crate) async fn count(pool: &PgPool, keyword: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE strpos(title, $1) > 0")
        .bind(keyword)
        .fetch_one(pool)
        .await
}
