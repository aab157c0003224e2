use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::db::models::{Assessment, Question};
use crate::repositories;
use crate::repositories::assessments::{CreateAssessment, UpdateAssessment};
use crate::repositories::questions::{CreateQuestion, UpdateQuestion};
use crate::services::identifiers::IdentifierKind;

/// Persistence operations the quiz services depend on.
///
/// One store value spans one logical operation; the Postgres implementation
/// wraps a transaction that the caller commits once the service succeeds.
#[async_trait]
pub(crate) trait QuizStore: Send {
    async fn find_assessment(
        &mut self,
        assessment_identifier: &str,
    ) -> Result<Option<Assessment>, sqlx::Error>;

    async fn insert_assessment(
        &mut self,
        params: CreateAssessment<'_>,
    ) -> Result<Assessment, sqlx::Error>;

    async fn update_assessment(
        &mut self,
        id: i64,
        params: UpdateAssessment<'_>,
    ) -> Result<Option<Assessment>, sqlx::Error>;

    /// Returns whether a row was removed. Its questions are removed with it.
    async fn delete_assessment(&mut self, id: i64) -> Result<bool, sqlx::Error>;

    async fn count_questions(&mut self, assessment_id: i64) -> Result<i64, sqlx::Error>;

    async fn identifier_taken(
        &mut self,
        kind: IdentifierKind,
        identifier: &str,
    ) -> Result<bool, sqlx::Error>;

    async fn find_question(
        &mut self,
        question_identifier: &str,
    ) -> Result<Option<Question>, sqlx::Error>;

    async fn insert_question(&mut self, params: CreateQuestion<'_>)
        -> Result<Question, sqlx::Error>;

    async fn update_question(
        &mut self,
        id: i64,
        params: UpdateQuestion<'_>,
    ) -> Result<Option<Question>, sqlx::Error>;

    /// Returns whether a row was removed.
    async fn delete_question(&mut self, id: i64) -> Result<bool, sqlx::Error>;

    /// Questions of one assessment whose content contains `keyword`, ordered by
    /// id, plus the size of the whole filtered set.
    async fn page_questions(
        &mut self,
        assessment_id: i64,
        keyword: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Question>, i64), sqlx::Error>;

    async fn questions_of(&mut self, assessment_id: i64) -> Result<Vec<Question>, sqlx::Error>;
}

pub(crate) struct PgQuizStore {
    tx: Transaction<'static, Postgres>,
}

impl PgQuizStore {
    pub(crate) async fn begin(pool: &PgPool) -> Result<Self, sqlx::Error> {
        Ok(Self { tx: pool.begin().await? })
    }

    pub(crate) async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await
    }
}

#[async_trait]
impl QuizStore for PgQuizStore {
    async fn find_assessment(
        &mut self,
        assessment_identifier: &str,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        repositories::assessments::find_by_identifier(&mut *self.tx, assessment_identifier).await
    }

    async fn insert_assessment(
        &mut self,
        params: CreateAssessment<'_>,
    ) -> Result<Assessment, sqlx::Error> {
        repositories::assessments::create(&mut *self.tx, params).await
    }

    async fn update_assessment(
        &mut self,
        id: i64,
        params: UpdateAssessment<'_>,
    ) -> Result<Option<Assessment>, sqlx::Error> {
        repositories::assessments::update(&mut *self.tx, id, params).await
    }

    async fn delete_assessment(&mut self, id: i64) -> Result<bool, sqlx::Error> {
        let removed = repositories::assessments::delete_by_id(&mut *self.tx, id).await?;
        Ok(removed > 0)
    }

    async fn count_questions(&mut self, assessment_id: i64) -> Result<i64, sqlx::Error> {
        repositories::questions::count_by_assessment(&mut *self.tx, assessment_id).await
    }

    async fn identifier_taken(
        &mut self,
        kind: IdentifierKind,
        identifier: &str,
    ) -> Result<bool, sqlx::Error> {
        match kind {
            IdentifierKind::Question => {
                repositories::questions::identifier_exists(&mut *self.tx, identifier).await
            }
            IdentifierKind::Assessment => {
                repositories::assessments::identifier_exists(&mut *self.tx, identifier).await
            }
        }
    }

    async fn find_question(
        &mut self,
        question_identifier: &str,
    ) -> Result<Option<Question>, sqlx::Error> {
        repositories::questions::find_by_identifier(&mut *self.tx, question_identifier).await
    }

    async fn insert_question(
        &mut self,
        params: CreateQuestion<'_>,
    ) -> Result<Question, sqlx::Error> {
        repositories::questions::create(&mut *self.tx, params).await
    }

    async fn update_question(
        &mut self,
        id: i64,
        params: UpdateQuestion<'_>,
    ) -> Result<Option<Question>, sqlx::Error> {
        repositories::questions::update(&mut *self.tx, id, params).await
    }

    async fn delete_question(&mut self, id: i64) -> Result<bool, sqlx::Error> {
        let removed = repositories::questions::delete_by_id(&mut *self.tx, id).await?;
        Ok(removed > 0)
    }

    async fn page_questions(
        &mut self,
        assessment_id: i64,
        keyword: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Question>, i64), sqlx::Error> {
        let items =
            repositories::questions::list_page(&mut *self.tx, assessment_id, keyword, offset, limit)
                .await?;
        let total =
            repositories::questions::count_matching(&mut *self.tx, assessment_id, keyword).await?;
        Ok((items, total))
    }

    async fn questions_of(&mut self, assessment_id: i64) -> Result<Vec<Question>, sqlx::Error> {
        repositories::questions::list_by_assessment(&mut *self.tx, assessment_id).await
    }
}
