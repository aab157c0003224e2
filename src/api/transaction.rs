use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::services::store::PgQuizStore;

/// Opens the transaction a single request runs in. Dropping the store without
/// calling [`commit`] rolls everything back.
pub(crate) async fn begin(state: &AppState) -> Result<PgQuizStore, ApiError> {
    PgQuizStore::begin(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to start transaction"))
}

pub(crate) async fn commit(store: PgQuizStore) -> Result<(), ApiError> {
    store.commit().await.map_err(|e| ApiError::internal(e, "Failed to commit transaction"))
}
