use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ServiceError {
    #[error("{entity} not found with this identifier {identifier}")]
    NotFound { entity: &'static str, identifier: String },
    #[error("could not allocate a unique {0} identifier")]
    IdentifierExhausted(&'static str),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ServiceError {
    pub(crate) fn not_found(entity: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound { entity, identifier: identifier.into() }
    }

    /// True when the database rejected a write on a unique constraint.
    pub(crate) fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(err)) => err.is_unique_violation(),
            _ => false,
        }
    }
}
