use crate::core::random::RandomSource;
use crate::services::errors::ServiceError;
use crate::services::store::QuizStore;

pub(crate) const IDENTIFIER_DIGITS: usize = 10;
const MAX_ALLOCATION_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdentifierKind {
    Question,
    Assessment,
}

impl IdentifierKind {
    fn prefix(self) -> char {
        match self {
            Self::Question => 'Q',
            Self::Assessment => 'A',
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Assessment => "assessment",
        }
    }
}

/// Ten uniform random digits. Uniqueness is not checked here.
pub(crate) fn generate(random: &RandomSource) -> String {
    random.numeric(IDENTIFIER_DIGITS)
}

pub(crate) fn candidate(kind: IdentifierKind, random: &RandomSource) -> String {
    format!("{}{}", kind.prefix(), generate(random))
}

/// Draws candidates until one is unused in the store. The unique index on the
/// table still rejects a concurrent writer that picked the same value.
pub(crate) async fn allocate<S: QuizStore + ?Sized>(
    store: &mut S,
    random: &RandomSource,
    kind: IdentifierKind,
) -> Result<String, ServiceError> {
    for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
        let identifier = candidate(kind, random);
        if !store.identifier_taken(kind, &identifier).await? {
            return Ok(identifier);
        }
        tracing::warn!(
            kind = kind.label(),
            identifier = %identifier,
            attempt,
            "Generated identifier already in use, drawing another"
        );
    }

    Err(ServiceError::IdentifierExhausted(kind.label()))
}
