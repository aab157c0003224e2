use std::sync::Arc;

use sqlx::PgPool;

use crate::core::{config::Settings, random::RandomSource};

#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    db: PgPool,
    random: RandomSource,
}

impl AppState {
    pub(crate) fn new(settings: Settings, db: PgPool, random: RandomSource) -> Self {
        Self { inner: Arc::new(InnerState { settings, db, random }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn db(&self) -> &PgPool {
        &self.inner.db
    }

    pub(crate) fn random(&self) -> &RandomSource {
        &self.inner.random
    }
}
