use serde::Deserialize;

use crate::core::config::PaginationSettings;

/// `?keyword=&page=&size=` as accepted by every listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageQuery {
    #[serde(default)]
    pub(crate) keyword: Option<String>,
    #[serde(default)]
    pub(crate) page: Option<i64>,
    #[serde(default)]
    pub(crate) size: Option<i64>,
}

impl PageQuery {
    pub(crate) fn keyword(&self) -> &str {
        self.keyword.as_deref().unwrap_or("")
    }

    pub(crate) fn window(&self, settings: &PaginationSettings) -> (i64, i64) {
        settings.clamp(self.page, self.size)
    }
}
