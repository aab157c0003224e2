use serde::Serialize;

/// Zero-based page of results. `total_elements` counts the whole filtered set,
/// not just `items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Page<T> {
    pub(crate) items: Vec<T>,
    pub(crate) total_elements: i64,
    pub(crate) total_pages: i64,
    pub(crate) page: i64,
    pub(crate) size: i64,
}

impl<T> Page<T> {
    pub(crate) fn new(items: Vec<T>, total_elements: i64, page: i64, size: i64) -> Self {
        let total_pages = if size > 0 && total_elements > 0 {
            total_elements / size + i64::from(total_elements % size != 0)
        } else {
            0
        };
        Self { items, total_elements, total_pages, page, size }
    }

    pub(crate) fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
        }
    }
}

/// Row offset of a zero-based page, saturating instead of overflowing.
pub(crate) fn offset(page: i64, size: i64) -> i64 {
    page.max(0).saturating_mul(size.max(0))
}
