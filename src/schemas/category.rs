use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::Category;
use crate::schemas::question::not_blank;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct CategoryPayload {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "title must be at most 255 characters")
    )]
    pub(crate) title: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 5000, message = "description must be at most 5000 characters")
    )]
    pub(crate) description: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryResponse {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            title: category.title,
            description: category.description,
            created_at: format_primitive(category.created_at),
            updated_at: format_primitive(category.updated_at),
        }
    }
}
