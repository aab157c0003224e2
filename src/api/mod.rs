pub(crate) mod assessments;
pub(crate) mod categories;
pub(crate) mod errors;
pub(crate) mod extract;
pub(crate) mod handlers;
pub(crate) mod pagination;
pub(crate) mod questions;
pub(crate) mod router;
pub(crate) mod transaction;
pub(crate) mod validation;
