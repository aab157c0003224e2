pub(crate) mod assessments;
pub(crate) mod errors;
pub(crate) mod identifiers;
pub(crate) mod questions;
pub(crate) mod quiz_delivery;
pub(crate) mod store;
