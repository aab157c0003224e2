pub(crate) mod assessments;
pub(crate) mod categories;
pub(crate) mod health;
pub(crate) mod questions;
