mod parsing;
mod settings;
mod types;

#[cfg(test)]
pub(crate) use types::{ConfigError, Environment};
pub(crate) use types::{PaginationSettings, Settings};
