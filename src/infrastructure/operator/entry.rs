//! Operator entry point wired up by `main`.

use crate::infrastructure::config::settings::Config;

/// Operator backed by a loaded configuration.
#[derive(Debug, Clone)]
pub struct Operator {
    pub(super) config: Config,
    pub(super) source: String,
    pub(super) source_found: bool,
}

impl Operator {
    /// Wrap a loaded configuration.
    ///
    /// `source` is the path the configuration was read from, and
    /// `source_found` is false when built-in defaults were used instead.
    #[must_use]
    pub fn new(config: Config, source: impl Into<String>, source_found: bool) -> Self {
        Self {
            config,
            source: source.into(),
            source_found,
        }
    }
}
