//! Miette-based error diagnostics for CLI error presentation.
//!
//! Converts crate errors into diagnostics with source context and help
//! suggestions. Config parse errors point at the offending span in the file.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError as CrateConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(po_classifier::config))]
pub struct ConfigError {
    /// Human-readable error message.
    pub message: String,

    /// Source content (the configuration file).
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

/// Error without source context, optionally carrying a help suggestion.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(po_classifier::error))]
pub struct CliError {
    /// Human-readable error message.
    pub message: String,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl CliError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Build a renderable report for an error raised while handling a command.
#[must_use]
pub fn report(err: Error, config_path: &Path) -> miette::Report {
    match err {
        Error::Config(CrateConfigError::Parse(parse)) => {
            let message = format!("invalid configuration: {}", parse.message());
            match (std::fs::read_to_string(config_path), parse.span()) {
                (Ok(src), Some(span)) => ConfigError {
                    message,
                    src: NamedSource::new(config_path.display().to_string(), src),
                    span: (span.start, span.end.saturating_sub(span.start)).into(),
                    help: Some("see `po-classifier config show` for the expected layout".into()),
                }
                .into(),
                _ => CliError::new(message).into(),
            }
        }
        Error::Config(CrateConfigError::MissingField { field }) if field.ends_with("_API_KEY") => {
            CliError::new(format!("missing required field: {field}"))
                .with_help(format!(
                    "export {field}=... or add it to a .env file in the working directory"
                ))
                .into()
        }
        Error::Config(CrateConfigError::ReadFile(e)) => {
            CliError::new(format!("failed to read {}: {e}", config_path.display()))
                .with_help("check the --config path, or omit the flag to use config.toml or built-in defaults")
                .into()
        }
        other => CliError::new(other.to_string()).into(),
    }
}
