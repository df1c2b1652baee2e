//! Configuration validation.
//!
//! Serde handles the syntactic checks; this module covers value ranges and
//! anything else a well-typed config can still get wrong. All problems are
//! reported at once, not just the first one found.

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

use crate::config::schema::ServiceConfig;

/// Largest accepted XML indentation.
pub const MAX_XML_INDENT: usize = 16;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("data.input must not be empty")]
    EmptyInput,

    #[error("xml.indent {0} exceeds the maximum of {MAX_XML_INDENT}")]
    IndentTooLarge(usize),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error, off")]
    UnknownLogLevel(String),
}

/// Validate a configuration, returning every error found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    if config.data.input.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyInput);
    }

    if config.xml.indent > MAX_XML_INDENT {
        errors.push(ValidationError::IndentTooLarge(config.xml.indent));
    }

    if config.observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
