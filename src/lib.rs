//! Intercept-Template: URI template matching for request interception
//!
//! This crate decides whether a URI matches a partial template of scheme, host,
//! and path. Absent template fields act as wildcards. On top of the matcher it
//! provides a TOML rule file, a rule set that combines templates, and media
//! request detection.

pub mod config;
pub mod media;
pub mod rules;
pub mod template;

use thiserror::Error;

/// Main error type for Intercept-Template operations
#[derive(Debug, Error)]
pub enum InterceptError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URI error: {0}")]
    Uri(#[from] UriError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

/// URI-specific errors
#[derive(Debug, Error)]
pub enum UriError {
    #[error("Failed to parse URI '{input}': {reason}")]
    Parse { input: String, reason: String },
}

/// Result type alias for Intercept-Template operations
pub type Result<T> = std::result::Result<T, InterceptError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URI operations
pub type UriResult<T> = std::result::Result<T, UriError>;

// Re-export commonly used types
pub use config::Config;
pub use media::{MediaDetector, MediaRequest};
pub use rules::{InterceptRules, Verdict};
pub use template::{ParsedUri, UriComponents, UriTemplate};
