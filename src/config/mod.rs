//! Configuration module for Intercept-Template
//!
//! This module handles loading, parsing, and validating TOML rule files.
//!
//! # Example
//!
//! ```no_run
//! use intercept_template::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("rules.toml")).unwrap();
//! println!("Loaded {} intercept templates", config.intercept.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::Config;

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
