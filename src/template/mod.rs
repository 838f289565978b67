//! URI template matching
//!
//! A [`UriTemplate`] constrains any of scheme, host, and path by exact string
//! equality. Candidates are anything implementing [`UriComponents`]; `url::Url`
//! and [`ParsedUri`] are supported out of the box.
//!
//! # Example
//!
//! ```
//! use intercept_template::template::{ParsedUri, UriTemplate};
//!
//! let template = UriTemplate::any().with_path("/admin");
//! let candidate = ParsedUri::new(Some("https"), Some("example.com"), Some("/admin"));
//!
//! assert!(template.matches(Some(&candidate)));
//! ```

mod candidate;
mod matcher;

pub use candidate::{parse_candidate, parse_candidate_strict, ParsedUri, UriComponents};
pub use matcher::UriTemplate;
