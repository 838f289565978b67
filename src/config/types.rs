use crate::media::MediaDetector;
use crate::template::UriTemplate;
use serde::Deserialize;

/// Main configuration structure for Intercept-Template
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Templates for requests to intercept, in declaration order
    #[serde(default)]
    pub intercept: Vec<UriTemplate>,

    /// Media request detection
    #[serde(default)]
    pub media: MediaDetector,
}
