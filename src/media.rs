//! Media request detection
//!
//! Flags requests for media streams so the host application can be told about
//! them. Detection is a plain substring test over the raw URI string.

use serde::Deserialize;

/// Markers detected when the rule file does not list any
pub const DEFAULT_MEDIA_MARKERS: &[&str] = &[".mp4", ".m3u8"];

/// A detected media request and the page it was issued from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaRequest<'a> {
    /// The media URI as requested
    pub url: &'a str,
    /// The page that issued the request, when the host knows it
    pub page_url: Option<&'a str>,
}

/// Detects media requests by substring markers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaDetector {
    #[serde(default = "default_markers")]
    markers: Vec<String>,
}

fn default_markers() -> Vec<String> {
    DEFAULT_MEDIA_MARKERS.iter().map(|m| m.to_string()).collect()
}

impl Default for MediaDetector {
    fn default() -> Self {
        Self {
            markers: default_markers(),
        }
    }
}

impl MediaDetector {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Returns true if `raw` contains any marker
    ///
    /// The marker may appear anywhere in the string, query included.
    ///
    /// # Examples
    ///
    /// ```
    /// use intercept_template::MediaDetector;
    ///
    /// let detector = MediaDetector::default();
    /// assert!(detector.is_media("https://cdn.example.com/clip.mp4"));
    /// assert!(detector.is_media("https://cdn.example.com/live/index.m3u8?token=1"));
    /// assert!(!detector.is_media("https://example.com/index.html"));
    /// ```
    pub fn is_media(&self, raw: &str) -> bool {
        self.markers.iter().any(|marker| raw.contains(marker.as_str()))
    }

    /// Returns the media request for `raw`, tagged with the issuing page
    pub fn detect<'a>(&self, raw: &'a str, page_url: Option<&'a str>) -> Option<MediaRequest<'a>> {
        self.is_media(raw).then_some(MediaRequest { url: raw, page_url })
    }
}
