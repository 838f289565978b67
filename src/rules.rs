//! Intercept rule evaluation
//!
//! [`InterceptRules`] holds the templates from a rule file and decides,
//! per request, whether the request is intercepted. A request is intercepted
//! when any template matches it; templates are tried in declaration order and
//! the first match wins.

use crate::config::{load_config, Config};
use crate::media::{MediaDetector, MediaRequest};
use crate::template::{parse_candidate, UriComponents, UriTemplate};
use crate::Result;
use std::path::Path;
use url::Url;

/// Outcome of evaluating one raw URI against the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Index of the first matching template, if any
    pub matched: Option<usize>,
    /// Whether the URI looks like a media request
    pub media: bool,
    /// Whether the URI parsed; unparsable URIs never match a template
    pub parsed: bool,
}

impl Verdict {
    /// Returns true if the request should be intercepted
    pub fn intercepts(&self) -> bool {
        self.matched.is_some()
    }
}

/// Ordered intercept templates plus media detection
#[derive(Debug, Clone, Default)]
pub struct InterceptRules {
    templates: Vec<UriTemplate>,
    media: MediaDetector,
}

impl InterceptRules {
    pub fn new(templates: Vec<UriTemplate>, media: MediaDetector) -> Self {
        Self { templates, media }
    }

    /// Builds rules from a loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.intercept.clone(), config.media.clone())
    }

    /// Loads and validates a rule file, then builds rules from it
    pub fn load(path: &Path) -> Result<Self> {
        let config = load_config(path)?;
        Ok(Self::from_config(&config))
    }

    pub fn templates(&self) -> &[UriTemplate] {
        &self.templates
    }

    pub fn media(&self) -> &MediaDetector {
        &self.media
    }

    /// Finds the first template matching `candidate`
    ///
    /// # Examples
    ///
    /// ```
    /// use intercept_template::{InterceptRules, MediaDetector, UriTemplate};
    /// use url::Url;
    ///
    /// let rules = InterceptRules::new(
    ///     vec![
    ///         UriTemplate::any().with_host("ads.example.com"),
    ///         UriTemplate::any().with_path("/admin"),
    ///     ],
    ///     MediaDetector::default(),
    /// );
    ///
    /// let url = Url::parse("https://example.com/admin").unwrap();
    /// let (index, _) = rules.first_match(Some(&url)).unwrap();
    /// assert_eq!(index, 1);
    /// ```
    pub fn first_match<U>(&self, candidate: Option<&U>) -> Option<(usize, &UriTemplate)>
    where
        U: UriComponents + ?Sized,
    {
        self.templates
            .iter()
            .enumerate()
            .find(|(_, template)| template.matches(candidate))
    }

    /// Returns true if any template matches `candidate`
    pub fn should_intercept<U>(&self, candidate: Option<&U>) -> bool
    where
        U: UriComponents + ?Sized,
    {
        self.first_match(candidate).is_some()
    }

    /// Returns true if `raw` looks like a media request
    pub fn is_media_request(&self, raw: &str) -> bool {
        self.media.is_media(raw)
    }

    /// Returns the media request for `raw` issued from `page_url`, if any
    pub fn media_request<'a>(
        &self,
        raw: &'a str,
        page_url: Option<&'a str>,
    ) -> Option<MediaRequest<'a>> {
        let request = self.media.detect(raw, page_url)?;
        tracing::debug!(
            "{} detected as media request from page {}",
            raw,
            page_url.unwrap_or("<unknown>")
        );
        Some(request)
    }

    /// Evaluates a raw URI string against the templates and media markers
    ///
    /// A string that fails to parse matches no template but is still checked
    /// for media markers.
    pub fn evaluate(&self, raw: &str) -> Verdict {
        let candidate = parse_candidate(raw);
        self.verdict(raw, candidate.as_ref())
    }

    /// Evaluates an already parsed URL
    pub fn evaluate_url(&self, url: &Url) -> Verdict {
        self.verdict(url.as_str(), Some(url))
    }

    fn verdict(&self, raw: &str, candidate: Option<&Url>) -> Verdict {
        let matched = self.first_match(candidate).map(|(index, _)| index);
        let media = self.is_media_request(raw);

        match matched {
            Some(index) => tracing::debug!("{} matched intercept #{}", raw, index),
            None => tracing::trace!("{} matched no intercept template", raw),
        }
        if media {
            tracing::debug!("{} detected as media request", raw);
        }

        Verdict {
            matched,
            media,
            parsed: candidate.is_some(),
        }
    }
}
