use crate::template::candidate::{parse_candidate, UriComponents};
use serde::Deserialize;
use std::fmt;

/// A partial URI pattern over scheme, host, and path
///
/// Each field is optional. A present field must equal the candidate's
/// component exactly (no normalization, no case-folding, no globbing).
/// Candidate paths are compared in decoded form, so write template paths
/// unescaped (`/a b`, not `/a%20b`). An
/// absent field is a wildcard, so a template with no fields matches every
/// URI that is supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UriTemplate {
    #[serde(default)]
    scheme: Option<String>,
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    path: Option<String>,
}

impl UriTemplate {
    pub fn new(scheme: Option<String>, host: Option<String>, path: Option<String>) -> Self {
        Self { scheme, host, path }
    }

    /// A template with every field unset
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns true if no field constrains the match
    pub fn is_wildcard(&self) -> bool {
        self.scheme.is_none() && self.host.is_none() && self.path.is_none()
    }

    /// Checks whether a candidate URI satisfies this template
    ///
    /// An absent candidate never matches. Otherwise scheme, host, and path
    /// are checked in turn and the first mismatch returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use intercept_template::UriTemplate;
    /// use url::Url;
    ///
    /// let template = UriTemplate::any()
    ///     .with_scheme("https")
    ///     .with_host("example.com");
    ///
    /// let url = Url::parse("https://example.com/page1").unwrap();
    /// assert!(template.matches(Some(&url)));
    ///
    /// let url = Url::parse("http://example.com/page1").unwrap();
    /// assert!(!template.matches(Some(&url)));
    ///
    /// assert!(!template.matches(None::<&Url>));
    /// ```
    pub fn matches<U>(&self, candidate: Option<&U>) -> bool
    where
        U: UriComponents + ?Sized,
    {
        let Some(uri) = candidate else {
            return false;
        };

        field_matches(self.scheme(), uri.scheme())
            && field_matches(self.host(), uri.host())
            && field_matches(self.path(), uri.path().as_deref())
    }

    /// Parses `raw` and checks it against this template
    ///
    /// A string that does not parse as a URI is treated as absent.
    pub fn matches_str(&self, raw: &str) -> bool {
        self.matches(parse_candidate(raw).as_ref())
    }
}

impl fmt::Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scheme={} host={} path={}",
            self.scheme().unwrap_or("*"),
            self.host().unwrap_or("*"),
            self.path().unwrap_or("*")
        )
    }
}

fn field_matches(expected: Option<&str>, actual: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(expected) => actual == Some(expected),
    }
}
