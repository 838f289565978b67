use crate::{UriError, UriResult};
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use url::Url;

/// Read access to the components a template is matched against
///
/// Each component may be absent. A template field that is present never
/// matches an absent component.
pub trait UriComponents {
    /// The URI scheme, e.g. `https`
    fn scheme(&self) -> Option<&str>;

    /// The host, without port or userinfo
    fn host(&self) -> Option<&str>;

    /// The decoded path, e.g. `/admin` or `/a b`
    fn path(&self) -> Option<Cow<'_, str>>;
}

impl UriComponents for Url {
    fn scheme(&self) -> Option<&str> {
        Some(Url::scheme(self))
    }

    fn host(&self) -> Option<&str> {
        self.host_str()
    }

    fn path(&self) -> Option<Cow<'_, str>> {
        // Opaque URIs (mailto:, data:, ...) have no hierarchical path
        if self.cannot_be_a_base() {
            None
        } else {
            Some(percent_decode_str(Url::path(self)).decode_utf8_lossy())
        }
    }
}

/// URI components supplied by a caller's own parser
///
/// Values are compared exactly as given; nothing is lowercased or decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUri {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub path: Option<String>,
}

impl ParsedUri {
    pub fn new(
        scheme: Option<impl Into<String>>,
        host: Option<impl Into<String>>,
        path: Option<impl Into<String>>,
    ) -> Self {
        Self {
            scheme: scheme.map(Into::into),
            host: host.map(Into::into),
            path: path.map(Into::into),
        }
    }
}

impl UriComponents for ParsedUri {
    fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    fn path(&self) -> Option<Cow<'_, str>> {
        self.path.as_deref().map(Cow::Borrowed)
    }
}

/// Parses a candidate URI, returning `None` if it is malformed
///
/// A malformed URI is treated as an absent candidate, so it matches no
/// template.
///
/// # Examples
///
/// ```
/// use intercept_template::template::parse_candidate;
///
/// assert!(parse_candidate("https://example.com/page").is_some());
/// assert!(parse_candidate("not a uri").is_none());
/// ```
pub fn parse_candidate(raw: &str) -> Option<Url> {
    Url::parse(raw).ok()
}

/// Parses a candidate URI, reporting why it is malformed
pub fn parse_candidate_strict(raw: &str) -> UriResult<Url> {
    Url::parse(raw).map_err(|e| UriError::Parse {
        input: raw.to_string(),
        reason: e.to_string(),
    })
}
