use crate::config::types::Config;
use crate::media::MediaDetector;
use crate::template::UriTemplate;
use crate::{ConfigError, ConfigResult};
use percent_encoding::percent_decode_str;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    for (index, template) in config.intercept.iter().enumerate() {
        validate_template(index, template)?;
    }
    validate_media(&config.media)?;
    Ok(())
}

/// Validates a single intercept template
fn validate_template(index: usize, template: &UriTemplate) -> Result<(), ConfigError> {
    if let Some(scheme) = template.scheme() {
        validate_scheme(scheme)
            .map_err(|e| ConfigError::InvalidTemplate(format!("intercept #{}: {}", index, e)))?;

        if scheme.chars().any(|c| c.is_ascii_uppercase()) {
            tracing::warn!(
                "intercept #{}: scheme '{}' has uppercase letters; parsed URLs carry lowercase schemes",
                index,
                scheme
            );
        }
    }

    if let Some(host) = template.host() {
        validate_host(host)
            .map_err(|e| ConfigError::InvalidTemplate(format!("intercept #{}: {}", index, e)))?;

        if host.chars().any(|c| c.is_ascii_uppercase()) {
            tracing::warn!(
                "intercept #{}: host '{}' has uppercase letters; parsed URLs carry lowercase hosts",
                index,
                host
            );
        }
    }

    if let Some(path) = template.path() {
        if looks_percent_encoded(path) {
            tracing::warn!(
                "intercept #{}: path '{}' looks percent-encoded; candidate paths are compared decoded",
                index,
                path
            );
        }
    }

    if template.is_wildcard() {
        tracing::warn!("intercept #{}: no fields set, every request will match", index);
    }

    Ok(())
}

/// Validates a scheme: a letter followed by letters, digits, '+', '-' or '.'
fn validate_scheme(scheme: &str) -> Result<(), String> {
    let mut chars = scheme.chars();

    match chars.next() {
        None => return Err("scheme cannot be empty".to_string()),
        Some(first) if !first.is_ascii_alphabetic() => {
            return Err(format!("scheme '{}' must start with a letter", scheme));
        }
        Some(_) => {}
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return Err(format!("scheme '{}' contains invalid characters", scheme));
    }

    Ok(())
}

/// Validates a host: non-empty, no path separators, ports, or whitespace
fn validate_host(host: &str) -> Result<(), String> {
    if host.is_empty() {
        return Err("host cannot be empty".to_string());
    }

    // Bracketed IPv6 literals are the only hosts allowed to contain ':'
    let is_ipv6_literal = host.starts_with('[') && host.ends_with(']');

    if host.contains('/')
        || (host.contains(':') && !is_ipv6_literal)
        || host.chars().any(char::is_whitespace)
    {
        return Err(format!(
            "host '{}' must be a bare host name without port, path, or whitespace",
            host
        ));
    }

    Ok(())
}

/// Returns true if decoding `path` would change it
fn looks_percent_encoded(path: &str) -> bool {
    percent_decode_str(path).decode_utf8_lossy() != path
}

/// Validates media markers
fn validate_media(media: &MediaDetector) -> Result<(), ConfigError> {
    if media.markers().iter().any(|m| m.is_empty()) {
        return Err(ConfigError::Validation(
            "media markers cannot be empty strings".to_string(),
        ));
    }
    Ok(())
}
