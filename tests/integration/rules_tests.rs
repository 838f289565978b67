//! Integration tests for rule loading and evaluation
//!
//! These tests write rule files to disk and run URIs through the full
//! load-then-evaluate path.

use intercept_template::config::load_config_with_hash;
use intercept_template::template::{parse_candidate, ParsedUri};
use intercept_template::{ConfigError, InterceptError, InterceptRules, UriTemplate};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use url::Url;

const RULES: &str = r#"
[media]
markers = [".mp4", ".m3u8"]

[[intercept]]
scheme = "https"
host = "example.com"

[[intercept]]
path = "/admin"
"#;

fn write_rules(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write rules");
    file.flush().expect("Failed to flush rules");
    file
}

#[test]
fn test_load_and_evaluate_scenarios() {
    let file = write_rules(RULES);
    let rules = InterceptRules::load(file.path()).expect("Failed to load rules");
    assert_eq!(rules.templates().len(), 2);

    // https + example.com, any path
    assert_eq!(rules.evaluate("https://example.com/page1").matched, Some(0));
    // scheme differs, no /admin
    assert_eq!(rules.evaluate("http://example.com/page1").matched, None);
    // host differs, no /admin
    assert_eq!(rules.evaluate("https://other.com/page1").matched, None);
    // path-only template
    assert_eq!(rules.evaluate("https://other.com/admin").matched, Some(1));
}

#[test]
fn test_each_template_alone() {
    let template = UriTemplate::any()
        .with_scheme("https")
        .with_host("example.com");

    let candidate = parse_candidate("https://example.com/page1");
    assert!(template.matches(candidate.as_ref()));

    let candidate = parse_candidate("http://example.com/page1");
    assert!(!template.matches(candidate.as_ref()));

    let candidate = parse_candidate("https://other.com/page1");
    assert!(!template.matches(candidate.as_ref()));

    let template = UriTemplate::any().with_path("/admin");
    let candidate = parse_candidate("https://example.com/admin");
    assert!(template.matches(candidate.as_ref()));

    let template = UriTemplate::any().with_scheme("https");
    assert!(!template.matches(None::<&Url>));
}

#[test]
fn test_custom_parser_candidates() {
    let file = write_rules(RULES);
    let rules = InterceptRules::load(file.path()).expect("Failed to load rules");

    // Components are compared as given, so an uppercase scheme is a mismatch
    let candidate = ParsedUri::new(Some("HTTPS"), Some("example.com"), Some("/"));
    assert!(!rules.should_intercept(Some(&candidate)));

    let candidate = ParsedUri::new(None::<&str>, None::<&str>, Some("/admin"));
    assert!(rules.should_intercept(Some(&candidate)));
}

#[test]
fn test_media_detection_from_rule_file() {
    let file = write_rules(RULES);
    let rules = InterceptRules::load(file.path()).expect("Failed to load rules");

    let verdict = rules.evaluate("https://cdn.other.com/live/index.m3u8");
    assert!(verdict.media);
    assert!(!verdict.intercepts());

    let verdict = rules.evaluate("https://example.com/clip.mp4");
    assert!(verdict.media);
    assert_eq!(verdict.matched, Some(0));
}

#[test]
fn test_invalid_rule_file_is_rejected() {
    let file = write_rules("[[intercept]]\nhost = \"example.com:443\"\n");
    let result = InterceptRules::load(file.path());
    assert!(matches!(
        result,
        Err(InterceptError::Config(ConfigError::InvalidTemplate(_)))
    ));
}

#[test]
fn test_missing_rule_file() {
    let result = InterceptRules::load(Path::new("/nonexistent/rules.toml"));
    assert!(matches!(
        result,
        Err(InterceptError::Config(ConfigError::Io(_)))
    ));
}

#[test]
fn test_hash_changes_with_rules() {
    let file1 = write_rules(RULES);
    let file2 = write_rules("[[intercept]]\npath = \"/other\"\n");

    let (_, hash1) = load_config_with_hash(file1.path()).expect("Failed to load rules");
    let (_, hash2) = load_config_with_hash(file2.path()).expect("Failed to load rules");

    assert_ne!(hash1, hash2);
}

#[test]
fn test_rules_shared_across_threads() {
    let file = write_rules(RULES);
    let rules = std::sync::Arc::new(InterceptRules::load(file.path()).expect("Failed to load rules"));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rules = std::sync::Arc::clone(&rules);
            std::thread::spawn(move || {
                let raw = if i % 2 == 0 {
                    "https://example.com/"
                } else {
                    "http://other.com/"
                };
                rules.evaluate(raw).intercepts()
            })
        })
        .collect();

    let results: Vec<bool> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();
    assert_eq!(results, vec![true, false, true, false]);
}

#[test]
fn test_unescaped_template_paths_match_encoded_requests() {
    let file = write_rules("[[intercept]]\npath = \"/a b\"\n\n[[intercept]]\npath = \"/café\"\n");
    let rules = InterceptRules::load(file.path()).expect("Failed to load rules");

    assert_eq!(rules.evaluate("https://example.com/a%20b").matched, Some(0));
    assert_eq!(rules.evaluate("https://example.com/café").matched, Some(1));
    assert_eq!(rules.evaluate("https://example.com/caf%C3%A9").matched, Some(1));
    assert_eq!(rules.evaluate("https://example.com/ab").matched, None);
}

#[test]
fn test_media_request_reports_page() {
    let file = write_rules(RULES);
    let rules = InterceptRules::load(file.path()).expect("Failed to load rules");

    let request = rules
        .media_request("https://cdn.other.com/clip.mp4", Some("https://example.com/watch"))
        .expect("Expected a media request");
    assert_eq!(request.url, "https://cdn.other.com/clip.mp4");
    assert_eq!(request.page_url, Some("https://example.com/watch"));
}
