//! Intercept-Template main entry point
//!
//! Command-line interface for checking URIs against an intercept rule file.

use clap::Parser;
use intercept_template::config::{load_config_with_hash, Config};
use intercept_template::template::parse_candidate_strict;
use intercept_template::{InterceptError, InterceptRules, MediaRequest, Verdict};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Intercept-Template: check URIs against intercept templates
///
/// Loads a TOML rule file of scheme/host/path templates and reports, for
/// each URI given, whether a request to it would be intercepted and whether
/// it looks like a media request.
#[derive(Parser, Debug)]
#[command(name = "intercept-template")]
#[command(version = "1.0.0")]
#[command(about = "Check URIs against intercept templates", long_about = None)]
struct Cli {
    /// Path to TOML rule file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// URIs to evaluate
    #[arg(value_name = "URI")]
    uris: Vec<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate the rule file and list its templates without evaluating URIs
    #[arg(long)]
    dry_run: bool,

    /// Fail on URIs that do not parse instead of treating them as non-matches
    #[arg(long)]
    strict: bool,

    /// URL of the page issuing the requests, reported with media requests
    #[arg(long, value_name = "URL")]
    page: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading rules from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config).map_err(|e| {
        tracing::error!("Failed to load rules: {}", e);
        e
    })?;
    tracing::info!("Rules loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config, &config_hash);
        return Ok(());
    }

    handle_evaluate(&config, &cli.uris, cli.strict, cli.page.as_deref())?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("intercept_template=warn,warn"),
            1 => EnvFilter::new("intercept_template=info,warn"),
            2 => EnvFilter::new("intercept_template=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: lists templates and media markers
fn handle_dry_run(config: &Config, config_hash: &str) {
    print!("{}", dry_run_report(config, config_hash));
}

fn dry_run_report(config: &Config, config_hash: &str) -> String {
    let mut report = String::from("=== Intercept-Template Dry Run ===\n\n");

    report.push_str(&format!("Rule file hash: {}\n\n", config_hash));

    report.push_str(&format!("Intercept Templates ({}):\n", config.intercept.len()));
    for (index, template) in config.intercept.iter().enumerate() {
        report.push_str(&format!("  #{} {}\n", index, template));
    }

    report.push_str(&format!("\nMedia Markers ({}):\n", config.media.markers().len()));
    for marker in config.media.markers() {
        report.push_str(&format!("  - {}\n", marker));
    }

    report.push_str("\n✓ Rule file is valid\n");
    report
}

/// Evaluates each URI and prints one line per URI
fn handle_evaluate(
    config: &Config,
    uris: &[String],
    strict: bool,
    page_url: Option<&str>,
) -> Result<(), InterceptError> {
    let rules = InterceptRules::from_config(config);

    if uris.is_empty() {
        tracing::warn!("No URIs given; nothing to evaluate");
        return Ok(());
    }

    for raw in uris {
        let verdict = evaluate_one(&rules, raw, strict)?;
        if !verdict.parsed {
            tracing::warn!("Could not parse '{}'; treating as no match", raw);
        }

        let media = rules.media_request(raw, page_url);
        println!("{}", format_verdict(raw, &verdict, media.as_ref()));
    }

    Ok(())
}

/// Evaluates one URI, parsing it once; strict mode rejects unparsable input
fn evaluate_one(rules: &InterceptRules, raw: &str, strict: bool) -> Result<Verdict, InterceptError> {
    if strict {
        let url = parse_candidate_strict(raw)?;
        Ok(rules.evaluate_url(&url))
    } else {
        Ok(rules.evaluate(raw))
    }
}

fn format_verdict(raw: &str, verdict: &Verdict, media: Option<&MediaRequest<'_>>) -> String {
    let decision = match verdict.matched {
        Some(index) => format!("intercept (template #{})", index),
        None => "pass".to_string(),
    };

    match media {
        Some(MediaRequest {
            page_url: Some(page),
            ..
        }) => format!("{}\t{} [media from {}]", raw, decision, page),
        Some(_) => format!("{}\t{} [media]", raw, decision),
        None => format!("{}\t{}", raw, decision),
    }
}
