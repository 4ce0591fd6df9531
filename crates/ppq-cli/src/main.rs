//! # quick-validate entry point
//!
//! Parses arguments, sets up tracing on stderr, resolves the bundle root and
//! runs the contract checks. The check report is the only thing on stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ppq_cli::resolve_bundle;
use ppq_cli::validate::run_validate;

/// Static contract verifier for the php-prebuild-quality skill.
///
/// Checks that the runner script, PhpStorm inspection profile and issue-count
/// parser exist and carry the flags, stage markers, defaults and inspection
/// ids the skill depends on. Stops at the first failing check.
#[derive(Parser, Debug)]
#[command(name = "quick-validate", version, about, long_about = None)]
struct Cli {
    /// Enable diagnostic output on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Check this bundle instead of the one containing the executable.
    #[arg(long, value_name = "DIR")]
    bundle_root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let bundle = match resolve_bundle(cli.bundle_root.as_deref()) {
        Ok(bundle) => bundle,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    tracing::debug!(root = %bundle.root().display(), "resolved bundle root");

    match run_validate(&bundle, std::io::stdout().lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
