//! CLI for the fbcheck Firebase Realtime Database access checker.

mod outcome;
mod progress;

pub use outcome::Outcome;

use anyhow::{Context, Result};
use clap::Parser;
use fbcheck_core::checker::Checker;
use fbcheck_core::config::{self, CheckerConfig, MAX_TIMEOUT_SECS};
use fbcheck_core::report;
use fbcheck_core::target::Target;
use progress::ConsoleObserver;
use std::io::{self, Write};

const AFTER_HELP: &str = "\
Examples:
  fbcheck https://my-project-default-rtdb.firebaseio.com/
  fbcheck my-project-default-rtdb.firebaseio.com
  fbcheck https://my-project-default-rtdb.europe-west1.firebasedatabase.app/

Exit codes: 0 secure, 1 insecure or error, 2 invalid URL, 130 interrupted.

Note: this tool only checks for basic public access. It does not test all
possible security configurations or authentication methods.";

/// Check whether a Firebase Realtime Database allows unauthenticated access.
#[derive(Debug, Parser)]
#[command(name = "fbcheck", version)]
#[command(about = "Check if a Firebase Realtime Database instance is publicly accessible", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Firebase Realtime Database URL.
    pub firebase_url: String,

    /// Skip testing write access (faster, less intrusive).
    #[arg(long)]
    pub skip_write_test: bool,

    /// Request timeout in seconds [default: 10, or `timeout_secs` from config.toml].
    #[arg(
        long,
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..=MAX_TIMEOUT_SECS)
    )]
    pub timeout: Option<u64>,
}

/// Validates the target, runs the check, prints the report.
///
/// The check runs on the blocking pool while this task waits for Ctrl-C.
pub async fn run(cli: Cli) -> Outcome {
    let target = match Target::parse(&cli.firebase_url) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(input = %cli.firebase_url, "invalid URL: {}", e);
            println!("❌ Invalid URL: {}", e);
            return Outcome::InvalidUrl;
        }
    };
    if !target.is_known_firebase_host() {
        tracing::warn!(host = target.host(), "host is not a known Firebase domain");
        println!("⚠️  Warning: URL doesn't appear to be a Firebase database URL");
    }

    let cfg = apply_overrides(load_config(), cli.timeout);
    let skip_write = cli.skip_write_test;
    println!("🔍 Checking Firebase database: {}", target);

    let mut task = tokio::task::spawn_blocking(move || check(target, cfg, skip_write));
    let signal = tokio::select! {
        joined = &mut task => return finish(joined),
        signal = tokio::signal::ctrl_c() => signal,
    };
    match signal {
        Ok(()) => {
            tracing::info!("interrupted by user");
            println!("\n⏹️  Check cancelled by user");
            Outcome::Interrupted
        }
        Err(e) => {
            tracing::warn!("cannot listen for Ctrl-C: {}", e);
            finish(task.await)
        }
    }
}

fn load_config() -> CheckerConfig {
    match config::load_or_init() {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::warn!("using default config: {:#}", e);
            CheckerConfig::default()
        }
    }
}

/// Command-line flags win over the config file, but only when given.
fn apply_overrides(cfg: CheckerConfig, timeout: Option<u64>) -> CheckerConfig {
    match timeout {
        Some(secs) => cfg.with_timeout_secs(secs),
        None => cfg,
    }
}

/// Runs every probe and prints the report. Returns true if insecure.
fn check(target: Target, cfg: CheckerConfig, skip_write: bool) -> Result<bool> {
    let mut observer = ConsoleObserver::new(io::stdout());
    let mut checker = Checker::with_curl(target, cfg);
    let findings = checker.run(skip_write, &mut observer);

    let assessment = report::assess(&findings);
    let mut out = io::stdout().lock();
    report::render(&mut out, &findings, &assessment).context("write report")?;
    out.flush().context("flush report")?;
    Ok(assessment.is_insecure())
}

fn finish(joined: Result<Result<bool>, tokio::task::JoinError>) -> Outcome {
    match joined {
        Ok(Ok(insecure)) => Outcome::from_insecure(insecure),
        Ok(Err(e)) => {
            tracing::error!("check failed: {:#}", e);
            println!("❌ Unexpected error: {:#}", e);
            Outcome::Error
        }
        Err(e) => {
            tracing::error!("check task failed: {}", e);
            println!("❌ Unexpected error: {}", e);
            Outcome::Error
        }
    }
}

#[cfg(test)]
mod tests;
