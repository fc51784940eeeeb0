//! One-shot grant CLI
//!
//! Runs a single request through the grant pipeline and prints the outcome.
//!
//! ```bash
//! grant_cli "grant user jane@example.com user access to aws account number 123456789012 with adminaccess permission set"
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sso_grant::{GrantConfig, GrantWorkflow};

#[derive(Parser, Debug)]
#[command(name = "grant_cli", about = "Grant an Identity Center user access to an AWS account")]
struct Args {
    /// The grant request sentence
    request: String,

    /// YAML config file (otherwise SSO_GRANT_* environment variables are used)
    #[arg(short, long, env = "SSO_GRANT_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// `RUST_LOG`, when set and valid, takes precedence over `--verbose`
fn log_filter(verbose: bool, rust_log: Option<String>) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.verbose, std::env::var("RUST_LOG").ok()))
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => GrantConfig::from_file(path)?,
        None => GrantConfig::from_env()?,
    };
    let workflow = GrantWorkflow::from_config(config)?;

    let outcome = workflow.run(&args.request).await;
    println!("{}", outcome);

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
