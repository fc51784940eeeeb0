//! Grant MCP Server Binary
//!
//! Runs the `grant_access` MCP server over stdio.
//!
//! ## Usage
//!
//! ```bash
//! SSO_GRANT_IDENTITY_STORE_ID=d-1234567890 \
//! SSO_GRANT_INSTANCE_ARN=arn:aws:sso:::instance/ssoins-1234567890abcdef \
//! ./target/debug/grant_mcp
//! ```
//!
//! ## Environment Variables
//!
//! - `SSO_GRANT_IDENTITY_STORE_ID` (required): identity store user lookups are scoped to
//! - `SSO_GRANT_INSTANCE_ARN` (required): SSO instance owning the permission sets
//! - `SSO_GRANT_CONFIG` (optional): YAML config file used instead of the variables above
//! - `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` / `AWS_SESSION_TOKEN`: credentials
//! - `RUST_LOG` (optional): log filter, logs go to stderr

use std::sync::Arc;

use anyhow::Result;

use sso_grant::mcp::McpServer;
use sso_grant::{GrantConfig, GrantWorkflow};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // stdout is the protocol channel, so logs must go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::var("SSO_GRANT_CONFIG") {
        Ok(path) => GrantConfig::from_file(path)?,
        Err(_) => GrantConfig::from_env()?,
    };

    tracing::info!(
        region = %config.region,
        identity_store_id = %config.identity_store_id,
        instance_arn = %config.instance_arn,
        "Loaded grant configuration"
    );

    let workflow = Arc::new(GrantWorkflow::from_config(config)?);
    McpServer::new(workflow).run().await
}
