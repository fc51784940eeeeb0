//! SSO Grant - IAM Identity Center access grants from a single request string
//!
//! A request such as
//! `grant user jane@example.com user access to aws account number 123456789012 with adminaccess permission set`
//! flows through one fixed pipeline:
//!
//! Request Parser -> Identity Resolver -> Permission Set Resolver
//! -> Assignment Orchestrator -> Result Reporter
//!
//! Every stage can short-circuit, and every path ends in one human-readable
//! string. The pipeline is exposed as the `grant_access` MCP tool.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sso_grant::{GrantConfig, GrantWorkflow};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = GrantConfig::from_env()?;
//! let workflow = GrantWorkflow::from_config(config)?;
//! let message = workflow
//!     .grant_access("grant user jane@example.com user access to aws account number 123456789012 with adminaccess permission set")
//!     .await;
//! println!("{message}");
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Deployment configuration (identity store, instance ARN, polling limits)
pub mod config;

// AWS transport: SigV4-signed JSON 1.1 clients behind service traits
pub mod aws;

// The grant pipeline itself
pub mod grant;

// MCP server exposing grant_access over stdio
pub mod mcp;

pub use config::GrantConfig;
pub use error::{AssignmentError, AwsError, ConfigError, ParseError};
pub use grant::{GrantOutcome, GrantRequest, GrantWorkflow};
