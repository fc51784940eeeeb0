//! Deployment configuration
//!
//! The identity store id, SSO instance ARN and region are fixed per process.
//! They are injected into [`crate::GrantWorkflow`] at construction time, never
//! supplied per request.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const ENV_IDENTITY_STORE_ID: &str = "SSO_GRANT_IDENTITY_STORE_ID";
pub const ENV_INSTANCE_ARN: &str = "SSO_GRANT_INSTANCE_ARN";
pub const ENV_REGION: &str = "SSO_GRANT_REGION";
pub const ENV_POLL_INTERVAL_MS: &str = "SSO_GRANT_POLL_INTERVAL_MS";
pub const ENV_MAX_POLL_ATTEMPTS: &str = "SSO_GRANT_MAX_POLL_ATTEMPTS";
pub const ENV_MAX_PERMISSION_SET_PAGES: &str = "SSO_GRANT_MAX_PERMISSION_SET_PAGES";
pub const ENV_IDENTITY_STORE_ENDPOINT: &str = "SSO_GRANT_IDENTITY_STORE_ENDPOINT";
pub const ENV_SSO_ADMIN_ENDPOINT: &str = "SSO_GRANT_SSO_ADMIN_ENDPOINT";

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_POLL_INTERVAL_MS: u64 = 2_000;
/// 150 checks at 2s is five minutes
const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 150;
const DEFAULT_MAX_PERMISSION_SET_PAGES: usize = 100;

/// Configuration for one grant service process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrantConfig {
    /// Identity store that user lookups are scoped to (`d-xxxxxxxxxx`)
    pub identity_store_id: String,

    /// SSO instance ARN that owns permission sets and assignments
    pub instance_arn: String,

    /// Region for both clients
    pub region: String,

    /// Wait before each assignment status check
    pub poll_interval_ms: u64,

    /// Status checks before giving up with a timeout outcome
    pub max_poll_attempts: u32,

    /// Upper bound on `ListPermissionSets` pages followed per request
    pub max_permission_set_pages: usize,

    /// Lowercase request token -> canonical permission set name
    ///
    /// Lets short tokens like `adminaccess` name `AdministratorAccess`.
    /// Matching against the alias target is still exact and case-insensitive.
    pub permission_set_aliases: BTreeMap<String, String>,

    /// Override for the identity store endpoint (tests, VPC endpoints)
    pub identity_store_endpoint: Option<String>,

    /// Override for the SSO admin endpoint
    pub sso_admin_endpoint: Option<String>,
}

impl Default for GrantConfig {
    fn default() -> Self {
        Self {
            identity_store_id: String::new(),
            instance_arn: String::new(),
            region: DEFAULT_REGION.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_poll_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
            max_permission_set_pages: DEFAULT_MAX_PERMISSION_SET_PAGES,
            permission_set_aliases: default_aliases(),
            identity_store_endpoint: None,
            sso_admin_endpoint: None,
        }
    }
}

fn default_aliases() -> BTreeMap<String, String> {
    [
        ("adminaccess", "AdministratorAccess"),
        ("admin", "AdministratorAccess"),
        ("readonly", "ReadOnlyAccess"),
        ("poweruser", "PowerUserAccess"),
    ]
    .into_iter()
    .map(|(alias, name)| (alias.to_string(), name.to_string()))
    .collect()
}

impl GrantConfig {
    /// Create a config for the given identity store and instance with defaults
    pub fn new(identity_store_id: impl Into<String>, instance_arn: impl Into<String>) -> Self {
        Self {
            identity_store_id: identity_store_id.into(),
            instance_arn: instance_arn.into(),
            ..Self::default()
        }
    }

    /// Load from `SSO_GRANT_*` environment variables (after `.env`, if present)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; `from_env` is this over `std::env::var`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            identity_store_id: lookup(ENV_IDENTITY_STORE_ID)
                .ok_or(ConfigError::Missing(ENV_IDENTITY_STORE_ID))?,
            instance_arn: lookup(ENV_INSTANCE_ARN).ok_or(ConfigError::Missing(ENV_INSTANCE_ARN))?,
            ..Self::default()
        };

        if let Some(region) = lookup(ENV_REGION) {
            config.region = region;
        }
        if let Some(v) = lookup(ENV_POLL_INTERVAL_MS) {
            config.poll_interval_ms = parse_number(ENV_POLL_INTERVAL_MS, &v)?;
        }
        if let Some(v) = lookup(ENV_MAX_POLL_ATTEMPTS) {
            config.max_poll_attempts = parse_number(ENV_MAX_POLL_ATTEMPTS, &v)?;
        }
        if let Some(v) = lookup(ENV_MAX_PERMISSION_SET_PAGES) {
            config.max_permission_set_pages = parse_number(ENV_MAX_PERMISSION_SET_PAGES, &v)?;
        }
        config.identity_store_endpoint = lookup(ENV_IDENTITY_STORE_ENDPOINT);
        config.sso_admin_endpoint = lookup(ENV_SSO_ADMIN_ENDPOINT);

        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file; absent keys take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GrantConfig =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identity_store_id.trim().is_empty() {
            return Err(ConfigError::Missing(ENV_IDENTITY_STORE_ID));
        }
        if self.instance_arn.trim().is_empty() {
            return Err(ConfigError::Missing(ENV_INSTANCE_ARN));
        }
        if self.region.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: ENV_REGION,
                value: self.region.clone(),
            });
        }
        if self.max_poll_attempts == 0 {
            return Err(ConfigError::Invalid {
                key: ENV_MAX_POLL_ATTEMPTS,
                value: "0".into(),
            });
        }
        if self.max_permission_set_pages == 0 {
            return Err(ConfigError::Invalid {
                key: ENV_MAX_PERMISSION_SET_PAGES,
                value: "0".into(),
            });
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
