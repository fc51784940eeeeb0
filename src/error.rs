//! Error types for the grant pipeline
//!
//! Every variant here ends up rendered into a single outcome string by
//! [`crate::grant::GrantOutcome`]; nothing crosses the `grant_access`
//! boundary as an error value.

use std::path::PathBuf;

use thiserror::Error;

/// Usage text returned whenever a request does not match the grammar
pub const USAGE: &str = "grant user [email] user access to aws account number [account] with [permission_set] permission set";

/// Request did not match the fixed grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid request format. Please follow: {usage}.")]
    Format { usage: &'static str },
}

impl ParseError {
    pub fn format() -> Self {
        ParseError::Format { usage: USAGE }
    }
}

/// Failures talking to the identity store or SSO admin APIs
#[derive(Error, Debug)]
pub enum AwsError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; renders like the SDK's `<code>: <message>`
    #[error("{code}: {message}")]
    Service {
        status: u16,
        code: String,
        message: String,
    },

    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {operation} request: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("credentials unavailable: {0}")]
    Credentials(String),

    #[error("invalid endpoint '{0}'")]
    Endpoint(String),

    #[error("unrecognised assignment status '{0}'")]
    UnknownStatus(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    /// Listing still had pages after the configured page cap
    #[error("{operation} returned more than {pages} pages")]
    PageLimit {
        operation: &'static str,
        pages: usize,
    },
}

impl AwsError {
    /// Build a service error from an error code and message
    pub fn service(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        AwsError::Service {
            status,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Failures of the submit-and-poll step
#[derive(Error, Debug)]
pub enum AssignmentError {
    /// The service reported FAILED for the assignment
    #[error("{reason}")]
    Failed { reason: String },

    /// Submission or a status query failed; the poll is not resumed
    #[error(transparent)]
    Transport(#[from] AwsError),

    #[error("assignment {request_id} still in progress after {attempts} status checks")]
    Timeout { request_id: String, attempts: u32 },
}

/// Invalid or unreadable deployment configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("failed to read config file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
