//! Request Parser
//!
//! Only the fixed grant sentence is accepted. The email is any non-whitespace
//! token; the identity store lookup is the real validity check.

use regex::Regex;
use std::sync::LazyLock;

use super::types::GrantRequest;
use crate::error::ParseError;

static GRANT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^grant user (\S+) user access to aws account number (\d{12}) with ([\w-]+) permission set",
    )
    .unwrap()
});

/// Parse a raw request into a [`GrantRequest`]
///
/// Literal keywords are case-insensitive. Text after `permission set` is
/// ignored. No partial extraction is ever returned.
pub fn parse(raw: &str) -> Result<GrantRequest, ParseError> {
    let caps = GRANT_RE
        .captures(raw.trim())
        .ok_or_else(ParseError::format)?;

    Ok(GrantRequest {
        email: caps[1].to_string(),
        account_id: caps[2].to_string(),
        permission_set_name: caps[3].to_string(),
    })
}
