//! Result Reporter
//!
//! Each terminal state of the pipeline maps to exactly one string; the
//! callers of `grant_access` only ever see text.

use std::fmt;

use crate::error::{AssignmentError, AwsError, ParseError};

/// Terminal state of one grant request
#[derive(Debug)]
pub enum GrantOutcome {
    /// Request did not match the grammar
    InvalidFormat(ParseError),
    /// No identity store user with that UserName
    UserNotFound { email: String },
    /// Identity store lookup itself failed
    UserLookupFailed { email: String, error: AwsError },
    /// No permission set matched after every page was checked
    PermissionSetNotFound { name: String },
    /// Listing or describing permission sets failed
    PermissionSetLookupFailed(AwsError),
    /// Assignment reported FAILED, a call failed, or polling timed out
    AssignmentFailed(AssignmentError),
    Granted {
        email: String,
        account_id: String,
        permission_set_name: String,
    },
}

impl GrantOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GrantOutcome::Granted { .. })
    }
}

impl fmt::Display for GrantOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrantOutcome::InvalidFormat(e) => write!(f, "{}", e),
            GrantOutcome::UserNotFound { email } => {
                write!(f, "User {} not found in identity store.", email)
            }
            GrantOutcome::UserLookupFailed { email, error } => {
                write!(f, "Failed to look up user {}: {}", email, error)
            }
            GrantOutcome::PermissionSetNotFound { name } => {
                write!(f, "Permission set '{}' not found.", name)
            }
            GrantOutcome::PermissionSetLookupFailed(error) => {
                write!(f, "Failed to list permission sets: {}", error)
            }
            GrantOutcome::AssignmentFailed(AssignmentError::Timeout {
                request_id,
                attempts,
            }) => write!(
                f,
                "Timed out waiting for assignment {} after {} status checks.",
                request_id, attempts
            ),
            GrantOutcome::AssignmentFailed(e) => write!(f, "Failed to assign permission: {}", e),
            GrantOutcome::Granted {
                email,
                account_id,
                permission_set_name,
            } => write!(
                f,
                "Successfully granted {} access to account {} with permission set '{}'.",
                email, account_id, permission_set_name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_not_found() {
        let o = GrantOutcome::UserNotFound {
            email: "jane@example.com".into(),
        };
        assert_eq!(o.to_string(), "User jane@example.com not found in identity store.");
        assert!(!o.is_success());
    }

    #[test]
    fn test_permission_set_not_found() {
        let o = GrantOutcome::PermissionSetNotFound {
            name: "adminaccess".into(),
        };
        assert_eq!(o.to_string(), "Permission set 'adminaccess' not found.");
    }

    #[test]
    fn test_assignment_failed_with_reason() {
        let o = GrantOutcome::AssignmentFailed(AssignmentError::Failed {
            reason: "QuotaExceeded".into(),
        });
        assert_eq!(o.to_string(), "Failed to assign permission: QuotaExceeded");
    }

    #[test]
    fn test_transport_error_text() {
        let o = GrantOutcome::AssignmentFailed(AssignmentError::Transport(AwsError::service(
            400,
            "AccessDeniedException",
            "User is not authorized",
        )));
        assert_eq!(
            o.to_string(),
            "Failed to assign permission: AccessDeniedException: User is not authorized"
        );
    }

    #[test]
    fn test_timeout() {
        let o = GrantOutcome::AssignmentFailed(AssignmentError::Timeout {
            request_id: "req-1".into(),
            attempts: 3,
        });
        assert_eq!(
            o.to_string(),
            "Timed out waiting for assignment req-1 after 3 status checks."
        );
    }

    #[test]
    fn test_granted() {
        let o = GrantOutcome::Granted {
            email: "jane@example.com".into(),
            account_id: "123456789012".into(),
            permission_set_name: "adminaccess".into(),
        };
        assert!(o.is_success());
        assert_eq!(
            o.to_string(),
            "Successfully granted jane@example.com access to account 123456789012 with permission set 'adminaccess'."
        );
    }
}
