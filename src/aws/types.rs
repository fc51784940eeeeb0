//! Wire types for the identity store and SSO admin JSON 1.1 APIs

use serde::{Deserialize, Serialize};

use crate::error::AwsError;
use crate::grant::types::{AssignmentCreationStatus, AssignmentStatus, PermissionSet};

// =============================================================================
// IDENTITY STORE
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersRequest<'a> {
    pub identity_store_id: &'a str,
    pub filters: Vec<Filter<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter<'a> {
    pub attribute_path: &'a str,
    pub attribute_value: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Identity store user record (only the fields the pipeline reads)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

// =============================================================================
// SSO ADMIN
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPermissionSetsRequest<'a> {
    pub instance_arn: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPermissionSetsResponse {
    #[serde(default)]
    pub permission_sets: Vec<String>,
    #[serde(default)]
    pub next_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePermissionSetRequest<'a> {
    pub instance_arn: &'a str,
    pub permission_set_arn: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePermissionSetResponse {
    pub permission_set: PermissionSetDescriptor,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PermissionSetDescriptor {
    pub name: String,
    #[serde(default)]
    pub permission_set_arn: Option<String>,
}

impl PermissionSetDescriptor {
    /// Domain form; the requested ARN wins if the descriptor omits its own
    pub fn into_permission_set(self, requested_arn: &str) -> PermissionSet {
        PermissionSet {
            arn: self
                .permission_set_arn
                .unwrap_or_else(|| requested_arn.to_string()),
            name: self.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAssignmentStatusRequest<'a> {
    pub instance_arn: &'a str,
    pub account_assignment_creation_request_id: &'a str,
}

/// Response of both `CreateAccountAssignment` and
/// `DescribeAccountAssignmentCreationStatus`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssignmentStatusResponse {
    pub account_assignment_creation_status: AssignmentOperationStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssignmentOperationStatus {
    #[serde(default)]
    pub request_id: Option<String>,
    pub status: String,
    #[serde(default)]
    pub failure_reason: Option<String>,
}

impl TryFrom<AssignmentOperationStatus> for AssignmentCreationStatus {
    type Error = AwsError;

    fn try_from(wire: AssignmentOperationStatus) -> Result<Self, Self::Error> {
        let status = AssignmentStatus::parse(&wire.status)
            .ok_or_else(|| AwsError::UnknownStatus(wire.status.clone()))?;
        let request_id = wire
            .request_id
            .ok_or_else(|| AwsError::Malformed("AccountAssignmentCreationStatus has no RequestId".into()))?;
        Ok(AssignmentCreationStatus {
            request_id,
            status,
            failure_reason: wire.failure_reason,
        })
    }
}
