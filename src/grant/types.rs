//! Domain types shared by the resolvers, the orchestrator and the AWS clients

use serde::{Deserialize, Serialize};

/// A parsed grant request; immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantRequest {
    pub email: String,
    /// 12-digit AWS account id
    pub account_id: String,
    /// Permission set token exactly as typed
    pub permission_set_name: String,
}

/// A resolved identity store user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
}

/// A permission set descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionSet {
    pub arn: String,
    pub name: String,
}

/// One page of `ListPermissionSets`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSetPage {
    pub arns: Vec<String>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrincipalType {
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetType {
    #[serde(rename = "AWS_ACCOUNT")]
    Account,
}

/// `CreateAccountAssignment` input; serializes to the wire shape directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssignmentRequest {
    pub instance_arn: String,
    #[serde(rename = "TargetId")]
    pub account_id: String,
    pub target_type: TargetType,
    pub permission_set_arn: String,
    pub principal_type: PrincipalType,
    pub principal_id: String,
}

impl AssignmentRequest {
    /// Assign a permission set to a single user on one account
    pub fn for_user(
        instance_arn: impl Into<String>,
        account_id: impl Into<String>,
        permission_set_arn: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            instance_arn: instance_arn.into(),
            account_id: account_id.into(),
            target_type: TargetType::Account,
            permission_set_arn: permission_set_arn.into(),
            principal_type: PrincipalType::User,
            principal_id: user_id.into(),
        }
    }
}

/// Status of an account assignment creation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStatus {
    InProgress,
    Succeeded,
    Failed,
}

impl AssignmentStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "IN_PROGRESS" => Some(Self::InProgress),
            "SUCCEEDED" => Some(Self::Succeeded),
            "FAILED" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// Status snapshot keyed by request id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentCreationStatus {
    pub request_id: String,
    pub status: AssignmentStatus,
    pub failure_reason: Option<String>,
}

impl AssignmentCreationStatus {
    pub fn in_progress(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            status: AssignmentStatus::InProgress,
            failure_reason: None,
        }
    }

    pub fn succeeded(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            status: AssignmentStatus::Succeeded,
            failure_reason: None,
        }
    }

    pub fn failed(request_id: impl Into<String>, reason: Option<&str>) -> Self {
        Self {
            request_id: request_id.into(),
            status: AssignmentStatus::Failed,
            failure_reason: reason.map(str::to_string),
        }
    }
}
