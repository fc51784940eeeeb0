//! AWS service seams
//!
//! [`IdentityDirectory`] and [`AccessAdmin`] are the only boundary between the
//! grant pipeline and AWS. Production implementations sign JSON 1.1 requests
//! with SigV4; tests substitute scripted stubs.

pub mod client;
pub mod credentials;
pub mod identity_store;
pub mod sigv4;
pub mod sso_admin;
pub mod types;

use async_trait::async_trait;

use crate::error::AwsError;
use crate::grant::types::{
    AssignmentCreationStatus, AssignmentRequest, PermissionSet, PermissionSetPage,
};

pub use client::{AwsJsonClient, AwsService};
pub use credentials::Credentials;
pub use identity_store::IdentityStoreClient;
pub use sigv4::SigV4Signer;
pub use sso_admin::SsoAdminClient;
pub use types::User;

pub type Result<T> = std::result::Result<T, AwsError>;

/// Identity directory lookups (IAM Identity Center identity store)
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Users whose `UserName` equals `user_name`, in directory order
    async fn list_users(&self, identity_store_id: &str, user_name: &str) -> Result<Vec<User>>;
}

/// Access administration (SSO admin): permission sets and account assignments
#[async_trait]
pub trait AccessAdmin: Send + Sync {
    /// One page of permission set ARNs; pass the previous page's token to continue
    async fn list_permission_sets(
        &self,
        instance_arn: &str,
        next_token: Option<&str>,
    ) -> Result<PermissionSetPage>;

    async fn describe_permission_set(
        &self,
        instance_arn: &str,
        permission_set_arn: &str,
    ) -> Result<PermissionSet>;

    /// Submit an assignment; the returned status carries the request id to poll
    async fn create_account_assignment(
        &self,
        request: &AssignmentRequest,
    ) -> Result<AssignmentCreationStatus>;

    async fn describe_account_assignment_creation_status(
        &self,
        instance_arn: &str,
        request_id: &str,
    ) -> Result<AssignmentCreationStatus>;
}
