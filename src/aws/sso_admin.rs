//! SSO admin client: permission sets and account assignments

use async_trait::async_trait;

use super::client::{AwsJsonClient, AwsService};
use super::credentials::Credentials;
use super::types::{
    AssignmentStatusResponse, DescribeAssignmentStatusRequest, DescribePermissionSetRequest,
    DescribePermissionSetResponse, ListPermissionSetsRequest, ListPermissionSetsResponse,
};
use super::{AccessAdmin, Result};
use crate::grant::types::{
    AssignmentCreationStatus, AssignmentRequest, PermissionSet, PermissionSetPage,
};

pub struct SsoAdminClient {
    inner: AwsJsonClient,
}

impl SsoAdminClient {
    pub fn new(region: &str, endpoint: Option<&str>, credentials: Credentials) -> Result<Self> {
        Ok(Self {
            inner: AwsJsonClient::new(AwsService::SsoAdmin, region, endpoint, credentials)?,
        })
    }
}

#[async_trait]
impl AccessAdmin for SsoAdminClient {
    async fn list_permission_sets(
        &self,
        instance_arn: &str,
        next_token: Option<&str>,
    ) -> Result<PermissionSetPage> {
        let request = ListPermissionSetsRequest {
            instance_arn,
            next_token,
        };
        let response: ListPermissionSetsResponse =
            self.inner.call("ListPermissionSets", &request).await?;
        Ok(PermissionSetPage {
            arns: response.permission_sets,
            // An empty token is treated as the last page
            next_token: response.next_token.filter(|t| !t.is_empty()),
        })
    }

    async fn describe_permission_set(
        &self,
        instance_arn: &str,
        permission_set_arn: &str,
    ) -> Result<PermissionSet> {
        let request = DescribePermissionSetRequest {
            instance_arn,
            permission_set_arn,
        };
        let response: DescribePermissionSetResponse =
            self.inner.call("DescribePermissionSet", &request).await?;
        Ok(response
            .permission_set
            .into_permission_set(permission_set_arn))
    }

    async fn create_account_assignment(
        &self,
        request: &AssignmentRequest,
    ) -> Result<AssignmentCreationStatus> {
        let response: AssignmentStatusResponse =
            self.inner.call("CreateAccountAssignment", request).await?;
        response.account_assignment_creation_status.try_into()
    }

    async fn describe_account_assignment_creation_status(
        &self,
        instance_arn: &str,
        request_id: &str,
    ) -> Result<AssignmentCreationStatus> {
        let request = DescribeAssignmentStatusRequest {
            instance_arn,
            account_assignment_creation_request_id: request_id,
        };
        let response: AssignmentStatusResponse = self
            .inner
            .call("DescribeAccountAssignmentCreationStatus", &request)
            .await?;
        response.account_assignment_creation_status.try_into()
    }
}
