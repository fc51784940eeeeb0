//! Identity store client

use async_trait::async_trait;

use super::client::{AwsJsonClient, AwsService};
use super::credentials::Credentials;
use super::types::{Filter, ListUsersRequest, ListUsersResponse, User};
use super::{IdentityDirectory, Result};

const USER_NAME_ATTRIBUTE: &str = "UserName";

pub struct IdentityStoreClient {
    inner: AwsJsonClient,
}

impl IdentityStoreClient {
    pub fn new(region: &str, endpoint: Option<&str>, credentials: Credentials) -> Result<Self> {
        Ok(Self {
            inner: AwsJsonClient::new(AwsService::IdentityStore, region, endpoint, credentials)?,
        })
    }
}

#[async_trait]
impl IdentityDirectory for IdentityStoreClient {
    async fn list_users(&self, identity_store_id: &str, user_name: &str) -> Result<Vec<User>> {
        let request = ListUsersRequest {
            identity_store_id,
            filters: vec![Filter {
                attribute_path: USER_NAME_ATTRIBUTE,
                attribute_value: user_name,
            }],
        };
        let response: ListUsersResponse = self.inner.call("ListUsers", &request).await?;
        Ok(response.users)
    }
}
