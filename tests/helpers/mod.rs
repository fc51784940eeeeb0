//! Scripted in-memory stand-ins for the identity store and SSO admin APIs

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sso_grant::aws::{AccessAdmin, IdentityDirectory, Result, User};
use sso_grant::grant::{
    AssignmentCreationStatus, AssignmentRequest, PermissionSet, PermissionSetPage,
};
use sso_grant::{AwsError, GrantConfig, GrantWorkflow};

pub const IDENTITY_STORE_ID: &str = "d-1234567890";
pub const INSTANCE_ARN: &str = "arn:aws:sso:::instance/ssoins-1234567890abcdef";
pub const REQUEST_ID: &str = "b6f3c3e1-0000-4000-8000-000000000001";

pub fn request_for(email: &str, account: &str, permission_set: &str) -> String {
    format!(
        "grant user {} user access to aws account number {} with {} permission set",
        email, account, permission_set
    )
}

pub fn test_config() -> GrantConfig {
    let mut config = GrantConfig::new(IDENTITY_STORE_ID, INSTANCE_ARN);
    config.poll_interval_ms = 0;
    config
}

// =============================================================================
// DIRECTORY
// =============================================================================

#[derive(Default)]
pub struct StubDirectory {
    users: Vec<(String, String)>,
    fail_with: Option<(u16, String, String)>,
    pub calls: AtomicUsize,
}

impl StubDirectory {
    pub fn with_users(users: &[(&str, &str)]) -> Self {
        Self {
            users: users
                .iter()
                .map(|(name, id)| (name.to_string(), id.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn failing(status: u16, code: &str, message: &str) -> Self {
        Self {
            fail_with: Some((status, code.into(), message.into())),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityDirectory for StubDirectory {
    async fn list_users(&self, identity_store_id: &str, user_name: &str) -> Result<Vec<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(identity_store_id, IDENTITY_STORE_ID);
        if let Some((status, code, message)) = &self.fail_with {
            return Err(AwsError::service(*status, code.clone(), message.clone()));
        }
        Ok(self
            .users
            .iter()
            .filter(|(name, _)| name == user_name)
            .map(|(name, id)| User {
                user_id: id.clone(),
                user_name: Some(name.clone()),
            })
            .collect())
    }
}

// =============================================================================
// ACCESS ADMIN
// =============================================================================

type Scripted = std::result::Result<AssignmentCreationStatus, AwsError>;

/// Permission sets split into pages, plus a scripted status sequence
pub struct StubAdmin {
    pages: Vec<Vec<PermissionSet>>,
    listing_error: Option<(u16, String, String)>,
    describe_error: Option<(u16, String, String)>,
    create_result: Mutex<Option<Scripted>>,
    statuses: Mutex<VecDeque<Scripted>>,
    pub list_calls: AtomicUsize,
    pub describe_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub status_calls: AtomicUsize,
    pub submitted: Mutex<Vec<AssignmentRequest>>,
}

impl StubAdmin {
    /// `pages[i]` holds `(name, arn)` pairs returned on page `i`
    pub fn with_pages(pages: &[&[(&str, &str)]]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|page| {
                    page.iter()
                        .map(|(name, arn)| PermissionSet {
                            arn: arn.to_string(),
                            name: name.to_string(),
                        })
                        .collect()
                })
                .collect(),
            listing_error: None,
            describe_error: None,
            create_result: Mutex::new(Some(Ok(AssignmentCreationStatus::in_progress(
                REQUEST_ID,
            )))),
            statuses: Mutex::new(VecDeque::new()),
            list_calls: AtomicUsize::new(0),
            describe_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn single(name: &str, arn: &str) -> Self {
        Self::with_pages(&[&[(name, arn)]])
    }

    pub fn with_statuses(self, statuses: Vec<Scripted>) -> Self {
        *self.statuses.lock().unwrap() = statuses.into();
        self
    }

    /// Every `ListPermissionSets` call fails with this service error
    pub fn with_listing_error(mut self, status: u16, code: &str, message: &str) -> Self {
        self.listing_error = Some((status, code.into(), message.into()));
        self
    }

    /// Every `DescribePermissionSet` call fails with this service error
    pub fn with_describe_error(mut self, status: u16, code: &str, message: &str) -> Self {
        self.describe_error = Some((status, code.into(), message.into()));
        self
    }

    pub fn with_create_result(self, result: Scripted) -> Self {
        *self.create_result.lock().unwrap() = Some(result);
        self
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn find(&self, arn: &str) -> Option<PermissionSet> {
        self.pages.iter().flatten().find(|p| p.arn == arn).cloned()
    }
}

#[async_trait]
impl AccessAdmin for StubAdmin {
    async fn list_permission_sets(
        &self,
        instance_arn: &str,
        next_token: Option<&str>,
    ) -> Result<PermissionSetPage> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(instance_arn, INSTANCE_ARN);
        if let Some((status, code, message)) = &self.listing_error {
            return Err(AwsError::service(*status, code.clone(), message.clone()));
        }

        let index: usize = match next_token {
            None => 0,
            Some(t) => t.strip_prefix("page-").and_then(|n| n.parse().ok()).unwrap(),
        };
        let arns = self
            .pages
            .get(index)
            .map(|page| page.iter().map(|p| p.arn.clone()).collect())
            .unwrap_or_default();
        let next_token = (index + 1 < self.pages.len()).then(|| format!("page-{}", index + 1));
        Ok(PermissionSetPage { arns, next_token })
    }

    async fn describe_permission_set(
        &self,
        _instance_arn: &str,
        permission_set_arn: &str,
    ) -> Result<PermissionSet> {
        self.describe_calls.fetch_add(1, Ordering::SeqCst);
        if let Some((status, code, message)) = &self.describe_error {
            return Err(AwsError::service(*status, code.clone(), message.clone()));
        }
        self.find(permission_set_arn).ok_or_else(|| {
            AwsError::service(400, "ResourceNotFoundException", "no such permission set")
        })
    }

    async fn create_account_assignment(
        &self,
        request: &AssignmentRequest,
    ) -> Result<AssignmentCreationStatus> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.submitted.lock().unwrap().push(request.clone());
        self.create_result
            .lock()
            .unwrap()
            .take()
            .expect("create_account_assignment called more than once")
    }

    async fn describe_account_assignment_creation_status(
        &self,
        _instance_arn: &str,
        request_id: &str,
    ) -> Result<AssignmentCreationStatus> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(request_id, REQUEST_ID);
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(AssignmentCreationStatus::in_progress(REQUEST_ID)))
    }
}

pub fn workflow(
    config: GrantConfig,
    directory: Arc<StubDirectory>,
    admin: Arc<StubAdmin>,
) -> GrantWorkflow {
    GrantWorkflow::new(config, directory, admin)
}
