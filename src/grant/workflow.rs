//! Grant workflow
//!
//! Parser -> Identity Resolver -> Permission Set Resolver
//! -> Assignment Orchestrator -> Result Reporter, short-circuiting at the
//! first stage that cannot continue.

use std::sync::Arc;

use crate::aws::{AccessAdmin, Credentials, IdentityDirectory, IdentityStoreClient, SsoAdminClient};
use crate::config::GrantConfig;
use crate::error::AwsError;

use super::assignment::{AssignmentOrchestrator, PollPolicy};
use super::identity::IdentityResolver;
use super::outcome::GrantOutcome;
use super::permission_set::PermissionSetResolver;
use super::request;

/// The access-grant pipeline bound to one deployment's configuration
pub struct GrantWorkflow {
    config: GrantConfig,
    directory: Arc<dyn IdentityDirectory>,
    admin: Arc<dyn AccessAdmin>,
}

impl GrantWorkflow {
    pub fn new(
        config: GrantConfig,
        directory: Arc<dyn IdentityDirectory>,
        admin: Arc<dyn AccessAdmin>,
    ) -> Self {
        Self {
            config,
            directory,
            admin,
        }
    }

    /// Build AWS clients for `config`, with credentials from the environment
    pub fn from_config(config: GrantConfig) -> Result<Self, AwsError> {
        let credentials = Credentials::from_env()?;
        let directory = IdentityStoreClient::new(
            &config.region,
            config.identity_store_endpoint.as_deref(),
            credentials.clone(),
        )?;
        let admin = SsoAdminClient::new(
            &config.region,
            config.sso_admin_endpoint.as_deref(),
            credentials,
        )?;
        Ok(Self::new(config, Arc::new(directory), Arc::new(admin)))
    }

    pub fn config(&self) -> &GrantConfig {
        &self.config
    }

    /// Run one request through the pipeline and report it as text
    pub async fn grant_access(&self, raw: &str) -> String {
        self.run(raw).await.to_string()
    }

    /// Run one request through the pipeline
    pub async fn run(&self, raw: &str) -> GrantOutcome {
        let req = match request::parse(raw) {
            Ok(req) => req,
            Err(e) => {
                tracing::info!("Rejected request that does not match the grant grammar");
                return GrantOutcome::InvalidFormat(e);
            }
        };

        tracing::info!(
            email = %req.email,
            account_id = %req.account_id,
            permission_set = %req.permission_set_name,
            "Parsed grant request"
        );

        let identity = match IdentityResolver::new(self.directory.as_ref())
            .resolve_user(&self.config.identity_store_id, &req.email)
            .await
        {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                tracing::info!(email = %req.email, "User not found in identity store");
                return GrantOutcome::UserNotFound { email: req.email };
            }
            Err(error) => {
                tracing::error!(email = %req.email, error = %error, "Identity store lookup failed");
                return GrantOutcome::UserLookupFailed {
                    email: req.email,
                    error,
                };
            }
        };

        let resolver = PermissionSetResolver::new(
            self.admin.as_ref(),
            &self.config.permission_set_aliases,
            self.config.max_permission_set_pages,
        );
        let permission_set = match resolver
            .resolve_permission_set(&self.config.instance_arn, &req.permission_set_name)
            .await
        {
            Ok(Some(set)) => set,
            Ok(None) => {
                tracing::info!(permission_set = %req.permission_set_name, "Permission set not found");
                return GrantOutcome::PermissionSetNotFound {
                    name: req.permission_set_name,
                };
            }
            Err(error) => {
                tracing::error!(error = %error, "Permission set lookup failed");
                return GrantOutcome::PermissionSetLookupFailed(error);
            }
        };

        let policy = PollPolicy {
            interval: self.config.poll_interval(),
            max_attempts: self.config.max_poll_attempts,
        };
        let orchestrator = AssignmentOrchestrator::new(self.admin.as_ref(), policy);

        match orchestrator
            .grant(
                &self.config.instance_arn,
                &req.account_id,
                &permission_set.arn,
                &identity.user_id,
            )
            .await
        {
            Ok(()) => GrantOutcome::Granted {
                email: req.email,
                account_id: req.account_id,
                permission_set_name: req.permission_set_name,
            },
            Err(e) => GrantOutcome::AssignmentFailed(e),
        }
    }
}
