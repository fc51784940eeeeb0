//! Assignment Orchestrator
//!
//! Submits exactly one `CreateAccountAssignment` and polls its creation status
//! until it leaves IN_PROGRESS or the attempt budget runs out. The submission
//! is never repeated: the service is not assumed idempotent for duplicates.

use std::time::Duration;

use tokio::time::sleep;

use crate::aws::AccessAdmin;
use crate::error::AssignmentError;

use super::types::{AssignmentRequest, AssignmentStatus};

/// Reported when the service marks an assignment FAILED without a reason
pub const DEFAULT_FAILURE_REASON: &str = "Unknown error";

/// Wait/backoff discipline for the status poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Sleep before every status check
    pub interval: Duration,
    /// Status checks before giving up
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_attempts: 150,
        }
    }
}

pub struct AssignmentOrchestrator<'a> {
    admin: &'a dyn AccessAdmin,
    policy: PollPolicy,
}

impl<'a> AssignmentOrchestrator<'a> {
    pub fn new(admin: &'a dyn AccessAdmin, policy: PollPolicy) -> Self {
        Self { admin, policy }
    }

    /// Assign `permission_set_arn` to `user_id` on `account_id` and wait for it
    ///
    /// Any error from the submission or a status query ends the call
    /// immediately; the remote operation, if started, is left to finish on
    /// its own.
    pub async fn grant(
        &self,
        instance_arn: &str,
        account_id: &str,
        permission_set_arn: &str,
        user_id: &str,
    ) -> Result<(), AssignmentError> {
        let request =
            AssignmentRequest::for_user(instance_arn, account_id, permission_set_arn, user_id);

        let created = self
            .admin
            .create_account_assignment(&request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "CreateAccountAssignment failed"))?;
        let request_id = created.request_id;

        tracing::info!(
            request_id = %request_id,
            account_id,
            "Account assignment submitted, polling for completion"
        );

        let mut attempts = 0;
        loop {
            if attempts >= self.policy.max_attempts {
                tracing::warn!(
                    request_id = %request_id,
                    attempts,
                    "Account assignment still in progress, giving up"
                );
                return Err(AssignmentError::Timeout {
                    request_id,
                    attempts,
                });
            }

            sleep(self.policy.interval).await;
            attempts += 1;

            let current = self
                .admin
                .describe_account_assignment_creation_status(instance_arn, &request_id)
                .await
                .inspect_err(|e| tracing::error!(error = %e, attempts, "Status query failed"))?;

            tracing::debug!(
                request_id = %request_id,
                attempts,
                status = ?current.status,
                "Polled assignment status"
            );

            match current.status {
                AssignmentStatus::InProgress => continue,
                AssignmentStatus::Succeeded => {
                    tracing::info!(request_id = %request_id, attempts, "Account assignment succeeded");
                    return Ok(());
                }
                AssignmentStatus::Failed => {
                    let reason = current
                        .failure_reason
                        .unwrap_or_else(|| DEFAULT_FAILURE_REASON.to_string());
                    tracing::warn!(request_id = %request_id, reason = %reason, "Account assignment failed");
                    return Err(AssignmentError::Failed { reason });
                }
            }
        }
    }
}
