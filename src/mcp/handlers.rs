//! MCP Tool Handlers
//!
//! Routes tool calls to the grant workflow.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::grant::GrantWorkflow;

use super::protocol::ToolCallResult;
use super::tools::GRANT_ACCESS;

/// Tool handlers backed by one grant workflow
pub struct ToolHandlers {
    workflow: Arc<GrantWorkflow>,
}

impl ToolHandlers {
    pub fn new(workflow: Arc<GrantWorkflow>) -> Self {
        Self { workflow }
    }

    /// Handle a tool call by name
    pub async fn handle(&self, name: &str, args: Value) -> ToolCallResult {
        match self.dispatch(name, args).await {
            Ok(result) => result,
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    async fn dispatch(&self, name: &str, args: Value) -> Result<ToolCallResult> {
        match name {
            GRANT_ACCESS => self.grant_access(args).await,
            _ => Err(anyhow!("Unknown tool: {}", name)),
        }
    }

    async fn grant_access(&self, args: Value) -> Result<ToolCallResult> {
        let request = args["request"]
            .as_str()
            .ok_or_else(|| anyhow!("request required"))?;

        let outcome = self.workflow.run(request).await;
        Ok(ToolCallResult::text(outcome.to_string(), !outcome.is_success()))
    }
}
