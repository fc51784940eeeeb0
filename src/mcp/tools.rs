//! MCP Tool Definitions
//!
//! The server exposes a closed set of tools; today that is only `grant_access`.

use super::protocol::Tool;
use serde_json::json;

pub const GRANT_ACCESS: &str = "grant_access";

/// Get all available MCP tools
pub fn get_tools() -> Vec<Tool> {
    vec![Tool {
        name: GRANT_ACCESS.into(),
        description: "Grant a user access to an AWS account via IAM Identity Center by assigning a permission set. \
            Example request: \"grant user user@example.com user access to aws account number 123456789012 with adminaccess permission set\""
            .into(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "request": {
                    "type": "string",
                    "description": "grant user [email] user access to aws account number [account] with [permission_set] permission set"
                }
            },
            "required": ["request"]
        }),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_grant_tool() {
        let tools = get_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "grant_access");
        assert_eq!(tools[0].input_schema["required"][0], "request");
    }
}
