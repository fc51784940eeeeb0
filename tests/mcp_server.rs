//! JSON-RPC handling of the grant MCP server

mod helpers;

use std::sync::Arc;

use serde_json::{json, Value};

use helpers::*;
use sso_grant::grant::AssignmentCreationStatus;
use sso_grant::mcp::protocol::{INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR};
use sso_grant::mcp::McpServer;

const ADMIN_ARN: &str = "arn:aws:sso:::permissionSet/ssoins-1234567890abcdef/ps-admin";

fn server_with(statuses: Vec<AssignmentCreationStatus>) -> McpServer {
    let directory = Arc::new(StubDirectory::with_users(&[("jane@example.com", "user-jane")]));
    let admin = Arc::new(
        StubAdmin::single("AdministratorAccess", ADMIN_ARN)
            .with_statuses(statuses.into_iter().map(Ok).collect()),
    );
    McpServer::new(Arc::new(workflow(test_config(), directory, admin)))
}

fn server() -> McpServer {
    server_with(vec![AssignmentCreationStatus::succeeded(REQUEST_ID)])
}

async fn call(server: &McpServer, msg: Value) -> Value {
    let response = server
        .handle(&msg.to_string())
        .await
        .expect("request should get a response");
    serde_json::to_value(response).unwrap()
}

fn tool_call(id: i64, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": "grant_access", "arguments": arguments}
    })
}

#[tokio::test]
async fn test_initialize() {
    let resp = call(
        &server(),
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
    )
    .await;

    assert_eq!(resp["id"], 1);
    assert_eq!(resp["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(resp["result"]["serverInfo"]["name"], "sso-grant");
    assert!(resp["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_tools_list_exposes_grant_access() {
    let resp = call(&server(), json!({"jsonrpc": "2.0", "id": "a", "method": "tools/list"})).await;

    let tools = resp["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "grant_access");
    assert_eq!(tools[0]["inputSchema"]["required"], json!(["request"]));
}

#[tokio::test]
async fn test_grant_access_success() {
    let resp = call(
        &server(),
        tool_call(
            7,
            json!({"request": request_for("jane@example.com", "123456789012", "adminaccess")}),
        ),
    )
    .await;

    assert_eq!(resp["id"], 7);
    let result = &resp["result"];
    assert_eq!(
        result["content"][0]["text"],
        "Successfully granted jane@example.com access to account 123456789012 with permission set 'adminaccess'."
    );
    assert!(result.get("isError").is_none());
}

#[tokio::test]
async fn test_grant_access_failure_is_flagged() {
    let server = server_with(vec![AssignmentCreationStatus::failed(
        REQUEST_ID,
        Some("QuotaExceeded"),
    )]);
    let resp = call(
        &server,
        tool_call(
            8,
            json!({"request": request_for("jane@example.com", "123456789012", "AdministratorAccess")}),
        ),
    )
    .await;

    assert_eq!(
        resp["result"]["content"][0]["text"],
        "Failed to assign permission: QuotaExceeded"
    );
    assert_eq!(resp["result"]["isError"], true);
}

#[tokio::test]
async fn test_bad_format_via_tool() {
    let resp = call(&server(), tool_call(9, json!({"request": "give me admin"}))).await;

    let text = resp["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Invalid request format."));
    assert_eq!(resp["result"]["isError"], true);
}

#[tokio::test]
async fn test_missing_request_argument() {
    let resp = call(&server(), tool_call(10, json!({}))).await;

    assert_eq!(resp["result"]["content"][0]["text"], "request required");
    assert_eq!(resp["result"]["isError"], true);
}

#[tokio::test]
async fn test_unknown_tool() {
    let resp = call(
        &server(),
        json!({
            "jsonrpc": "2.0",
            "id": 11,
            "method": "tools/call",
            "params": {"name": "revoke_access", "arguments": {}}
        }),
    )
    .await;

    assert_eq!(resp["result"]["content"][0]["text"], "Unknown tool: revoke_access");
}

#[tokio::test]
async fn test_tools_call_without_name() {
    let resp = call(
        &server(),
        json!({"jsonrpc": "2.0", "id": 12, "method": "tools/call", "params": {}}),
    )
    .await;

    assert_eq!(resp["error"]["code"], INVALID_PARAMS);
}

#[tokio::test]
async fn test_unknown_method() {
    let resp = call(
        &server(),
        json!({"jsonrpc": "2.0", "id": 13, "method": "resources/list"}),
    )
    .await;

    assert_eq!(resp["id"], 13);
    assert_eq!(resp["error"]["code"], METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_parse_error() {
    let response = server().handle("{not json").await.unwrap();
    let resp = serde_json::to_value(response).unwrap();

    assert_eq!(resp["error"]["code"], PARSE_ERROR);
    assert_eq!(resp["id"], Value::Null);
}

#[tokio::test]
async fn test_notification_gets_no_response() {
    let msg = json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string();
    assert!(server().handle(&msg).await.is_none());
}

#[tokio::test]
async fn test_serve_line_delimited() {
    let input = format!(
        "{}\n\n{}\n{}\n",
        json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
    );
    let mut output = Vec::new();

    server()
        .serve(input.as_bytes(), &mut output)
        .await
        .unwrap();

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[0]["result"], json!({}));
    assert_eq!(lines[1]["id"], 2);
}
