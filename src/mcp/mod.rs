//! MCP (Model Context Protocol) Server Module
//!
//! Exposes the grant pipeline as an MCP server.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        MCP Client                            │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ MCP Protocol (JSON-RPC over stdio)
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      MCP Server (Rust)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Tools:                                                      │
//! │  └── grant_access  - Assign a permission set to a user      │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │          GrantWorkflow -> Identity Store + SSO Admin         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! SSO_GRANT_IDENTITY_STORE_ID=d-1234567890 \
//! SSO_GRANT_INSTANCE_ARN=arn:aws:sso:::instance/ssoins-1234567890abcdef \
//! ./target/debug/grant_mcp
//! ```

pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use handlers::ToolHandlers;
pub use server::McpServer;
