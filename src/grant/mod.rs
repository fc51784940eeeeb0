//! Access-grant pipeline
//!
//! ```text
//! raw request
//!     │ request::parse
//!     ▼
//! GrantRequest ──► IdentityResolver ──► PermissionSetResolver
//!                                              │
//!                                              ▼
//!                                   AssignmentOrchestrator (submit once, poll)
//!                                              │
//!                                              ▼
//!                                      GrantOutcome (Display)
//! ```

pub mod assignment;
pub mod identity;
pub mod outcome;
pub mod permission_set;
pub mod request;
pub mod types;
pub mod workflow;

pub use assignment::{AssignmentOrchestrator, PollPolicy, DEFAULT_FAILURE_REASON};
pub use identity::IdentityResolver;
pub use outcome::GrantOutcome;
pub use permission_set::PermissionSetResolver;
pub use request::parse;
pub use types::*;
pub use workflow::GrantWorkflow;
