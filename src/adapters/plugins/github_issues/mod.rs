//! GitHub native adapter.
//!
//! Lists repository issues page by page and creates GitHub Actions
//! workflow-dispatch events.

pub mod client;
pub mod issue_source;
pub mod models;
pub mod workflow_trigger;

pub use client::GitHubClient;
pub use issue_source::GitHubIssueSource;
pub use workflow_trigger::GitHubWorkflowTrigger;
