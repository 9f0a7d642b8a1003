//! Port traits.
//!
//! The services reach the issue tracker and the automation endpoint only
//! through these traits.

pub mod issue_source;
pub mod workflow_trigger;

pub use issue_source::{IssueQuery, IssueSource, DEFAULT_PAGE_SIZE};
pub use workflow_trigger::WorkflowTrigger;
