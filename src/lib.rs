//! Issue Relay - GitHub issue to workflow-dispatch relay
//!
//! Issue Relay walks a repository's issues page by page, drops pull
//! requests, classifies each issue (by product label or assignee, or by a
//! server-side filter) and dispatches a workflow for the ones that qualify.
//! Every run ends with a total / triggered / skipped / failed tally.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and port traits
//! - **Service Layer** (`services`): Classification, dispatch and iteration
//! - **Adapter Layer** (`adapters`): GitHub implementations of the ports
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use issue_relay::{create_github_ports, ConfigLoader, IterateOptions, IterationOrchestrator};
//! use issue_relay::{ProductLabelSync, WorkflowDispatcher};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let ports = create_github_ports(&config)?;
//!     let action = ProductLabelSync::new(WorkflowDispatcher::new(ports.trigger, "issues"));
//!     let counters = IterationOrchestrator::new(ports.issues)
//!         .iterate(&action, &IterateOptions::default())
//!         .await?;
//!     println!("{} issues, {} triggered", counters.total(), counters.triggered());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::plugins::{create_github_ports, github_ports, NativePorts};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    ActionOutcome, Config, InputFields, Issue, IssueState, Label, RunCounters, StateFilter,
    WorkflowInput,
};
pub use domain::ports::{IssueQuery, IssueSource, WorkflowTrigger};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    AssigneeSync, FixedInputDispatch, IssueAction, IterateOptions, IterationOrchestrator,
    ProductLabelSync, WorkflowDispatcher,
};
