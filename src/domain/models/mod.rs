//! Domain models.

pub mod config;
pub mod issue;
pub mod outcome;
pub mod workflow_input;

pub use config::{
    Config, DispatchConfig, GitHubConfig, IterationConfig, LoggingConfig, RepositoryConfig,
};
pub use issue::{Issue, IssueState, Label, StateFilter};
pub use outcome::{ActionOutcome, RunCounters};
pub use workflow_input::{
    merge_inputs, InputFields, LabelAction, WorkflowInput, EVENT_TYPE_KEY, ISSUE_NUMBER_KEY,
};
