//! Sync commands: pick an action and listing preset, then run one full
//! iteration over the repository's issues.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::adapters::plugins::{create_github_ports, NativePorts};
use crate::cli::output::{output, RunSummaryOutput};
use crate::cli::types::{Commands, IterationArgs};
use crate::domain::models::{
    Config, IssueState, IterationConfig, LabelAction, StateFilter, WorkflowInput,
};
use crate::services::{
    AssigneeSync, FixedInputDispatch, IssueAction, IterateOptions, IterationOrchestrator,
    ProductLabelSync, WorkflowDispatcher,
};

/// Listing filters a command applies unless the user overrides them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ListingPreset {
    state: StateFilter,
    milestone: Option<String>,
    labels: Vec<String>,
}

pub async fn execute(command: Commands, config: &Config, json: bool) -> Result<()> {
    let ports = create_github_ports(config).context("Failed to set up GitHub access")?;
    let summary = run(&command, config, ports).await?;
    output(&summary, json);
    Ok(())
}

/// Run `command` against already-wired ports and return the summary.
///
/// # Errors
///
/// Returns `Err` when a page of issues cannot be fetched. Individual
/// dispatch failures are counted in the summary instead.
pub async fn run(
    command: &Commands,
    config: &Config,
    ports: NativePorts,
) -> Result<RunSummaryOutput> {
    let dispatcher = WorkflowDispatcher::new(ports.trigger, config.dispatch.event_type.clone());
    let (action, preset) = plan(command, dispatcher);
    let options = resolve_options(preset, command.iteration(), &config.iteration);
    let repository = format!("{}/{}", config.repository.owner, config.repository.repo);

    let counters = IterationOrchestrator::new(Arc::clone(&ports.issues))
        .iterate(action.as_ref(), &options)
        .await
        .with_context(|| format!("Issue iteration over {repository} aborted"))?;

    Ok(RunSummaryOutput::new(action.name(), repository, &counters))
}

fn plan(
    command: &Commands,
    dispatcher: WorkflowDispatcher,
) -> (Box<dyn IssueAction>, ListingPreset) {
    match command {
        Commands::ProductLabels(_) => (
            Box::new(ProductLabelSync::new(dispatcher)),
            ListingPreset::default(),
        ),
        Commands::Assignees(_) => (
            Box::new(AssigneeSync::new(dispatcher)),
            ListingPreset::default(),
        ),
        Commands::Milestones(_) => (
            Box::new(FixedInputDispatch::new(
                "milestone-sync",
                dispatcher,
                WorkflowInput::milestone_updated(),
            )),
            ListingPreset {
                milestone: Some("*".to_string()),
                ..ListingPreset::default()
            },
        ),
        Commands::Closed(_) => (
            Box::new(FixedInputDispatch::new(
                "closed-sync",
                dispatcher,
                WorkflowInput::state_updated(IssueState::Closed),
            )),
            ListingPreset {
                state: StateFilter::Closed,
                ..ListingPreset::default()
            },
        ),
        Commands::Label(args) => (
            Box::new(FixedInputDispatch::new(
                "label-sync",
                dispatcher,
                WorkflowInput::label(args.name.clone(), args.color.clone(), LabelAction::Added),
            )),
            ListingPreset {
                labels: vec![args.name.clone()],
                ..ListingPreset::default()
            },
        ),
    }
}

/// Flags win over the command preset; paging falls back to configuration.
fn resolve_options(
    preset: ListingPreset,
    args: &IterationArgs,
    config: &IterationConfig,
) -> IterateOptions {
    IterateOptions {
        state: args.state.unwrap_or(preset.state),
        assignee: args.assignee.clone(),
        milestone: args.milestone.clone().or(preset.milestone),
        labels: if args.labels.is_empty() {
            preset.labels
        } else {
            args.labels.clone()
        },
        page_size: args.page_size.unwrap_or(config.page_size),
        inter_page_delay: Duration::from_millis(
            args.delay_ms.unwrap_or(config.inter_page_delay_ms),
        ),
        stop_after_first_page: args.first_page_only,
    }
}
