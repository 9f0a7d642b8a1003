//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::models::StateFilter;

#[derive(Parser, Debug)]
#[command(name = "issue-relay")]
#[command(about = "Relay GitHub issue state to a workflow-dispatch endpoint", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .issue-relay/
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Dispatch a label event for every open issue carrying a product label
    ProductLabels(IterationArgs),

    /// Dispatch an assignee update for every assigned open issue
    Assignees(IterationArgs),

    /// Dispatch a milestone update for every issue with a milestone
    Milestones(IterationArgs),

    /// Dispatch a state update for every closed issue
    Closed(IterationArgs),

    /// Dispatch a label event for every issue carrying the named label
    Label(LabelArgs),
}

impl Commands {
    /// Iteration flags common to every command.
    pub const fn iteration(&self) -> &IterationArgs {
        match self {
            Self::ProductLabels(args)
            | Self::Assignees(args)
            | Self::Milestones(args)
            | Self::Closed(args) => args,
            Self::Label(args) => &args.iteration,
        }
    }
}

/// Overrides for the issue listing. Unset flags fall back to the command
/// preset, then to configuration.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct IterationArgs {
    /// Issue state to list (open, closed, all)
    #[arg(long)]
    pub state: Option<StateFilter>,

    /// Only issues assigned to this login ("none" and "*" are accepted)
    #[arg(long)]
    pub assignee: Option<String>,

    /// Only issues in this milestone number ("none" and "*" are accepted)
    #[arg(long)]
    pub milestone: Option<String>,

    /// Only issues carrying all of these labels (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub labels: Vec<String>,

    /// Issues requested per page (1-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub page_size: Option<u8>,

    /// Pause between pages in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Process the first page only
    #[arg(long)]
    pub first_page_only: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LabelArgs {
    /// Label to forward
    #[arg(short, long)]
    pub name: String,

    /// Label colour to send along with the name
    #[arg(long)]
    pub color: Option<String>,

    #[command(flatten)]
    pub iteration: IterationArgs,
}
