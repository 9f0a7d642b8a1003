//! Output formatting utilities for the CLI.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use console::style;
use serde::Serialize;

use crate::domain::models::RunCounters;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Final tally of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummaryOutput {
    pub action: String,
    pub repository: String,
    pub total: u64,
    pub triggered: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl RunSummaryOutput {
    pub fn new(
        action: impl Into<String>,
        repository: impl Into<String>,
        counters: &RunCounters,
    ) -> Self {
        Self {
            action: action.into(),
            repository: repository.into(),
            total: counters.total(),
            triggered: counters.triggered(),
            skipped: counters.skipped(),
            failed: counters.failed(),
        }
    }
}

impl CommandOutput for RunSummaryOutput {
    fn to_human(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let failed = if self.failed > 0 {
            style(self.failed).red().bold().to_string()
        } else {
            self.failed.to_string()
        };
        for (name, value) in [
            ("Total", self.total.to_string()),
            ("Triggered", style(self.triggered).green().to_string()),
            ("Skipped", self.skipped.to_string()),
            ("Failed", failed),
        ] {
            table.add_row(vec![
                Cell::new(name),
                Cell::new(value).set_alignment(CellAlignment::Right),
            ]);
        }

        format!(
            "{} {} on {}\n{table}",
            style("Issue sync summary:").bold(),
            self.action,
            self.repository
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
