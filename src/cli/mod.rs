//! Command-line interface: argument types, command handlers and output.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands, IterationArgs, LabelArgs};

/// Report `err` and exit with status 1.
///
/// With `json` set the error is printed to stdout as `{"error": ...}` so
/// machine consumers always get a JSON document.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {err:#}", console::style("Error:").red().bold());
    }
    std::process::exit(1)
}
