//! Shared fixtures for the integration tests.

use std::sync::Arc;

use issue_relay::adapters::plugins::github_issues::GitHubClient;
use issue_relay::{github_ports, Config, NativePorts};
use mockito::Server;

pub const OWNER: &str = "acme";
pub const REPO: &str = "tracker";

/// Configuration pointing at a mock GitHub server.
pub fn config_for(server: &Server) -> Config {
    let mut config = Config::default();
    config.repository.owner = OWNER.to_string();
    config.repository.repo = REPO.to_string();
    config.github.api_base_url = server.url();
    config
}

/// Ports wired to a mock GitHub server.
pub fn ports_for(config: &Config) -> NativePorts {
    let client = GitHubClient::new("ghp_integration".to_string(), &config.github)
        .expect("client should build");
    github_ports(Arc::new(client), config)
}

pub fn issues_path() -> String {
    format!("/repos/{OWNER}/{REPO}/issues")
}

pub fn dispatch_path(config: &Config) -> String {
    format!(
        "/repos/{OWNER}/{REPO}/actions/workflows/{}/dispatches",
        config.dispatch.workflow
    )
}

/// JSON for a plain issue with optional labels `(name, color)`.
pub fn issue_json(number: u64, labels: &[(&str, &str)]) -> serde_json::Value {
    serde_json::json!({
        "number": number,
        "state": "open",
        "html_url": format!("https://github.com/{OWNER}/{REPO}/issues/{number}"),
        "labels": labels
            .iter()
            .map(|(name, color)| serde_json::json!({ "name": name, "color": color }))
            .collect::<Vec<_>>(),
        "assignees": [],
    })
}

pub fn pull_request_json(number: u64) -> serde_json::Value {
    serde_json::json!({
        "number": number,
        "state": "open",
        "html_url": format!("https://github.com/{OWNER}/{REPO}/pull/{number}"),
        "pull_request": {
            "url": format!("https://api.github.com/repos/{OWNER}/{REPO}/pulls/{number}"),
        },
    })
}
