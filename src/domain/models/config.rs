use serde::{Deserialize, Serialize};

/// Main configuration structure for the issue relay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Repository whose issues are scanned and whose workflow is dispatched
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// GitHub API connection settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Workflow dispatch target
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Pagination and backoff settings
    #[serde(default)]
    pub iteration: IterationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Repository identity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RepositoryConfig {
    /// Repository owner (user or organisation)
    #[serde(default)]
    pub owner: String,

    /// Repository name
    #[serde(default)]
    pub repo: String,
}

/// GitHub API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GitHubConfig {
    /// Base URL of the REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    "issue-relay".to_string()
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// Workflow dispatch target
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DispatchConfig {
    /// Workflow file name or numeric id
    #[serde(default = "default_workflow")]
    pub workflow: String,

    /// Branch or tag the workflow runs on
    #[serde(default = "default_git_ref")]
    pub git_ref: String,

    /// Fixed event tag sent as the `event_type` input
    #[serde(default = "default_event_type")]
    pub event_type: String,
}

fn default_workflow() -> String {
    "issue-sync.yml".to_string()
}

fn default_git_ref() -> String {
    "main".to_string()
}

fn default_event_type() -> String {
    "issues".to_string()
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            workflow: default_workflow(),
            git_ref: default_git_ref(),
            event_type: default_event_type(),
        }
    }
}

/// Pagination and backoff
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IterationConfig {
    /// Issues requested per page (1-100)
    #[serde(default = "default_page_size")]
    pub page_size: u8,

    /// Delay between page requests in milliseconds
    #[serde(default)]
    pub inter_page_delay_ms: u64,
}

const fn default_page_size() -> u8 {
    30
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            inter_page_delay_ms: 0,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling JSON log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<String>,

    /// File rotation: daily, hourly, or never
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_log_rotation(),
        }
    }
}
