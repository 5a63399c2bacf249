use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigInput {
    pub database: Option<DatabaseInput>,
    pub comments: Option<CommentsInput>,
    pub execution: Option<ExecutionInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub comments: CommentsConfig,
    pub execution: ExecutionConfig,
}

// Database connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseInput {
    pub url: Option<String>,
    pub max_retries: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub acquire_timeout_secs: Option<u64>,
    pub search_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub acquire_timeout: Duration,
    /// Applied to every pooled connection as it is opened
    pub search_path: String,
}

// Comment handling
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CommentsInput {
    pub normalize: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentsConfig {
    /// Strip incidental indentation before rendering
    pub normalize: bool,
}

// Statement execution
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutionInput {
    pub allow_destructive: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Whether drops and comment removal may run
    pub allow_destructive: bool,
}
