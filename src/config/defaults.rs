use crate::config::types::*;
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "pgcomment.yaml";

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/postgres".to_string(),
            max_retries: 5,
            retry_delay: Duration::from_millis(200),
            acquire_timeout: Duration::from_secs(5),
            search_path: "public, pg_catalog".to_string(),
        }
    }
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self { normalize: true }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            allow_destructive: true,
        }
    }
}
