use crate::config::{merge::Merge, types::*};
use anyhow::{Result, anyhow};
use std::time::Duration;
use tracing::debug;

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    /// Programmatic overrides, applied over anything loaded from a file
    pub fn with_overrides(mut self, overrides: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(overrides);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            database: self.resolve_database(&defaults.database)?,
            comments: self.resolve_comments(&defaults.comments),
            execution: self.resolve_execution(&defaults.execution),
        })
    }

    fn resolve_database(&self, defaults: &DatabaseConfig) -> Result<DatabaseConfig> {
        let db_input = self.config_input.database.as_ref();

        let url = match db_input.and_then(|d| d.url.as_ref()) {
            Some(url) => url.clone(),
            None => {
                // A missing .env file is fine
                dotenv::dotenv().ok();
                std::env::var("DATABASE_URL").unwrap_or_else(|_| defaults.url.clone())
            }
        };
        if url.trim().is_empty() {
            return Err(anyhow!("database.url must not be empty"));
        }

        let search_path = db_input
            .and_then(|d| d.search_path.as_ref())
            .cloned()
            .unwrap_or_else(|| defaults.search_path.clone());
        if search_path.trim().is_empty() {
            return Err(anyhow!("database.search_path must not be empty"));
        }

        let config = DatabaseConfig {
            url,
            max_retries: db_input
                .and_then(|d| d.max_retries)
                .unwrap_or(defaults.max_retries),
            retry_delay: db_input
                .and_then(|d| d.retry_delay_ms)
                .map(Duration::from_millis)
                .unwrap_or(defaults.retry_delay),
            acquire_timeout: db_input
                .and_then(|d| d.acquire_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.acquire_timeout),
            search_path,
        };
        debug!(
            url = %crate::db::mask_url_password(&config.url),
            max_retries = config.max_retries,
            "resolved database config"
        );
        Ok(config)
    }

    fn resolve_comments(&self, defaults: &CommentsConfig) -> CommentsConfig {
        let comments_input = self.config_input.comments.as_ref();

        CommentsConfig {
            normalize: comments_input
                .and_then(|c| c.normalize)
                .unwrap_or(defaults.normalize),
        }
    }

    fn resolve_execution(&self, defaults: &ExecutionConfig) -> ExecutionConfig {
        let execution_input = self.config_input.execution.as_ref();

        ExecutionConfig {
            allow_destructive: execution_input
                .and_then(|e| e.allow_destructive)
                .unwrap_or(defaults.allow_destructive),
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
