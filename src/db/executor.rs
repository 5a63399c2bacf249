//! Where generated statements go: a live pool, or a recorder for tests and dry runs

use std::collections::VecDeque;

use anyhow::{Result, anyhow};
use sqlx::PgPool;
use tracing::debug;

use super::connection::{connect_with_retry, current_search_path};
use super::error_context::StatementError;
use crate::config::DatabaseConfig;

/// Runs single SQL statements.
#[allow(async_fn_in_trait)]
pub trait Executor {
    /// Execute a statement whose result rows, if any, are discarded.
    async fn execute(&mut self, sql: &str) -> Result<()>;

    /// Run a query selecting one nullable text value; no row reads as `None`.
    async fn fetch_comment(&mut self, sql: &str) -> Result<Option<String>>;
}

#[derive(Debug, Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = connect_with_retry(config).await?;
        current_search_path(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Executor for PgExecutor {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        let result = sqlx::raw_sql(sql)
            .execute(&self.pool)
            .await
            .map_err(|e| statement_error(&e, sql))?;
        debug!(rows_affected = result.rows_affected(), "executed statement");
        Ok(())
    }

    async fn fetch_comment(&mut self, sql: &str) -> Result<Option<String>> {
        let comment = sqlx::query_scalar::<_, Option<String>>(sql)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| statement_error(&e, sql))?;
        Ok(comment.flatten())
    }
}

fn statement_error(e: &sqlx::Error, sql: &str) -> anyhow::Error {
    anyhow!("{}", StatementError::from_sqlx_error(e, sql).format(sql))
}

/// Records every statement instead of running it.
///
/// Queries answer from a queue of canned results, then `None` once it runs dry.
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    sqls: Vec<String>,
    results: VecDeque<Option<String>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results<I, S>(results: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            sqls: Vec::new(),
            results: results.into_iter().map(|r| r.map(Into::into)).collect(),
        }
    }

    pub fn push_result(&mut self, result: Option<impl Into<String>>) {
        self.results.push_back(result.map(Into::into));
    }

    pub fn sqls(&self) -> &[String] {
        &self.sqls
    }

    pub fn last_sql(&self) -> Option<&str> {
        self.sqls.last().map(String::as_str)
    }

    pub fn take_sqls(&mut self) -> Vec<String> {
        std::mem::take(&mut self.sqls)
    }
}

impl Executor for RecordingExecutor {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        self.sqls.push(sql.to_string());
        Ok(())
    }

    async fn fetch_comment(&mut self, sql: &str) -> Result<Option<String>> {
        self.sqls.push(sql.to_string());
        Ok(self.results.pop_front().flatten())
    }
}
