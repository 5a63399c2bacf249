use anyhow::{Context, Result, anyhow};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::render::escape_string;

/// Mask password in database URL for display
pub fn mask_url_password(url: &str) -> String {
    let Some((protocol, rest)) = url.split_once("://") else {
        return url.to_string();
    };

    // user:pass@host or user@host
    if let Some((user_info, host_and_path)) = rest.split_once('@')
        && let Some((username, _)) = user_info.split_once(':')
    {
        return format!("{}://{}:***@{}", protocol, username, host_and_path);
    }

    url.to_string()
}

/// Statements run on every new connection before it is handed out.
pub fn session_setup_sql(search_path: &str) -> Vec<String> {
    vec![
        format!(
            "SELECT set_config('search_path', {}, false)",
            escape_string(search_path)
        ),
        // Comment literals only ever double their quotes, never backslash-escape
        "SET standard_conforming_strings = on".to_string(),
    ]
}

/// Connect with retries, for servers that may still be starting up.
///
/// Session settings from [`session_setup_sql`] are applied to every pooled
/// connection, not just the first.
pub async fn connect_with_retry(config: &DatabaseConfig) -> Result<PgPool> {
    let setup = session_setup_sql(&config.search_path);
    let mut last_error = None;

    for attempt in 0..=config.max_retries {
        let setup = setup.clone();
        let result = PgPoolOptions::new()
            .acquire_timeout(config.acquire_timeout)
            .after_connect(move |conn, _meta| {
                let setup = setup.clone();
                Box::pin(async move {
                    for sql in &setup {
                        sqlx::query(sql).execute(&mut *conn).await?;
                    }
                    Ok(())
                })
            })
            .connect(&config.url)
            .await;

        match result {
            Ok(pool) => {
                if attempt > 0 {
                    info!(
                        "Connected to database (after {} retr{})",
                        attempt,
                        if attempt == 1 { "y" } else { "ies" }
                    );
                } else {
                    info!("Connected to database");
                }
                return Ok(pool);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < config.max_retries {
                    if attempt == 0 {
                        info!("Database not ready, retrying...");
                    }
                    tokio::time::sleep(config.retry_delay).await;
                }
            }
        }
    }

    let cause = last_error.map(|e| e.to_string()).unwrap_or_default();
    Err(anyhow!(
        "Failed to connect to database at {} after {} attempts: {}",
        mask_url_password(&config.url),
        config.max_retries + 1,
        cause
    ))
}

/// Report the effective search_path of a pooled connection.
pub async fn current_search_path(pool: &PgPool) -> Result<String> {
    let search_path: (String,) = sqlx::query_as("SHOW search_path")
        .fetch_one(pool)
        .await
        .context("Failed to query search_path")?;

    info!(
        "Database session initialized with search_path: {}",
        search_path.0
    );

    Ok(search_path.0)
}
