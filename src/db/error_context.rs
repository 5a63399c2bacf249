//! Readable failures for statements rejected by PostgreSQL.
//! A generated CREATE TABLE spans several lines, so errors point at the offending one.

use sqlx::postgres::{PgDatabaseError, PgErrorPosition};

const CONTEXT_LINES: usize = 2;

/// What PostgreSQL said about a failed statement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementError {
    pub message: String,
    /// 1-indexed line within the statement, when PostgreSQL reported a position
    pub line: Option<usize>,
    pub detail: Option<String>,
    pub hint: Option<String>,
    /// SQLSTATE, e.g. "42P01" for undefined_table
    pub code: Option<String>,
}

impl StatementError {
    pub fn from_sqlx_error(error: &sqlx::Error, sql: &str) -> Self {
        let Some(pg_error) = error
            .as_database_error()
            .and_then(|db_error| db_error.try_downcast_ref::<PgDatabaseError>())
        else {
            return Self {
                message: error.to_string(),
                ..Self::default()
            };
        };

        let line = pg_error.position().map(|pos| match pos {
            PgErrorPosition::Original(p) => line_of_position(sql, p),
            PgErrorPosition::Internal { position, .. } => line_of_position(sql, position),
        });

        Self {
            message: pg_error.message().to_string(),
            line,
            detail: pg_error.detail().map(str::to_string),
            hint: pg_error.hint().map(str::to_string),
            code: Some(pg_error.code().to_string()),
        }
    }

    /// Undefined table, column or object; usually a typo in an identifier.
    pub fn is_undefined_object(&self) -> bool {
        matches!(
            self.code.as_deref(),
            Some("42P01") | Some("42703") | Some("42704")
        )
    }

    pub fn format(&self, sql: &str) -> String {
        let mut msg = String::from("SQL error while executing statement");
        if let Some(line) = self.line {
            msg.push_str(&format!(" at line {}", line));
        }
        msg.push_str(&format!(": {}", self.message));

        if let Some(code) = &self.code {
            msg.push_str(&format!(" [{}]", code));
        }
        if let Some(detail) = &self.detail {
            msg.push_str(&format!("\n  Detail: {}", detail));
        }
        if let Some(hint) = &self.hint {
            msg.push_str(&format!("\n  Hint: {}", hint));
        }

        match self.line {
            Some(line) => msg.push_str(&format!("\n{}", excerpt(sql, line))),
            None => msg.push_str(&format!("\n  Statement: {}", sql)),
        }

        msg
    }
}

/// Line number of a 1-indexed character position, clamped to the text.
pub fn line_of_position(sql: &str, position: usize) -> usize {
    sql.chars()
        .take(position.saturating_sub(1))
        .filter(|c| *c == '\n')
        .count()
        + 1
}

/// The lines around `line`, with the offending one marked.
pub fn excerpt(sql: &str, line: usize) -> String {
    let lines: Vec<&str> = sql.lines().collect();
    let target = line.saturating_sub(1);
    let start = target.saturating_sub(CONTEXT_LINES);
    let end = (target + CONTEXT_LINES + 1).min(lines.len());

    lines
        .get(start..end)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(offset, text)| {
            let number = start + offset + 1;
            let marker = if number == line { '>' } else { ' ' };
            format!("  {} {:3} | {}", marker, number, text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
