pub mod comment;
pub mod retrieval;
pub mod sql;

pub use comment::{CommentSql, CommentStatement, PendingComment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Safety {
    Safe,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSql {
    pub safety: Safety,
    pub sql: String,
}

impl RenderedSql {
    pub fn new(sql: String) -> Self {
        Self {
            sql,
            safety: Safety::Safe,
        }
    }

    pub fn destructive(sql: String) -> Self {
        Self {
            sql,
            safety: Safety::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.safety == Safety::Destructive
    }
}

pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

pub fn escape_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Generic helper for rendering comment SQL
///
/// `identifier` is the already-rendered object reference. A `None` comment
/// clears the comment and is treated as destructive.
pub fn render_comment_sql(
    object_type: &str,
    identifier: &str,
    comment: Option<&str>,
) -> RenderedSql {
    match comment {
        Some(comment_text) => RenderedSql::new(format!(
            "COMMENT ON {} {} IS {}",
            object_type,
            identifier,
            escape_string(comment_text)
        )),
        None => RenderedSql::destructive(format!(
            "COMMENT ON {} {} IS NULL",
            object_type, identifier
        )),
    }
}
