//! PostgreSQL's default names for objects created without an explicit name
//!
//! Each convention is `<table><suffix>`. The suffix is known when the object is
//! declared; the table may not be, which is why comments on these objects are
//! queued as prefixed statements.

use crate::error::{CommentError, CommentResult};
use crate::identifier::Identifier;

pub const PRIMARY_KEY_SUFFIX: &str = "_pkey";

/// `_pkey`
pub fn primary_key_suffix() -> String {
    PRIMARY_KEY_SUFFIX.to_string()
}

/// `_<first column>_fkey`
pub fn foreign_key_suffix(columns: &[String]) -> CommentResult<String> {
    match columns.first() {
        Some(first) => Ok(format!("_{}_fkey", first)),
        None => Err(no_columns("FOREIGN KEY")),
    }
}

/// `_<col1>_<col2>_..._index`
pub fn index_suffix(columns: &[String]) -> String {
    format!("_{}_index", columns.join("_"))
}

/// `_<col1>_<col2>_..._key`
pub fn unique_suffix(columns: &[String]) -> String {
    format!("_{}_key", columns.join("_"))
}

/// Keys, indexes and unique constraints must span at least one column.
pub fn require_columns(kind: &str, columns: &[String]) -> CommentResult<()> {
    if columns.is_empty() {
        return Err(no_columns(kind));
    }
    Ok(())
}

fn no_columns(kind: &str) -> CommentError {
    CommentError::InvalidIdentifier {
        object_type: kind.to_string(),
        reason: "at least one column is required".to_string(),
    }
}

/// The full default name for `table` with `suffix` appended
pub fn default_name(table: &Identifier, suffix: &str) -> String {
    format!("{}{}", table.as_str(), suffix)
}
