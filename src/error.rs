//! Error kinds raised while building comment statements

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommentError {
    /// The object type tag does not canonicalize to a known PostgreSQL object kind
    #[error("Unrecognised object type {0:?}")]
    UnrecognizedType(String),

    /// A contained or prefixed statement was rendered before its table was bound
    #[error("Cannot generate SQL for {object_type} {object_name} without a table name")]
    MissingTableName {
        object_type: String,
        object_name: String,
    },

    #[error("Setting comments on {0} is not supported")]
    UnsupportedCommentTarget(String),

    #[error("Invalid identifier for {object_type}: {reason}")]
    InvalidIdentifier { object_type: String, reason: String },
}

pub type CommentResult<T> = std::result::Result<T, CommentError>;
