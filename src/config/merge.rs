use crate::config::types::*;

/// Trait for merging optional configuration values; the right-hand side wins
pub trait Merge<T> {
    fn merge(self, other: T) -> T;
}

impl<T> Merge<Option<T>> for Option<T> {
    fn merge(self, other: Option<T>) -> Option<T> {
        other.or(self)
    }
}

/// Merge two optional sections field by field rather than replacing wholesale
fn merge_sections<T>(a: Option<T>, b: Option<T>, merge: impl FnOnce(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(merge(a, b)),
        (a, b) => b.or(a),
    }
}

impl Merge<ConfigInput> for ConfigInput {
    fn merge(self, other: ConfigInput) -> ConfigInput {
        ConfigInput {
            database: merge_sections(self.database, other.database, DatabaseInput::merge_with),
            comments: merge_sections(self.comments, other.comments, CommentsInput::merge_with),
            execution: merge_sections(self.execution, other.execution, ExecutionInput::merge_with),
        }
    }
}

impl DatabaseInput {
    pub fn merge_with(self, other: DatabaseInput) -> DatabaseInput {
        DatabaseInput {
            url: self.url.merge(other.url),
            max_retries: self.max_retries.merge(other.max_retries),
            retry_delay_ms: self.retry_delay_ms.merge(other.retry_delay_ms),
            acquire_timeout_secs: self.acquire_timeout_secs.merge(other.acquire_timeout_secs),
            search_path: self.search_path.merge(other.search_path),
        }
    }
}

impl CommentsInput {
    pub fn merge_with(self, other: CommentsInput) -> CommentsInput {
        CommentsInput {
            normalize: self.normalize.merge(other.normalize),
        }
    }
}

impl ExecutionInput {
    pub fn merge_with(self, other: ExecutionInput) -> ExecutionInput {
        ExecutionInput {
            allow_destructive: self.allow_destructive.merge(other.allow_destructive),
        }
    }
}
