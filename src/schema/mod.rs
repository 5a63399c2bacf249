//! Schema-definition operations that carry comments alongside their DDL

pub mod alter;
pub mod comments;
pub mod database;
pub mod defs;
pub mod naming;
pub mod table;

pub use alter::AlterTableBuilder;
pub use comments::CommentQueue;
pub use database::{Database, DatabaseOptions, TableRef, ViewOptions};
pub use defs::{Column, ConstraintDef, ForeignKeyDef, IndexDef, PrimaryKeyDef, UniqueDef};
pub use table::TableBuilder;

use crate::render::{CommentStatement, RenderedSql};

/// Everything a table block produces, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablePlan {
    /// Structural statements, run first
    pub ddl: Vec<RenderedSql>,
    /// Comments on the objects `ddl` creates, run once they exist
    pub comments: Vec<CommentStatement>,
}

impl TablePlan {
    pub fn is_destructive(&self) -> bool {
        self.ddl.iter().any(RenderedSql::is_destructive)
    }
}
