//! Catalog queries that read a comment back

use crate::identifier::{Identifier, PAIR_SEPARATOR};
use crate::render::escape_string;

/// Which catalog lookup a `comment_for` reference resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentQuery {
    /// A relation (table, view, index, sequence, ...) looked up through `regclass`.
    ///
    /// `name` is regclass input: PostgreSQL folds it to lower case and splits it
    /// on dots unless it is double-quoted.
    Relation { name: String },
    /// A column, looked up by table and attribute name
    Column { table: String, column: String },
    /// A column of a relation resolved through `regclass`, as for `Relation`
    RelationColumn { relation: String, column: String },
}

impl CommentQuery {
    /// Parse a reference; `table__column` addresses a column, anything else a relation.
    pub fn parse(object: &str) -> Self {
        match object.split_once(PAIR_SEPARATOR) {
            Some((table, column)) => CommentQuery::Column {
                table: table.to_string(),
                column: column.to_string(),
            },
            None => CommentQuery::Relation {
                name: object.to_string(),
            },
        }
    }

    /// Queries for a typed table name, resolved exactly as DDL on it would be.
    pub fn for_table(table: &Identifier) -> Self {
        CommentQuery::Relation {
            name: table.to_sql(),
        }
    }

    pub fn for_table_column(table: &Identifier, column: &str) -> Self {
        CommentQuery::RelationColumn {
            relation: table.to_sql(),
            column: column.to_string(),
        }
    }

    pub fn to_sql(&self) -> String {
        match self {
            CommentQuery::Relation { name } => format!(
                "SELECT obj_description(CAST({} AS regclass), 'pg_class') AS \"comment\"",
                escape_string(name)
            ),
            CommentQuery::Column { table, column } => format!(
                "SELECT col_description(c.oid, a.attnum) AS \"comment\" \
                 FROM pg_class AS c \
                 JOIN pg_attribute AS a ON (c.oid = a.attrelid) \
                 WHERE c.relname = {} AND a.attname = {}",
                escape_string(table),
                escape_string(column)
            ),
            CommentQuery::RelationColumn { relation, column } => format!(
                "SELECT col_description(a.attrelid, a.attnum) AS \"comment\" \
                 FROM pg_attribute AS a \
                 WHERE a.attrelid = CAST({} AS regclass) AND a.attname = {}",
                escape_string(relation),
                escape_string(column)
            ),
        }
    }
}
