//! The comment accumulator threaded through a table definition block
//!
//! Comments are queued in declaration order while the block runs and bound to
//! the table only after the block completes, since the objects they describe
//! must exist before they can be commented on.

use crate::error::{CommentError, CommentResult};
use crate::identifier::Identifier;
use crate::object_type::ObjectType;
use crate::render::{CommentSql, CommentStatement, PendingComment};
use crate::schema::defs::{Column, ConstraintDef, ForeignKeyDef, IndexDef, PrimaryKeyDef, UniqueDef};
use crate::schema::naming;

#[derive(Debug, Clone, Default)]
pub struct CommentQueue {
    queued: Vec<CommentSql>,
}

impl CommentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sql: impl Into<CommentSql>) {
        self.queued.push(sql.into());
    }

    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommentSql> {
        self.queued.iter()
    }

    /// Column comments also cover single-column primary and foreign keys.
    pub fn column(&mut self, column: &Column) {
        if let Some(comment) = &column.comment {
            self.push(PendingComment::contained(
                ObjectType::Column,
                column.name.clone(),
                comment.clone(),
            ));
        }
    }

    pub fn composite_primary_key(&mut self, key: &PrimaryKeyDef) -> CommentResult<()> {
        naming::require_columns("PRIMARY KEY", &key.columns)?;
        let Some(comment) = &key.comment else {
            return Ok(());
        };
        match &key.name {
            Some(name) => self.named_index(name, comment),
            None => {
                self.push(PendingComment::prefixed(
                    ObjectType::Index,
                    naming::primary_key_suffix(),
                    comment.clone(),
                ));
                Ok(())
            }
        }
    }

    pub fn composite_foreign_key(&mut self, key: &ForeignKeyDef) -> CommentResult<()> {
        let suffix = naming::foreign_key_suffix(&key.columns)?;
        let Some(comment) = &key.comment else {
            return Ok(());
        };
        match &key.name {
            Some(name) => self.push(PendingComment::contained(
                ObjectType::Constraint,
                Identifier::name(name),
                comment.clone(),
            )),
            None => self.push(PendingComment::prefixed(
                ObjectType::Constraint,
                suffix,
                comment.clone(),
            )),
        }
        Ok(())
    }

    pub fn index(&mut self, index: &IndexDef) -> CommentResult<()> {
        naming::require_columns("INDEX", &index.columns)?;
        let Some(comment) = &index.comment else {
            return Ok(());
        };
        match &index.name {
            Some(name) => self.named_index(name, comment),
            None => {
                self.push(PendingComment::prefixed(
                    ObjectType::Index,
                    naming::index_suffix(&index.columns),
                    comment.clone(),
                ));
                Ok(())
            }
        }
    }

    /// A unique constraint is backed by an index of the same name, which is what gets the comment.
    pub fn unique(&mut self, unique: &UniqueDef) -> CommentResult<()> {
        naming::require_columns("UNIQUE", &unique.columns)?;
        let Some(comment) = &unique.comment else {
            return Ok(());
        };
        match &unique.name {
            Some(name) => self.named_index(name, comment),
            None => {
                self.push(PendingComment::prefixed(
                    ObjectType::Index,
                    naming::unique_suffix(&unique.columns),
                    comment.clone(),
                ));
                Ok(())
            }
        }
    }

    pub fn constraint(&mut self, constraint: &ConstraintDef) -> CommentResult<()> {
        let Some(comment) = &constraint.comment else {
            return Ok(());
        };
        match &constraint.name {
            Some(name) => {
                self.push(PendingComment::contained(
                    ObjectType::Constraint,
                    Identifier::name(name),
                    comment.clone(),
                ));
                Ok(())
            }
            None => Err(CommentError::UnsupportedCommentTarget(
                "unnamed or check constraints".to_string(),
            )),
        }
    }

    fn named_index(&mut self, name: &str, comment: &str) -> CommentResult<()> {
        self.push(CommentSql::new(
            ObjectType::Index,
            Identifier::name(name),
            Some(comment.to_string()),
        )?);
        Ok(())
    }

    /// Bind every queued comment to `table`, preserving declaration order.
    ///
    /// Either every statement binds or none are returned.
    pub fn bind_all(self, table: &Identifier) -> CommentResult<Vec<CommentStatement>> {
        self.queued
            .into_iter()
            .map(|sql| sql.bind(table))
            .collect()
    }
}
