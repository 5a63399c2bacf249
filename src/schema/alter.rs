//! Block-style ALTER TABLE with comments on whatever gets added

use crate::error::CommentResult;
use crate::identifier::Identifier;
use crate::render::RenderedSql;
use crate::render::sql::{
    render_add_column, render_add_constraint, render_create_index, render_drop_column,
    render_drop_constraint,
};
use crate::schema::TablePlan;
use crate::schema::comments::CommentQueue;
use crate::schema::defs::{Column, ConstraintDef, ForeignKeyDef, IndexDef, PrimaryKeyDef, UniqueDef};
use crate::schema::table::{DeclaredConstraint, index_name};

#[derive(Debug, Clone, PartialEq, Eq)]
enum AlterOp {
    AddColumn(Column),
    DropColumn(Identifier),
    AddConstraint(DeclaredConstraint),
    DropConstraint(String),
    AddIndex(IndexDef),
}

impl AlterOp {
    fn render(&self, table: &Identifier) -> CommentResult<RenderedSql> {
        let rendered = match self {
            AlterOp::AddColumn(column) => RenderedSql::new(render_add_column(table, column)),
            AlterOp::DropColumn(column) => {
                RenderedSql::destructive(render_drop_column(table, column))
            }
            AlterOp::AddConstraint(constraint) => {
                RenderedSql::new(render_add_constraint(table, &constraint.resolve(table)?))
            }
            AlterOp::DropConstraint(name) => {
                RenderedSql::destructive(render_drop_constraint(table, name))
            }
            AlterOp::AddIndex(index) => {
                RenderedSql::new(render_create_index(table, &index_name(table, index), index))
            }
        };
        Ok(rendered)
    }
}

/// Collects the operations of an `alter_table` block, in order.
#[derive(Debug, Clone, Default)]
pub struct AlterTableBuilder {
    ops: Vec<AlterOp>,
    comments: CommentQueue,
}

impl AlterTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column(&mut self, column: Column) -> &mut Self {
        self.comments.column(&column);
        self.ops.push(AlterOp::AddColumn(column));
        self
    }

    /// Adds a primary key column; the comment is on the column.
    pub fn add_primary_key(&mut self, mut column: Column) -> &mut Self {
        column.primary_key = true;
        self.add_column(column)
    }

    /// Adds a referencing column; the comment is on the column.
    pub fn add_foreign_key(&mut self, column: Column) -> &mut Self {
        self.add_column(column)
    }

    pub fn add_composite_primary_key(&mut self, key: PrimaryKeyDef) -> CommentResult<&mut Self> {
        self.comments.composite_primary_key(&key)?;
        self.ops
            .push(AlterOp::AddConstraint(DeclaredConstraint::PrimaryKey(key)));
        Ok(self)
    }

    pub fn add_composite_foreign_key(&mut self, key: ForeignKeyDef) -> CommentResult<&mut Self> {
        self.comments.composite_foreign_key(&key)?;
        self.ops
            .push(AlterOp::AddConstraint(DeclaredConstraint::ForeignKey(key)));
        Ok(self)
    }

    pub fn add_index(&mut self, index: IndexDef) -> CommentResult<&mut Self> {
        self.comments.index(&index)?;
        self.ops.push(AlterOp::AddIndex(index));
        Ok(self)
    }

    pub fn add_constraint(&mut self, constraint: ConstraintDef) -> CommentResult<&mut Self> {
        self.comments.constraint(&constraint)?;
        self.ops
            .push(AlterOp::AddConstraint(DeclaredConstraint::Check(constraint)));
        Ok(self)
    }

    pub fn add_unique_constraint(&mut self, unique: UniqueDef) -> CommentResult<&mut Self> {
        self.comments.unique(&unique)?;
        self.ops
            .push(AlterOp::AddConstraint(DeclaredConstraint::Unique(unique)));
        Ok(self)
    }

    pub fn drop_column(&mut self, column: impl Into<Identifier>) -> &mut Self {
        self.ops.push(AlterOp::DropColumn(column.into()));
        self
    }

    pub fn drop_constraint(&mut self, name: impl Into<String>) -> &mut Self {
        self.ops.push(AlterOp::DropConstraint(name.into()));
        self
    }

    pub fn comments(&self) -> &CommentQueue {
        &self.comments
    }

    pub fn finish(self, table: &Identifier) -> CommentResult<TablePlan> {
        let ddl = self
            .ops
            .iter()
            .map(|op| op.render(table))
            .collect::<CommentResult<Vec<_>>>()?;
        let comments = self.comments.bind_all(table)?;
        Ok(TablePlan { ddl, comments })
    }
}
