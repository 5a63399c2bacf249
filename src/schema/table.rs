//! Block-style CREATE TABLE with comments on the table and anything declared in it

use crate::error::CommentResult;
use crate::identifier::Identifier;
use crate::object_type::ObjectType;
use crate::render::sql::{render_create_index, render_create_table};
use crate::render::{CommentSql, RenderedSql};
use crate::schema::TablePlan;
use crate::schema::comments::CommentQueue;
use crate::schema::defs::{
    Column, ConstraintDef, ForeignKeyDef, IndexDef, PrimaryKeyDef, TableConstraint, UniqueDef,
};
use crate::schema::naming;

/// A table constraint as declared, before its default name is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DeclaredConstraint {
    PrimaryKey(PrimaryKeyDef),
    ForeignKey(ForeignKeyDef),
    Unique(UniqueDef),
    Check(ConstraintDef),
}

impl DeclaredConstraint {
    /// Fill in conventional names so DDL and comments agree on them.
    pub(crate) fn resolve(&self, table: &Identifier) -> CommentResult<TableConstraint> {
        let resolved = match self {
            DeclaredConstraint::PrimaryKey(key) => TableConstraint::PrimaryKey {
                name: key.name.clone().unwrap_or_else(|| {
                    naming::default_name(table, &naming::primary_key_suffix())
                }),
                columns: key.columns.clone(),
            },
            DeclaredConstraint::ForeignKey(key) => TableConstraint::ForeignKey {
                name: match &key.name {
                    Some(name) => name.clone(),
                    None => naming::default_name(table, &naming::foreign_key_suffix(&key.columns)?),
                },
                columns: key.columns.clone(),
                references: key.references.clone(),
                referenced_columns: key.referenced_columns.clone(),
                on_delete: key.on_delete.clone(),
                on_update: key.on_update.clone(),
            },
            DeclaredConstraint::Unique(unique) => TableConstraint::Unique {
                name: unique.name.clone().unwrap_or_else(|| {
                    naming::default_name(table, &naming::unique_suffix(&unique.columns))
                }),
                columns: unique.columns.clone(),
            },
            DeclaredConstraint::Check(check) => TableConstraint::Check {
                name: check.name.clone(),
                expression: check.check.clone(),
            },
        };
        Ok(resolved)
    }
}

/// Resolved index name, explicit or `<table>_<columns>_index`.
pub(crate) fn index_name(table: &Identifier, index: &IndexDef) -> String {
    index
        .name
        .clone()
        .unwrap_or_else(|| naming::default_name(table, &naming::index_suffix(&index.columns)))
}

/// Collects the contents of a `create_table` block.
///
/// The builder never sees the table name; comments on objects declared here
/// are queued and bound when the block is finished.
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    columns: Vec<Column>,
    constraints: Vec<DeclaredConstraint>,
    indexes: Vec<IndexDef>,
    comments: CommentQueue,
    table_comment: Option<String>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Comment on the table itself, set after everything else.
    pub fn comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.table_comment = Some(comment.into());
        self
    }

    pub fn column(&mut self, column: Column) -> &mut Self {
        self.comments.column(&column);
        self.columns.push(column);
        self
    }

    /// A single-column primary key; its comment lands on the column.
    pub fn primary_key(&mut self, mut column: Column) -> &mut Self {
        column.primary_key = true;
        self.column(column)
    }

    /// A single-column foreign key; its comment lands on the column.
    pub fn foreign_key(&mut self, column: Column) -> &mut Self {
        self.column(column)
    }

    /// Comment goes on the backing index, `<table>_pkey` unless named.
    pub fn composite_primary_key(&mut self, key: PrimaryKeyDef) -> CommentResult<&mut Self> {
        self.comments.composite_primary_key(&key)?;
        self.constraints.push(DeclaredConstraint::PrimaryKey(key));
        Ok(self)
    }

    /// Comment goes on the constraint, `<table>_<first column>_fkey` unless named.
    pub fn composite_foreign_key(&mut self, key: ForeignKeyDef) -> CommentResult<&mut Self> {
        self.comments.composite_foreign_key(&key)?;
        self.constraints.push(DeclaredConstraint::ForeignKey(key));
        Ok(self)
    }

    pub fn index(&mut self, index: IndexDef) -> CommentResult<&mut Self> {
        self.comments.index(&index)?;
        self.indexes.push(index);
        Ok(self)
    }

    pub fn unique(&mut self, unique: UniqueDef) -> CommentResult<&mut Self> {
        self.comments.unique(&unique)?;
        self.constraints.push(DeclaredConstraint::Unique(unique));
        Ok(self)
    }

    /// Fails with `UnsupportedCommentTarget` for an unnamed constraint carrying a comment.
    pub fn constraint(&mut self, constraint: ConstraintDef) -> CommentResult<&mut Self> {
        self.comments.constraint(&constraint)?;
        self.constraints.push(DeclaredConstraint::Check(constraint));
        Ok(self)
    }

    /// An anonymous CHECK; PostgreSQL picks its name, so it cannot be commented.
    pub fn check(&mut self, expression: impl Into<String>) -> &mut Self {
        self.constraints
            .push(DeclaredConstraint::Check(ConstraintDef::unnamed(expression)));
        self
    }

    pub fn comments(&self) -> &CommentQueue {
        &self.comments
    }

    /// Render the DDL and bind every queued comment to `table`.
    pub fn finish(self, table: &Identifier) -> CommentResult<TablePlan> {
        let constraints = self
            .constraints
            .iter()
            .map(|c| c.resolve(table))
            .collect::<CommentResult<Vec<_>>>()?;

        let mut ddl = vec![RenderedSql::new(render_create_table(
            table,
            &self.columns,
            &constraints,
        ))];
        ddl.extend(self.indexes.iter().map(|index| {
            RenderedSql::new(render_create_index(table, &index_name(table, index), index))
        }));

        let mut comments = self.comments.bind_all(table)?;
        if let Some(comment) = self.table_comment {
            comments.push(
                CommentSql::new(ObjectType::Table, table, Some(comment))?.bind(table)?,
            );
        }

        Ok(TablePlan { ddl, comments })
    }
}
