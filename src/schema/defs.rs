//! Definitions handed to the table builders
//!
//! Each definition carries an optional `comment`; the builders turn those into
//! queued comment statements.

use crate::identifier::Identifier;

fn owned_columns<I, S>(columns: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    columns.into_iter().map(Into::into).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: Identifier,
    pub data_type: String,
    pub not_null: bool,
    pub default: Option<String>,
    pub primary_key: bool,
    /// Referenced table for a single-column foreign key
    pub references: Option<Identifier>,
    pub on_delete: Option<String>,
    pub comment: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<Identifier>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            not_null: false,
            default: None,
            primary_key: false,
            references: None,
            on_delete: None,
            comment: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// `expression` is emitted verbatim after `DEFAULT`
    pub fn default(mut self, expression: impl Into<String>) -> Self {
        self.default = Some(expression.into());
        self
    }

    pub fn references(mut self, table: impl Into<Identifier>) -> Self {
        self.references = Some(table.into());
        self
    }

    pub fn on_delete(mut self, action: impl Into<String>) -> Self {
        self.on_delete = Some(action.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A primary key spanning several columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKeyDef {
    pub columns: Vec<String>,
    pub name: Option<String>,
    pub comment: Option<String>,
}

impl PrimaryKeyDef {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: owned_columns(columns),
            name: None,
            comment: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A foreign key spanning several columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDef {
    pub columns: Vec<String>,
    pub references: Identifier,
    /// Empty means the referenced table's primary key
    pub referenced_columns: Vec<String>,
    pub name: Option<String>,
    pub on_delete: Option<String>,
    pub on_update: Option<String>,
    pub comment: Option<String>,
}

impl ForeignKeyDef {
    pub fn new<I, S>(columns: I, references: impl Into<Identifier>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: owned_columns(columns),
            references: references.into(),
            referenced_columns: vec![],
            name: None,
            on_delete: None,
            on_update: None,
            comment: None,
        }
    }

    pub fn referenced_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.referenced_columns = owned_columns(columns);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn on_delete(mut self, action: impl Into<String>) -> Self {
        self.on_delete = Some(action.into());
        self
    }

    pub fn on_update(mut self, action: impl Into<String>) -> Self {
        self.on_update = Some(action.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDef {
    pub columns: Vec<String>,
    pub name: Option<String>,
    pub unique: bool,
    pub comment: Option<String>,
}

impl IndexDef {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: owned_columns(columns),
            name: None,
            unique: false,
            comment: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A `UNIQUE` table constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueDef {
    pub columns: Vec<String>,
    pub name: Option<String>,
    pub comment: Option<String>,
}

impl UniqueDef {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: owned_columns(columns),
            name: None,
            comment: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A `CHECK` constraint, optionally named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintDef {
    pub name: Option<String>,
    pub check: String,
    pub comment: Option<String>,
}

impl ConstraintDef {
    pub fn new(name: impl Into<String>, check: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            check: check.into(),
            comment: None,
        }
    }

    pub fn unnamed(check: impl Into<String>) -> Self {
        Self {
            name: None,
            check: check.into(),
            comment: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Table-level constraints, after auto-naming has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConstraint {
    PrimaryKey {
        name: String,
        columns: Vec<String>,
    },
    ForeignKey {
        name: String,
        columns: Vec<String>,
        references: Identifier,
        referenced_columns: Vec<String>,
        on_delete: Option<String>,
        on_update: Option<String>,
    },
    Unique {
        name: String,
        columns: Vec<String>,
    },
    Check {
        name: Option<String>,
        expression: String,
    },
}
