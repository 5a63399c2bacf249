//! SQL rendering for `COMMENT ON` statements
//!
//! A comment is aimed at either a standalone object (`TABLE "foo"`) or an
//! object contained in a table (`COLUMN "foo"."bar"`, `CONSTRAINT "c" ON "foo"`).
//! Inside a table definition block the table name is not known yet, so
//! contained and auto-named objects start life as a [`PendingComment`] and are
//! turned into a renderable [`CommentStatement`] by binding the table name.

use tracing::{debug, warn};

use crate::error::{CommentError, CommentResult};
use crate::identifier::{Identifier, ObjectRef, PAIR_SEPARATOR};
use crate::normalize::normalize_comment;
use crate::object_type::ObjectType;
use crate::render::{RenderedSql, render_comment_sql};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Standalone(Identifier),
    Contained {
        table: Identifier,
        object: Identifier,
    },
}

/// A fully resolved comment statement, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStatement {
    object_type: ObjectType,
    target: Target,
    comment: Option<String>,
}

impl CommentStatement {
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// The object reference as it appears between the type keyword and `IS`
    fn qualified_name(&self) -> String {
        match &self.target {
            Target::Standalone(name) => name.to_sql(),
            Target::Contained { table, object } => match self.object_type {
                ObjectType::Column => format!("{}.{}", table.to_sql(), object.to_sql()),
                _ => format!("{} ON {}", object.to_sql(), table.to_sql()),
            },
        }
    }

    pub fn render(&self) -> RenderedSql {
        let rendered = render_comment_sql(
            self.object_type.as_sql(),
            &self.qualified_name(),
            self.comment.as_deref(),
        );
        debug!(sql = %rendered.sql, "rendered comment statement");
        rendered
    }

    pub fn to_sql(&self) -> String {
        self.render().sql
    }

    /// Reflow the comment text with [`normalize_comment`].
    pub fn normalized(mut self) -> Self {
        self.comment = self.comment.as_deref().map(normalize_comment);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Deferred {
    /// A column, constraint, rule or trigger whose table is bound later
    Contained(Identifier),
    /// An object named `<table><suffix>`, e.g. the implicit `_pkey` index
    Prefixed(Identifier),
}

/// A comment statement still waiting for its owning table's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingComment {
    object_type: ObjectType,
    deferred: Deferred,
    comment: Option<String>,
}

impl PendingComment {
    /// A comment on `object` inside a table that is bound later.
    pub fn contained(
        object_type: ObjectType,
        object: impl Into<Identifier>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            object_type,
            deferred: Deferred::Contained(object.into()),
            comment: Some(comment.into()),
        }
    }

    /// A comment on the object named `<table><suffix>`, for names that follow
    /// PostgreSQL's conventions and so are only known once the table is.
    pub fn prefixed(
        object_type: ObjectType,
        suffix: impl Into<Identifier>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            object_type,
            deferred: Deferred::Prefixed(suffix.into()),
            comment: Some(comment.into()),
        }
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Resolve against the owning table.
    pub fn bind(self, table: &Identifier) -> CommentResult<CommentStatement> {
        let object = match self.deferred {
            Deferred::Contained(object) => object,
            Deferred::Prefixed(suffix) => table.with_suffix(&suffix),
        };
        validate_name(self.object_type, &object)?;

        let target = if self.object_type.is_contained() {
            Target::Contained {
                table: table.clone(),
                object,
            }
        } else {
            Target::Standalone(object)
        };

        Ok(CommentStatement {
            object_type: self.object_type,
            target,
            comment: self.comment,
        })
    }

    fn missing_table_name(&self) -> CommentError {
        let object_name = match &self.deferred {
            Deferred::Contained(object) => object.to_sql(),
            Deferred::Prefixed(suffix) => suffix.as_str().to_string(),
        };
        CommentError::MissingTableName {
            object_type: self.object_type.to_string(),
            object_name,
        }
    }
}

/// The result of [`CommentSql::create`]: either ready to render, or pending a table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentSql {
    Ready(CommentStatement),
    Pending(PendingComment),
}

impl CommentSql {
    /// Build a comment statement from a type tag such as `"table"`, `"EVENT TRIGGER"`
    /// or `"foreign_data_wrapper"`.
    ///
    /// Contained types (`COLUMN`, `CONSTRAINT`, `RULE`, `TRIGGER`) may be given
    /// as a `table__object` name or an explicit pair; anything else stays pending
    /// until [`CommentSql::bind`] supplies the table.
    pub fn create(
        object_type: &str,
        id: impl Into<ObjectRef>,
        comment: impl Into<String>,
    ) -> CommentResult<Self> {
        Self::new(object_type.parse()?, id, Some(comment.into()))
    }

    /// Like [`CommentSql::create`] with an already-parsed type; `None` clears the comment.
    pub fn new(
        object_type: ObjectType,
        id: impl Into<ObjectRef>,
        comment: Option<String>,
    ) -> CommentResult<Self> {
        let id = id.into();

        if !object_type.is_contained() {
            return match id {
                ObjectRef::Single(name) => {
                    validate_name(object_type, &name)?;
                    Ok(CommentSql::Ready(CommentStatement {
                        object_type,
                        target: Target::Standalone(name),
                        comment,
                    }))
                }
                ObjectRef::Pair { .. } => Err(CommentError::InvalidIdentifier {
                    object_type: object_type.to_string(),
                    reason: "expected a single name, not a (table, object) pair".to_string(),
                }),
            };
        }

        let (table, object) = match id {
            ObjectRef::Pair { table, object } => (Some(table), object),
            ObjectRef::Single(name) => match name.split_pair() {
                Some((table, object)) => (Some(table), object),
                None => {
                    if name.is_raw() && name.as_str().contains(PAIR_SEPARATOR) {
                        warn!(
                            object_type = %object_type,
                            name = name.as_str(),
                            "raw identifier is not split on the table separator"
                        );
                    }
                    (None, name)
                }
            },
        };
        validate_name(object_type, &object)?;

        match table {
            Some(table) => {
                validate_name(object_type, &table)?;
                Ok(CommentSql::Ready(CommentStatement {
                    object_type,
                    target: Target::Contained { table, object },
                    comment,
                }))
            }
            None => Ok(CommentSql::Pending(PendingComment {
                object_type,
                deferred: Deferred::Contained(object),
                comment,
            })),
        }
    }

    pub fn object_type(&self) -> ObjectType {
        match self {
            CommentSql::Ready(statement) => statement.object_type,
            CommentSql::Pending(pending) => pending.object_type,
        }
    }

    pub fn needs_table(&self) -> bool {
        matches!(self, CommentSql::Pending(_))
    }

    /// Bind the owning table. Statements that already know where they live
    /// are returned unchanged.
    pub fn bind(self, table: &Identifier) -> CommentResult<CommentStatement> {
        match self {
            CommentSql::Ready(statement) => Ok(statement),
            CommentSql::Pending(pending) => pending.bind(table),
        }
    }

    /// The statement itself, or `MissingTableName` when it still waits on a table.
    pub fn into_statement(self) -> CommentResult<CommentStatement> {
        match self {
            CommentSql::Ready(statement) => Ok(statement),
            CommentSql::Pending(pending) => Err(pending.missing_table_name()),
        }
    }

    /// Render the SQL, failing if the table name has not been bound.
    pub fn generate(&self) -> CommentResult<String> {
        match self {
            CommentSql::Ready(statement) => Ok(statement.to_sql()),
            CommentSql::Pending(pending) => Err(pending.missing_table_name()),
        }
    }
}

impl From<PendingComment> for CommentSql {
    fn from(pending: PendingComment) -> Self {
        CommentSql::Pending(pending)
    }
}

impl From<CommentStatement> for CommentSql {
    fn from(statement: CommentStatement) -> Self {
        CommentSql::Ready(statement)
    }
}

fn validate_name(object_type: ObjectType, name: &Identifier) -> CommentResult<()> {
    if name.as_str().is_empty() {
        return Err(CommentError::InvalidIdentifier {
            object_type: object_type.to_string(),
            reason: "name must not be empty".to_string(),
        });
    }
    Ok(())
}
