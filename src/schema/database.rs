//! The database façade: schema operations that set comments as a side effect,
//! plus direct comment setting and retrieval.
//!
//! Every operation builds all of its SQL before executing any of it, so a bad
//! object type, an unbindable comment or a refused destructive statement
//! leaves the database untouched.

use anyhow::{Result, anyhow};
use tracing::{debug, info};

use crate::config::Config;
use crate::db::{Executor, PgExecutor};
use crate::identifier::{Identifier, ObjectRef};
use crate::object_type::ObjectType;
use crate::render::retrieval::CommentQuery;
use crate::render::sql::{render_create_index, render_create_table_as, render_create_view};
use crate::render::{CommentSql, CommentStatement, RenderedSql};
use crate::schema::TablePlan;
use crate::schema::alter::AlterTableBuilder;
use crate::schema::defs::{Column, IndexDef, PrimaryKeyDef};
use crate::schema::naming;
use crate::schema::table::TableBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseOptions {
    /// Run comment text through `normalize_comment` before rendering
    pub normalize: bool,
    pub allow_destructive: bool,
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            allow_destructive: true,
        }
    }
}

impl From<&Config> for DatabaseOptions {
    fn from(config: &Config) -> Self {
        Self {
            normalize: config.comments.normalize,
            allow_destructive: config.execution.allow_destructive,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub materialized: bool,
    pub comment: Option<String>,
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn materialized(mut self) -> Self {
        self.materialized = true;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

pub struct Database<E> {
    executor: E,
    options: DatabaseOptions,
}

impl Database<PgExecutor> {
    /// Connect using the database section of `config` and honour its comment options.
    pub async fn connect(config: &Config) -> Result<Self> {
        let executor = PgExecutor::connect(&config.database).await?;
        Ok(Self::with_options(executor, DatabaseOptions::from(config)))
    }
}

impl<E: Executor> Database<E> {
    pub fn new(executor: E) -> Self {
        Self::with_options(executor, DatabaseOptions::default())
    }

    pub fn with_options(executor: E, options: DatabaseOptions) -> Self {
        Self { executor, options }
    }

    pub fn options(&self) -> DatabaseOptions {
        self.options
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Set the comment on any commentable object.
    ///
    /// `object_type` is a tag such as `"table"` or `"foreign_data_wrapper"`.
    /// Columns, constraints, rules and triggers need their table, given as a
    /// `table__object` name or an [`ObjectRef::pair`].
    pub async fn comment_on(
        &mut self,
        object_type: &str,
        id: impl Into<ObjectRef>,
        comment: &str,
    ) -> Result<()> {
        let statement = CommentSql::create(object_type, id, comment)?.into_statement()?;
        self.run_comment(statement).await
    }

    /// Remove the comment from an object.
    pub async fn drop_comment(&mut self, object_type: &str, id: impl Into<ObjectRef>) -> Result<()> {
        let object_type: ObjectType = object_type.parse()?;
        let statement = CommentSql::new(object_type, id, None)?.into_statement()?;
        self.run(&statement.render()).await
    }

    /// Read back a comment; `table__column` addresses a column.
    ///
    /// `None` means no comment is set. An empty comment comes back as `Some("")`.
    pub async fn comment_for(&mut self, object: &str) -> Result<Option<String>> {
        self.fetch(&CommentQuery::parse(object)).await
    }

    pub fn table(&mut self, name: impl Into<Identifier>) -> TableRef<'_, E> {
        TableRef {
            database: self,
            name: name.into(),
        }
    }

    /// Create a table from a definition block.
    ///
    /// The block declares columns, keys, indexes and constraints, each of
    /// which may carry a comment. The table is created, then its indexes,
    /// then every comment in declaration order, with the table's own comment
    /// last.
    pub async fn create_table<F>(&mut self, name: impl Into<Identifier>, define: F) -> Result<()>
    where
        F: FnOnce(&mut TableBuilder) -> Result<()>,
    {
        let table = name.into();
        let mut builder = TableBuilder::new();
        define(&mut builder)?;
        let plan = builder.finish(&table)?;

        info!(table = %table, "creating table");
        self.apply(plan).await
    }

    pub async fn create_table_as(
        &mut self,
        name: impl Into<Identifier>,
        query: &str,
        comment: Option<&str>,
    ) -> Result<()> {
        let table = name.into();
        let plan = TablePlan {
            ddl: vec![RenderedSql::new(render_create_table_as(&table, query))],
            comments: relation_comment(ObjectType::Table, &table, comment)?,
        };
        self.apply(plan).await
    }

    pub async fn create_view(
        &mut self,
        name: impl Into<Identifier>,
        query: &str,
        options: ViewOptions,
    ) -> Result<()> {
        let view = name.into();
        let object_type = if options.materialized {
            ObjectType::MaterializedView
        } else {
            ObjectType::View
        };
        let plan = TablePlan {
            ddl: vec![RenderedSql::new(render_create_view(
                &view,
                query,
                options.materialized,
            ))],
            comments: relation_comment(object_type, &view, options.comment.as_deref())?,
        };
        self.apply(plan).await
    }

    /// Create a many-to-many join table between two tables.
    ///
    /// Each side is a `(column, referenced table)` pair. The table is named
    /// after the referenced tables in sorted order joined by `_`, gets a
    /// composite primary key over both columns and an index on them in
    /// reverse order.
    pub async fn create_join_table(
        &mut self,
        left: (&str, &str),
        right: (&str, &str),
        comment: Option<&str>,
    ) -> Result<()> {
        let table = Identifier::name(join_table_name(left.1, right.1));

        let mut builder = TableBuilder::new();
        for (column, references) in [left, right] {
            builder.column(Column::new(column, "integer").not_null().references(references));
        }
        builder.composite_primary_key(PrimaryKeyDef::new([left.0, right.0]))?;
        if let Some(comment) = comment {
            builder.comment(comment);
        }
        let mut plan = builder.finish(&table)?;

        // The primary key already covers lookups from the left side
        let reverse = IndexDef::new([right.0, left.0]);
        let index_name = naming::default_name(&table, &naming::index_suffix(&reverse.columns));
        plan.ddl
            .push(RenderedSql::new(render_create_index(&table, &index_name, &reverse)));

        self.apply(plan).await
    }

    /// Alter a table from a definition block; comments on added objects are
    /// set once every alteration has run.
    pub async fn alter_table<F>(&mut self, name: impl Into<Identifier>, define: F) -> Result<()>
    where
        F: FnOnce(&mut AlterTableBuilder) -> Result<()>,
    {
        let table = name.into();
        let mut builder = AlterTableBuilder::new();
        define(&mut builder)?;
        let plan = builder.finish(&table)?;

        info!(table = %table, "altering table");
        self.apply(plan).await
    }

    async fn apply(&mut self, plan: TablePlan) -> Result<()> {
        if let Some(refused) = plan.ddl.iter().find(|sql| !self.permits(sql)) {
            return Err(refusal(refused));
        }

        for ddl in &plan.ddl {
            self.run(ddl).await?;
        }
        for statement in plan.comments {
            self.run_comment(statement).await?;
        }
        Ok(())
    }

    async fn run_comment(&mut self, statement: CommentStatement) -> Result<()> {
        let statement = if self.options.normalize {
            statement.normalized()
        } else {
            statement
        };
        self.run(&statement.render()).await
    }

    async fn run(&mut self, sql: &RenderedSql) -> Result<()> {
        if !self.permits(sql) {
            return Err(refusal(sql));
        }
        debug!(sql = %sql.sql, "executing");
        self.executor.execute(&sql.sql).await
    }

    async fn fetch(&mut self, query: &CommentQuery) -> Result<Option<String>> {
        let sql = query.to_sql();
        debug!(sql = %sql, "querying comment");
        self.executor.fetch_comment(&sql).await
    }

    fn permits(&self, sql: &RenderedSql) -> bool {
        self.options.allow_destructive || !sql.is_destructive()
    }
}

/// A table, for reading back its comments.
///
/// The name resolves the way `create_table` and `comment_on` render it: a
/// name is quoted, so case and dots are kept, and raw SQL is used as written.
pub struct TableRef<'a, E> {
    database: &'a mut Database<E>,
    name: Identifier,
}

impl<E: Executor> TableRef<'_, E> {
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    /// The table's own comment.
    pub async fn comment(self) -> Result<Option<String>> {
        let query = CommentQuery::for_table(&self.name);
        self.database.fetch(&query).await
    }

    /// The comment on one of the table's columns.
    pub async fn comment_for(self, column: &str) -> Result<Option<String>> {
        let query = CommentQuery::for_table_column(&self.name, column);
        self.database.fetch(&query).await
    }
}

fn relation_comment(
    object_type: ObjectType,
    name: &Identifier,
    comment: Option<&str>,
) -> Result<Vec<CommentStatement>> {
    comment
        .map(|comment| {
            CommentSql::new(object_type, name, Some(comment.to_string()))?.into_statement()
        })
        .transpose()
        .map(|statement| statement.into_iter().collect())
        .map_err(Into::into)
}

/// `categories` + `terms` -> `categories_terms`, whichever side each is on.
fn join_table_name(left: &str, right: &str) -> String {
    let mut names = [left, right];
    names.sort_unstable();
    names.join("_")
}

fn refusal(sql: &RenderedSql) -> anyhow::Error {
    anyhow!(
        "Refusing to run destructive statement while destructive changes are disabled: {}",
        sql.sql
    )
}
