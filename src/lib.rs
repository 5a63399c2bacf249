//! Descriptive comments on PostgreSQL objects, set as a side effect of
//! ordinary schema definition and read back from the catalogs.
//!
//! ```
//! use pgcomment::CommentSql;
//!
//! let sql = CommentSql::create("table", "foo", "Ohai!").unwrap();
//! assert_eq!(sql.generate().unwrap(), r#"COMMENT ON TABLE "foo" IS 'Ohai!'"#);
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod identifier;
pub mod normalize;
pub mod object_type;
pub mod render;
pub mod schema;

pub use config::{Config, ConfigBuilder, ConfigInput, load_config, resolve_config};
pub use db::{Executor, PgExecutor, RecordingExecutor};
pub use error::{CommentError, CommentResult};
pub use identifier::{Identifier, ObjectRef};
pub use normalize::normalize_comment;
pub use object_type::ObjectType;
pub use render::{CommentSql, CommentStatement, PendingComment, RenderedSql};
pub use schema::{
    AlterTableBuilder, Column, ConstraintDef, Database, DatabaseOptions, ForeignKeyDef, IndexDef,
    PrimaryKeyDef, TableBuilder, TablePlan, UniqueDef, ViewOptions,
};
