use anyhow::Result;
use insta::assert_snapshot;
use pgcomment::{
    Column, CommentError, ConstraintDef, ForeignKeyDef, IndexDef, PrimaryKeyDef, TableBuilder,
    UniqueDef,
};
use rstest::rstest;

use crate::helpers::harness::{last_sql, recording_db, sqls};

type Define = fn(&mut TableBuilder) -> Result<()>;

#[rstest]
#[case::table_comment(
    |t: &mut TableBuilder| -> Result<()> { t.comment("Ohai!").column(Column::new("data", "text")); Ok(()) },
    "COMMENT ON TABLE \"foo\" IS 'Ohai!'"
)]
#[case::column(
    |t: &mut TableBuilder| -> Result<()> { t.column(Column::new("data", "text").comment("Owhatanight")); Ok(()) },
    "COMMENT ON COLUMN \"foo\".\"data\" IS 'Owhatanight'"
)]
#[case::primary_key(
    |t: &mut TableBuilder| -> Result<()> { t.primary_key(Column::new("id", "serial").comment("I am unique")); Ok(()) },
    "COMMENT ON COLUMN \"foo\".\"id\" IS 'I am unique'"
)]
#[case::composite_primary_key(
    |t: &mut TableBuilder| -> Result<()> { t.composite_primary_key(PrimaryKeyDef::new(["bar", "baz"]).comment("So many things"))?; Ok(()) },
    "COMMENT ON INDEX \"foo_pkey\" IS 'So many things'"
)]
#[case::composite_primary_key_named(
    |t: &mut TableBuilder| -> Result<()> {
        t.composite_primary_key(PrimaryKeyDef::new(["bar", "baz"]).name("custom_pk").comment("So many things"))?;
        Ok(())
    },
    "COMMENT ON INDEX \"custom_pk\" IS 'So many things'"
)]
#[case::foreign_key(
    |t: &mut TableBuilder| -> Result<()> { t.foreign_key(Column::new("bar_id", "integer").references("bar").comment("Over there!")); Ok(()) },
    "COMMENT ON COLUMN \"foo\".\"bar_id\" IS 'Over there!'"
)]
#[case::composite_foreign_key(
    |t: &mut TableBuilder| -> Result<()> {
        t.composite_foreign_key(ForeignKeyDef::new(["bar_name", "bar_dob"], "bar").comment("Over there!"))?;
        Ok(())
    },
    "COMMENT ON CONSTRAINT \"foo_bar_name_fkey\" ON \"foo\" IS 'Over there!'"
)]
#[case::composite_foreign_key_named(
    |t: &mut TableBuilder| -> Result<()> {
        t.composite_foreign_key(ForeignKeyDef::new(["bar_name", "bar_dob"], "bar").name("fkr").comment("Over there!"))?;
        Ok(())
    },
    "COMMENT ON CONSTRAINT \"fkr\" ON \"foo\" IS 'Over there!'"
)]
#[case::index(
    |t: &mut TableBuilder| -> Result<()> { t.column(Column::new("id", "integer")).index(IndexDef::new(["id"]).comment("Makes it fast"))?; Ok(()) },
    "COMMENT ON INDEX \"foo_id_index\" IS 'Makes it fast'"
)]
#[case::multi_column_index(
    |t: &mut TableBuilder| -> Result<()> { t.index(IndexDef::new(["name", "dob"]).comment("Makes it fast"))?; Ok(()) },
    "COMMENT ON INDEX \"foo_name_dob_index\" IS 'Makes it fast'"
)]
#[case::named_index(
    |t: &mut TableBuilder| -> Result<()> { t.index(IndexDef::new(["id"]).name("zoom").comment("Makes it fast"))?; Ok(()) },
    "COMMENT ON INDEX \"zoom\" IS 'Makes it fast'"
)]
#[case::unique(
    |t: &mut TableBuilder| -> Result<()> { t.unique(UniqueDef::new(["id"]).comment("There can be only one"))?; Ok(()) },
    "COMMENT ON INDEX \"foo_id_key\" IS 'There can be only one'"
)]
#[case::multi_column_unique(
    |t: &mut TableBuilder| -> Result<()> { t.unique(UniqueDef::new(["name", "dob"]).comment("Going solo"))?; Ok(()) },
    "COMMENT ON INDEX \"foo_name_dob_key\" IS 'Going solo'"
)]
#[case::named_unique(
    |t: &mut TableBuilder| -> Result<()> { t.unique(UniqueDef::new(["id"]).name("zoom").comment("Going solo"))?; Ok(()) },
    "COMMENT ON INDEX \"zoom\" IS 'Going solo'"
)]
#[case::named_constraint(
    |t: &mut TableBuilder| -> Result<()> { t.constraint(ConstraintDef::new("clamp", "num BETWEEN 1 AND 5").comment("Toight"))?; Ok(()) },
    "COMMENT ON CONSTRAINT \"clamp\" ON \"foo\" IS 'Toight'"
)]
#[tokio::test]
async fn test_create_table_comment(#[case] define: Define, #[case] expected: &str) {
    let mut db = recording_db();
    db.create_table("foo", define).await.unwrap();
    assert_eq!(last_sql(&db), expected);
}

#[tokio::test]
async fn test_unnamed_constraint_comment_is_unsupported() {
    let mut db = recording_db();
    let err = db
        .create_table("foo", |t| {
            t.column(Column::new("num", "integer"));
            t.constraint(ConstraintDef::unnamed("num BETWEEN 1 AND 5").comment("Kaboom"))?;
            Ok(())
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CommentError>(),
        Some(CommentError::UnsupportedCommentTarget(_))
    ));
    assert!(err.to_string().to_lowercase().contains("not supported"));
    assert!(sqls(&db).is_empty(), "nothing runs when a comment is refused");
}

#[tokio::test]
async fn test_foreign_key_without_columns_is_rejected() {
    let mut db = recording_db();
    let no_columns: [&str; 0] = [];
    let err = db
        .create_table("foo", |t| {
            t.column(Column::new("bar_id", "integer"));
            t.composite_foreign_key(ForeignKeyDef::new(no_columns, "bar").comment("Nowhere"))?;
            Ok(())
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CommentError>(),
        Some(CommentError::InvalidIdentifier { .. })
    ));
    assert!(sqls(&db).is_empty());
}

#[tokio::test]
async fn test_structure_runs_before_comments() {
    let mut db = recording_db();
    db.create_table("items", |t| {
        t.comment("Things we sell")
            .primary_key(Column::new("id", "serial").comment("Surrogate key"))
            .column(Column::new("name", "text").not_null().comment("Display name"))
            .check("char_length(name) > 2");
        t.index(IndexDef::new(["name"]).comment("Lookup by name"))?;
        Ok(())
    })
    .await
    .unwrap();

    assert_snapshot!(sqls(&db).join(";\n"), @r#"
    CREATE TABLE "items" (
        "id" serial PRIMARY KEY,
        "name" text NOT NULL,
        CHECK (char_length(name) > 2)
    );
    CREATE INDEX "items_name_index" ON "items" ("name");
    COMMENT ON COLUMN "items"."id" IS 'Surrogate key';
    COMMENT ON COLUMN "items"."name" IS 'Display name';
    COMMENT ON INDEX "items_name_index" IS 'Lookup by name';
    COMMENT ON TABLE "items" IS 'Things we sell'
    "#);
}

#[tokio::test]
async fn test_create_table_as_sets_table_comment() {
    let mut db = recording_db();
    db.create_table_as(
        "older_items",
        "SELECT * FROM items WHERE updated_at < now() - interval '6 months'",
        Some("WTF?"),
    )
    .await
    .unwrap();

    assert_eq!(
        sqls(&db),
        [
            "CREATE TABLE \"older_items\" AS SELECT * FROM items WHERE updated_at < now() - interval '6 months'",
            "COMMENT ON TABLE \"older_items\" IS 'WTF?'",
        ]
    );
}

#[tokio::test]
async fn test_create_table_as_without_comment() {
    let mut db = recording_db();
    db.create_table_as("copy", "SELECT 1", None).await.unwrap();
    assert_eq!(sqls(&db).len(), 1);
}
