use insta::assert_snapshot;
use pgcomment::{Column, Database, Identifier, RecordingExecutor};

use crate::helpers::harness::{recording_db, sqls};

const TABLE_QUERY: &str =
    "SELECT obj_description(CAST('foo' AS regclass), 'pg_class') AS \"comment\"";
const COLUMN_QUERY: &str = "SELECT col_description(c.oid, a.attnum) AS \"comment\" \
     FROM pg_class AS c \
     JOIN pg_attribute AS a ON (c.oid = a.attrelid) \
     WHERE c.relname = 'foo' AND a.attname = 'column'";

#[tokio::test]
async fn test_gets_a_table_comment() {
    let mut db = Database::new(RecordingExecutor::with_results([Some("Ohai!")]));

    let comment = db.comment_for("foo").await.unwrap();

    assert_eq!(comment.as_deref(), Some("Ohai!"));
    assert_eq!(db.executor().sqls(), [TABLE_QUERY]);
}

#[tokio::test]
async fn test_gets_a_column_comment() {
    let mut db = recording_db();

    let comment = db.comment_for("foo__column").await.unwrap();

    assert_eq!(comment, None);
    assert_eq!(sqls(&db), [COLUMN_QUERY]);
}

#[tokio::test]
async fn test_empty_comment_is_not_absent() {
    let mut db = Database::new(RecordingExecutor::with_results([Some(""), None]));

    assert_eq!(db.comment_for("foo").await.unwrap(), Some(String::new()));
    assert_eq!(db.comment_for("foo").await.unwrap(), None);
}

#[tokio::test]
async fn test_table_ref_comment() {
    let mut db = recording_db();
    db.table("foo").comment().await.unwrap();
    assert_eq!(
        sqls(&db),
        ["SELECT obj_description(CAST('\"foo\"' AS regclass), 'pg_class') AS \"comment\""]
    );
}

#[tokio::test]
async fn test_table_ref_column_comment() {
    let mut db = recording_db();
    db.table("foo").comment_for("column").await.unwrap();
    assert_snapshot!(sqls(&db)[0], @r#"SELECT col_description(a.attrelid, a.attnum) AS "comment" FROM pg_attribute AS a WHERE a.attrelid = CAST('"foo"' AS regclass) AND a.attname = 'column'"#);
}

#[tokio::test]
async fn test_table_ref_matches_the_created_table() {
    let mut db = recording_db();
    db.create_table("Foo", |t| {
        t.column(Column::new("Data", "text"));
        Ok(())
    })
    .await
    .unwrap();
    db.table("Foo").comment().await.unwrap();
    db.table("Foo").comment_for("Data").await.unwrap();

    let sqls = sqls(&db);
    assert!(sqls[0].starts_with("CREATE TABLE \"Foo\""), "{}", sqls[0]);
    assert!(sqls[1].contains("CAST('\"Foo\"' AS regclass)"), "{}", sqls[1]);
    assert!(
        sqls[2].contains("CAST('\"Foo\"' AS regclass) AND a.attname = 'Data'"),
        "{}",
        sqls[2]
    );
}

#[tokio::test]
async fn test_table_ref_names_are_not_split_on_dots() {
    let mut db = recording_db();
    db.table("my.table").comment().await.unwrap();
    db.table(Identifier::raw("app.foo")).comment().await.unwrap();

    let sqls = sqls(&db);
    assert!(sqls[0].contains("CAST('\"my.table\"' AS regclass)"), "{}", sqls[0]);
    assert!(sqls[1].contains("CAST('app.foo' AS regclass)"), "{}", sqls[1]);
}

#[tokio::test]
async fn test_quotes_in_names_are_escaped() {
    let mut db = recording_db();
    db.comment_for("o'reilly").await.unwrap();
    assert_eq!(
        sqls(&db),
        ["SELECT obj_description(CAST('o''reilly' AS regclass), 'pg_class') AS \"comment\""]
    );
}
