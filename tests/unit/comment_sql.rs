//! COMMENT ON rendering through the public API

use insta::assert_snapshot;
use pgcomment::{CommentError, CommentSql, Identifier, ObjectRef, ObjectType, PendingComment};
use rstest::rstest;

fn generate(object_type: &str, id: impl Into<ObjectRef>, comment: &str) -> String {
    CommentSql::create(object_type, id, comment)
        .unwrap()
        .generate()
        .unwrap()
}

#[rstest]
#[case("TABLE")]
#[case("TaBlE")]
#[case("table")]
#[case(" table ")]
fn test_type_tag_is_case_insensitive(#[case] tag: &str) {
    assert_eq!(
        generate(tag, "foo", "Ohai!"),
        "COMMENT ON TABLE \"foo\" IS 'Ohai!'"
    );
}

#[rstest]
#[case("event_trigger", "EVENT TRIGGER")]
#[case("EVENT TRIGGER", "EVENT TRIGGER")]
#[case("foreign_data_wrapper", "FOREIGN DATA WRAPPER")]
#[case("text_search_configuration", "TEXT SEARCH CONFIGURATION")]
#[case("materialized_view", "MATERIALIZED VIEW")]
#[case("procedural_language", "PROCEDURAL LANGUAGE")]
fn test_multi_word_types(#[case] tag: &str, #[case] keyword: &str) {
    assert_eq!(
        generate(tag, "foo", "Ohai!"),
        format!("COMMENT ON {} \"foo\" IS 'Ohai!'", keyword)
    );
}

#[test]
fn test_raw_name_is_not_quoted() {
    assert_eq!(
        generate("table", Identifier::raw("foo"), "Ohai!"),
        "COMMENT ON TABLE foo IS 'Ohai!'"
    );
    assert_eq!(
        generate(
            "function",
            Identifier::raw("add_em(integer, integer)"),
            "Adds"
        ),
        "COMMENT ON FUNCTION add_em(integer, integer) IS 'Adds'"
    );
}

#[test]
fn test_names_are_quoted() {
    assert_eq!(
        generate("table", "foo bar", "Ohai!"),
        "COMMENT ON TABLE \"foo bar\" IS 'Ohai!'"
    );
    assert_eq!(
        generate("table", "sneaky\"name", "x"),
        "COMMENT ON TABLE \"sneaky\"\"name\" IS 'x'"
    );
}

#[test]
fn test_comment_is_escaped() {
    assert_eq!(
        generate("table", "foo", "O'hai!"),
        "COMMENT ON TABLE \"foo\" IS 'O''hai!'"
    );
}

#[test]
fn test_unknown_type_is_rejected() {
    let err = CommentSql::create("foobooblee", "foo", "O'hai!").unwrap_err();
    assert_eq!(err, CommentError::UnrecognizedType("foobooblee".to_string()));
    assert!(err.to_string().to_lowercase().contains("unrecognised object type"));
}

#[rstest]
#[case("column", "foo__bar_id", "COMMENT ON COLUMN \"foo\".\"bar_id\" IS 'Ohai!'")]
#[case("constraint", "foo__not_for_you", "COMMENT ON CONSTRAINT \"not_for_you\" ON \"foo\" IS 'Ohai!'")]
#[case("rule", "foo__not_for_you", "COMMENT ON RULE \"not_for_you\" ON \"foo\" IS 'Ohai!'")]
#[case("trigger", "foo__spoing", "COMMENT ON TRIGGER \"spoing\" ON \"foo\" IS 'Ohai!'")]
fn test_contained_types_from_token(
    #[case] tag: &str,
    #[case] token: &str,
    #[case] expected: &str,
) {
    assert_eq!(generate(tag, token, "Ohai!"), expected);
}

#[test]
fn test_contained_type_from_pair() {
    assert_eq!(
        generate("column", ("foo", "bar_id"), "x"),
        "COMMENT ON COLUMN \"foo\".\"bar_id\" IS 'x'"
    );
    assert_eq!(
        generate(
            "trigger",
            (Identifier::raw("app.foo"), Identifier::name("spoing")),
            "x"
        ),
        "COMMENT ON TRIGGER \"spoing\" ON app.foo IS 'x'"
    );
}

#[test]
fn test_contained_type_splits_on_first_separator() {
    assert_eq!(
        generate("column", "foo__bar__baz", "x"),
        "COMMENT ON COLUMN \"foo\".\"bar__baz\" IS 'x'"
    );
}

#[test]
fn test_unbound_contained_type_cannot_generate() {
    let sql = CommentSql::create("column", "bar_id", "x").unwrap();
    assert!(sql.needs_table());

    let err = sql.generate().unwrap_err();
    assert!(matches!(err, CommentError::MissingTableName { .. }));

    let bound = sql.bind(&Identifier::name("foo")).unwrap();
    assert_eq!(bound.to_sql(), "COMMENT ON COLUMN \"foo\".\"bar_id\" IS 'x'");
}

#[test]
fn test_prefixed_statement() {
    let pending = PendingComment::prefixed(ObjectType::Index, "_pkey", "Ohai, pkey!");
    let sql = CommentSql::from(pending.clone());
    assert!(matches!(
        sql.generate(),
        Err(CommentError::MissingTableName { .. })
    ));

    let statement = pending.bind(&Identifier::name("foo")).unwrap();
    assert_snapshot!(statement.to_sql(), @r#"COMMENT ON INDEX "foo_pkey" IS 'Ohai, pkey!'"#);
}

#[test]
fn test_every_type_renders_its_keyword() {
    for object_type in ObjectType::all() {
        let id: ObjectRef = if object_type.is_contained() {
            ("tbl", "obj").into()
        } else {
            "obj".into()
        };
        let sql = CommentSql::new(object_type, id, Some("c".to_string()))
            .unwrap()
            .generate()
            .unwrap();
        assert!(
            sql.starts_with(&format!("COMMENT ON {} ", object_type.as_sql())),
            "{sql}"
        );
        assert!(sql.ends_with(" IS 'c'"), "{sql}");
    }
}

#[test]
fn test_multiline_comment_snapshot() {
    let sql = generate("view", "gold_albums", "Albums that sold\nover half a million");
    assert_snapshot!(sql, @r#"
    COMMENT ON VIEW "gold_albums" IS 'Albums that sold
    over half a million'
    "#);
}
