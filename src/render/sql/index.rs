//! Shared SQL rendering for CREATE INDEX statements

use crate::identifier::Identifier;
use crate::render::quote_ident;
use crate::render::sql::constraint::column_list;
use crate::schema::defs::IndexDef;

/// Render a CREATE [UNIQUE] INDEX statement.
///
/// `name` is the resolved index name; unnamed indexes have already been given
/// their conventional `<table>_<columns>_index` name by the caller.
pub fn render_create_index(table: &Identifier, name: &str, index: &IndexDef) -> String {
    let mut sql = String::from("CREATE ");
    if index.unique {
        sql.push_str("UNIQUE ");
    }
    sql.push_str("INDEX ");
    sql.push_str(&quote_ident(name));

    sql.push_str(" ON ");
    sql.push_str(&table.to_sql());

    sql.push_str(&format!(" ({})", column_list(&index.columns)));

    sql
}
