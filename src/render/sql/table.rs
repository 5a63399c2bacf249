//! Shared SQL rendering for CREATE TABLE and column statements

use itertools::Itertools;

use crate::identifier::Identifier;
use crate::render::sql::constraint::render_constraint_clause;
use crate::schema::defs::{Column, TableConstraint};

/// Render a single column definition as it appears inside CREATE TABLE or ADD COLUMN.
///
/// Handles:
/// - DEFAULT expressions (emitted verbatim)
/// - NOT NULL
/// - inline PRIMARY KEY for single-column keys
/// - inline REFERENCES for single-column foreign keys
pub fn render_column_definition(column: &Column) -> String {
    let mut def = format!("{} {}", column.name.to_sql(), column.data_type);

    if let Some(ref default) = column.default {
        def.push_str(&format!(" DEFAULT {}", default));
    }

    if column.not_null {
        def.push_str(" NOT NULL");
    }

    if column.primary_key {
        def.push_str(" PRIMARY KEY");
    }

    if let Some(ref table) = column.references {
        def.push_str(&format!(" REFERENCES {}", table.to_sql()));
        if let Some(ref action) = column.on_delete {
            def.push_str(&format!(" ON DELETE {}", action));
        }
    }

    def
}

/// Render a complete CREATE TABLE statement, columns first and then table constraints.
pub fn render_create_table(
    table: &Identifier,
    columns: &[Column],
    constraints: &[TableConstraint],
) -> String {
    let mut sql = format!("CREATE TABLE {} (\n", table.to_sql());

    let definitions = columns
        .iter()
        .map(render_column_definition)
        .chain(constraints.iter().map(render_constraint_clause))
        .map(|def| format!("    {}", def))
        .join(",\n");

    sql.push_str(&definitions);
    sql.push_str("\n)");

    sql
}

pub fn render_create_table_as(table: &Identifier, query: &str) -> String {
    format!("CREATE TABLE {} AS {}", table.to_sql(), query)
}

pub fn render_add_column(table: &Identifier, column: &Column) -> String {
    format!(
        "ALTER TABLE {} ADD COLUMN {}",
        table.to_sql(),
        render_column_definition(column)
    )
}

pub fn render_drop_column(table: &Identifier, column: &Identifier) -> String {
    format!("ALTER TABLE {} DROP COLUMN {}", table.to_sql(), column.to_sql())
}
