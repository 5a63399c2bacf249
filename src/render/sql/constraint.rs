//! Shared SQL rendering for table constraints
//!
//! The same clause is used inside CREATE TABLE and after ALTER TABLE ... ADD,
//! so both paths produce identical constraint definitions.

use itertools::Itertools;

use crate::identifier::Identifier;
use crate::render::quote_ident;
use crate::schema::defs::TableConstraint;

/// `"a", "b"`
pub(crate) fn column_list(columns: &[String]) -> String {
    columns.iter().map(|c| quote_ident(c)).join(", ")
}

/// Render the constraint clause, e.g. `CONSTRAINT "foo_pkey" PRIMARY KEY ("a", "b")`.
///
/// Handles:
/// - PRIMARY KEY and UNIQUE column lists
/// - FOREIGN KEY with optional referenced columns and ON DELETE/UPDATE actions
/// - CHECK, wrapping the expression unless it already carries the keyword
pub fn render_constraint_clause(constraint: &TableConstraint) -> String {
    match constraint {
        TableConstraint::PrimaryKey { name, columns } => format!(
            "CONSTRAINT {} PRIMARY KEY ({})",
            quote_ident(name),
            column_list(columns)
        ),
        TableConstraint::Unique { name, columns } => format!(
            "CONSTRAINT {} UNIQUE ({})",
            quote_ident(name),
            column_list(columns)
        ),
        TableConstraint::ForeignKey {
            name,
            columns,
            references,
            referenced_columns,
            on_delete,
            on_update,
        } => {
            let mut fk_def = format!(
                "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {}",
                quote_ident(name),
                column_list(columns),
                references.to_sql()
            );

            if !referenced_columns.is_empty() {
                fk_def.push_str(&format!(" ({})", column_list(referenced_columns)));
            }
            if let Some(on_delete) = on_delete {
                fk_def.push_str(&format!(" ON DELETE {}", on_delete));
            }
            if let Some(on_update) = on_update {
                fk_def.push_str(&format!(" ON UPDATE {}", on_update));
            }

            fk_def
        }
        TableConstraint::Check { name, expression } => {
            let check = if expression.trim_start().starts_with("CHECK") {
                expression.clone()
            } else {
                format!("CHECK ({})", expression)
            };

            match name {
                Some(name) => format!("CONSTRAINT {} {}", quote_ident(name), check),
                None => check,
            }
        }
    }
}

pub fn render_add_constraint(table: &Identifier, constraint: &TableConstraint) -> String {
    format!(
        "ALTER TABLE {} ADD {}",
        table.to_sql(),
        render_constraint_clause(constraint)
    )
}

pub fn render_drop_constraint(table: &Identifier, name: &str) -> String {
    format!(
        "ALTER TABLE {} DROP CONSTRAINT {}",
        table.to_sql(),
        quote_ident(name)
    )
}
