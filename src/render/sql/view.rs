//! Shared SQL rendering for CREATE VIEW statements

use crate::identifier::Identifier;

pub fn render_create_view(name: &Identifier, query: &str, materialized: bool) -> String {
    let kind = if materialized {
        "MATERIALIZED VIEW"
    } else {
        "VIEW"
    };
    format!("CREATE {} {} AS {}", kind, name.to_sql(), query)
}
