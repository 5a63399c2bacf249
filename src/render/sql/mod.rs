//! Structural DDL rendering for the schema builders
//!
//! These statements run before any comment is set, so every object a queued
//! comment refers to exists by the time the comment is executed.

pub mod constraint;
pub mod index;
pub mod table;
pub mod view;

pub use constraint::{render_add_constraint, render_constraint_clause, render_drop_constraint};
pub use index::render_create_index;
pub use table::{
    render_add_column, render_column_definition, render_create_table, render_create_table_as,
    render_drop_column,
};
pub use view::render_create_view;
