//! Renders generated rows as INSERT statements, one per line.

use crate::generator::{GeneratedData, Row};
use crate::schema::Table;

/// Render one row, without the trailing newline
pub fn render_statement(table: Table, row: &Row) -> String {
    let values: Vec<String> = row.iter().map(|v| v.to_sql()).collect();
    format!("{}({});", table.insert_prefix(), values.join(", "))
}

/// Render all tables in order, each statement newline-terminated
pub fn render_to_string(data: &GeneratedData) -> String {
    let mut out = String::new();
    for table in &data.tables {
        for row in &table.rows {
            out.push_str(&render_statement(table.table, row));
            out.push('\n');
        }
    }
    out
}
