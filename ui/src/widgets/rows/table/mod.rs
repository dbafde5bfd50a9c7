//! Table components for the rows panel.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Sortable header rendering
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Layout, Ui};
use egui_extras::TableBuilder;
use rowbook_business::{Row, SortColumn, SortState};

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::{RowAction, render_data_row};

/// What the user clicked while the table was drawn.
#[derive(Debug, Default)]
pub struct TableResult {
    pub sort_clicked: Option<SortColumn>,
    pub action: Option<RowAction>,
}

/// Renders `rows` (already in display order).
pub fn render_rows_table(ui: &mut Ui, rows: &[&Row], sort: SortState) -> TableResult {
    let mut result = TableResult::default();

    let mut builder = TableBuilder::new(ui)
        .id_salt("rows_table")
        .striped(true)
        .cell_layout(Layout::left_to_right(egui::Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            result.sort_clicked = render_table_header(&mut header, sort);
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut table_row| {
                let row = rows[table_row.index()];
                if let Some(action) = render_data_row(&mut table_row, row) {
                    result.action = Some(action);
                }
            });
        });

    result
}
