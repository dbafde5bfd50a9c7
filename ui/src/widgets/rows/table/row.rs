//! Row rendering for the rows table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use rowbook_business::Row;

use super::cells::{render_action_buttons, render_date_cell, render_name_cell, render_value_cell};

/// A per-row button press, applied after the table is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Delete(u64),
    Edit(u64),
}

/// Renders a single data row.
///
/// Returns the clicked action, if any.
#[inline]
pub fn render_data_row(table_row: &mut TableRow<'_, '_>, row: &Row) -> Option<RowAction> {
    let mut action = None;

    table_row.col(|ui| {
        render_name_cell(ui, &row.name);
        draw_cell_bottom_border(ui);
    });

    table_row.col(|ui| {
        render_date_cell(ui, &row.date);
        draw_cell_bottom_border(ui);
    });

    table_row.col(|ui| {
        render_value_cell(ui, row.value);
        draw_cell_bottom_border(ui);
    });

    table_row.col(|ui| {
        action = render_action_buttons(ui, row.id);
        draw_cell_bottom_border(ui);
    });

    action
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
