//! Main panel: toolbar, table and modal.

use chrono::NaiveDate;
use egui::{Color32, Frame, Margin, Response, ScrollArea, Stroke, Ui};
use rowbook_business::RowsState;

use super::modal::{FormAction, show_row_modal};
use super::table::render_rows_table;
use super::table::row::RowAction;

pub const ADD_LABEL: &str = "➕ Добавить";

/// Border color for the table frame (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Displays the rows panel.
///
/// `today` seeds the date of new drafts. While the modal is open the toolbar
/// and table are disabled, so only the modal can close the form.
pub fn rows_panel(state: &mut RowsState, today: NaiveDate, ui: &mut Ui) -> Response {
    let blocked = state.is_modal_open();

    let response = ui.add_enabled_ui(!blocked, |ui| {
        ui.vertical(|ui| {
            let open_create = ui.button(ADD_LABEL).clicked();

            ui.add_space(8.0);

            // Collect actions first; the table borrows the rows while drawing.
            let rows = state.sorted_rows();
            let table = Frame::NONE
                .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                .inner_margin(Margin::ZERO)
                .show(ui, |ui| {
                    ScrollArea::horizontal()
                        .show(ui, |ui| render_rows_table(ui, &rows, state.sort()))
                        .inner
                })
                .inner;

            (open_create, table)
        })
        .inner
    });
    let (open_create, table) = response.inner;

    if !blocked {
        if let Some(column) = table.sort_clicked {
            state.toggle_sort(column);
        }

        match table.action {
            Some(RowAction::Delete(id)) => state.delete(id),
            Some(RowAction::Edit(id)) => {
                state.open_for_edit(id);
            }
            None => {}
        }

        if open_create {
            state.open_for_create(today);
        }
    }

    match show_row_modal(state, today, ui) {
        Some(FormAction::Confirm) => {
            state.confirm(today);
        }
        Some(FormAction::Cancel) => state.cancel(today),
        None => {}
    }

    response.response
}
