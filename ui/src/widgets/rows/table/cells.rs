//! Cell rendering functions for the rows table.

use egui::{Button, Color32, RichText, Ui};

use super::row::RowAction;

#[inline]
pub fn render_name_cell(ui: &mut Ui, name: &str) {
    ui.label(name);
}

#[inline]
pub fn render_date_cell(ui: &mut Ui, date: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(date).monospace());
    });
}

/// Values print without a trailing `.0` for whole numbers.
#[inline]
pub fn render_value_cell(ui: &mut Ui, value: f64) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(format_value(value)).monospace());
    });
}

pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Renders the delete and edit buttons.
///
/// Returns the action to start if any button was clicked.
#[inline]
pub fn render_action_buttons(ui: &mut Ui, id: u64) -> Option<RowAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui
            .add(Button::new(RichText::new("🗑").color(Color32::RED)))
            .on_hover_text("Удалить")
            .clicked()
        {
            action = Some(RowAction::Delete(id));
        }
        if ui.button("✏").on_hover_text("Редактировать").clicked() {
            action = Some(RowAction::Edit(id));
        }
    });

    action
}
