//! The create/edit modal form.

use chrono::NaiveDate;
use egui::{
    Align2, Color32, DragValue, Frame, InnerResponse, Margin, RichText, Stroke, TextEdit,
    Ui, Window,
};
use egui_extras::DatePickerButton;
use rowbook_business::{DATE_FORMAT, Field, FieldErrors, RowsState, format_date};

pub const MODAL_TITLE: &str = "Введите информацию";
pub const OK_LABEL: &str = "OK";
pub const CANCEL_LABEL: &str = "Отмена";
pub const NAME_HINT: &str = "Имя";
pub const VALUE_HINT: &str = "Значение";

const FIELD_WIDTH: f32 = 220.0;
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 50, 47);

/// A button press at the bottom of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Confirm,
    Cancel,
}

/// Shows the modal while `state.is_modal_open()`.
///
/// Returns the button the user pressed this frame. Closing the window with
/// its title-bar button counts as cancel.
pub fn show_row_modal(
    state: &mut RowsState,
    today: NaiveDate,
    ui: &mut Ui,
) -> Option<FormAction> {
    if !state.is_modal_open() {
        return None;
    }

    let mut open = true;
    let mut action = None;

    Window::new(MODAL_TITLE)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            let errors = state.errors().clone();

            name_field(ui, state, &errors);
            ui.add_space(12.0);
            date_field(ui, state, &errors, today);
            ui.add_space(12.0);
            value_field(ui, state, &errors);
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui.button(CANCEL_LABEL).clicked() {
                    action = Some(FormAction::Cancel);
                }
                if ui.button(OK_LABEL).clicked() {
                    action = Some(FormAction::Confirm);
                }
            });
        });

    if !open {
        action = Some(FormAction::Cancel);
    }

    action
}

fn name_field(ui: &mut Ui, state: &mut RowsState, errors: &FieldErrors) {
    let mut clear = false;

    field_frame(ui, errors.contains(Field::Name), |ui| {
        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut state.draft_mut().name)
                    .hint_text(NAME_HINT)
                    .desired_width(FIELD_WIDTH),
            );
            let has_text = !state.draft().name.is_empty();
            if has_text && ui.small_button("✖").on_hover_text("Очистить").clicked() {
                clear = true;
            }
        });
    });
    field_error(ui, errors, Field::Name);

    if clear {
        state.clear_draft_name();
    }
}

/// Date picker plus the raw text, so an unparsable value stays visible and
/// editable. The picker opens on today when the text does not parse.
fn date_field(ui: &mut Ui, state: &mut RowsState, errors: &FieldErrors, today: NaiveDate) {
    let mut picked = state.draft().parsed_date().unwrap_or(today);
    let before = picked;

    field_frame(ui, errors.contains(Field::Date), |ui| {
        ui.horizontal(|ui| {
            let response = ui.add(
                DatePickerButton::new(&mut picked)
                    .id_salt("row_draft_date")
                    .format(DATE_FORMAT),
            );
            if picked != before || response.changed() {
                state.set_draft_date(format_date(picked));
            }

            ui.add(
                TextEdit::singleline(&mut state.draft_mut().date)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(100.0),
            );
        });
    });
    field_error(ui, errors, Field::Date);
}

fn value_field(ui: &mut Ui, state: &mut RowsState, errors: &FieldErrors) {
    field_frame(ui, errors.contains(Field::Value), |ui| {
        ui.horizontal(|ui| {
            ui.label(VALUE_HINT);
            ui.add(
                DragValue::new(&mut state.draft_mut().value)
                    .range(0.0..=f64::MAX)
                    .speed(1.0),
            );
        });
    });
    field_error(ui, errors, Field::Value);
}

/// Wraps a field in a red outline when it has an error.
fn field_frame<R>(
    ui: &mut Ui,
    has_error: bool,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    let stroke = if has_error {
        Stroke::new(1.5, ERROR_COLOR)
    } else {
        Stroke::NONE
    };

    Frame::NONE
        .stroke(stroke)
        .inner_margin(Margin::same(4))
        .corner_radius(4.0)
        .show(ui, add_contents)
}

fn field_error(ui: &mut Ui, errors: &FieldErrors, field: Field) {
    if let Some(message) = errors.get(field) {
        ui.label(RichText::new(message).color(ERROR_COLOR).small());
    }
}
