//! Table header rendering for the rows table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use rowbook_business::{SortColumn, SortDirection, SortState};

use super::columns::TableColumn;

/// Header label with the sort indicator of the active column.
pub fn header_label(column: TableColumn, sort: SortState) -> String {
    let indicator = column
        .sort_column()
        .and_then(|key| sort.direction_for(key))
        .map(|direction| match direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        })
        .unwrap_or_default();

    format!("{}{indicator}", column.title())
}

/// Renders the table header.
///
/// Returns the column whose header was clicked, if any.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, sort: SortState) -> Option<SortColumn> {
    let mut clicked = None;

    for column in TableColumn::ALL {
        header.col(|ui| {
            if render_header_cell(ui, column, sort) {
                clicked = column.sort_column();
            }
        });
    }

    clicked
}

/// Sortable headers are frameless buttons; the actions header is plain text.
#[inline]
fn render_header_cell(ui: &mut Ui, column: TableColumn, sort: SortState) -> bool {
    let label = RichText::new(header_label(column, sort)).strong();

    ui.centered_and_justified(|ui| {
        if column.sort_column().is_some() {
            ui.add(Button::new(label).frame(false))
                .on_hover_text("Сортировать")
                .clicked()
        } else {
            ui.label(label);
            false
        }
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsorted_headers_have_no_indicator() {
        let sort = SortState::default();
        assert_eq!(header_label(TableColumn::Name, sort), "Имя");
        assert_eq!(header_label(TableColumn::Actions, sort), "Действия");
    }

    #[test]
    fn active_column_shows_direction() {
        let sort = SortState::new(SortColumn::Date, SortDirection::Descending);
        assert_eq!(header_label(TableColumn::Date, sort), "Дата ▼");
        assert_eq!(header_label(TableColumn::Value, sort), "Значение");
    }
}
