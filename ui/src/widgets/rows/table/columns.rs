//! Column definitions for the rows table.

use egui_extras::Column;
use rowbook_business::SortColumn;

/// Fixed column widths for consistent table layout
pub const DATE_WIDTH: f32 = 110.0;
pub const VALUE_WIDTH: f32 = 110.0;
pub const ACTIONS_WIDTH: f32 = 90.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 28.0;

/// A table column, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    Name,
    Date,
    Value,
    Actions,
}

impl TableColumn {
    pub const ALL: [Self; 4] = [Self::Name, Self::Date, Self::Value, Self::Actions];

    pub fn title(self) -> &'static str {
        match self {
            Self::Name => "Имя",
            Self::Date => "Дата",
            Self::Value => "Значение",
            Self::Actions => "Действия",
        }
    }

    /// The sort key behind this column; `None` for the actions column.
    pub fn sort_column(self) -> Option<SortColumn> {
        match self {
            Self::Name => Some(SortColumn::Name),
            Self::Date => Some(SortColumn::Date),
            Self::Value => Some(SortColumn::Value),
            Self::Actions => None,
        }
    }
}

/// Table column configuration, in `TableColumn::ALL` order.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::remainder().at_least(120.0), // Name - flexible
        Column::exact(DATE_WIDTH),           // Date - fixed
        Column::exact(VALUE_WIDTH),          // Value - fixed
        Column::exact(ACTIONS_WIDTH),        // Actions - fixed
    ]
}
