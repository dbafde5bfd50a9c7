//! Column comparators and the header sort cycle.
//!
//! Comparators are plain functions over `Row` so they can be tested without
//! a UI. Sorting only ever produces a view; the stored collection keeps its
//! insertion order.

use std::cmp::Ordering;

use super::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Date,
    Value,
}

impl SortColumn {
    pub fn comparator(self) -> fn(&Row, &Row) -> Ordering {
        match self {
            Self::Name => compare_by_name,
            Self::Date => compare_by_date,
            Self::Value => compare_by_value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Case-insensitive ordering, falling back to the raw text so distinct
/// names never compare equal.
pub fn compare_by_name(a: &Row, b: &Row) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Chronological ordering. Unparsable dates sort before every valid one.
pub fn compare_by_date(a: &Row, b: &Row) -> Ordering {
    a.parsed_date().cmp(&b.parsed_date())
}

pub fn compare_by_value(a: &Row, b: &Row) -> Ordering {
    a.value.total_cmp(&b.value)
}

/// Active sort for the table, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(SortColumn, SortDirection)>,
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            active: Some((column, direction)),
        }
    }

    pub fn active(&self) -> Option<(SortColumn, SortDirection)> {
        self.active
    }

    pub fn direction_for(&self, column: SortColumn) -> Option<SortDirection> {
        self.active
            .and_then(|(active, direction)| (active == column).then_some(direction))
    }

    /// Header click: ascending, then descending, then unsorted.
    /// Clicking another column starts it at ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        self.active = match self.active {
            Some((active, SortDirection::Ascending)) if active == column => {
                Some((column, SortDirection::Descending))
            }
            Some((active, SortDirection::Descending)) if active == column => None,
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    /// Rows in display order. Stable, so ties keep insertion order.
    pub fn apply<'a>(&self, rows: &'a [Row]) -> Vec<&'a Row> {
        let mut view: Vec<&Row> = rows.iter().collect();
        if let Some((column, direction)) = self.active {
            let compare = column.comparator();
            view.sort_by(|a, b| match direction {
                SortDirection::Ascending => compare(a, b),
                SortDirection::Descending => compare(b, a),
            });
        }
        view
    }
}
