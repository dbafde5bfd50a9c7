//! Rows domain module.
//!
//! This module is the single home for:
//! - `row`: the record type, seed data and date parsing
//! - `validation`: the pure draft validator and its error map
//! - `sort`: column comparators and the header sort cycle
//! - `state`: `RowsState`, the view-model the UI reads and drives
//!
//! UI code under `ui/src/widgets/**` should not mutate rows itself.
//! It reads through `RowsState` getters and calls its handlers.

pub mod row;
pub mod sort;
pub mod state;
pub mod validation;

pub use row::{DATE_FORMAT, Row, format_date, parse_date, seed_rows};
pub use sort::{
    SortColumn, SortDirection, SortState, compare_by_date, compare_by_name, compare_by_value,
};
pub use state::{ConfirmOutcome, RowsState};
pub use validation::{
    Field, FieldErrors, INVALID_DATE, NAME_REQUIRED, VALUE_NOT_POSITIVE, ValidationError, validate,
};
