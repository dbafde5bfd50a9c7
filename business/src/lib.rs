//! Domain logic for Rowbook: the row collection, the draft form, validation
//! and sorting. Nothing here depends on egui.

mod config;
pub mod rows;

pub use config::{ConfigError, ENV_PREFIX, RowbookConfig};
pub use rows::{
    ConfirmOutcome, DATE_FORMAT, Field, FieldErrors, INVALID_DATE, NAME_REQUIRED, Row, RowsState,
    SortColumn, SortDirection, SortState, VALUE_NOT_POSITIVE, ValidationError, compare_by_date,
    compare_by_name, compare_by_value, format_date, parse_date, seed_rows, validate,
};
