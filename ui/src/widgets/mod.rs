pub mod rows;

pub use rows::{ADD_LABEL, rows_panel};
