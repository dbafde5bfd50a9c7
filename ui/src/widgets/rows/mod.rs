//! Rows management module.
//!
//! This module contains the rows panel widget and its submodules:
//! - `panel`: Toolbar, table and modal wiring
//! - `modal`: The create/edit form
//! - `table`: Table rendering components (columns, header, row, cells)

pub mod modal;
mod panel;
pub mod table;

pub use modal::{FormAction, show_row_modal};
pub use panel::{ADD_LABEL, rows_panel};
