//! State holder for the rows table and its modal form.
//!
//! The UI only reads through the getters and mutates through the handler
//! methods below; nothing else touches the collection.

use chrono::NaiveDate;
use log::{debug, info, warn};

use super::row::{Row, seed_rows};
use super::sort::{SortColumn, SortState};
use super::validation::{FieldErrors, validate};

/// What a confirm attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Validation failed; nothing changed except the error map.
    Rejected,
    /// The draft was appended as a new row.
    Added(u64),
    /// An existing row was overwritten by the draft.
    Updated(u64),
}

#[derive(Debug, Clone)]
pub struct RowsState {
    rows: Vec<Row>,
    draft: Row,
    modal_open: bool,
    errors: FieldErrors,
    sort: SortState,
    /// Next id handed to a create draft. Only ever grows.
    next_id: u64,
}

impl Default for RowsState {
    fn default() -> Self {
        Self::with_rows(Vec::new(), NaiveDate::default())
    }
}

impl RowsState {
    /// State with the seed rows, draft dated `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        Self::with_rows(seed_rows(), today)
    }

    pub fn with_rows(rows: Vec<Row>, today: NaiveDate) -> Self {
        let next_id = rows.iter().map(|r| r.id).max().map_or(1, following_id);
        Self {
            draft: Row::blank(next_id, today),
            rows,
            modal_open: false,
            errors: FieldErrors::new(),
            sort: SortState::default(),
            next_id,
        }
    }

    // =====================
    // Handlers
    // =====================

    /// Starts a new record and shows the modal.
    ///
    /// Ignored while the modal is already open, so an unsaved draft is never
    /// replaced. Returns whether a form was opened.
    pub fn open_for_create(&mut self, today: NaiveDate) -> bool {
        if self.modal_open {
            debug!("Create requested while form is open, ignoring");
            return false;
        }

        self.draft = Row::blank(self.next_id, today);
        self.modal_open = true;
        debug!("Opened create form, draft id={}", self.draft.id);
        true
    }

    /// Copies the row with `id` into the draft and shows the modal.
    ///
    /// Returns `false` (and leaves everything untouched) if no such row exists
    /// or the modal is already open.
    pub fn open_for_edit(&mut self, id: u64) -> bool {
        if self.modal_open {
            debug!("Edit requested for row id={id} while form is open, ignoring");
            return false;
        }

        let Some(row) = self.find(id) else {
            debug!("Edit requested for missing row id={id}");
            return false;
        };

        self.draft = row.clone();
        self.modal_open = true;
        debug!("Opened edit form for row id={id}");
        true
    }

    /// Removes the row with `id`. Missing ids are ignored.
    ///
    /// The table sits behind the modal, so deletes are ignored while it is
    /// open; otherwise confirming an edit would resurrect the deleted row.
    pub fn delete(&mut self, id: u64) {
        if self.modal_open {
            debug!("Delete requested for row id={id} while form is open, ignoring");
            return;
        }

        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        debug!("Deleted row id={id}, removed {}", before - self.rows.len());
    }

    /// Validates the draft and commits it.
    ///
    /// On failure the modal stays open and `errors()` describes why. On
    /// success the draft replaces the row with the same id, or is appended
    /// when there is none; then the draft is reset and the modal closes.
    pub fn confirm(&mut self, today: NaiveDate) -> ConfirmOutcome {
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            debug!("Rejected draft id={}: {:?}", self.draft.id, self.errors.fields());
            return ConfirmOutcome::Rejected;
        }

        let draft = self.draft.clone();
        let id = draft.id;
        let position = self.rows.iter().position(|row| row.id == id);
        let outcome = if let Some(index) = position {
            self.rows[index] = draft;
            info!("Updated row id={id}");
            ConfirmOutcome::Updated(id)
        } else {
            self.rows.push(draft);
            self.next_id = self.next_id.max(following_id(id));
            info!("Added row id={id}");
            ConfirmOutcome::Added(id)
        };

        self.draft = Row::blank(self.next_id, today);
        self.modal_open = false;
        outcome
    }

    /// Discards the draft and hides the modal.
    ///
    /// Errors from an earlier rejected confirm are kept until the next confirm.
    pub fn cancel(&mut self, today: NaiveDate) {
        self.draft = Row::blank(self.next_id, today);
        self.modal_open = false;
        debug!("Cancelled form");
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        debug!("Sort is now {:?}", self.sort.active());
    }

    // =====================
    // Draft field setters
    // =====================

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn clear_draft_name(&mut self) {
        self.draft.name.clear();
    }

    pub fn set_draft_date(&mut self, date: impl Into<String>) {
        self.draft.date = date.into();
    }

    pub fn set_draft_value(&mut self, value: f64) {
        self.draft.value = value;
    }

    /// Direct access for widgets that bind to the draft fields in place.
    pub fn draft_mut(&mut self) -> &mut Row {
        &mut self.draft
    }

    // =====================
    // Getters
    // =====================

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Rows in the order the table shows them.
    pub fn sorted_rows(&self) -> Vec<&Row> {
        self.sort.apply(&self.rows)
    }

    pub fn find(&self, id: u64) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn draft(&self) -> &Row {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

/// The id after `id`. Pinned at `u64::MAX` rather than wrapping.
fn following_id(id: u64) -> u64 {
    id.checked_add(1).unwrap_or_else(|| {
        warn!("Row id space exhausted at id={id}");
        u64::MAX
    })
}
