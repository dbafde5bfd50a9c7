//! Draft validation.
//!
//! `validate` is pure: it never touches `RowsState`. The state holder stores
//! whatever map it returns, replacing the previous one wholesale.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use super::row::{Row, parse_date};

pub const NAME_REQUIRED: &str = "Имя обязательно";
pub const INVALID_DATE: &str = "Некорректная дата";
pub const VALUE_NOT_POSITIVE: &str = "Значение должно быть больше 0";

/// A validated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Date,
    Value,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Date, Self::Value];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Value => "value",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field-level error messages. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }

    /// `Ok(())` when empty, otherwise a `ValidationError` carrying the map.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors: self })
        }
    }
}

/// A draft failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid draft: {}", describe(.errors))]
pub struct ValidationError {
    pub errors: FieldErrors,
}

fn describe(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks a draft and returns every failing field.
pub fn validate(draft: &Row) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if parse_date(&draft.date).is_none() {
        errors.insert(Field::Date, INVALID_DATE);
    }

    // NaN and infinities are never a usable amount.
    if !draft.value.is_finite() || draft.value <= 0.0 {
        errors.insert(Field::Value, VALUE_NOT_POSITIVE);
    }

    errors
}
