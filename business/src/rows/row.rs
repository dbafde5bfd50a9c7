//! Row record and date helpers.

use chrono::{DateTime, NaiveDate};

/// Display and storage format for `Row::date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A record in the table.
///
/// The same type doubles as the draft buffer edited by the modal form,
/// so a freshly opened draft is just a `Row` that is not yet in the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: u64,
    pub name: String,
    /// `YYYY-MM-DD`. Kept as text so the form can hold unparsable input
    /// until validation rejects it.
    pub date: String,
    pub value: f64,
}

impl Row {
    pub fn new(id: u64, name: impl Into<String>, date: impl Into<String>, value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            date: date.into(),
            value,
        }
    }

    /// A blank draft: empty name, `today` as date, zero value.
    pub fn blank(id: u64, today: NaiveDate) -> Self {
        Self::new(id, String::new(), format_date(today), 0.0)
    }

    /// The parsed calendar date, if `date` is valid.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Parses a row date.
///
/// `YYYY-MM-DD` is the primary form. RFC 3339 timestamps are also accepted
/// (the date part is kept) so pasted timestamps are not rejected outright.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[inline]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The rows every session starts with.
pub fn seed_rows() -> Vec<Row> {
    vec![
        Row::new(1, "Иван", "2025-08-19", 42.0),
        Row::new(2, "Мария", "2025-08-18", 73.0),
        Row::new(3, "Анна", "2025-08-15", 15.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date("2025-09-01"),
            NaiveDate::from_ymd_opt(2025, 9, 1)
        );
    }

    #[test]
    fn parse_date_accepts_rfc3339_timestamps() {
        assert_eq!(
            parse_date("2025-09-01T10:30:00Z"),
            NaiveDate::from_ymd_opt(2025, 9, 1)
        );
    }

    #[test]
    fn parse_date_rejects_garbage_and_impossible_dates() {
        assert!(parse_date("").is_none());
        assert!(parse_date("   ").is_none());
        assert!(parse_date("not a date").is_none());
        assert!(parse_date("2025-02-30").is_none());
        assert!(parse_date("2025-13-01").is_none());
    }

    #[test]
    fn blank_row_uses_today() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let row = Row::blank(7, today);

        assert_eq!(row.id, 7);
        assert!(row.name.is_empty());
        assert_eq!(row.date, "2026-01-05");
        assert_eq!(row.value, 0.0);
    }

    #[test]
    fn seed_rows_have_distinct_ids() {
        let rows = seed_rows();
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
