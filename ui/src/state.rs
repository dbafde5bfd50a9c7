use chrono::{NaiveDate, Utc};
use rowbook_business::{RowbookConfig, RowsState};

/// The main application state.
pub struct State {
    /// Settings read at startup.
    pub config: RowbookConfig,
    /// The table and its modal form.
    pub rows: RowsState,
    /// Date given to new drafts.
    pub today: NaiveDate,
    /// Whether `tick` follows the system clock. Tests pin the date.
    follow_clock: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(RowbookConfig::from_env())
    }
}

impl State {
    pub fn new(config: RowbookConfig) -> Self {
        let today = system_today();
        let rows = if config.seed {
            RowsState::seeded(today)
        } else {
            RowsState::with_rows(Vec::new(), today)
        };

        Self {
            config,
            rows,
            today,
            follow_clock: true,
        }
    }

    /// Seeded state with a fixed date.
    pub fn test(today: NaiveDate) -> Self {
        Self {
            config: RowbookConfig::default(),
            rows: RowsState::seeded(today),
            today,
            follow_clock: false,
        }
    }

    /// Refreshes `today` once per frame so a session open past midnight
    /// starts new drafts on the right date.
    pub fn tick(&mut self) {
        if self.follow_clock {
            self.today = system_today();
        }
    }
}

/// Current UTC date, matching the ISO date the web build would show.
fn system_today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseeded_config_starts_empty() {
        let state = State::new(RowbookConfig {
            seed: false,
            ..RowbookConfig::default()
        });
        assert!(state.rows.rows().is_empty());
    }

    #[test]
    fn test_state_keeps_pinned_date() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let mut state = State::test(today);
        state.tick();
        assert_eq!(state.today, today);
        assert_eq!(state.rows.rows().len(), 3);
    }
}
