use log::warn;
use serde::Deserialize;
use thiserror::Error;

/// Prefix for every environment variable the app reads.
pub const ENV_PREFIX: &str = "ROWBOOK_";

const DEFAULT_WINDOW_WIDTH: f32 = 720.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 480.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read ROWBOOK_* environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("{name} must be a positive number, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}

/// Raw environment values, prefix already stripped.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    seed: Option<bool>,
    window_width: Option<f32>,
    window_height: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowbookConfig {
    /// Start the session with the three seed rows.
    pub seed: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for RowbookConfig {
    fn default() -> Self {
        Self {
            seed: true,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl RowbookConfig {
    /// Reads `ROWBOOK_*` variables from the process environment.
    ///
    /// Malformed values are logged and replaced by the defaults; startup never
    /// fails because of configuration. On wasm there is no environment, so the
    /// defaults are returned directly.
    pub fn from_env() -> Self {
        if cfg!(target_arch = "wasm32") {
            return Self::default();
        }

        Self::from_vars(std::env::vars()).unwrap_or_else(|err| {
            warn!("Ignoring invalid configuration: {err}");
            Self::default()
        })
    }

    /// Builds a config from `(key, value)` pairs, keeping only `ROWBOOK_*` keys.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let scoped: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|stripped| (stripped.to_owned(), value.as_ref().to_owned()))
            })
            .collect();

        let raw: RawConfig = serde_env::from_iter(scoped)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let window_width = positive("ROWBOOK_WINDOW_WIDTH", raw.window_width)?
            .unwrap_or(defaults.window_width);
        let window_height = positive("ROWBOOK_WINDOW_HEIGHT", raw.window_height)?
            .unwrap_or(defaults.window_height);

        Ok(Self {
            seed: raw.seed.unwrap_or(defaults.seed),
            window_width,
            window_height,
        })
    }
}

fn positive(name: &'static str, value: Option<f32>) -> Result<Option<f32>, ConfigError> {
    match value {
        Some(value) if value.is_nan() || value <= 0.0 => {
            Err(ConfigError::NonPositive { name, value })
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = RowbookConfig::from_vars(Vec::<(String, String)>::new())
            .expect("empty env should deserialize");
        assert_eq!(config, RowbookConfig::default());
        assert!(config.seed);
    }

    #[test]
    fn reads_prefixed_variables() {
        let config = RowbookConfig::from_vars(vec![
            ("ROWBOOK_SEED", "false"),
            ("ROWBOOK_WINDOW_WIDTH", "1024"),
            ("ROWBOOK_WINDOW_HEIGHT", "768"),
        ])
        .expect("config should deserialize");

        assert!(!config.seed);
        assert_eq!(config.window_width, 1024.0);
        assert_eq!(config.window_height, 768.0);
    }

    #[test]
    fn ignores_unrelated_variables() {
        let config = RowbookConfig::from_vars(vec![("SEED", "false"), ("PATH", "/usr/bin")])
            .expect("config should deserialize");
        assert!(config.seed);
    }

    #[test]
    fn rejects_non_positive_window_size() {
        let result = RowbookConfig::from_vars(vec![("ROWBOOK_WINDOW_WIDTH", "0")]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("ROWBOOK_WINDOW_WIDTH"));
    }

    #[test]
    fn rejects_malformed_values() {
        let result = RowbookConfig::from_vars(vec![("ROWBOOK_SEED", "maybe")]);
        assert!(matches!(result, Err(ConfigError::Env(_))));
    }
}
