//! Console configuration: where the monitoring API lives.
//!
//! The browser bundle bakes the base URL in at compile time
//! ([`ConsoleConfig::from_build_env`]); the CLI reads it at run time
//! ([`ConsoleConfig::from_env`]). Both fall back to the local default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_BASE_ENV: &str = "JOBWATCH_API_BASE";
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub api_base: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned() }
    }
}

impl ConsoleConfig {
    /// Build config from an optional raw base URL.
    ///
    /// Blank values fall back to [`DEFAULT_API_BASE`]; trailing slashes are
    /// trimmed so `base + "/jobs"` never doubles a separator.
    #[must_use]
    pub fn from_api_base(raw: Option<&str>) -> Self {
        let api_base = raw
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base }
    }

    /// Read `JOBWATCH_API_BASE` from the process environment, loading a
    /// `.env` file first when one exists.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_api_base(std::env::var(API_BASE_ENV).ok().as_deref())
    }

    /// Read `JOBWATCH_API_BASE` as it was when this crate was compiled.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_api_base(option_env!("JOBWATCH_API_BASE"))
    }
}
