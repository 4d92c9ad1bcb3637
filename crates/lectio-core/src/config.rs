use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, DEFAULT_TIMEZONE};
use crate::error::{CoreError, CoreResult};
use crate::types::YearRange;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub calendar: CalendarConfig,
    pub liturgy_source: LiturgySourceConfig,
    pub scripture: ScriptureConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub timezone: String,
    pub min_year: i32,
    pub max_year: i32,
}

impl CalendarConfig {
    /// ## Summary
    /// Resolves the configured civil timezone.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the name is not an IANA zone.
    pub fn timezone(&self) -> CoreResult<Tz> {
        Tz::from_str(&self.timezone).map_err(|e| {
            CoreError::InvalidConfiguration(format!("calendar.timezone {}: {e}", self.timezone))
        })
    }

    /// ## Summary
    /// Returns the range of years accepted from date slugs.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if `min_year` exceeds `max_year`.
    pub fn year_range(&self) -> CoreResult<YearRange> {
        YearRange::new(self.min_year, self.max_year)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiturgySourceConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptureConfig {
    pub enabled: bool,
    pub url: String,
    pub translation: String,
    pub concurrency: u8,
    pub timeout_ms: u64,
}

impl ScriptureConfig {
    /// ## Summary
    /// Returns the per-call timeout for scripture lookups.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// ## Summary
    /// Returns the worker count for one enrichment batch, never below one.
    #[must_use]
    pub fn concurrency(&self) -> usize {
        usize::from(self.concurrency.max(1))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `config.toml` and `LECTIO_` environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("calendar.timezone", DEFAULT_TIMEZONE)?
            .set_default("calendar.min_year", DEFAULT_MIN_YEAR)?
            .set_default("calendar.max_year", DEFAULT_MAX_YEAR)?
            .set_default("liturgy_source.url", "https://liturgia.up.railway.app/v2/")?
            .set_default("scripture.enabled", true)?
            .set_default("scripture.url", "https://bible-api.com/")?
            .set_default("scripture.translation", "web")?
            .set_default("scripture.concurrency", 4)?
            .set_default("scripture.timeout_ms", 8000)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Environment, e.g. LECTIO_SCRIPTURE__CONCURRENCY
            .add_source(
                config::Environment::with_prefix("LECTIO")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks the values that deserialization alone cannot.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for an unknown timezone or empty year range.
    pub fn validate(&self) -> CoreResult<()> {
        self.calendar.timezone()?;
        self.calendar.year_range()?;
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
