use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};
use crate::error::CoreError;

/// The two locales the site publishes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Portuguese, the source language of the liturgy provider.
    Pt,
    /// English, served from alternate-language enrichment.
    En,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::Pt, Self::En];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" | "pt-br" | "pt_br" => Ok(Self::Pt),
            "en" | "en-us" | "en_us" => Ok(Self::En),
            other => Err(CoreError::InvalidInput(format!("unknown locale: {other}"))),
        }
    }
}

/// Field order of a date slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlugConvention {
    /// `DD-MM-YYYY`, the canonical form.
    DayMonthYear,
    /// `MM-DD-YYYY`, the legacy form still found in old links.
    MonthDayYear,
}

impl SlugConvention {
    pub const CANONICAL: Self = Self::DayMonthYear;
    pub const LEGACY: Self = Self::MonthDayYear;

    /// ## Summary
    /// Returns the convention a locale writes its dates in.
    #[must_use]
    pub const fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Pt => Self::DayMonthYear,
            Locale::En => Self::MonthDayYear,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DayMonthYear => "day_month_year",
            Self::MonthDayYear => "month_day_year",
        }
    }
}

impl std::fmt::Display for SlugConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlugConvention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day_month_year" | "dmy" => Ok(Self::DayMonthYear),
            "month_day_year" | "mdy" => Ok(Self::MonthDayYear),
            other => Err(CoreError::InvalidInput(format!(
                "unknown slug convention: {other}"
            ))),
        }
    }
}

/// Inclusive range of years accepted from untrusted slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if `min` is greater than `max`.
    pub fn new(min: i32, max: i32) -> Result<Self, CoreError> {
        if min > max {
            return Err(CoreError::InvalidConfiguration(format!(
                "year range {min}..={max} is empty"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(self) -> i32 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> i32 {
        self.max
    }

    #[must_use]
    pub const fn contains(self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_YEAR,
            max: DEFAULT_MAX_YEAR,
        }
    }
}
