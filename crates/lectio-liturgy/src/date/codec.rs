//! Slug parsing, validation and canonicalization.

use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use lectio_core::types::{SlugConvention, YearRange};
use serde::{Serialize, Serializer};

use super::format::DateFormat;
use crate::error::LiturgyError;

/// A real Gregorian calendar date.
///
/// Only constructible from components that form an existing date, so
/// overflowing values such as April 31 never exist as a `CalendarDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// ## Summary
    /// Builds a date from year, month (1-12) and day components.
    ///
    /// Returns `None` if the components do not name a real date.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// ## Summary
    /// Returns the date shifted by `offset_days`, rolling over month and year
    /// boundaries.
    ///
    /// Returns `None` only when the result falls outside the representable
    /// calendar.
    #[must_use]
    pub fn adjacent(self, offset_days: i64) -> Option<Self> {
        let magnitude = Days::new(offset_days.unsigned_abs());
        let shifted = if offset_days.is_negative() {
            self.0.checked_sub_days(magnitude)
        } else {
            self.0.checked_add_days(magnitude)
        };
        shifted.map(Self)
    }

    /// ## Summary
    /// Signed number of days from `self` to `other`.
    #[must_use]
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// ## Summary
    /// Renders the date in one of the slug, ISO or display forms.
    #[must_use]
    pub fn format(self, format: DateFormat) -> String {
        format.render(self)
    }

    /// ## Summary
    /// Renders the date as a slug in the given convention.
    #[must_use]
    pub fn slug(self, convention: SlugConvention) -> String {
        self.format(DateFormat::Slug(convention))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(DateFormat::Iso))
    }
}

/// Parses the ISO form (`YYYY-MM-DD`).
impl FromStr for CalendarDate {
    type Err = LiturgyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.trim().splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(LiturgyError::InvalidDate(s.to_string()));
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(LiturgyError::InvalidDate(s.to_string()));
        }
        let (Some(year), Some(month), Some(day)) = (
            parse_digits::<i32>(year),
            parse_digits::<u32>(month),
            parse_digits::<u32>(day),
        ) else {
            return Err(LiturgyError::InvalidDate(s.to_string()));
        };
        Self::from_ymd(year, month, day).ok_or_else(|| LiturgyError::InvalidDate(s.to_string()))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of resolving an incoming slug to its canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugResolution {
    pub date: CalendarDate,
    pub canonical_slug: String,
    /// The slug arrived in the legacy convention; callers should answer with
    /// a permanent redirect to `canonical_slug`.
    pub needs_redirect: bool,
}

/// Parses and canonicalizes date slugs within a supported year range.
#[derive(Debug, Clone, Default)]
pub struct SlugCodec {
    years: YearRange,
}

impl SlugCodec {
    #[must_use]
    pub const fn new(years: YearRange) -> Self {
        Self { years }
    }

    #[must_use]
    pub const fn years(&self) -> YearRange {
        self.years
    }

    /// ## Summary
    /// Parses a `NN-NN-NNNN` slug, reading the first two fields in the order
    /// named by `convention`.
    ///
    /// Returns `None` for any shape mismatch, out-of-range year or date that
    /// does not exist. The convention is authoritative: `03-04-2026` is March 4
    /// under `MonthDayYear` and April 3 under `DayMonthYear`.
    #[must_use]
    pub fn parse(&self, slug: &str, convention: SlugConvention) -> Option<CalendarDate> {
        let (first, second, year) = split_slug(slug)?;
        let (day, month) = match convention {
            SlugConvention::DayMonthYear => (first, second),
            SlugConvention::MonthDayYear => (second, first),
        };
        if !self.years.contains(year) {
            tracing::trace!(slug, year, "Slug year outside supported range");
            return None;
        }
        CalendarDate::from_ymd(year, month, day)
    }

    /// ## Summary
    /// Resolves a slug to its canonical form, trying the canonical convention
    /// first and the legacy convention second.
    ///
    /// Returns `None` if neither convention yields a valid date.
    #[must_use]
    pub fn normalize_to_canonical(&self, slug: &str) -> Option<SlugResolution> {
        if let Some(date) = self.parse(slug, SlugConvention::CANONICAL) {
            return Some(SlugResolution {
                date,
                canonical_slug: date.slug(SlugConvention::CANONICAL),
                needs_redirect: false,
            });
        }

        let date = self.parse(slug, SlugConvention::LEGACY)?;
        let canonical_slug = date.slug(SlugConvention::CANONICAL);
        tracing::debug!(slug, %canonical_slug, "Legacy slug resolved, redirect required");
        Some(SlugResolution {
            date,
            canonical_slug,
            needs_redirect: true,
        })
    }
}

/// ## Summary
/// Best-effort convention guess from field magnitude.
///
/// A first field above 12 can only be a day and a second field above 12 can
/// only be a day. When both fields are 12 or below the slug is genuinely
/// ambiguous and the canonical convention is returned; callers on primary
/// routes must name their convention instead of relying on this.
#[must_use]
pub fn guess_convention(slug: &str) -> SlugConvention {
    match split_slug(slug) {
        Some((first, _, _)) if first > 12 => SlugConvention::DayMonthYear,
        Some((_, second, _)) if second > 12 => SlugConvention::MonthDayYear,
        Some(_) => {
            tracing::debug!(slug, "Ambiguous slug, assuming canonical convention");
            SlugConvention::CANONICAL
        }
        None => SlugConvention::CANONICAL,
    }
}

/// ## Summary
/// Returns the current date in `timezone`, independent of the host's zone.
#[must_use]
pub fn today(timezone: Tz) -> CalendarDate {
    today_at(Utc::now(), timezone)
}

/// ## Summary
/// Returns the civil date in `timezone` at the instant `now`.
#[must_use]
pub fn today_at(now: DateTime<Utc>, timezone: Tz) -> CalendarDate {
    CalendarDate(now.with_timezone(&timezone).date_naive())
}

/// Splits `NN-NN-NNNN` into its three numeric fields.
fn split_slug(slug: &str) -> Option<(u32, u32, i32)> {
    let mut fields = slug.split('-');
    let first = fields.next()?;
    let second = fields.next()?;
    let year = fields.next()?;
    if fields.next().is_some() || first.len() != 2 || second.len() != 2 || year.len() != 4 {
        return None;
    }
    Some((
        parse_digits(first)?,
        parse_digits(second)?,
        parse_digits(year)?,
    ))
}

/// Parses a field made only of ASCII digits (no sign, no whitespace).
fn parse_digits<T: FromStr>(field: &str) -> Option<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
