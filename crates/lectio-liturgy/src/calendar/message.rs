//! Daily message and celebration selection.

use lectio_core::types::Locale;
use serde::Serialize;

use super::feasts::{Bilingual, MovableFeast, fixed_feast, movable_feast, season_message};
use super::season::{LiturgicalColor, LiturgicalSeason, LiturgicalYear};
use crate::date::{CalendarDate, SlugCodec, guess_convention};

/// Which table supplied a day's observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "feast", rename_all = "snake_case")]
pub enum ObservanceSource {
    FixedFeast,
    MovableFeast(MovableFeast),
    Season,
}

/// Everything the calendar alone knows about a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Observance {
    pub date: CalendarDate,
    pub season: LiturgicalSeason,
    pub source: ObservanceSource,
    pub name: Bilingual,
    pub color: LiturgicalColor,
    pub message: Bilingual,
}

impl Observance {
    /// ## Summary
    /// Selects the observance of `date`: fixed-date feast first, then a
    /// movable feast computed from that year's Easter, then the season.
    #[must_use]
    pub fn for_date(date: CalendarDate) -> Self {
        let year = LiturgicalYear::for_year(date.year());
        let season = year.map_or(LiturgicalSeason::Ordinary, |y| y.season_of(date));

        if let Some(feast) = fixed_feast(date.month(), date.day()) {
            return Self {
                date,
                season,
                source: ObservanceSource::FixedFeast,
                name: feast.name,
                color: feast.color,
                message: feast.message,
            };
        }

        if let Some(year) = year
            && let Some(movable) = movable_feast(year.easter.days_until(date))
        {
            let feast = movable.feast();
            return Self {
                date,
                season,
                source: ObservanceSource::MovableFeast(movable),
                name: feast.name,
                color: feast.color,
                message: feast.message,
            };
        }

        Self {
            date,
            season,
            source: ObservanceSource::Season,
            name: season.name(),
            color: season.color(),
            message: season_message(season),
        }
    }
}

/// ## Summary
/// Returns the daily reflection for `date` in `locale`. Never empty.
#[must_use]
pub fn daily_message(date: CalendarDate, locale: Locale) -> &'static str {
    Observance::for_date(date).message.get(locale)
}

/// ## Summary
/// Looks up the daily reflection for a raw slug whose convention is unknown.
///
/// Best effort: the convention is guessed from field magnitude, so slugs with
/// both leading fields at 12 or below are read in the canonical convention.
/// Primary routes resolve slugs through [`SlugCodec::normalize_to_canonical`]
/// or an explicit convention instead.
#[must_use]
pub fn daily_message_for_slug(
    codec: &SlugCodec,
    slug: &str,
    locale: Locale,
) -> Option<&'static str> {
    let convention = guess_convention(slug);
    let date = codec.parse(slug, convention)?;
    tracing::trace!(slug, %convention, %date, "Daily message via guessed convention");
    Some(daily_message(date, locale))
}
