//! Previous / today / next links for date-addressed pages.

use lectio_core::constants::{LITURGY_ROUTE_PREFIX, READINGS_ROUTE_PREFIX};
use lectio_core::types::{Locale, SlugConvention};
use serde::Serialize;

use super::codec::{CalendarDate, SlugCodec};

/// Navigation paths around a date, in one locale's route and slug convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub current: String,
    /// `None` when the previous day falls outside the supported year range.
    pub previous: Option<String>,
    pub today: String,
    /// `None` when the next day falls outside the supported year range.
    pub next: Option<String>,
}

impl Navigation {
    /// ## Summary
    /// Builds the links shown around `date`'s page for `locale`.
    #[must_use]
    pub fn around(
        codec: &SlugCodec,
        date: CalendarDate,
        today: CalendarDate,
        locale: Locale,
    ) -> Self {
        let within_range = |d: &CalendarDate| codec.years().contains(d.year());
        Self {
            current: path_for(date, locale),
            previous: date
                .adjacent(-1)
                .filter(within_range)
                .map(|d| path_for(d, locale)),
            today: path_for(today, locale),
            next: date
                .adjacent(1)
                .filter(within_range)
                .map(|d| path_for(d, locale)),
        }
    }
}

/// ## Summary
/// Returns the page path of `date` in `locale`.
#[must_use]
pub fn path_for(date: CalendarDate, locale: Locale) -> String {
    let prefix = match locale {
        Locale::Pt => LITURGY_ROUTE_PREFIX,
        Locale::En => READINGS_ROUTE_PREFIX,
    };
    format!("{prefix}/{}", date.slug(SlugConvention::for_locale(locale)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).expect("valid date")
    }

    #[test]
    fn portuguese_links_use_canonical_slugs() {
        let codec = SlugCodec::default();
        let nav = Navigation::around(&codec, date(2026, 1, 1), date(2026, 4, 5), Locale::Pt);
        assert_eq!(nav.current, "/liturgia-diaria/01-01-2026");
        assert_eq!(nav.previous.as_deref(), Some("/liturgia-diaria/31-12-2025"));
        assert_eq!(nav.next.as_deref(), Some("/liturgia-diaria/02-01-2026"));
        assert_eq!(nav.today, "/liturgia-diaria/05-04-2026");
    }

    #[test]
    fn english_links_use_month_first_slugs() {
        let codec = SlugCodec::default();
        let nav = Navigation::around(&codec, date(2026, 4, 5), date(2026, 4, 5), Locale::En);
        assert_eq!(nav.current, "/en/daily-readings/04-05-2026");
        assert_eq!(nav.previous.as_deref(), Some("/en/daily-readings/04-04-2026"));
    }

    #[test]
    fn links_stop_at_range_edges() {
        let codec = SlugCodec::default();
        let nav = Navigation::around(&codec, date(2100, 12, 31), date(2026, 4, 5), Locale::Pt);
        assert_eq!(nav.next, None);
        assert!(nav.previous.is_some());

        let nav = Navigation::around(&codec, date(1900, 1, 1), date(2026, 4, 5), Locale::Pt);
        assert_eq!(nav.previous, None);
    }
}
