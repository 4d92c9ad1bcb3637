//! Whole-year properties of the calendar and slug codec.

use lectio_core::types::{Locale, SlugConvention, YearRange};
use lectio_liturgy::calendar::{
    LiturgicalSeason, LiturgicalYear, Observance, classify_season, daily_message,
};
use lectio_liturgy::date::{CalendarDate, SlugCodec};

fn every_day_of(year: i32) -> impl Iterator<Item = CalendarDate> {
    let first = CalendarDate::from_ymd(year, 1, 1).expect("Jan 1");
    (0..366)
        .filter_map(move |offset| first.adjacent(offset))
        .take_while(move |date| date.year() == year)
}

#[test]
fn every_day_has_exactly_one_season_in_calendar_order() {
    for year in [1900, 1954, 2000, 2019, 2022, 2024, 2026, 2038, 2100] {
        let days: Vec<_> = every_day_of(year).collect();
        assert!(days.len() == 365 || days.len() == 366);

        // Season changes walk through the civil year in this order.
        let mut transitions = vec![classify_season(days[0])];
        for date in &days[1..] {
            let season = classify_season(*date);
            if transitions.last() != Some(&season) {
                transitions.push(season);
            }
        }
        assert_eq!(
            transitions,
            [
                LiturgicalSeason::Christmas,
                LiturgicalSeason::Ordinary,
                LiturgicalSeason::Lent,
                LiturgicalSeason::Easter,
                LiturgicalSeason::Ordinary,
                LiturgicalSeason::Advent,
                LiturgicalSeason::Christmas,
            ],
            "{year}"
        );
    }
}

#[test]
fn every_day_has_a_message_in_both_locales() {
    for date in every_day_of(2026) {
        for locale in Locale::ALL {
            assert!(!daily_message(date, locale).is_empty(), "{date} {locale}");
        }
    }
}

#[test]
fn easter_is_always_inside_easter_time() {
    for year in 1900..=2100 {
        let anchors = LiturgicalYear::for_year(year).expect("year");
        assert_eq!(anchors.season_of(anchors.easter), LiturgicalSeason::Easter);
        assert_eq!(anchors.season_of(anchors.pentecost), LiturgicalSeason::Easter);
        assert_eq!(
            anchors.easter.days_until(anchors.pentecost),
            49,
            "{year}"
        );
    }
}

#[test]
fn slugs_round_trip_in_both_conventions() {
    let codec = SlugCodec::default();
    for date in every_day_of(2024) {
        for convention in [SlugConvention::DayMonthYear, SlugConvention::MonthDayYear] {
            let slug = date.slug(convention);
            assert_eq!(codec.parse(&slug, convention), Some(date), "{slug}");
        }
    }
}

#[test]
fn every_legacy_slug_normalizes_to_the_same_date() {
    let codec = SlugCodec::default();
    for date in every_day_of(2026) {
        let canonical = date.slug(SlugConvention::CANONICAL);
        let legacy = date.slug(SlugConvention::LEGACY);

        let direct = codec.normalize_to_canonical(&canonical).expect("canonical");
        assert_eq!(direct.date, date);
        assert!(!direct.needs_redirect);

        let resolved = codec.normalize_to_canonical(&legacy).expect("legacy");
        if resolved.date == date {
            assert_eq!(resolved.canonical_slug, canonical);
            assert_eq!(resolved.needs_redirect, canonical != legacy);
        } else {
            // Ambiguous legacy slugs read as canonical and name another date.
            assert!(date.day() <= 12);
            assert!(!resolved.needs_redirect);
            assert_eq!(resolved.canonical_slug, legacy);
        }
    }
}

#[test]
fn narrowed_year_range_rejects_outside_years() {
    let codec = SlugCodec::new(YearRange::new(2000, 2030).expect("range"));
    assert!(codec.parse("01-01-2030", SlugConvention::CANONICAL).is_some());
    assert!(codec.parse("01-01-2031", SlugConvention::CANONICAL).is_none());
    assert!(codec.parse("31-12-1999", SlugConvention::CANONICAL).is_none());
}

#[test]
fn observance_and_season_agree() {
    for date in every_day_of(2025) {
        assert_eq!(Observance::for_date(date).season, classify_season(date));
    }
}
