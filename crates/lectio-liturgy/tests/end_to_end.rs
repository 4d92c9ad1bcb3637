//! Slug in, day content out, without any provider.

use lectio_core::types::{Locale, SlugConvention};
use lectio_liturgy::calendar::{
    LiturgicalSeason, MovableFeast, Observance, ObservanceSource, classify_season, daily_message,
    season_message,
};
use lectio_liturgy::date::{Navigation, SlugCodec, path_for};
use lectio_liturgy::scripture::translate;
use lectio_liturgy::text::{VerseRow, join_provider_verse_rows, to_semantic_html};

#[test_log::test]
fn easter_sunday_2026_from_legacy_slug() {
    let codec = SlugCodec::default();
    let resolved = codec.normalize_to_canonical("04-05-2026").expect("slug");

    // Read as 4 May under the canonical convention; not a redirect.
    assert!(!resolved.needs_redirect);
    assert_eq!(resolved.date.month(), 5);

    let easter = codec
        .parse("04-05-2026", SlugConvention::LEGACY)
        .expect("legacy slug");
    assert_eq!(classify_season(easter), LiturgicalSeason::Easter);
    assert_eq!(
        Observance::for_date(easter).source,
        ObservanceSource::MovableFeast(MovableFeast::EasterSunday)
    );
    for locale in Locale::ALL {
        assert_eq!(
            daily_message(easter, locale),
            MovableFeast::EasterSunday.feast().message.get(locale)
        );
    }
}

#[test_log::test]
fn unambiguous_legacy_slug_redirects() {
    let codec = SlugCodec::default();
    let resolved = codec.normalize_to_canonical("12-25-2026").expect("slug");
    assert!(resolved.needs_redirect);
    assert_eq!(resolved.canonical_slug, "25-12-2026");
    assert_eq!(path_for(resolved.date, Locale::Pt), "/liturgia-diaria/25-12-2026");
    assert_eq!(path_for(resolved.date, Locale::En), "/en/daily-readings/12-25-2026");
}

#[test_log::test]
fn ordinary_weekday_uses_season_text() {
    let codec = SlugCodec::default();
    let date = codec
        .normalize_to_canonical("10-02-2026")
        .expect("slug")
        .date;
    assert_eq!(classify_season(date), LiturgicalSeason::Ordinary);
    for locale in Locale::ALL {
        assert_eq!(
            daily_message(date, locale),
            season_message(LiturgicalSeason::Ordinary).get(locale)
        );
    }
}

#[test_log::test]
fn navigation_stops_at_range_edges() {
    let codec = SlugCodec::default();
    let today = codec.parse("16-10-2026", SlugConvention::CANONICAL).expect("today");
    let last = codec.parse("31-12-2100", SlugConvention::CANONICAL).expect("last");

    let nav = Navigation::around(&codec, last, today, Locale::Pt);
    assert_eq!(nav.next, None);
    assert_eq!(nav.previous.as_deref(), Some("/liturgia-diaria/30-12-2100"));
    assert_eq!(nav.today, "/liturgia-diaria/16-10-2026");
}

#[test_log::test]
fn reading_pipeline_without_network() {
    let passage = translate("Jo 20,1-9").expect("reference");
    assert_eq!(passage, "John 20:1-9");

    let rows = [
        VerseRow::new(20, 1, "Now on the first day of the week"),
        VerseRow::new(20, 2, "Therefore she ran"),
    ];
    let html = to_semantic_html(&join_provider_verse_rows(&rows));
    assert_eq!(
        html,
        "<p class=\"lectio-paragraph\"><sup class=\"lectio-verse\">1</sup> Now on the first \
         day of the week <sup class=\"lectio-verse\">2</sup> Therefore she ran</p>"
    );
}
