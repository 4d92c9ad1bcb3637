//! JSON shape of what `lectio day --offline` prints.

use lectio_core::types::Locale;
use lectio_liturgy::date::{CalendarDate, SlugCodec};
use lectio_service::day::assemble_day;
use lectio_service::source::RawLiturgy;
use lectio_app::request::resolve_request;

#[test_log::test]
fn offline_day_serializes_calendar_fields() {
    let codec = SlugCodec::default();
    let today = CalendarDate::from_ymd(2026, 10, 16).expect("today");
    let request = resolve_request(&codec, Some("04-05-2026"), Locale::En, today);
    let day = assemble_day(request.date(), &RawLiturgy::default());

    let value = serde_json::json!({ "request": request, "day": day });

    assert_eq!(value["request"]["outcome"], "serve");
    assert_eq!(value["request"]["path"], "/en/daily-readings/04-05-2026");
    assert_eq!(value["day"]["date"], "2026-04-05");
    assert_eq!(value["day"]["slug"], "05-04-2026");
    assert_eq!(value["day"]["season"], "easter");
    assert_eq!(value["day"]["color"], "white");
    assert_eq!(value["day"]["labels"]["en"], "Sunday, April 5, 2026");
    assert!(value["day"]["daily_message"]["pt"].as_str().is_some_and(|s| !s.is_empty()));
    assert_eq!(value["day"]["readings"]["gospel"], serde_json::json!([]));
    assert_eq!(value["day"]["antiphons"]["entrance"], serde_json::Value::Null);
}

#[test_log::test]
fn legacy_request_serializes_as_redirect() {
    let codec = SlugCodec::default();
    let today = CalendarDate::from_ymd(2026, 10, 16).expect("today");
    let request = resolve_request(&codec, Some("12-31-2026"), Locale::Pt, today);

    let value = serde_json::to_value(&request).expect("json");
    assert_eq!(value["outcome"], "redirect");
    assert_eq!(value["location"], "/liturgia-diaria/31-12-2026");
    assert_eq!(value["date"], "2026-12-31");
}
