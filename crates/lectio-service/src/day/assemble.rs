//! Raw record plus calendar classification into a [`LiturgicalDay`].

use lectio_core::types::{Locale, SlugConvention};
use lectio_liturgy::calendar::{LiturgicalColor, Observance};
use lectio_liturgy::date::{CalendarDate, DateFormat};
use lectio_liturgy::text::to_semantic_html;

use super::model::{Antiphons, DayLabels, LiturgicalDay, ReadingItem, Readings, TextBlock};
use crate::source::{RawLiturgy, RawReading};

/// ## Summary
/// Builds the day record for `date` from a raw provider record.
///
/// The season and daily message always come from the calendar. The
/// celebration name and colour come from the record when present and
/// recognizable, otherwise from the calendar's observance for the date.
/// Reading and antiphon markup is derived from their plain text; no
/// alternate-language text is attached here.
#[must_use]
pub fn assemble_day(date: CalendarDate, raw: &RawLiturgy) -> LiturgicalDay {
    let observance = Observance::for_date(date);

    let celebration = non_blank(raw.celebration.as_deref())
        .map_or_else(|| observance.name.pt.to_string(), str::to_string);

    let color = match non_blank(raw.color.as_deref()) {
        Some(name) => name.parse::<LiturgicalColor>().unwrap_or_else(|error| {
            tracing::debug!(%error, fallback = ?observance.color, "Unrecognized provider colour");
            observance.color
        }),
        None => observance.color,
    };

    let readings = Readings {
        first_reading: reading_items(&raw.readings.first_reading),
        psalm: reading_items(&raw.readings.psalm),
        second_reading: reading_items(&raw.readings.second_reading),
        gospel: reading_items(&raw.readings.gospel),
    };

    let antiphons = Antiphons {
        entrance: non_blank(raw.antiphons.entrance.as_deref()).map(TextBlock::from_plain),
        communion: non_blank(raw.antiphons.communion.as_deref()).map(TextBlock::from_plain),
    };

    LiturgicalDay {
        date,
        slug: date.slug(SlugConvention::CANONICAL),
        labels: labels(date),
        season: observance.season,
        celebration,
        color,
        daily_message: observance.message,
        readings,
        antiphons,
    }
}

fn labels(date: CalendarDate) -> DayLabels {
    let label = |locale| {
        format!(
            "{}, {}",
            date.format(DateFormat::Weekday(locale)),
            date.format(DateFormat::Long(locale))
        )
    };
    DayLabels {
        pt: label(Locale::Pt),
        en: label(Locale::En),
    }
}

/// Items with neither a reference nor text are dropped.
fn reading_items(raw: &[RawReading]) -> Vec<ReadingItem> {
    raw.iter()
        .filter_map(|reading| {
            let reference = non_blank(reading.reference.as_deref());
            let text = non_blank(reading.text.as_deref());
            if reference.is_none() && text.is_none() {
                return None;
            }
            let text = text.unwrap_or_default();
            Some(ReadingItem {
                reference: reference.unwrap_or_default().to_string(),
                title: non_blank(reading.title.as_deref()).map(str::to_string),
                refrain: non_blank(reading.refrain.as_deref()).map(str::to_string),
                plain_text: text.to_string(),
                html: to_semantic_html(text),
                alternate: None,
            })
        })
        .collect()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use lectio_liturgy::calendar::{LiturgicalSeason, MovableFeast, season_message};

    use super::*;
    use crate::source::{RawAntiphons, RawReadings};

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).expect("valid date")
    }

    fn reading(reference: &str, text: &str) -> RawReading {
        RawReading {
            reference: Some(reference.to_string()),
            text: Some(text.to_string()),
            ..RawReading::default()
        }
    }

    #[test]
    fn provider_fields_take_precedence() {
        let raw = RawLiturgy {
            celebration: Some("Domingo de Páscoa da Ressurreição do Senhor".to_string()),
            color: Some("Branco".to_string()),
            readings: RawReadings {
                gospel: vec![reading("Jo 20,1-9", "1 No primeiro dia da semana")],
                ..RawReadings::default()
            },
            antiphons: RawAntiphons {
                entrance: Some("Ressuscitei & estou contigo".to_string()),
                communion: Some("   ".to_string()),
            },
        };

        let day = assemble_day(date(2026, 4, 5), &raw);
        assert_eq!(day.slug, "05-04-2026");
        assert_eq!(day.labels.pt, "domingo, 5 de abril de 2026");
        assert_eq!(day.labels.en, "Sunday, April 5, 2026");
        assert_eq!(day.season, LiturgicalSeason::Easter);
        assert_eq!(day.celebration, "Domingo de Páscoa da Ressurreição do Senhor");
        assert_eq!(day.color, LiturgicalColor::White);
        assert_eq!(day.daily_message, MovableFeast::EasterSunday.feast().message);

        assert_eq!(day.readings.len(), 1);
        let gospel = &day.readings.gospel[0];
        assert_eq!(gospel.reference, "Jo 20,1-9");
        assert_eq!(
            gospel.html,
            "<p class=\"lectio-paragraph\"><sup class=\"lectio-verse\">1</sup> No primeiro dia da semana</p>"
        );
        assert_eq!(gospel.alternate, None);

        let entrance = day.antiphons.entrance.expect("entrance antiphon");
        assert_eq!(
            entrance.html,
            "<p class=\"lectio-paragraph\">Ressuscitei &amp; estou contigo</p>"
        );
        assert_eq!(day.antiphons.communion, None);
    }

    #[test]
    fn empty_record_falls_back_to_calendar() {
        let day = assemble_day(date(2026, 2, 10), &RawLiturgy::default());
        assert_eq!(day.season, LiturgicalSeason::Ordinary);
        assert_eq!(day.celebration, LiturgicalSeason::Ordinary.name().pt);
        assert_eq!(day.color, LiturgicalColor::Green);
        assert_eq!(day.daily_message, season_message(LiturgicalSeason::Ordinary));
        assert!(day.readings.is_empty());
        assert_eq!(day.antiphons, Antiphons::default());
    }

    #[test]
    fn unknown_colour_uses_calendar_colour() {
        let raw = RawLiturgy {
            color: Some("Azul".to_string()),
            ..RawLiturgy::default()
        };
        let day = assemble_day(date(2026, 2, 18), &raw);
        assert_eq!(day.color, LiturgicalColor::Violet);
        assert_eq!(day.celebration, MovableFeast::AshWednesday.feast().name.pt);
    }

    #[test]
    fn blank_items_are_dropped_and_vigil_lists_kept() {
        let raw = RawLiturgy {
            readings: RawReadings {
                first_reading: vec![
                    reading("Gn 1,1-2,2", "No princípio Deus criou o céu e a terra."),
                    RawReading::default(),
                    reading("Gn 22,1-18", "Deus pôs Abraão à prova."),
                ],
                ..RawReadings::default()
            },
            ..RawLiturgy::default()
        };
        let day = assemble_day(date(2026, 4, 4), &raw);
        let references: Vec<_> = day
            .readings
            .items()
            .map(|item| item.reference.as_str())
            .collect();
        assert_eq!(references, ["Gn 1,1-2,2", "Gn 22,1-18"]);
    }
}
