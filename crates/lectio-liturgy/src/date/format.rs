//! Slug, ISO and display renderings of a date.

use chrono::Weekday;
use lectio_core::types::{Locale, SlugConvention};

use super::codec::CalendarDate;

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Output pattern for [`CalendarDate::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// Zero-padded `DD-MM-YYYY` or `MM-DD-YYYY`.
    Slug(SlugConvention),
    /// `YYYY-MM-DD`.
    Iso,
    /// "5 de abril de 2026" / "April 5, 2026".
    Long(Locale),
    /// "domingo" / "Sunday".
    Weekday(Locale),
}

impl DateFormat {
    pub(super) fn render(self, date: CalendarDate) -> String {
        let (year, month, day) = (date.year(), date.month(), date.day());
        match self {
            Self::Slug(SlugConvention::DayMonthYear) => format!("{day:02}-{month:02}-{year:04}"),
            Self::Slug(SlugConvention::MonthDayYear) => format!("{month:02}-{day:02}-{year:04}"),
            Self::Iso => format!("{year:04}-{month:02}-{day:02}"),
            Self::Long(Locale::Pt) => {
                format!("{day} de {} de {year}", month_name(month, &MONTHS_PT))
            }
            Self::Long(Locale::En) => {
                format!("{} {day}, {year}", month_name(month, &MONTHS_EN))
            }
            Self::Weekday(locale) => weekday_name(date.weekday(), locale).to_string(),
        }
    }
}

fn month_name(month: u32, names: &[&'static str; 12]) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|index| names.get(index))
        .copied()
        .unwrap_or_default()
}

const fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    match (weekday, locale) {
        (Weekday::Sun, Locale::Pt) => "domingo",
        (Weekday::Mon, Locale::Pt) => "segunda-feira",
        (Weekday::Tue, Locale::Pt) => "terça-feira",
        (Weekday::Wed, Locale::Pt) => "quarta-feira",
        (Weekday::Thu, Locale::Pt) => "quinta-feira",
        (Weekday::Fri, Locale::Pt) => "sexta-feira",
        (Weekday::Sat, Locale::Pt) => "sábado",
        (Weekday::Sun, Locale::En) => "Sunday",
        (Weekday::Mon, Locale::En) => "Monday",
        (Weekday::Tue, Locale::En) => "Tuesday",
        (Weekday::Wed, Locale::En) => "Wednesday",
        (Weekday::Thu, Locale::En) => "Thursday",
        (Weekday::Fri, Locale::En) => "Friday",
        (Weekday::Sat, Locale::En) => "Saturday",
    }
}
