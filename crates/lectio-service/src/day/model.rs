use lectio_liturgy::calendar::{Bilingual, LiturgicalColor, LiturgicalSeason};
use lectio_liturgy::date::CalendarDate;
use lectio_liturgy::text::to_semantic_html;
use serde::Serialize;

/// Plain text together with its normalized markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub plain_text: String,
    pub html: String,
}

impl TextBlock {
    #[must_use]
    pub fn from_plain(text: &str) -> Self {
        Self {
            plain_text: text.trim().to_string(),
            html: to_semantic_html(text),
        }
    }
}

/// A reading rendered from the alternate-language provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateText {
    /// Passage in the provider's syntax, e.g. `John 20:1-9`.
    pub passage: String,
    pub plain_text: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingItem {
    /// Liturgical notation, e.g. `Jo 20,1-9`. Empty when the provider gave none.
    pub reference: String,
    pub title: Option<String>,
    /// Psalm response.
    pub refrain: Option<String>,
    pub plain_text: String,
    pub html: String,
    pub alternate: Option<AlternateText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Readings {
    pub first_reading: Vec<ReadingItem>,
    pub psalm: Vec<ReadingItem>,
    pub second_reading: Vec<ReadingItem>,
    pub gospel: Vec<ReadingItem>,
}

impl Readings {
    /// Every item in liturgical order.
    pub fn items(&self) -> impl Iterator<Item = &ReadingItem> {
        self.first_reading
            .iter()
            .chain(&self.psalm)
            .chain(&self.second_reading)
            .chain(&self.gospel)
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut ReadingItem> {
        self.first_reading
            .iter_mut()
            .chain(&mut self.psalm)
            .chain(&mut self.second_reading)
            .chain(&mut self.gospel)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Antiphons {
    pub entrance: Option<TextBlock>,
    pub communion: Option<TextBlock>,
}

/// Human-readable date labels, e.g. "domingo, 5 de abril de 2026".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLabels {
    pub pt: String,
    pub en: String,
}

/// Everything rendered for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiturgicalDay {
    pub date: CalendarDate,
    /// Canonical slug.
    pub slug: String,
    pub labels: DayLabels,
    pub season: LiturgicalSeason,
    pub celebration: String,
    pub color: LiturgicalColor,
    pub daily_message: Bilingual,
    pub readings: Readings,
    pub antiphons: Antiphons,
}
