//! Liturgical seasons and the Easter-anchored dates that bound them.

use std::str::FromStr;

use serde::Serialize;

use super::easter::easter_sunday;
use super::feasts::{Bilingual, MovableFeast};
use crate::date::CalendarDate;

/// Liturgical season a date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiturgicalSeason {
    Advent,
    Christmas,
    Lent,
    Easter,
    Ordinary,
}

impl LiturgicalSeason {
    pub const ALL: [Self; 5] = [
        Self::Advent,
        Self::Christmas,
        Self::Lent,
        Self::Easter,
        Self::Ordinary,
    ];

    #[must_use]
    pub const fn name(self) -> Bilingual {
        match self {
            Self::Advent => Bilingual::new("Tempo do Advento", "Advent"),
            Self::Christmas => Bilingual::new("Tempo do Natal", "Christmas Time"),
            Self::Lent => Bilingual::new("Tempo da Quaresma", "Lent"),
            Self::Easter => Bilingual::new("Tempo Pascal", "Easter Time"),
            Self::Ordinary => Bilingual::new("Tempo Comum", "Ordinary Time"),
        }
    }

    #[must_use]
    pub const fn color(self) -> LiturgicalColor {
        match self {
            Self::Advent | Self::Lent => LiturgicalColor::Violet,
            Self::Christmas | Self::Easter => LiturgicalColor::White,
            Self::Ordinary => LiturgicalColor::Green,
        }
    }
}

/// Vestment colour of a celebration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiturgicalColor {
    Green,
    Violet,
    White,
    Red,
    Rose,
}

impl LiturgicalColor {
    #[must_use]
    pub const fn name(self) -> Bilingual {
        match self {
            Self::Green => Bilingual::new("Verde", "Green"),
            Self::Violet => Bilingual::new("Roxo", "Violet"),
            Self::White => Bilingual::new("Branco", "White"),
            Self::Red => Bilingual::new("Vermelho", "Red"),
            Self::Rose => Bilingual::new("Rosa", "Rose"),
        }
    }
}

/// Accepts the Portuguese or English colour name in any case.
impl FromStr for LiturgicalColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verde" | "green" => Ok(Self::Green),
            "roxo" | "violeta" | "violet" | "purple" => Ok(Self::Violet),
            "branco" | "white" | "dourado" | "gold" => Ok(Self::White),
            "vermelho" | "red" => Ok(Self::Red),
            "rosa" | "rose" | "róseo" => Ok(Self::Rose),
            other => Err(format!("unknown liturgical color: {other}")),
        }
    }
}

/// Anchor dates of one civil year's liturgical calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiturgicalYear {
    pub year: i32,
    /// First day of Ordinary Time after Christmas (exclusive end of the
    /// Christmas season that began the previous December).
    pub christmas_season_end: CalendarDate,
    pub ash_wednesday: CalendarDate,
    pub easter: CalendarDate,
    pub pentecost: CalendarDate,
    pub advent_start: CalendarDate,
    pub christmas: CalendarDate,
}

impl LiturgicalYear {
    /// ## Summary
    /// Computes the anchors for `year`.
    ///
    /// Returns `None` only for years outside the representable calendar.
    #[must_use]
    pub fn for_year(year: i32) -> Option<Self> {
        let easter = easter_sunday(year)?;
        let christmas = CalendarDate::from_ymd(year, 12, 25)?;
        let epiphany = CalendarDate::from_ymd(year, 1, 6)?;

        // First Sunday strictly after Epiphany, then one more week.
        let days_to_sunday = 7 - i64::from(epiphany.weekday().num_days_from_sunday());
        let christmas_season_end = epiphany.adjacent(days_to_sunday + 7)?;

        // Four weeks back from Christmas, then back to that week's Sunday.
        let four_weeks_back = christmas.adjacent(-28)?;
        let advent_start = four_weeks_back
            .adjacent(-i64::from(four_weeks_back.weekday().num_days_from_sunday()))?;

        Some(Self {
            year,
            christmas_season_end,
            ash_wednesday: easter.adjacent(-46)?,
            easter,
            pentecost: easter.adjacent(49)?,
            advent_start,
            christmas,
        })
    }

    /// ## Summary
    /// Returns the date `offset` days from Easter Sunday.
    #[must_use]
    pub fn from_easter(&self, offset: i64) -> Option<CalendarDate> {
        self.easter.adjacent(offset)
    }

    /// ## Summary
    /// Dates of every movable feast this year, in calendar order.
    #[must_use]
    pub fn movable_feasts(&self) -> Vec<(MovableFeast, CalendarDate)> {
        MovableFeast::ALL
            .into_iter()
            .filter_map(|feast| Some((feast, self.from_easter(feast.offset_from_easter())?)))
            .collect()
    }

    /// ## Summary
    /// Classifies a date of this year into its season.
    ///
    /// Boundaries are half-open: each anchor belongs to the season it opens,
    /// except Pentecost, which closes Easter Time inclusively.
    #[must_use]
    pub fn season_of(&self, date: CalendarDate) -> LiturgicalSeason {
        debug_assert_eq!(date.year(), self.year);
        if date < self.christmas_season_end {
            LiturgicalSeason::Christmas
        } else if date < self.ash_wednesday {
            LiturgicalSeason::Ordinary
        } else if date < self.easter {
            LiturgicalSeason::Lent
        } else if date <= self.pentecost {
            LiturgicalSeason::Easter
        } else if date < self.advent_start {
            LiturgicalSeason::Ordinary
        } else if date < self.christmas {
            LiturgicalSeason::Advent
        } else {
            LiturgicalSeason::Christmas
        }
    }
}

/// ## Summary
/// Returns the liturgical season of `date`.
#[must_use]
pub fn classify_season(date: CalendarDate) -> LiturgicalSeason {
    LiturgicalYear::for_year(date.year()).map_or(LiturgicalSeason::Ordinary, |year| {
        year.season_of(date)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).expect("valid date")
    }

    #[test]
    fn anchors_for_2026() {
        let year = LiturgicalYear::for_year(2026).expect("year");
        assert_eq!(year.easter, date(2026, 4, 5));
        assert_eq!(year.ash_wednesday, date(2026, 2, 18));
        assert_eq!(year.pentecost, date(2026, 5, 24));
        assert_eq!(year.christmas_season_end, date(2026, 1, 18));
        assert_eq!(year.advent_start, date(2026, 11, 22));
    }

    #[test]
    fn advent_start_keeps_sunday_twenty_eight_days_back() {
        // Christmas 2022 is a Sunday, so Nov 27 is used as-is.
        let year = LiturgicalYear::for_year(2022).expect("year");
        assert_eq!(year.advent_start, date(2022, 11, 27));
    }

    #[test]
    fn christmas_end_when_epiphany_is_sunday() {
        // Jan 6 2019 is a Sunday; the following Sunday is Jan 13.
        let year = LiturgicalYear::for_year(2019).expect("year");
        assert_eq!(year.christmas_season_end, date(2019, 1, 20));
    }

    #[test]
    fn boundaries_belong_to_the_season_they_start() {
        assert_eq!(classify_season(date(2026, 2, 18)), LiturgicalSeason::Lent);
        assert_eq!(classify_season(date(2026, 2, 17)), LiturgicalSeason::Ordinary);
        assert_eq!(classify_season(date(2026, 4, 5)), LiturgicalSeason::Easter);
        assert_eq!(classify_season(date(2026, 4, 4)), LiturgicalSeason::Lent);
        assert_eq!(classify_season(date(2026, 5, 24)), LiturgicalSeason::Easter);
        assert_eq!(classify_season(date(2026, 5, 25)), LiturgicalSeason::Ordinary);
        assert_eq!(classify_season(date(2026, 11, 22)), LiturgicalSeason::Advent);
        assert_eq!(classify_season(date(2026, 11, 21)), LiturgicalSeason::Ordinary);
        assert_eq!(classify_season(date(2026, 12, 25)), LiturgicalSeason::Christmas);
        assert_eq!(classify_season(date(2026, 12, 24)), LiturgicalSeason::Advent);
        assert_eq!(classify_season(date(2026, 1, 17)), LiturgicalSeason::Christmas);
        assert_eq!(classify_season(date(2026, 1, 18)), LiturgicalSeason::Ordinary);
    }

    #[test]
    fn movable_feasts_of_2026() {
        let year = LiturgicalYear::for_year(2026).expect("year");
        let feasts = year.movable_feasts();
        assert_eq!(feasts.len(), MovableFeast::ALL.len());
        assert!(feasts.windows(2).all(|pair| pair[0].1 < pair[1].1));
        assert!(feasts.contains(&(MovableFeast::AshWednesday, date(2026, 2, 18))));
        assert!(feasts.contains(&(MovableFeast::Pentecost, date(2026, 5, 24))));
    }

    #[test]
    fn colours_parse_in_both_languages() {
        assert_eq!("Verde".parse::<LiturgicalColor>().ok(), Some(LiturgicalColor::Green));
        assert_eq!("ROXO".parse::<LiturgicalColor>().ok(), Some(LiturgicalColor::Violet));
        assert_eq!("white".parse::<LiturgicalColor>().ok(), Some(LiturgicalColor::White));
        assert!("azul".parse::<LiturgicalColor>().is_err());
    }
}
