//! Liturgical calendar.
//!
//! Everything here is derived from the date alone:
//! - [`easter_sunday`] anchors the movable part of the year
//! - [`classify_season`] places a date in its season
//! - [`Observance::for_date`] picks the day's celebration and reflection with
//!   the priority fixed feast, movable feast, season

mod easter;
mod feasts;
mod message;
mod season;

pub use easter::easter_sunday;
pub use feasts::{Bilingual, Feast, MovableFeast, fixed_feast, movable_feast, season_message};
pub use message::{Observance, ObservanceSource, daily_message, daily_message_for_slug};
pub use season::{LiturgicalColor, LiturgicalSeason, LiturgicalYear, classify_season};
