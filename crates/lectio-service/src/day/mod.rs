//! The liturgical day record and how it is built.

mod assemble;
mod enrich;
mod model;
mod service;

pub use assemble::assemble_day;
pub use enrich::enrich_readings;
pub use model::{
    AlternateText, Antiphons, DayLabels, LiturgicalDay, ReadingItem, Readings, TextBlock,
};
pub use service::DayService;
