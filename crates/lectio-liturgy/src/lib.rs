//! Liturgical calendar and content normalization engine.
//!
//! Pure computation, no I/O:
//! - [`date`] - Date slug codec, civil "today" and navigation
//! - [`calendar`] - Easter computation, seasons and daily messages
//! - [`scripture`] - Source-language to target-provider reference translation
//! - [`text`] - Plain text to escaped, verse-annotated markup

pub mod calendar;
pub mod date;
pub mod error;
pub mod scripture;
pub mod text;
