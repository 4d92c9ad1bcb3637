//! Scripture references.
//!
//! Liturgical references use Portuguese abbreviations and comma/period
//! punctuation; the alternate-language text provider expects English book
//! names and colon/comma punctuation.

mod books;
mod reference;

pub use books::{source_abbreviation, target_book_name};
pub use reference::translate;
