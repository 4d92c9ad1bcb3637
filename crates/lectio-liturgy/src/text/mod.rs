//! Text normalization for reading passages.
//!
//! Plain text from the liturgy provider becomes escaped paragraph markup
//! with annotated verse numbers. Verse rows from the alternate-language
//! provider are joined into the same plain-text shape first.

mod escape;
mod html;
mod rows;
mod verse;

pub use escape::escape_html;
pub use html::to_semantic_html;
pub use rows::{VerseRow, join_provider_verse_rows, normalize_verse_spacing};
pub use verse::annotate_verse_numbers;
