//! Calendar dates and their slug encodings.
//!
//! Two slug conventions are in circulation:
//! - `DD-MM-YYYY` (canonical, Portuguese pages)
//! - `MM-DD-YYYY` (legacy links, English pages)
//!
//! Parsing never guesses between them: the caller names the convention, and
//! [`SlugCodec::normalize_to_canonical`] is the only place that tries both, in
//! a fixed order.

mod codec;
mod format;
mod navigation;

pub use codec::{CalendarDate, SlugCodec, SlugResolution, guess_convention, today, today_at};
pub use format::DateFormat;
pub use navigation::{Navigation, path_for};
