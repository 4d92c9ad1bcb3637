/// Route component constants shared across crates
pub const LITURGY_ROUTE_COMPONENT: &str = "liturgia-diaria";
pub const LITURGY_ROUTE_PREFIX: &str = const_str::concat!("/", LITURGY_ROUTE_COMPONENT);

pub const ENGLISH_ROUTE_COMPONENT: &str = "en";
pub const READINGS_ROUTE_COMPONENT: &str = "daily-readings";
pub const READINGS_ROUTE_PREFIX: &str =
    const_str::concat!("/", ENGLISH_ROUTE_COMPONENT, "/", READINGS_ROUTE_COMPONENT);

/// Class prefix shared by every element the text normalizer emits.
pub const MARKUP_CLASS_PREFIX: &str = "lectio-";
pub const VERSE_CLASS: &str = const_str::concat!(MARKUP_CLASS_PREFIX, "verse");
pub const PARAGRAPH_CLASS: &str = const_str::concat!(MARKUP_CLASS_PREFIX, "paragraph");

/// Substring whose presence marks text as already normalized.
pub const ANNOTATION_MARKER: &str = const_str::concat!("class=\"", MARKUP_CLASS_PREFIX);

pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";
pub const DEFAULT_MIN_YEAR: i32 = 1900;
pub const DEFAULT_MAX_YEAR: i32 = 2100;
