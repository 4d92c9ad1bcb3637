//! Book-name table between liturgical abbreviations and provider names.

use std::collections::HashMap;
use std::sync::LazyLock;

/// (source abbreviation, target provider name), canonical order.
const BOOKS: [(&str, &str); 73] = [
    ("Gn", "Genesis"),
    ("Ex", "Exodus"),
    ("Lv", "Leviticus"),
    ("Nm", "Numbers"),
    ("Dt", "Deuteronomy"),
    ("Js", "Joshua"),
    ("Jz", "Judges"),
    ("Rt", "Ruth"),
    ("1Sm", "1 Samuel"),
    ("2Sm", "2 Samuel"),
    ("1Rs", "1 Kings"),
    ("2Rs", "2 Kings"),
    ("1Cr", "1 Chronicles"),
    ("2Cr", "2 Chronicles"),
    ("Esd", "Ezra"),
    ("Ne", "Nehemiah"),
    ("Tb", "Tobit"),
    ("Jt", "Judith"),
    ("Est", "Esther"),
    ("1Mc", "1 Maccabees"),
    ("2Mc", "2 Maccabees"),
    ("Jó", "Job"),
    ("Sl", "Psalms"),
    ("Pr", "Proverbs"),
    ("Ecl", "Ecclesiastes"),
    ("Ct", "Song of Songs"),
    ("Sb", "Wisdom"),
    ("Eclo", "Sirach"),
    ("Is", "Isaiah"),
    ("Jr", "Jeremiah"),
    ("Lm", "Lamentations"),
    ("Br", "Baruch"),
    ("Ez", "Ezekiel"),
    ("Dn", "Daniel"),
    ("Os", "Hosea"),
    ("Jl", "Joel"),
    ("Am", "Amos"),
    ("Ab", "Obadiah"),
    ("Jn", "Jonah"),
    ("Mq", "Micah"),
    ("Na", "Nahum"),
    ("Hab", "Habakkuk"),
    ("Sf", "Zephaniah"),
    ("Ag", "Haggai"),
    ("Zc", "Zechariah"),
    ("Ml", "Malachi"),
    ("Mt", "Matthew"),
    ("Mc", "Mark"),
    ("Lc", "Luke"),
    ("Jo", "John"),
    ("At", "Acts"),
    ("Rm", "Romans"),
    ("1Cor", "1 Corinthians"),
    ("2Cor", "2 Corinthians"),
    ("Gl", "Galatians"),
    ("Ef", "Ephesians"),
    ("Fl", "Philippians"),
    ("Cl", "Colossians"),
    ("1Ts", "1 Thessalonians"),
    ("2Ts", "2 Thessalonians"),
    ("1Tm", "1 Timothy"),
    ("2Tm", "2 Timothy"),
    ("Tt", "Titus"),
    ("Fm", "Philemon"),
    ("Hb", "Hebrews"),
    ("Tg", "James"),
    ("1Pd", "1 Peter"),
    ("2Pd", "2 Peter"),
    ("1Jo", "1 John"),
    ("2Jo", "2 John"),
    ("3Jo", "3 John"),
    ("Jd", "Jude"),
    ("Ap", "Revelation"),
];

/// Target name of the Psalter, whose chapters need renumbering.
pub const PSALMS: &str = "Psalms";

/// Keyed by lowercase abbreviation; "jo" (John) and "jó" (Job) stay distinct.
static TARGET_BY_SOURCE: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    BOOKS
        .iter()
        .map(|(source, target)| (source.to_lowercase(), *target))
        .collect()
});

static SOURCE_BY_TARGET: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| BOOKS.iter().map(|(source, target)| (*target, *source)).collect());

/// ## Summary
/// Returns the provider's name for a liturgical book abbreviation.
///
/// Matching ignores case but not accents. Unknown tokens return `None`.
#[must_use]
pub fn target_book_name(abbreviation: &str) -> Option<&'static str> {
    TARGET_BY_SOURCE
        .get(abbreviation.to_lowercase().as_str())
        .copied()
}

/// ## Summary
/// Returns the liturgical abbreviation for a provider book name.
#[must_use]
pub fn source_abbreviation(target_name: &str) -> Option<&'static str> {
    SOURCE_BY_TARGET.get(target_name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_bijective() {
        assert_eq!(TARGET_BY_SOURCE.len(), BOOKS.len());
        assert_eq!(SOURCE_BY_TARGET.len(), BOOKS.len());
        for (source, target) in BOOKS {
            assert_eq!(target_book_name(source), Some(target));
            assert_eq!(source_abbreviation(target), Some(source));
        }
    }

    #[test]
    fn accents_distinguish_books() {
        assert_eq!(target_book_name("Jo"), Some("John"));
        assert_eq!(target_book_name("Jó"), Some("Job"));
        assert_eq!(target_book_name("JO"), Some("John"));
    }

    #[test]
    fn unknown_tokens_fail_closed() {
        assert_eq!(target_book_name("Xy"), None);
        assert_eq!(target_book_name(""), None);
        assert_eq!(source_abbreviation("Gospel of Thomas"), None);
    }
}
