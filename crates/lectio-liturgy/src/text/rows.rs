//! Joining verse rows returned by the alternate-language text provider.

use serde::{Deserialize, Serialize};

use super::verse::{at_label_boundary, label_end, opener_len};

/// One verse as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRow {
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl VerseRow {
    #[must_use]
    pub fn new(chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            chapter,
            verse,
            text: text.into(),
        }
    }
}

/// ## Summary
/// Joins provider rows into one paragraph of plain text with verse labels.
///
/// Each row's whitespace is collapsed and empty rows are skipped. A row is
/// prefixed `"<verse> "`, or `"<chapter>:<verse> "` when its chapter differs
/// from the previous emitted row. The result then goes through
/// [`normalize_verse_spacing`].
#[must_use]
pub fn join_provider_verse_rows(rows: &[VerseRow]) -> String {
    let mut joined = String::new();
    let mut previous_chapter = None;

    for row in rows {
        let text = row.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        match previous_chapter {
            Some(chapter) if chapter != row.chapter => {
                joined.push_str(&format!("{}:{} ", row.chapter, row.verse));
            }
            _ => joined.push_str(&format!("{} ", row.verse)),
        }
        joined.push_str(&text);
        previous_chapter = Some(row.chapter);
    }

    normalize_verse_spacing(&joined)
}

/// ## Summary
/// Leaves exactly one space between a verse label and the sentence it opens.
///
/// A label glued to an uppercase letter or opening quote (`16For`) gets a
/// space; any run of spaces or tabs after a label becomes a single space.
#[must_use]
pub fn normalize_verse_spacing(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let label = if chars[i].is_ascii_digit() && at_label_boundary(&chars, i) {
            label_end(&chars, i)
        } else {
            None
        };
        let Some(end) = label else {
            out.push(chars[i]);
            i += 1;
            continue;
        };

        out.extend(&chars[i..end]);
        let gap = chars[end..]
            .iter()
            .take_while(|c| matches!(c, ' ' | '\t'))
            .count();
        let glued = gap == 0
            && (chars.get(end).is_some_and(|c| c.is_uppercase())
                || opener_len(&chars, end).is_some());

        if glued || (gap > 0 && end + gap < chars.len()) {
            out.push(' ');
            i = end + gap;
        } else {
            i = end;
        }
    }

    out
}
