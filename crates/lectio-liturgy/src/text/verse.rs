//! Verse-number detection.
//!
//! A verse label is a run of one to three digits, optionally followed by `:`
//! and another one to three digits (`16`, `3:16`). It stands at the start of
//! the text or after whitespace or punctuation, and the text after it opens a
//! sentence: an optional single space, an optional opening quote or
//! bracket, then an uppercase letter.

use lectio_core::constants::VERSE_CLASS;

/// Characters that may sit between a verse label and the sentence it opens.
const OPENERS: [char; 8] = ['"', '\'', '\u{201C}', '\u{2018}', '(', '[', '\u{00AB}', '\u{2014}'];

/// Escaped forms of the openers above.
const ESCAPED_OPENERS: [&str; 2] = ["&quot;", "&#39;"];

const VERSE_OPEN: &str = const_str::concat!("<sup class=\"", VERSE_CLASS, "\">");
const VERSE_CLOSE: &str = "</sup>";

/// ## Summary
/// Wraps every verse label in already-escaped text with
/// `<sup class="lectio-verse">…</sup>`. The text around each label is kept
/// byte for byte.
#[must_use]
pub fn annotate_verse_numbers(escaped: &str) -> String {
    let chars: Vec<char> = escaped.chars().collect();
    let mut out = String::with_capacity(escaped.len() + 32);
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        if at_label_boundary(&chars, i)
            && let Some(end) = label_end(&chars, i)
            && opens_sentence(&chars, end)
        {
            out.push_str(VERSE_OPEN);
            out.extend(&chars[i..end]);
            out.push_str(VERSE_CLOSE);
            i = end;
            continue;
        }

        // Copy the whole run so a label is never found inside a longer number.
        let run_end = digit_run_end(&chars, i);
        out.extend(&chars[i..run_end]);
        i = run_end;
    }

    out
}

/// Whether a label may begin at `i`.
///
/// Digits joined to a preceding number by `.`, `,` or `:` (`1,5`, `2.000`)
/// continue that number and never start a label.
pub(super) fn at_label_boundary(chars: &[char], i: usize) -> bool {
    let Some(prev) = i.checked_sub(1).map(|p| chars[p]) else {
        return true;
    };
    if prev.is_whitespace() {
        return true;
    }
    if prev.is_alphanumeric() || prev == '_' {
        return false;
    }
    if matches!(prev, '.' | ',' | ':')
        && i >= 2
        && chars[i - 2].is_ascii_digit()
    {
        return false;
    }
    true
}

/// End index of a label starting at `start`, or `None` if the digits there
/// do not form one.
pub(super) fn label_end(chars: &[char], start: usize) -> Option<usize> {
    let verse_end = digit_run_end(chars, start);
    if verse_end - start > 3 {
        return None;
    }

    if chars.get(verse_end) == Some(&':')
        && chars.get(verse_end + 1).is_some_and(char::is_ascii_digit)
    {
        let end = digit_run_end(chars, verse_end + 1);
        return (end - verse_end - 1 <= 3).then_some(end);
    }

    Some(verse_end)
}

/// Whether the text at `i` is an opener or uppercase letter, after at most
/// one space.
fn opens_sentence(chars: &[char], mut i: usize) -> bool {
    if chars.get(i) == Some(&' ') {
        i += 1;
    }
    if let Some(skip) = opener_len(chars, i) {
        i += skip;
    }
    chars.get(i).is_some_and(|c| c.is_uppercase())
}

/// Length in chars of an opening quote or bracket at `i`, raw or escaped.
pub(super) fn opener_len(chars: &[char], i: usize) -> Option<usize> {
    let c = *chars.get(i)?;
    if OPENERS.contains(&c) {
        return Some(1);
    }
    ESCAPED_OPENERS.iter().find_map(|entity| {
        let len = entity.chars().count();
        chars
            .get(i..i + len)
            .is_some_and(|window| window.iter().copied().eq(entity.chars()))
            .then_some(len)
    })
}

pub(super) fn digit_run_end(chars: &[char], start: usize) -> usize {
    chars[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(chars.len(), |offset| start + offset)
}
