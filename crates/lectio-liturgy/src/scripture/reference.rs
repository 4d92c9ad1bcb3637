//! Liturgical reference to provider passage translation.
//!
//! Liturgical notation: `Jo 3,16-21`, `At 2,14a.22-33`, `Sl 22(23),1-3 (R. 1)`.
//! Provider notation:   `John 3:16-21`, `Acts 2:14,22-33`, `Psalms 23:1-3`.

use super::books::{PSALMS, target_book_name};

/// Joins alternative readings: `Mt 26,14-27,66 ou Mt 27,11-54`.
const ALTERNATIVE_SEPARATOR: &str = " ou ";

/// ## Summary
/// Translates a liturgical scripture reference into the passage syntax of the
/// alternate-language text provider.
///
/// Parenthetical annotations are stripped, dash variants collapse to `-`, the
/// comma between chapter and verse becomes `:` and periods between verse
/// groups become `,`. A whole-chapter citation yields `"<Book> <chapter>"`.
/// Of several alternatives joined by `ou`, only the first is translated.
///
/// Returns `None` for an unknown book or an unparseable chapter/verse part.
#[must_use]
pub fn translate(source_ref: &str) -> Option<String> {
    let normalized: String = source_ref
        .chars()
        .map(|c| if is_dash(c) { '-' } else { c })
        .collect();
    let first = normalized
        .split(ALTERNATIVE_SEPARATOR)
        .next()
        .unwrap_or_default();

    let (token, rest) = split_book_token(first.trim())?;
    let Some(book) = target_book_name(&token) else {
        tracing::debug!(reference = source_ref, token, "Unknown book token");
        return None;
    };

    let (chapter, rest) = split_chapter(rest, book == PSALMS)?;
    let range = rewrite_range(&strip_parentheticals(rest))?;

    Some(format!("{book} {chapter}{range}"))
}

fn is_dash(c: char) -> bool {
    matches!(
        c,
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}' | '\u{2212}'
    )
}

/// Splits `1 Cor 13,4` into (`1Cor`, ` 13,4`).
fn split_book_token(s: &str) -> Option<(String, &str)> {
    let mut token = String::new();
    let mut rest = s;

    if let Some(first) = rest.chars().next()
        && matches!(first, '1'..='3')
    {
        token.push(first);
        rest = rest[first.len_utf8()..].trim_start();
    }

    let letters_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map_or(rest.len(), |(i, _)| i);
    if letters_end == 0 {
        return None;
    }
    token.push_str(&rest[..letters_end]);
    Some((token, &rest[letters_end..]))
}

/// Reads the chapter number and, for psalms, swaps in the parenthesized
/// Hebrew number the provider uses (`22(23)` becomes `23`).
fn split_chapter(s: &str, psalter: bool) -> Option<(String, &str)> {
    let s = s.trim_start();
    let digits_end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    if digits_end == 0 {
        return None;
    }
    let mut chapter = s[..digits_end].to_string();
    let mut rest = &s[digits_end..];

    if let Some(inner) = rest.strip_prefix('(')
        && let Some(close) = inner.find(')')
        && close > 0
        && inner[..close].bytes().all(|b| b.is_ascii_digit())
    {
        if psalter {
            chapter = inner[..close].to_string();
        }
        rest = &inner[close + 1..];
    }

    Some((chapter, rest))
}

/// Removes every `(...)` group; an unclosed group runs to the end.
fn strip_parentheticals(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut depth = 0_usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => result.push(c),
            _ => {}
        }
    }
    result
}

/// Rewrites `,16-21.24` into `:16-21,24`.
///
/// Letters directly after a digit are a verse part (`14a`, `16ab`) and are
/// dropped.
/// Any other letter, whitespace between two digit groups, or a character
/// that is not a digit or separator rejects the reference.
fn rewrite_range(s: &str) -> Option<String> {
    let mut range = String::with_capacity(s.len());
    let mut previous: Option<char> = None;
    let mut spaced = false;

    for c in s.chars() {
        if c.is_whitespace() {
            spaced = true;
            continue;
        }
        let after_digit = previous.is_some_and(|p| p.is_ascii_digit());
        let in_part = previous.is_some_and(char::is_alphabetic);
        match c {
            d if d.is_ascii_digit() => {
                if (spaced && after_digit) || in_part {
                    return None;
                }
                range.push(d);
            }
            l if l.is_alphabetic() && (after_digit || in_part) && !spaced => {}
            ',' => range.push(':'),
            '.' => range.push(','),
            '-' | ';' => range.push(c),
            _ => return None,
        }
        previous = Some(c);
        spaced = false;
    }

    let range = range.trim_end_matches([':', ',', ';', '-']);
    match range.chars().next() {
        None | Some(':' | '-') => Some(range.to_string()),
        Some(_) => None,
    }
}
