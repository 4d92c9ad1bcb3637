//! Plain text to semantic HTML.

use lectio_core::constants::{ANNOTATION_MARKER, PARAGRAPH_CLASS, VERSE_CLASS};

use super::escape::{ENTITIES, escape_html};
use super::verse::annotate_verse_numbers;

const PARAGRAPH_OPEN: &str = const_str::concat!("<p class=\"", PARAGRAPH_CLASS, "\">");
const PARAGRAPH_CLOSE: &str = "</p>";
const LINE_BREAK: &str = "<br>";

/// Every tag [`to_semantic_html`] can emit.
const OWN_TAGS: [&str; 5] = [
    PARAGRAPH_OPEN,
    PARAGRAPH_CLOSE,
    LINE_BREAK,
    const_str::concat!("<sup class=\"", VERSE_CLASS, "\">"),
    "</sup>",
];

/// ## Summary
/// Converts liturgical plain text into safe paragraph markup.
///
/// Text is escaped, verse labels are wrapped in `<sup>`, blank lines split
/// paragraphs, and single newlines inside a paragraph become `<br>`. Each
/// paragraph is wrapped in `<p class="lectio-paragraph">`.
///
/// Output of this function is returned unchanged when passed back in. Any
/// other input that merely contains the annotation marker is escaped like
/// plain text, so markup cannot be smuggled through.
#[must_use]
pub fn to_semantic_html(plain_text: &str) -> String {
    if is_own_markup(plain_text) {
        return plain_text.to_string();
    }

    let text = plain_text.replace("\r\n", "\n").replace('\r', "\n");
    let annotated = annotate_verse_numbers(&escape_html(&text));

    paragraphs(&annotated)
        .into_iter()
        .map(|lines| format!("{PARAGRAPH_OPEN}{}{PARAGRAPH_CLOSE}", lines.join(LINE_BREAK)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Groups trimmed non-blank lines into paragraphs separated by blank lines.
fn paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Whether `text` is already normalized markup: it carries the annotation
/// marker, and once our own tags are removed no markup or stray entity is
/// left.
fn is_own_markup(text: &str) -> bool {
    if !text.contains(ANNOTATION_MARKER) {
        return false;
    }

    let mut residue = text.to_string();
    for tag in OWN_TAGS {
        residue = residue.replace(tag, "");
    }

    if residue.contains(['<', '>', '"', '\'']) {
        return false;
    }
    residue
        .match_indices('&')
        .all(|(i, _)| ENTITIES.iter().any(|entity| residue[i..].starts_with(entity)))
}
