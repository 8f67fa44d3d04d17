// ABOUTME: DOM-level content selection: boilerplate stripping, prioritized selector matching, body fallback.
// ABOUTME: Also holds the whitespace normalization and character truncation helpers.

use dom_query::{Document, Matcher};

use crate::options::STRIP_SELECTOR;

/// Pre-compiled selectors for one extractor instance.
///
/// Selector parsing is expensive relative to matching, and the selector list
/// is fixed configuration, so everything is compiled once at construction.
/// Invalid user-supplied selectors are skipped.
#[derive(Debug)]
pub struct SelectorSet {
    strip: Matcher,
    content: Vec<Matcher>,
    body: Matcher,
}

impl SelectorSet {
    /// Compile the strip selector and the ordered content selector list.
    pub fn compile(content_selectors: &[String]) -> Self {
        let strip = Matcher::new(STRIP_SELECTOR).expect("strip selector must parse");
        let body = Matcher::new("body").expect("body selector must parse");
        let content = content_selectors
            .iter()
            .filter_map(|css| Matcher::new(css).ok())
            .collect();

        Self {
            strip,
            content,
            body,
        }
    }
}

/// Extract the main-content text from a parsed document.
///
/// Steps:
/// 1. Remove boilerplate elements (script, style, nav, footer, header, aside,
///    iframe, noscript).
/// 2. Try the content selectors in order; the first selector matching at
///    least one element supplies the text. No merging across selectors.
/// 3. If nothing matched, or the matched text is whitespace-only, fall back
///    to the text of the whole body.
/// 4. Collapse whitespace runs to single spaces, trim, and truncate to
///    `max_chars` characters. No truncation marker is appended.
pub fn extract_text(doc: &Document, selectors: &SelectorSet, max_chars: usize) -> String {
    doc.select_matcher(&selectors.strip).remove();

    let mut content = String::new();
    for matcher in &selectors.content {
        let selection = doc.select_matcher(matcher);
        if selection.exists() {
            content = selection.text().to_string();
            break;
        }
    }

    if content.trim().is_empty() {
        content = doc.select_matcher(&selectors.body).text().to_string();
    }

    truncate_chars(&normalize_whitespace(&content), max_chars)
}

/// Collapse runs of whitespace (including newlines) into single ASCII spaces
/// and trim. Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to the first `max_chars` characters (character count, not bytes).
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        s.chars().take(max_chars).collect()
    }
}
