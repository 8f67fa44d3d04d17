// ABOUTME: CrawlResult struct holding the extracted plain-text content of a page.
// ABOUTME: Content is whitespace-normalized, trimmed, and bounded in length.

use serde::{Deserialize, Serialize};

/// The result of a crawl: the page's main content as normalized plain text.
///
/// An empty `content` is a valid result (e.g. a JavaScript-rendered page with
/// no server-side text), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CrawlResult {
    pub content: String,
}

impl CrawlResult {
    /// Returns true if no extractable content was found.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
