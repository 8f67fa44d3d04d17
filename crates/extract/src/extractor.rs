// ABOUTME: The main Extractor struct that turns a URL into normalized main-content text.
// ABOUTME: Provides async extract() for URLs and extract_html() for already-fetched markup.

use dom_query::Document;

use crate::dom::{extract_text, SelectorSet};
use crate::error::CrawlError;
use crate::fetch::fetch;
use crate::options::{ExtractorBuilder, Options};
use crate::result::CrawlResult;

/// Stateless extractor for the main content of web pages.
///
/// Cheap to share: carries only a connection-pooling HTTP client and
/// pre-compiled selectors, so a single instance behind an `Arc` serves
/// concurrent calls without coordination.
pub struct Extractor {
    opts: Options,
    http_client: reqwest::Client,
    selectors: SelectorSet,
}

impl Extractor {
    /// Create a new ExtractorBuilder for configuring the extractor.
    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    /// Create a new Extractor with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        let selectors = SelectorSet::compile(&opts.content_selectors);

        Self {
            opts,
            http_client,
            selectors,
        }
    }

    /// Fetch a URL and extract its main content as plain text.
    ///
    /// An empty URL fails immediately with `MissingInput`; no network call is
    /// made. Transport and status failures surface as typed errors; an empty
    /// page is a successful result with empty content.
    pub async fn extract(&self, url: &str) -> Result<CrawlResult, CrawlError> {
        if url.is_empty() {
            return Err(CrawlError::missing_input("Extract"));
        }

        let fetched = fetch(&self.http_client, url, self.opts.allow_private_networks).await?;
        let html = fetched.text_utf8();

        Ok(self.extract_html(&html))
    }

    /// Extract main content from an HTML string without fetching.
    ///
    /// Same selection pipeline as `extract`, minus the network. Malformed
    /// markup is parsed best-effort; a page with nothing extractable yields
    /// empty content rather than an error.
    pub fn extract_html(&self, html: &str) -> CrawlResult {
        let doc = Document::from(html);
        let content = extract_text(&doc, &self.selectors, self.opts.max_content_chars);
        CrawlResult { content }
    }
}
