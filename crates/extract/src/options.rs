// ABOUTME: Configuration for the extractor: the Options struct and the fluent ExtractorBuilder.
// ABOUTME: Holds the fixed constants (timeout, User-Agent, selector list, output cap) as explicit config.

use std::time::Duration;

use crate::extractor::Extractor;

/// Browser-like User-Agent sent with every fetch, to reduce bot-blocking.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request fetch timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// Maximum length of extracted content, in characters.
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 8000;

/// Content container selectors, most semantic first. The first selector that
/// matches at least one element wins.
pub const DEFAULT_CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    ".article",
    ".post",
    ".content",
    "#content",
    "[role=\"main\"]",
];

/// Elements that never contribute to main content and are removed before
/// extraction, so menus, ads, and scripts don't pollute the text.
pub const STRIP_SELECTOR: &str = "script, style, nav, footer, header, aside, iframe, noscript";

/// Configuration options for the extractor.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_content_chars: usize,
    pub content_selectors: Vec<String>,
    pub allow_private_networks: bool,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
            content_selectors: DEFAULT_CONTENT_SELECTORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            allow_private_networks: false,
            http_client: None,
        }
    }
}

/// Builder for constructing Extractor instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ExtractorBuilder {
    opts: Options,
}

impl ExtractorBuilder {
    /// Create a new ExtractorBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Set the maximum extracted content length in characters.
    pub fn max_content_chars(mut self, max: usize) -> Self {
        self.opts.max_content_chars = max;
        self
    }

    /// Replace the ordered content selector list.
    pub fn content_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.content_selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    /// Allow or disallow requests to private networks.
    pub fn allow_private_networks(mut self, allow: bool) -> Self {
        self.opts.allow_private_networks = allow;
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Extractor with the configured options.
    pub fn build(self) -> Extractor {
        Extractor::new(self.opts)
    }
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
