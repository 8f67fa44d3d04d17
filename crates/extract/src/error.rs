// ABOUTME: Error types for the extractor including the ErrorKind enum and CrawlError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error kinds representing different categories of crawl failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingInput,
    Network,
    Timeout,
    HttpStatus,
    Parse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::MissingInput => "missing input",
            ErrorKind::Network => "network error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::HttpStatus => "HTTP status error",
            ErrorKind::Parse => "parse error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for crawl operations.
#[derive(Debug, thiserror::Error)]
pub struct CrawlError {
    pub kind: ErrorKind,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for CrawlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "crawl: {} {}: {}", self.op, self.url, self.kind)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl CrawlError {
    /// Create a MissingInput error (no network call was attempted).
    pub fn missing_input(op: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::MissingInput,
            url: String::new(),
            op: op.into(),
            source: None,
        }
    }

    /// Create a Network error.
    pub fn network(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            kind: ErrorKind::Network,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Timeout error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an HttpStatus error for a non-2xx response.
    pub fn http_status(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            kind: ErrorKind::HttpStatus,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Parse error.
    pub fn parse(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            kind: ErrorKind::Parse,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Returns true if this is a MissingInput error.
    pub fn is_missing_input(&self) -> bool {
        self.kind == ErrorKind::MissingInput
    }

    /// Returns true if this is a Network error.
    pub fn is_network(&self) -> bool {
        self.kind == ErrorKind::Network
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        self.kind == ErrorKind::Timeout
    }

    /// Returns true if this is an HttpStatus error.
    pub fn is_http_status(&self) -> bool {
        self.kind == ErrorKind::HttpStatus
    }

    /// Returns true if this is a Parse error.
    pub fn is_parse(&self) -> bool {
        self.kind == ErrorKind::Parse
    }
}
