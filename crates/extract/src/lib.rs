// ABOUTME: Main library entry point for the Doogle web content extractor.
// ABOUTME: Re-exports the public API: Extractor, ExtractorBuilder, CrawlResult, CrawlError, ErrorKind, Options.

//! Doogle extract - best-effort plain-text extraction of a web page's main content.
//!
//! This crate fetches a single URL, strips boilerplate markup, selects the
//! most likely content container via an ordered selector list, and returns
//! normalized plain text bounded in size.
//!
//! # Example
//!
//! ```no_run
//! use doogle_extract::{CrawlError, Extractor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), CrawlError> {
//!     let extractor = Extractor::builder().build();
//!     let result = extractor.extract("https://example.com/article").await?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```

pub mod dom;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod options;
pub mod result;

pub use crate::error::{CrawlError, ErrorKind};
pub use crate::extractor::Extractor;
pub use crate::options::{ExtractorBuilder, Options};
pub use crate::result::CrawlResult;
