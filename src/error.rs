//! Error types for fetching pages and navigating between them.
//!
//! Every [`NavigationError`] ends the run it occurs in. The only recovery the
//! navigator performs is its single secondary-link backtrack, which is part of the
//! navigation algorithm rather than error handling.

use crate::title::PageTitle;
use thiserror::Error;

/// Failure to retrieve a page. Never retried.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The base URL or a request URL could not be parsed
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The configured base URL cannot carry an article path
    #[error("base URL '{0}' cannot be used to build article paths")]
    UnusableBase(String),

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The HTTP client could not be built from the configuration
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or body decoding failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Terminal outcome of a failed run
#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("failed to fetch page '{title}': {source}")]
    FetchFailed {
        title: PageTitle,
        #[source]
        source: FetchError,
    },

    #[error("no valid links found on '{title}'")]
    NoLinksFound { title: PageTitle },

    /// A cycle was hit with no backtrack left to spend
    #[error("loop detected at '{title}'")]
    LoopDetected { title: PageTitle },

    #[error("reached maximum iterations ({limit})")]
    BudgetExhausted { limit: usize },

    #[error("could not parse page title from URL: {url}")]
    TitleResolution { url: String },
}

impl NavigationError {
    /// Short machine-friendly label used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationError::FetchFailed { .. } => "fetch_failed",
            NavigationError::NoLinksFound { .. } => "no_links_found",
            NavigationError::LoopDetected { .. } => "loop_detected",
            NavigationError::BudgetExhausted { .. } => "budget_exhausted",
            NavigationError::TitleResolution { .. } => "title_resolution",
        }
    }
}
