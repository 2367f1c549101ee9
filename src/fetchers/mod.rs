pub mod web;

use crate::error::FetchError;
use crate::title::PageTitle;
use async_trait::async_trait;
use url::Url;

pub use web::WebFetcher;

/// Raw content of one fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the content was served from, after redirects
    pub url: Url,
    /// Page HTML
    pub html: String,
}

/// Resolves a page title to its content.
///
/// Implementations report failure without retrying.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, title: &PageTitle) -> Result<FetchedPage, FetchError>;
}
