// Re-export modules
pub mod config;
pub mod error;
pub mod fetchers;
pub mod filter;
pub mod navigator;
pub mod parsers;
pub mod results;
pub mod title;

// Re-export commonly used types for convenience
pub use error::{FetchError, NavigationError};
pub use navigator::{NavigationEvent, NavigationState, NavigationStatus, Navigator};
pub use results::RunReport;
pub use title::PageTitle;

use fetchers::WebFetcher;
use parsers::ArticleLinkExtractor;

/// Navigator that fetches over HTTP and reads rendered article HTML
pub type WebNavigator = Navigator<WebFetcher, ArticleLinkExtractor>;

/// Builder for a first-link run against a live site
pub struct Game {
    config: config::GameConfig,
}

impl Game {
    /// Create a new Game builder with default settings
    pub fn new() -> Self {
        Self {
            config: config::GameConfig::default(),
        }
    }

    /// Set the configuration
    pub fn with_config(mut self, config: config::GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the page to reach
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.config.target = target.into();
        self
    }

    /// Set the origin pages are fetched from
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the iteration ceiling
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    pub fn config(&self) -> &config::GameConfig {
        &self.config
    }

    /// Build the navigator for this configuration
    pub fn navigator(&self) -> Result<WebNavigator, Box<dyn std::error::Error>> {
        let target = PageTitle::new(&self.config.target).ok_or("target title is empty")?;
        let fetcher = WebFetcher::new(&self.config)?;
        let extractor = ArticleLinkExtractor::new(fetcher.base().clone());

        Ok(Navigator::new(fetcher, extractor, target)
            .with_max_iterations(self.config.max_iterations))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
