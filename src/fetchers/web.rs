use crate::config::GameConfig;
use crate::error::FetchError;
use crate::fetchers::{FetchedPage, PageFetcher};
use crate::title::PageTitle;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Fetches articles over HTTP from a fixed origin
pub struct WebFetcher {
    client: Client,
    base: Url,
}

impl WebFetcher {
    /// Build a fetcher from the run configuration.
    ///
    /// The client carries the configured User-Agent and request timeout.
    pub fn new(config: &GameConfig) -> Result<Self, FetchError> {
        let base = Url::parse(&config.base_url)?;
        if base.cannot_be_a_base() {
            return Err(FetchError::UnusableBase(config.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, base })
    }

    /// Origin every article path is joined to
    pub fn base(&self) -> &Url {
        &self.base
    }
}

#[async_trait]
impl PageFetcher for WebFetcher {
    async fn fetch(&self, title: &PageTitle) -> Result<FetchedPage, FetchError> {
        let url = title.article_url(&self.base);
        ::log::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            ::log::warn!("{} returned HTTP {}", url, status);
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let html = response.text().await?;
        ::log::info!("Fetched {} bytes from {}", html.len(), final_url);

        Ok(FetchedPage {
            url: final_url,
            html,
        })
    }
}
