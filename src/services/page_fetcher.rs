use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::configuration::ScraperSettings;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("got status {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Narrow seam between pagination logic and the network, so extraction can
/// run against canned markup in tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct ReqwestPageFetcher {
    client: Client,
}

impl ReqwestPageFetcher {
    pub fn new(settings: &ScraperSettings) -> Self {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .expect("Failed to build reqwest client");

        ReqwestPageFetcher { client }
    }
}

#[async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

/// Page 1 maps to the bare listing URL; later pages append the page query
/// parameter. A language filter becomes an extra path segment.
pub fn listing_url(base_url: &str, language: Option<&str>, page: u32) -> String {
    let url = match language {
        Some(language) => format!("{}/{}", base_url.trim_end_matches('/'), language),
        None => base_url.to_string(),
    };

    match page {
        1 => url,
        page => format!("{}?page={}", url, page),
    }
}
