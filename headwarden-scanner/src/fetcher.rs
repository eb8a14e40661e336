use crate::config::FetcherConfig;
use crate::error::{FetchError, Result};
use crate::result::FetchedResponse;
use reqwest::{Client, Url};
use std::time::Instant;
use tracing::debug;

/// Issues the single GET request whose response headers get graded.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        Self::with_config(FetcherConfig::default())
    }

    pub fn with_config(config: FetcherConfig) -> Result<Self> {
        let redirect_policy = if config.follow_redirects {
            reqwest::redirect::Policy::limited(10)
        } else {
            reqwest::redirect::Policy::none()
        };

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_certificates)
            .redirect(redirect_policy)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetches `url` and returns the status and headers of the response.
    ///
    /// The body is never read; the response (and its connection) is dropped
    /// as soon as the headers are copied out.
    pub async fn fetch(&self, url: &str) -> Result<FetchedResponse> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        debug!("Fetching {}", parsed);

        let start = Instant::now();
        let response = self.client.get(parsed).send().await.map_err(|e| {
            let err = FetchError::from(e);
            debug!("Fetch of {} failed: {}", url, err);
            err
        })?;
        let response_time = start.elapsed();

        let mut result = FetchedResponse::new(url.to_string());
        result.status_code = response.status().as_u16();
        result.headers = response.headers().clone();
        result.response_time = response_time;
        drop(response);

        debug!(
            "{} answered {} with {} headers in {:?}",
            url,
            result.status_code,
            result.headers.len(),
            result.response_time
        );

        Ok(result)
    }
}
