use reqwest::header::HeaderMap;
use std::time::Duration;

/// Headers and status of the first response sent by a target.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub url: String,
    pub status_code: u16,
    pub headers: HeaderMap,
    pub response_time: Duration,
}

impl FetchedResponse {
    pub fn new(url: String) -> Self {
        Self {
            url,
            status_code: 0,
            headers: HeaderMap::new(),
            response_time: Duration::from_secs(0),
        }
    }

    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status_code)
    }
}
