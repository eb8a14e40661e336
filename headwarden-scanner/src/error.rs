use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest nests the interesting part (DNS, TLS, refused) in the source chain
        let cause = describe(&err);

        if err.is_timeout() {
            FetchError::Timeout(cause)
        } else if err.is_builder() {
            FetchError::Client(cause)
        } else if err.is_connect() {
            FetchError::Connect(cause)
        } else {
            FetchError::Request(cause)
        }
    }
}

fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = inner.source();
    }
    message
}

pub type Result<T> = std::result::Result<T, FetchError>;
