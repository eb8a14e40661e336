use crate::model::AnalysisResult;
use crate::scoring::score_headers;
use futures::stream::{self, StreamExt};
use headwarden_scanner::{FetchError, Fetcher, FetcherConfig};
use tracing::{debug, info, warn};

/// Prepends `https://` unless the input already starts with a literal
/// `http://` or `https://` prefix.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}

/// Outcome of one target in a batch.
#[derive(Debug)]
pub struct TargetOutcome {
    pub input: String,
    pub outcome: Result<AnalysisResult, FetchError>,
}

/// Normalizes, fetches and grades targets.
#[derive(Debug, Clone)]
pub struct Analyzer {
    fetcher: Fetcher,
}

impl Analyzer {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(FetcherConfig::default())
    }

    pub fn with_config(config: FetcherConfig) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: Fetcher::with_config(config)?,
        })
    }

    pub fn from_fetcher(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    pub async fn analyze(&self, input: &str) -> Result<AnalysisResult, FetchError> {
        let url = normalize_url(input);
        debug!("Analyzing {} (input: {})", url, input);

        let response = self.fetcher.fetch(&url).await?;
        let result = score_headers(&response.headers, &url);

        info!(
            "{} scored {} ({}) with {}/{} headers",
            url,
            result.score,
            result.grade,
            result.present_count(),
            result.summary.len()
        );

        Ok(result)
    }

    /// Analyzes every input with at most `concurrency` requests in flight.
    /// Outcomes come back in input order.
    pub async fn analyze_many(&self, inputs: &[String], concurrency: usize) -> Vec<TargetOutcome> {
        let concurrency = concurrency.max(1);

        stream::iter(inputs.iter().cloned())
            .map(|input| async move {
                let outcome = self.analyze(&input).await;
                if let Err(ref e) = outcome {
                    warn!("Analysis of {} failed: {}", input, e);
                }
                TargetOutcome { input, outcome }
            })
            .buffered(concurrency)
            .collect()
            .await
    }
}
