use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Headwarden/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/trapdoorsec/headwarden)"
);

/// HTTP client settings for a [`Fetcher`](crate::Fetcher).
///
/// The defaults are tuned for auditing arbitrary sites: certificates are not
/// verified, so self-signed and expired hosts can still be graded, and
/// redirects are not followed, so the grade reflects the first hop.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub timeout: Duration,
    pub verify_certificates: bool,
    pub follow_redirects: bool,
    pub user_agent: String,
}

impl FetcherConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_verify_certificates(mut self, verify: bool) -> Self {
        self.verify_certificates = verify;
        self
    }

    pub fn with_follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verify_certificates: false,
            follow_redirects: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
