pub mod config;
pub mod error;
pub mod fetcher;
pub mod result;

pub use config::FetcherConfig;
pub use error::FetchError;
pub use fetcher::Fetcher;
pub use result::FetchedResponse;
