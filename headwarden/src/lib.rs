// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    AnalyzeOptions, load_urls_from_file, load_urls_from_source, parse_url_line, run_analyze,
};

// Re-export the analysis entry points from headwarden-core
pub use headwarden_core::{AnalysisResult, Analyzer, Grade, normalize_url};
