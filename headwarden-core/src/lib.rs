pub mod analyzer;
pub mod catalog;
pub mod model;
pub mod report;
pub mod scoring;
pub mod security;

use colored::Colorize;

pub use analyzer::{Analyzer, TargetOutcome, normalize_url};
pub use catalog::{HeaderSpec, SECURITY_HEADERS, Tier, catalog};
pub use model::{AnalysisResult, Grade, HeaderSummary};
pub use scoring::{ScoreBreakdown, score_headers};
pub use security::{HeaderLookup, is_present};

pub fn print_banner() {
    let banner = r#"
  _                    _                         _
 | |__   ___  __ _  __| |_      ____ _ _ __ __| | ___ _ __
 | '_ \ / _ \/ _` |/ _` \ \ /\ / / _` | '__/ _` |/ _ \ '_ \
 | | | |  __/ (_| | (_| |\ V  V / (_| | | | (_| |  __/ | | |
 |_| |_|\___|\__,_|\__,_| \_/\_/ \__,_|_|  \__,_|\___|_| |_|
"#;
    eprintln!("{}", banner.bright_cyan());
    eprintln!(
        "  {} {}\n",
        "HTTP security header analyzer".bright_white(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
