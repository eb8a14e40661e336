use anyhow::{Context, anyhow, bail};
use clap::ArgMatches;
use colored::{ColoredString, Colorize};
use headwarden_core::catalog::catalog;
use headwarden_core::report::{ReportData, ReportFormat, generate_report, save_report};
use headwarden_core::{AnalysisResult, Analyzer, Grade, normalize_url};
use headwarden_scanner::FetcherConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

// Helper functions for analyze handler

/// Load URLs from either a file or a single URL argument
pub fn load_urls_from_source(
    url: Option<&String>,
    hosts_file: Option<&PathBuf>,
) -> Result<Vec<String>, String> {
    if let Some(hosts_file_path) = hosts_file {
        load_urls_from_file(hosts_file_path)
    } else if let Some(url) = url {
        Ok(vec![url.clone()])
    } else {
        Err("Either --url or --hosts-file must be provided".to_string())
    }
}

/// Load and normalize URLs from a file, one per line
pub fn load_urls_from_file(path: &Path) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read hosts file {}: {}", path.display(), e))?;

    let urls: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_url_line(line.trim()))
        .collect();

    if urls.is_empty() {
        return Err(format!("No valid URLs found in {}", path.display()));
    }

    Ok(urls)
}

/// Normalize a single line and keep it only if it parses as a URL with a host
pub fn parse_url_line(line: &str) -> Option<String> {
    let normalized = normalize_url(line);

    match Url::parse(&normalized) {
        Ok(parsed) if parsed.host_str().is_some() => Some(normalized),
        _ => {
            eprintln!("{} Skipping invalid URL '{}'", "⚠".yellow(), line);
            None
        }
    }
}

pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

pub fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::ERROR
    };
    // Logs go to stderr so JSON on stdout stays parseable
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Settings of one `analyze` invocation
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub urls: Vec<String>,
    pub threads: usize,
    pub fetcher: FetcherConfig,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

impl AnalyzeOptions {
    pub fn from_matches(sub_matches: &ArgMatches, quiet: bool) -> anyhow::Result<Self> {
        let url = sub_matches.get_one::<String>("url");
        let hosts_file = sub_matches
            .get_one::<String>("hosts-file")
            .map(|p| expand_path(p));
        let urls = load_urls_from_source(url, hosts_file.as_ref()).map_err(|e| anyhow!(e))?;

        let threads = *sub_matches.get_one::<usize>("threads").unwrap_or(&4);
        let timeout = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);

        let format_name = sub_matches
            .get_one::<String>("format")
            .map(String::as_str)
            .unwrap_or("text");
        let format = ReportFormat::from_str(format_name)
            .ok_or_else(|| anyhow!("Unknown report format '{}'", format_name))?;

        let fetcher = FetcherConfig::default()
            .with_timeout(Duration::from_secs(timeout))
            .with_verify_certificates(sub_matches.get_flag("verify-certs"))
            .with_follow_redirects(sub_matches.get_flag("follow-redirects"));

        Ok(Self {
            urls,
            threads,
            fetcher,
            format,
            output: sub_matches.get_one::<String>("output").map(|p| expand_path(p)),
            quiet,
        })
    }
}

/// Runs the analyses and emits the report. Returns false when any target failed.
pub async fn run_analyze(options: AnalyzeOptions) -> anyhow::Result<bool> {
    let AnalyzeOptions {
        urls,
        threads,
        fetcher,
        format,
        output,
        quiet,
    } = options;

    if urls.is_empty() {
        bail!("No URLs to analyze");
    }

    let analyzer = Analyzer::with_config(fetcher).context("Failed to set up analyzer")?;

    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };
    spinner.set_message(format!("Analyzing {} target(s)...", urls.len()));

    let data = if urls.len() == 1 {
        let result = analyzer.analyze(&urls[0]).await;
        spinner.finish_and_clear();
        let result = result.map_err(|e| anyhow!("Failed to analyze URL: {}", e))?;
        ReportData::new(vec![result])
    } else {
        let outcomes = analyzer.analyze_many(&urls, threads).await;
        spinner.finish_and_clear();
        ReportData::from_outcomes(outcomes)
    };

    if !quiet {
        for result in &data.results {
            eprintln!("{}", grade_line(result));
        }
        for failure in &data.failures {
            eprintln!("{} {}  {}", "✗".red().bold(), failure.url, failure.error.dimmed());
        }
        eprintln!();
    }

    let report = generate_report(&data, format)?;
    match output {
        Some(path) => {
            save_report(&report, &path)?;
            if !quiet {
                eprintln!(
                    "{} Report saved to {}",
                    "✓".green().bold(),
                    path.display().to_string().bright_white()
                );
            }
        }
        None => print!("{}", report),
    }

    Ok(data.failures.is_empty())
}

pub async fn handle_analyze(sub_matches: &ArgMatches, quiet: bool) {
    let outcome = match AnalyzeOptions::from_matches(sub_matches, quiet) {
        Ok(options) => run_analyze(options).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

pub fn handle_headers() {
    println!(
        "{:<30} {:<12} {:>6}  {}",
        "HEADER".bold(),
        "TIER".bold(),
        "WEIGHT".bold(),
        "ALIASES".bold()
    );
    for spec in catalog() {
        println!(
            "{:<30} {:<12} {:>6}  {}",
            spec.name.bright_white(),
            spec.tier.as_str(),
            spec.weight,
            spec.aliases.join(", ")
        );
        println!("  {}", spec.description.dimmed());
    }
}

pub fn colored_grade(grade: Grade) -> ColoredString {
    let label = grade.as_str();
    match grade {
        Grade::A | Grade::B => label.green().bold(),
        Grade::C => label.yellow().bold(),
        Grade::D | Grade::F => label.red().bold(),
    }
}

fn grade_line(result: &AnalysisResult) -> String {
    format!(
        "{} {}  {}/100  ({}/{} headers)",
        colored_grade(result.grade),
        result.url.bright_white(),
        result.score,
        result.present_count(),
        result.summary.len()
    )
}
