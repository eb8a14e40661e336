// Report generation from analysis results

use crate::analyzer::TargetOutcome;
use crate::catalog::{catalog, find};
use crate::model::AnalysisResult;
use crate::scoring::ScoreBreakdown;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "csv" => Some(ReportFormat::Csv),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

/// A target that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedTarget {
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct ReportData {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<AnalysisResult>,
    pub failures: Vec<FailedTarget>,
}

impl ReportData {
    pub fn new(results: Vec<AnalysisResult>) -> Self {
        Self {
            generated_at: Utc::now(),
            results,
            failures: Vec::new(),
        }
    }

    pub fn from_outcomes(outcomes: Vec<TargetOutcome>) -> Self {
        let mut data = Self::new(Vec::new());
        for TargetOutcome { input, outcome } in outcomes {
            match outcome {
                Ok(result) => data.results.push(result),
                Err(e) => data.failures.push(FailedTarget {
                    url: input,
                    error: e.to_string(),
                }),
            }
        }
        data
    }

    fn format_timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

pub fn generate_report(data: &ReportData, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(generate_text_report(data)),
        ReportFormat::Json => generate_json_report(data),
        ReportFormat::Csv => Ok(generate_csv_report(data)),
        ReportFormat::Markdown => Ok(generate_markdown_report(data)),
    }
}

pub fn generate_text_report(data: &ReportData) -> String {
    let mut report = String::new();

    report.push_str(RULE);
    report.push('\n');
    report.push_str("                    HEADWARDEN SECURITY HEADER REPORT\n");
    report.push_str(RULE);
    report.push_str("\n\n");

    report.push_str(&format!("Generated:    {}\n", data.format_timestamp()));
    report.push_str(&format!("Targets:      {}\n", data.results.len() + data.failures.len()));
    if !data.failures.is_empty() {
        report.push_str(&format!("Failed:       {}\n", data.failures.len()));
    }
    report.push('\n');

    for result in &data.results {
        report.push_str(&text_section(result));
    }

    if !data.failures.is_empty() {
        report.push_str(RULE);
        report.push_str("\nFAILED TARGETS\n");
        report.push_str(RULE);
        report.push_str("\n\n");
        for failure in &data.failures {
            report.push_str(&format!("  ✗ {}\n", failure.url));
            report.push_str(&wrap_text(&failure.error, 78, "      "));
        }
        report.push('\n');
    }

    report.push_str(RULE);
    report.push_str("\nGenerated by Headwarden - HTTP security header analyzer\n");
    report.push_str("Only header presence is graded; values are not validated.\n\n");

    report
}

fn text_section(result: &AnalysisResult) -> String {
    let breakdown = ScoreBreakdown::for_result(result);
    let mut section = String::new();

    section.push_str(RULE);
    section.push('\n');
    section.push_str(&format!("{}\n", result.url));
    section.push_str(RULE);
    section.push_str("\n\n");

    section.push_str(&format!("Grade:        {}\n", result.grade));
    section.push_str(&format!("Score:        {}/100\n\n", result.score));

    section.push_str(&format!(
        "  Headers      {:>3}  ({}/{} weight)\n",
        breakdown.header_score, breakdown.achieved_weight, breakdown.total_weight
    ));
    section.push_str(&format!("  HTTPS        {:>3}\n", breakdown.https_score));
    section.push_str(&format!(
        "  Critical     {:>3}  ({} present)\n",
        breakdown.critical_bonus, breakdown.critical_count
    ));
    section.push_str(&format!(
        "  Important    {:>3}  ({} present)\n",
        breakdown.important_bonus, breakdown.important_count
    ));
    if breakdown.raw_total > u32::from(breakdown.score) {
        section.push_str(&format!("  (capped from {})\n", breakdown.raw_total));
    }
    section.push('\n');

    for header in &result.summary {
        let marker = if header.present { "✓" } else { "✗" };
        let tier = find(&header.name).map(|spec| spec.tier.as_str()).unwrap_or("?");
        section.push_str(&format!(
            "  {} {:<30} [{:<11}] weight {:>2}\n",
            marker, header.name, tier, header.weight
        ));
        if !header.present {
            section.push_str(&wrap_text(&header.description, 78, "      "));
        }
    }
    section.push('\n');

    section
}

/// A single result renders as the bare analysis object; anything else as an array.
pub fn generate_json_report(data: &ReportData) -> Result<String, ReportError> {
    if data.failures.is_empty() && data.results.len() == 1 {
        return Ok(serde_json::to_string_pretty(&data.results[0])?);
    }

    let mut entries = Vec::with_capacity(data.results.len() + data.failures.len());
    for result in &data.results {
        entries.push(serde_json::to_value(result)?);
    }
    for failure in &data.failures {
        entries.push(serde_json::to_value(failure)?);
    }

    Ok(serde_json::to_string_pretty(&entries)?)
}

pub fn generate_csv_report(data: &ReportData) -> String {
    let mut report = String::from("url,score,grade");
    for spec in catalog() {
        report.push(',');
        report.push_str(spec.name);
    }
    report.push('\n');

    for result in &data.results {
        report.push_str(&csv_field(&result.url));
        report.push_str(&format!(",{},{}", result.score, result.grade));
        for spec in catalog() {
            let present = result.headers.get(spec.name).copied().unwrap_or(false);
            report.push_str(&format!(",{}", present));
        }
        report.push('\n');
    }

    report
}

pub fn generate_markdown_report(data: &ReportData) -> String {
    let mut report = String::from("# Headwarden Security Header Report\n\n");
    report.push_str(&format!("_Generated {}_\n\n", data.format_timestamp()));

    for result in &data.results {
        let breakdown = ScoreBreakdown::for_result(result);
        report.push_str(&format!("## {}\n\n", result.url));
        report.push_str(&format!(
            "**Grade {}** · score {}/100 (headers {}, HTTPS {}, bonuses {})\n\n",
            result.grade,
            result.score,
            breakdown.header_score,
            breakdown.https_score,
            breakdown.critical_bonus + breakdown.important_bonus
        ));
        report.push_str("| Header | Present | Weight | Description |\n");
        report.push_str("|---|---|---|---|\n");
        for header in &result.summary {
            report.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                header.name,
                if header.present { "yes" } else { "no" },
                header.weight,
                header.description
            ));
        }
        report.push('\n');
    }

    if !data.failures.is_empty() {
        report.push_str("## Failed targets\n\n");
        for failure in &data.failures {
            report.push_str(&format!("- `{}`: {}\n", failure.url, failure.error));
        }
        report.push('\n');
    }

    report
}

pub fn save_report(content: &str, path: &Path) -> Result<(), ReportError> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn wrap_text(text: &str, width: usize, indent: &str) -> String {
    let mut result = String::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.len() + word.len() + 1 > width - indent.len() && !current_line.is_empty() {
            result.push_str(indent);
            result.push_str(&current_line);
            result.push('\n');
            current_line.clear();
        }

        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }

    if !current_line.is_empty() {
        result.push_str(indent);
        result.push_str(&current_line);
        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_field_quotes_commas() {
        assert_eq!(csv_field("https://a.com/?x=1,2"), "\"https://a.com/?x=1,2\"");
        assert_eq!(csv_field("https://a.com"), "https://a.com");
    }

    #[test]
    fn test_wrap_text() {
        let wrapped = wrap_text("one two three", 12, "  ");
        assert_eq!(wrapped, "  one two\n  three\n");
    }
}
