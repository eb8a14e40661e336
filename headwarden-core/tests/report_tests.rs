// Tests for report generation functionality

use headwarden_core::report::{
    FailedTarget, ReportData, ReportFormat, generate_csv_report, generate_json_report,
    generate_markdown_report, generate_report, generate_text_report, save_report,
};
use headwarden_core::{AnalysisResult, Grade, score_headers};
use reqwest::header::{HeaderMap, HeaderValue};
use std::fs;
use tempfile::TempDir;

fn sample_result(url: &str) -> AnalysisResult {
    let mut headers = HeaderMap::new();
    headers.insert("strict-transport-security", HeaderValue::from_static("max-age=63072000"));
    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    score_headers(&headers, url)
}

fn sample_data() -> ReportData {
    ReportData::new(vec![sample_result("https://example.com")])
}

// ============================================================================
// Report Format Tests
// ============================================================================

#[test]
fn test_report_format_from_str() {
    assert_eq!(ReportFormat::from_str("text"), Some(ReportFormat::Text));
    assert_eq!(ReportFormat::from_str("JSON"), Some(ReportFormat::Json));
    assert_eq!(ReportFormat::from_str("csv"), Some(ReportFormat::Csv));
    assert_eq!(ReportFormat::from_str("markdown"), Some(ReportFormat::Markdown));
    assert_eq!(ReportFormat::from_str("md"), Some(ReportFormat::Markdown));
}

#[test]
fn test_report_format_from_str_invalid() {
    assert_eq!(ReportFormat::from_str("pdf"), None);
    assert_eq!(ReportFormat::from_str(""), None);
}

// ============================================================================
// JSON Report Tests
// ============================================================================

#[test]
fn test_json_single_result_is_bare_object() {
    let data = sample_data();
    let json = generate_json_report(&data).unwrap();
    let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, data.results[0]);
    assert_eq!(parsed.score, 71);
    assert_eq!(parsed.grade, Grade::B);
}

#[test]
fn test_json_batch_is_array_with_failures() {
    let mut data = ReportData::new(vec![
        sample_result("https://a.example.com"),
        sample_result("https://b.example.com"),
    ]);
    data.failures.push(FailedTarget {
        url: "unreachable.invalid".to_string(),
        error: "Connection failed: dns error".to_string(),
    });

    let json = generate_json_report(&data).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = value.as_array().unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["url"], "https://a.example.com");
    assert_eq!(entries[1]["grade"], "B");
    assert_eq!(entries[2]["error"], "Connection failed: dns error");
}

#[test]
fn test_json_is_stable() {
    let data = sample_data();
    assert_eq!(
        generate_json_report(&data).unwrap(),
        generate_json_report(&data).unwrap()
    );
}

// ============================================================================
// Text Report Tests
// ============================================================================

#[test]
fn test_text_report_contents() {
    let report = generate_text_report(&sample_data());

    assert!(report.contains("HEADWARDEN SECURITY HEADER REPORT"));
    assert!(report.contains("https://example.com"));
    assert!(report.contains("Grade:        B"));
    assert!(report.contains("Score:        71/100"));
    assert!(report.contains("✓ Strict-Transport-Security"));
    assert!(report.contains("✗ Content-Security-Policy"));
    // Missing headers carry their description
    assert!(report.contains("Helps prevent XSS attacks"));
}

#[test]
fn test_text_report_shows_cap() {
    let mut headers = HeaderMap::new();
    for name in [
        "strict-transport-security",
        "x-content-type-options",
        "x-frame-options",
        "content-security-policy",
        "referrer-policy",
        "permissions-policy",
        "cross-origin-opener-policy",
        "cross-origin-resource-policy",
    ] {
        headers.insert(name, HeaderValue::from_static("x"));
    }
    let data = ReportData::new(vec![score_headers(&headers, "https://example.com")]);
    let report = generate_text_report(&data);

    assert!(report.contains("Score:        100/100"));
    assert!(report.contains("(capped from 115)"));
}

#[test]
fn test_text_report_lists_failures() {
    let mut data = ReportData::new(Vec::new());
    data.failures.push(FailedTarget {
        url: "https://down.example.com".to_string(),
        error: "Request timed out: operation timed out".to_string(),
    });

    let report = generate_text_report(&data);
    assert!(report.contains("FAILED TARGETS"));
    assert!(report.contains("✗ https://down.example.com"));
    assert!(report.contains("Failed:       1"));
}

// ============================================================================
// CSV & Markdown Tests
// ============================================================================

#[test]
fn test_csv_report() {
    let report = generate_csv_report(&sample_data());
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("url,score,grade,Strict-Transport-Security,"));
    assert_eq!(
        lines[1],
        "https://example.com,71,B,true,true,true,false,false,false,false,false"
    );
}

#[test]
fn test_markdown_report() {
    let report = generate_markdown_report(&sample_data());

    assert!(report.starts_with("# Headwarden Security Header Report"));
    assert!(report.contains("## https://example.com"));
    assert!(report.contains("**Grade B** · score 71/100 (headers 31, HTTPS 30, bonuses 10)"));
    assert!(report.contains("| X-Frame-Options | yes | 15 |"));
    assert!(report.contains("| Referrer-Policy | no | 15 |"));
}

#[test]
fn test_generate_report_dispatch() {
    let data = sample_data();
    let csv = generate_report(&data, ReportFormat::Csv).unwrap();
    assert!(csv.starts_with("url,score,grade"));

    let text = generate_report(&data, ReportFormat::Text).unwrap();
    assert!(text.contains("HEADWARDEN"));
}

// ============================================================================
// Save Tests
// ============================================================================

#[test]
fn test_save_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.json");

    let json = generate_json_report(&sample_data()).unwrap();
    save_report(&json, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), json);
}

#[test]
fn test_save_report_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("report.txt");

    assert!(save_report("content", &path).is_err());
}
