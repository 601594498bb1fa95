//! Output formatting for wattcheck results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption (the energy
//!   scorer and dashboard ingest this shape)

use colored::*;
use serde::{Deserialize, Serialize};

use crate::detect::{Finding, Severity};

/// Findings for one scanned file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub language: String,
    pub findings: Vec<Finding>,
}

impl FileReport {
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}

/// Top-level JSON report.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub files_scanned: usize,
    pub total_findings: usize,
    pub files: Vec<FileReport>,
}

/// Write results as pretty-printed JSON to stdout.
pub fn write_json(path: &str, reports: &[FileReport]) -> anyhow::Result<()> {
    let total_findings = reports.iter().map(|r| r.findings.len()).sum();
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        files_scanned: reports.len(),
        total_findings,
        files: reports.to_vec(),
    };
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::High => "high".red().bold(),
        Severity::Medium => "medium".yellow().bold(),
        Severity::Low => "low".blue().bold(),
    }
}

fn format_lines(finding: &Finding) -> String {
    if finding.line_start == finding.line_end {
        format!("line {}", finding.line_start)
    } else {
        format!("lines {}-{}", finding.line_start, finding.line_end)
    }
}

/// Write results as colored terminal output.
pub fn write_pretty(reports: &[FileReport]) {
    let mut total = 0usize;

    for report in reports {
        if report.findings.is_empty() {
            continue;
        }
        println!();
        println!(
            "{} {}",
            report.file.bold(),
            format!("({})", report.language).dimmed()
        );
        for finding in &report.findings {
            total += 1;
            println!(
                "  {} {} [{}] {}",
                severity_label(finding.severity),
                format_lines(finding).cyan(),
                finding.pattern_id.as_str().dimmed(),
                finding.name
            );
            println!("    {}", finding.description);
            println!("    {} {}", "fix:".green(), finding.suggestion.dimmed());
        }
    }

    println!();
    if total == 0 {
        println!(
            "{} {} file(s) scanned, no energy anti-patterns found",
            "ok".green().bold(),
            reports.len()
        );
    } else {
        println!(
            "{} {} finding(s) across {} file(s)",
            "warning".yellow().bold(),
            total,
            reports.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::PatternId;

    fn sample_report() -> FileReport {
        FileReport {
            file: "src/poll.py".to_string(),
            language: "python".to_string(),
            findings: vec![Finding {
                pattern_id: PatternId::PollingPattern,
                name: "Polling Instead of Event-Driven".to_string(),
                severity: Severity::High,
                line_start: 2,
                line_end: 6,
                description: "Infinite loop with sleep + network call detected.".to_string(),
                suggestion: "Use an event-driven approach.".to_string(),
                estimated_energy_cost: 95.0,
                estimated_energy_saved: 70.0,
            }],
        }
    }

    #[test]
    fn test_json_report_shape() {
        let reports = vec![sample_report()];
        let total: usize = reports.iter().map(|r| r.findings.len()).sum();
        let report = JsonReport {
            version: "0.1.0".to_string(),
            path: ".".to_string(),
            files_scanned: reports.len(),
            total_findings: total,
            files: reports,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""files_scanned":1"#));
        assert!(json.contains(r#""pattern_id":"polling_pattern""#));
        assert!(json.contains(r#""severity":"high""#));
    }

    #[test]
    fn test_json_round_trip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: FileReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.findings, report.findings);
    }

    #[test]
    fn test_format_lines() {
        let mut finding = sample_report().findings.remove(0);
        assert_eq!(format_lines(&finding), "lines 2-6");
        finding.line_end = finding.line_start;
        assert_eq!(format_lines(&finding), "line 2");
    }
}
