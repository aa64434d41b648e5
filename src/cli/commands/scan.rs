use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::extraction::built_in_registry;
use crate::processor::CsvScanner;
use crate::types::ScanReport;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Scan every cell of a CSV file for encoded flags and patterns
#[derive(Args)]
pub struct ScanCommand {
    /// CSV file to scan
    pub csv_path: PathBuf,

    /// Minimum cell length before hex/base64 classification is attempted
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Write the full report as JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl ScanCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::get_defaults();
        let mut analysis = config.analysis;
        if let Some(min_length) = self.min_length {
            analysis.min_candidate_length = min_length;
        }

        let scanner = CsvScanner::new(&self.csv_path, analysis);
        let report = scanner.scan(built_in_registry())?;

        match self.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&report)?),
            _ => print_report_text(&report),
        }

        if let Some(ref output) = self.output {
            CsvScanner::export_report(&report, output)?;
            info!("Exported report to {}", output.display());
        }

        Ok(())
    }
}

/// Print a scan report in text format
fn print_report_text(report: &ScanReport) {
    println!("\n=== CSV Scan ===");
    println!("Source: {}", report.source);
    println!("Cells scanned: {}", report.cells_scanned);
    println!();

    if report.findings.is_empty() {
        println!("No findings.");
    } else {
        println!("Findings: {}", report.findings.len());
        for (i, finding) in report.findings.iter().enumerate() {
            println!();
            println!("#{}: {}", i + 1, finding.text);
            println!("  Category: {}", finding.category);
            println!("  Provenance: {:?}", finding.provenance);
            println!("  Location: column '{}', row {}", finding.column, finding.row);
            println!("  Original: {}", preview(&finding.original, 60));
            if let Some(ref decoded) = finding.decoded {
                println!("  Decoded: {}", preview(decoded, 100));
            }
        }
    }

    if report.decoded_without_matches > 0 {
        println!();
        println!(
            "Decoded cells without matches: {}",
            report.decoded_without_matches
        );
    }

    if !report.errors.is_empty() {
        println!();
        println!("Errors ({}):", report.errors.len());
        for error in &report.errors {
            println!("  {}", error);
        }
    }
}

/// Truncate long cell values for display
fn preview(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}
