use crate::config::AnalysisConfig;
use crate::errors::{AppError, AppResult};
use crate::extraction::{scan_candidate, PatternRule};
use crate::types::{CandidateString, FlagFinding, ScanReport};
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// CSV cell scanner
pub struct CsvScanner {
    csv_path: PathBuf,
    config: AnalysisConfig,
}

impl CsvScanner {
    pub fn new(csv_path: impl Into<PathBuf>, config: AnalysisConfig) -> Self {
        Self {
            csv_path: csv_path.into(),
            config,
        }
    }

    /// Scan every cell of the CSV against a pattern registry
    ///
    /// Each non-empty cell becomes a candidate string with a
    /// `column '<name>', row <n>` source context. Rows are numbered from 0,
    /// matching the source dump's own row indices.
    pub fn scan(&self, rules: &[PatternRule]) -> AppResult<ScanReport> {
        info!("Scanning CSV: {}", self.csv_path.display());

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.csv_path)?;

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        info!("Columns: {:?}", headers);

        let mut report = ScanReport {
            source: self.csv_path.display().to_string(),
            scanned_at: chrono::Utc::now(),
            cells_scanned: 0,
            findings: Vec::new(),
            decoded_without_matches: 0,
            errors: Vec::new(),
        };

        for (row_index, record) in reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    // Record the broken row and keep scanning
                    report.errors.push(format!("row {}: {}", row_index, e));
                    continue;
                }
            };

            for (col_index, value) in record.iter().enumerate() {
                let value = value.trim();
                if value.is_empty() {
                    continue;
                }

                let column = headers
                    .get(col_index)
                    .cloned()
                    .unwrap_or_else(|| format!("#{}", col_index));
                let candidate = CandidateString::new(
                    value,
                    format!("column '{}', row {}", column, row_index),
                );

                report.cells_scanned += 1;
                let cell_report = scan_candidate(&candidate, rules, &self.config);

                if let Some(ref error) = cell_report.error {
                    debug!("{}: {}", candidate.source, error);
                    report
                        .errors
                        .push(format!("{}: {}", candidate.source, error));
                    continue;
                }

                if cell_report.decoded_without_matches() {
                    report.decoded_without_matches += 1;
                }

                for m in cell_report.matches {
                    report.findings.push(FlagFinding {
                        category: m.category,
                        text: m.text,
                        provenance: m.provenance,
                        column: column.clone(),
                        row: row_index,
                        original: value.to_string(),
                        decoded: cell_report.decoded.clone(),
                    });
                }
            }
        }

        info!(
            "Scan complete: {} cell(s), {} finding(s), {} error(s)",
            report.cells_scanned,
            report.findings.len(),
            report.errors.len()
        );

        Ok(report)
    }

    /// Export a scan report as pretty-printed JSON
    pub fn export_report(report: &ScanReport, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| AppError::InvalidData(format!("report serialisation failed: {}", e)))?;
        std::fs::write(path, json)?;
        info!("Report written to {}", path.display());
        Ok(())
    }
}
