use std::path::Path;

use anyhow::{Result, bail};

use super::classify::classify;
use super::metrics;
use super::types::{ScanReport, ScanRow, ScanSummary, Warning, WarningCategory};
use crate::codec::{Codec, CodecRegistry};

/// Sequential directory scanner.
///
/// Runs one read → compress → classify pass per regular file, in
/// listing order, accumulating rows, counters, and diagnostics. No
/// recursion and no parallelism; each file completes before the next
/// begins.
pub struct Scanner {
    registry: CodecRegistry,
    codec: Codec,
    threshold: f64,
}

impl Scanner {
    pub fn new(registry: CodecRegistry, codec: Codec, threshold: f64) -> Self {
        Scanner {
            registry,
            codec,
            threshold,
        }
    }

    /// Scans all regular files directly inside `target`.
    ///
    /// A missing or non-directory target is fatal and checked before
    /// any file is touched. A listing that cannot be read yields an
    /// empty report with a warning. Per-file failures and zero-length
    /// files are downgraded to warnings and the scan continues.
    pub fn scan_directory(&self, target: &Path) -> Result<ScanReport> {
        if !target.exists() {
            bail!("target directory {} not found", target.display());
        }
        if !target.is_dir() {
            bail!("target {} is not a directory", target.display());
        }

        let mut rows = Vec::new();
        let mut summary = ScanSummary::default();
        let mut warnings = Vec::new();

        let entries = match std::fs::read_dir(target) {
            Ok(entries) => entries,
            Err(e) => {
                warnings.push(Warning {
                    message: format!("cannot enumerate {}: {}", target.display(), e),
                    category: WarningCategory::EnumerationDenied,
                });
                return Ok(ScanReport {
                    rows,
                    summary,
                    warnings,
                });
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warnings.push(Warning {
                        message: format!("listing error in {}: {}", target.display(), e),
                        category: WarningCategory::EnumerationDenied,
                    });
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            match entry.file_type() {
                Ok(ft) if ft.is_file() => {}
                Ok(_) => continue,
                Err(e) => {
                    warnings.push(Warning {
                        message: format!("{}: {}", name, e),
                        category: WarningCategory::UnreadableFile,
                    });
                    continue;
                }
            }
            match metrics::compute(&entry.path(), self.codec, &self.registry) {
                Ok(Some(file_metrics)) => {
                    let verdict = classify(file_metrics.ratio, self.threshold);
                    summary.record(verdict);
                    rows.push(ScanRow {
                        metrics: file_metrics,
                        verdict,
                    });
                }
                Ok(None) => {
                    tracing::debug!(file = %name, "zero-length file skipped");
                    warnings.push(Warning {
                        message: format!("{}: empty file, skipped", name),
                        category: WarningCategory::EmptyFile,
                    });
                }
                Err(e) => {
                    warnings.push(Warning {
                        message: format!("{}: {:#}", name, e),
                        category: WarningCategory::UnreadableFile,
                    });
                }
            }
        }

        Ok(ScanReport {
            rows,
            summary,
            warnings,
        })
    }
}
