//! Diagnostic side channel for the reader and selector.
//!
//! Notes and warnings are handed to a [`Reporter`] passed in by the caller
//! rather than written to a global logger, so tests can capture them.

use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The log file had no lines at all, not even a header.
    EmptyFile { path: PathBuf },
    /// A data line did not split into exactly two fields.
    MalformedLine { line_number: usize, content: String },
    /// No record matched the target date.
    NoCookiesForDate,
    ParseComplete {
        lines_read: usize,
        malformed_lines: usize,
        matched_records: usize,
        distinct_cookies: usize,
        duration_ms: u128,
    },
}

pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`, which the binary routes to stderr.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::EmptyFile { path } => {
                info!(action = "read", component = "cookie_log", file_path = ?path, "The file is empty")
            }
            Diagnostic::MalformedLine {
                line_number,
                content,
            } => {
                warn!(action = "parse", component = "cookie_log", line_number, content = %content, "Line was malformed")
            }
            Diagnostic::NoCookiesForDate => {
                info!(action = "select", component = "selector", "No cookies found for the given date")
            }
            Diagnostic::ParseComplete {
                lines_read,
                malformed_lines,
                matched_records,
                distinct_cookies,
                duration_ms,
            } => debug!(
                action = "complete",
                component = "cookie_log",
                lines_read,
                malformed_lines,
                matched_records,
                distinct_cookies,
                duration_ms,
                "Cookie log parsed"
            ),
        }
    }
}

/// Keeps every diagnostic in arrival order.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub diagnostics: Vec<Diagnostic>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn malformed_lines(&self) -> Vec<(usize, &str)> {
        self.diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::MalformedLine {
                    line_number,
                    content,
                } => Some((*line_number, content.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
