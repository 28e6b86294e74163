use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use crate::diagnostics::{Diagnostic, Reporter};
use crate::error::CookieLogError;
use crate::stats::CounterTable;

/// A `cookie,timestamp` log file on disk.
#[derive(Debug, Clone)]
pub struct CookieLog {
    path: PathBuf,
}

/// Result of one pass over a log.
#[derive(Debug, Default)]
pub struct ParseSummary {
    pub table: CounterTable,
    /// Lines consumed, header included.
    pub lines_read: usize,
    pub malformed_lines: usize,
    pub matched_records: usize,
}

impl CookieLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CookieLog { path: path.into() }
    }

    /// Count the cookies whose timestamp falls on `target_date` (`YYYY-MM-DD`).
    ///
    /// Open failures are returned as `NotFound`, `PermissionDenied` or `Io`.
    /// Malformed lines are reported to `reporter` and skipped.
    pub fn parse(
        &self,
        target_date: &str,
        reporter: &mut dyn Reporter,
    ) -> Result<CounterTable, CookieLogError> {
        let start_time = Instant::now();
        info!(action = "open", component = "cookie_log", file_path = ?self.path, target_date, "Reading cookie log");

        let file = File::open(&self.path).map_err(|e| CookieLogError::from_io(&self.path, e))?;
        let summary = count_cookies(BufReader::new(file), target_date, reporter).map_err(|source| {
            CookieLogError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        if summary.lines_read == 0 {
            reporter.report(Diagnostic::EmptyFile {
                path: self.path.clone(),
            });
        }

        reporter.report(Diagnostic::ParseComplete {
            lines_read: summary.lines_read,
            malformed_lines: summary.malformed_lines,
            matched_records: summary.matched_records,
            distinct_cookies: summary.table.len(),
            duration_ms: start_time.elapsed().as_millis(),
        });

        Ok(summary.table)
    }
}

/// Stream `reader`, skipping the header line, and count cookies seen on `target_date`.
pub fn count_cookies<R: BufRead>(
    mut reader: R,
    target_date: &str,
    reporter: &mut dyn Reporter,
) -> io::Result<ParseSummary> {
    let mut summary = ParseSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        summary.lines_read += 1;
        if summary.lines_read == 1 {
            continue;
        }

        let text = match std::str::from_utf8(&buf) {
            Ok(text) => text,
            Err(_) => {
                summary.malformed_lines += 1;
                reporter.report(Diagnostic::MalformedLine {
                    line_number: summary.lines_read,
                    content: String::from_utf8_lossy(&buf).trim_end().to_string(),
                });
                continue;
            }
        };
        let line = text.trim_end();

        let Some((cookie, timestamp)) = split_record(line) else {
            summary.malformed_lines += 1;
            reporter.report(Diagnostic::MalformedLine {
                line_number: summary.lines_read,
                content: line.to_string(),
            });
            continue;
        };

        if record_date(timestamp) == target_date {
            summary.table.increment(cookie);
            summary.matched_records += 1;
        }
    }

    Ok(summary)
}

/// Split a record into exactly two comma-separated fields.
fn split_record(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split(',');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(cookie), Some(timestamp), None) => Some((cookie, timestamp)),
        _ => None,
    }
}

/// Date prefix of a timestamp: everything before the first `T`.
fn record_date(timestamp: &str) -> &str {
    timestamp
        .split_once('T')
        .map_or(timestamp, |(date, _)| date)
}
