use chrono::NaiveDate;
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

use crate::cookie_log::CookieLog;
use crate::date::canonical_date;
use crate::diagnostics::Reporter;
use crate::error::CookieLogError;
use crate::stats::{find_most_active_cookies, CounterTable};
use crate::Args;

#[derive(Debug)]
pub struct AnalysisResult {
    pub target_date: NaiveDate,
    pub counts: CounterTable,
    pub most_active: Vec<String>,
}

pub fn analyze_cookie_log(
    args: &Args,
    reporter: &mut dyn Reporter,
) -> Result<AnalysisResult, CookieLogError> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "analysis", "Starting cookie log analysis");

    let log = CookieLog::new(&args.file);
    let counts = log.parse(&canonical_date(args.date), reporter)?;
    let most_active = find_most_active_cookies(&counts, reporter);

    info!(
        action = "complete",
        component = "analysis",
        distinct_cookies = counts.len(),
        most_active = most_active.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult {
        target_date: args.date,
        counts,
        most_active,
    })
}

/// Write the most active cookies, one per line.
pub fn print_analysis_results(result: &AnalysisResult, out: &mut impl Write) -> io::Result<()> {
    for cookie in &result.most_active {
        writeln!(out, "{}", cookie)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Diagnostic, MemoryReporter};
    use crate::error::ErrorKind;
    use std::fs;
    use std::path::Path;

    const SAMPLE_LOG: &str = "cookie,timestamp
AtY0laUfhglK3lC7,2018-12-09T14:19:00+00:00
SAZuXPGUrfbcn5UA,2018-12-09T10:13:00+00:00
5UAVanZf6UtGyKVS,2018-12-09T07:25:00+00:00
AtY0laUfhglK3lC7,2018-12-09T06:19:00+00:00
SAZuXPGUrfbcn5UA,2018-12-08T22:03:00+00:00
4sMM2LxV07bPJzwf,2018-12-08T21:30:00+00:00
fbcn5UAVanZf6UtG,2018-12-08T09:30:00+00:00
4sMM2LxV07bPJzwf,2018-12-07T23:30:00+00:00";

    fn args_for(file: &Path, date: &str) -> Args {
        Args {
            file: file.to_path_buf(),
            date: crate::date::parse_target_date(date).unwrap(),
            verbose: false,
        }
    }

    fn run(file: &Path, date: &str) -> (AnalysisResult, MemoryReporter, String) {
        let mut reporter = MemoryReporter::new();
        let result = analyze_cookie_log(&args_for(file, date), &mut reporter).unwrap();
        let mut out = Vec::new();
        print_analysis_results(&result, &mut out).unwrap();
        (result, reporter, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_analysis_single_winner() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookie_log.csv");
        fs::write(&path, SAMPLE_LOG).unwrap();

        let (result, _, output) = run(&path, "2018-12-09");
        assert_eq!(result.most_active, vec!["AtY0laUfhglK3lC7"]);
        assert_eq!(result.counts.total(), 4);
        assert_eq!(output, "AtY0laUfhglK3lC7\n");
    }

    #[test]
    fn test_analysis_three_way_tie() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookie_log.csv");
        fs::write(&path, SAMPLE_LOG).unwrap();

        let (_, _, output) = run(&path, "2018-12-08");
        assert_eq!(
            output,
            "SAZuXPGUrfbcn5UA\n4sMM2LxV07bPJzwf\nfbcn5UAVanZf6UtG\n"
        );
    }

    #[test]
    fn test_analysis_no_cookies_for_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookie_log.csv");
        fs::write(&path, SAMPLE_LOG).unwrap();

        let (result, reporter, output) = run(&path, "2019-01-01");
        assert!(result.most_active.is_empty());
        assert!(output.is_empty());
        assert!(reporter.diagnostics.contains(&Diagnostic::NoCookiesForDate));
    }

    #[test]
    fn test_analysis_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(&dir.path().join("missing.csv"), "2018-12-09");
        let mut reporter = MemoryReporter::new();

        let err = analyze_cookie_log(&args, &mut reporter).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("missing.csv"));
    }
}
