use anyhow::Result;
use clap::Parser;
use cookie_logger::{analyze_cookie_log, print_analysis_results, utils, Args, TracingReporter};
use tracing::error;

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    let mut reporter = TracingReporter;
    match analyze_cookie_log(&args, &mut reporter) {
        Ok(result) => {
            print_analysis_results(&result, &mut std::io::stdout().lock())?;
            Ok(())
        }
        Err(e) => {
            error!(action = "complete", component = "analysis", error_kind = ?e.kind(), "Error: {}", e);
            std::process::exit(1);
        }
    }
}
