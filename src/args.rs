use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::date::parse_target_date;

#[derive(Parser, Debug)]
#[command(
    name = "cookie-logger",
    about = "Find the most active cookie in a log file for a specific date",
    version,
    long_about = None
)]
pub struct Args {
    /// Filepath of the cookie log file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Target date in YYYY-MM-DD format
    #[arg(short, long, value_parser = parse_target_date)]
    pub date: NaiveDate,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
