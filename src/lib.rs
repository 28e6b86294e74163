pub mod analysis;
pub mod args;
pub mod cookie_log;
pub mod date;
pub mod diagnostics;
pub mod error;
pub mod stats;
pub mod utils;

pub use analysis::{analyze_cookie_log, print_analysis_results, AnalysisResult};
pub use args::Args;
pub use cookie_log::{count_cookies, CookieLog};
pub use diagnostics::{Diagnostic, MemoryReporter, Reporter, TracingReporter};
pub use error::{CookieLogError, ErrorKind};
pub use stats::{find_most_active_cookies, CounterTable};
