pub mod error;
pub mod report;
pub mod scanner;

pub use error::ScanError;
pub use report::{render_report, MAX_REPORTED_OPENS};
pub use scanner::{scan_file, scan_lines, OpenBrace, ScanResult};
