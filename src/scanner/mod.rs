mod types;

pub use types::{OpenBrace, ScanResult};

use std::fs;
use std::path::Path;

use crate::error::ScanError;

/// Scan lines for `{` and `}`, tracking the running balance and the stack
/// of unmatched opens.
///
/// Every `}` decrements the balance even when no open is pending; the pop
/// is skipped on an empty stack. A source like `}{` therefore reports
/// balance 0 with an empty pending list: the early unmatched close is
/// counted but never recorded.
pub fn scan_lines(physical: &[&str]) -> ScanResult {
    let mut balance: i64 = 0;
    let mut pending: Vec<OpenBrace> = Vec::new();

    for (i, line) in physical.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            match ch {
                '{' => {
                    balance += 1;
                    pending.push(OpenBrace {
                        line: i + 1,
                        column: j + 1,
                    });
                }
                '}' => {
                    balance -= 1;
                    pending.pop();
                }
                _ => {}
            }
        }
    }

    ScanResult { balance, pending }
}

/// Read `path` as UTF-8 text and scan it.
pub fn scan_file(path: &Path) -> Result<ScanResult, ScanError> {
    let bytes = fs::read(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = String::from_utf8(bytes).map_err(|source| ScanError::Utf8 {
        path: path.to_path_buf(),
        source,
    })?;

    let physical: Vec<&str> = contents.lines().collect();
    Ok(scan_lines(&physical))
}
