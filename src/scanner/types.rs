/// A still-unmatched opening brace, 1-indexed by line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenBrace {
    pub line: usize,
    pub column: usize,
}

/// Outcome of one scan: the final balance and the opens never closed,
/// oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub balance: i64,
    pub pending: Vec<OpenBrace>,
}

impl ScanResult {
    pub fn total_pending(&self) -> usize {
        self.pending.len()
    }
}
