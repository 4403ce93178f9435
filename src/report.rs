use crate::scanner::ScanResult;

/// How many pending opens the report lists before truncating.
pub const MAX_REPORTED_OPENS: usize = 5;

/// Format the human-readable report for a finished scan.
///
/// The first line is always the final balance. A positive balance adds the
/// line numbers of the earliest unmatched opens (up to
/// [`MAX_REPORTED_OPENS`]) plus the total; a negative balance adds a fixed
/// warning; a zero balance adds nothing.
pub fn render_report(result: &ScanResult) -> Vec<String> {
    let mut out = vec![format!("Final Balance: {}", result.balance)];

    if result.balance > 0 {
        let shown: Vec<String> = result
            .pending
            .iter()
            .take(MAX_REPORTED_OPENS)
            .map(|open| open.line.to_string())
            .collect();
        out.push(format!(
            "Unclosed braces start at lines: [{}] ... (total {})",
            shown.join(", "),
            result.total_pending()
        ));
    } else if result.balance < 0 {
        out.push("Too many closing braces!".to_string());
    }

    out
}
