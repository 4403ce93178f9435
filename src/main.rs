use std::path::PathBuf;

use anyhow::{bail, Result};

use brace_scanner::{render_report, scan_file};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let path = match args.get(1) {
        Some(arg) => PathBuf::from(arg),
        None => bail!("usage: brace-scanner <source-file>"),
    };

    let result = scan_file(&path)?;

    for line in render_report(&result) {
        println!("{line}");
    }

    Ok(())
}
