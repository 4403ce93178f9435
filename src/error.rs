use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors surfaced while loading a source file.
///
/// The scan itself is total: once the text is in memory nothing in the
/// counting loop can fail.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Utf8 {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}
