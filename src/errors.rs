//! ## errors
//!
//! fatal error types; per-share probe failures never use these, they are
//! captured into the probe outcome instead

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors which abort the whole run.
#[derive(Debug, Error)]
pub enum Error {
    /// The smbclient-style auth file is malformed. `line` is 1-based.
    #[error("syntax error in auth file {} line {}: {}", .path.display(), .line, .reason)]
    AuthFileSyntax {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("cannot read auth file {}: {}", .path.display(), .source)]
    AuthFileIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot resolve {host}: {reason}")]
    Resolve { host: String, reason: String },
    #[error("smb session error: {0}")]
    Session(String),
}
