use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the `b64` command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot open {0}: {1}")]
    Open(PathBuf, io::Error),

    #[error("cannot create {0}: {1}")]
    Create(PathBuf, io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("base64 error: {0}")]
    Codec(#[from] base64_codec::Error),
}
