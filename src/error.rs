//! Fatal error types and their process exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// POSIX-style exit codes used by the binary.
pub mod exit {
    pub const OK: i32 = 0;
    pub const EPERM: i32 = 1;
    pub const ENOENT: i32 = 2;
    pub const EINVAL: i32 = 22;
    pub const ENOSYS: i32 = 38;
}

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end the run.
///
/// Per-file problems never surface here; they are logged by the extractors
/// and the run continues.
#[derive(Error, Debug)]
pub enum Error {
    /// A required inspector program is not on the search path.
    #[error("can't find {program} in path. Install?")]
    ToolMissing { program: String },

    /// The playlist file could not be opened for writing.
    #[error("error opening {} for writing: {source}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The playlist writer was driven out of order.
    #[error("unreachable state: {0}")]
    Unreachable(&'static str),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ToolMissing { .. } => exit::ENOENT,
            Error::OutputOpen { source, .. } | Error::Io(source) => {
                source.raw_os_error().unwrap_or(exit::EPERM)
            }
            Error::InvalidArgument(_) => exit::EINVAL,
            Error::Unreachable(_) => exit::ENOSYS,
        }
    }
}
