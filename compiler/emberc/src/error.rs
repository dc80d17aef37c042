//! Host errors: problems with files, arguments and output streams. These are
//! distinct from parse diagnostics and from runtime errors inside a program.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid max depth '{value}': expected a non-negative integer")]
    InvalidMaxDepth { value: String },

    #[error("unknown option '{option}'")]
    UnknownOption { option: String },

    #[error("unknown error code '{code}'")]
    UnknownErrorCode { code: String },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Map a failed `read_to_string` to the message users see.
    pub(crate) fn from_read(path: &str, err: std::io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => CliError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source: err },
        }
    }
}
