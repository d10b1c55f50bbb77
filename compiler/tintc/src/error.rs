use std::io;

use thiserror::Error;

/// Everything that can stop a `tint` command.
///
/// Markup problems are never errors; `tint check` reports them as warnings.
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
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Write(#[from] io::Error),

    #[error("cannot serialize runs: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color mode '{0}' (expected auto, always, or never)")]
    InvalidColorMode(String),

    #[error("missing input path\nUsage: {0}")]
    MissingInput(&'static str),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl CliError {
    /// Classify a read failure into a user-facing message.
    pub(crate) fn read(path: &str, err: io::Error) -> Self {
        let path = path.to_owned();
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source: err },
        }
    }
}
