use std::path::PathBuf;

use thiserror::Error;

pub type CommandResult<T> = Result<T, HelloError>;

#[derive(Debug, Error)]
pub enum HelloError {
    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
