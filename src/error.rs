use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the bet store, the console and the listing formatter
#[derive(Error, Debug)]
pub enum BetError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("directory is not empty: {}", .0.display())]
    NotEmpty(PathBuf),
    #[error("error encoding bet record")]
    Csv(#[from] csv::Error),
    #[error("input ended before a valid value was entered")]
    EndOfInput,
    #[error("console i/o failed")]
    Console(#[from] io::Error),
}

impl BetError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        BetError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BetError>;
