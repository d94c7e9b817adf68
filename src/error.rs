use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FadingTextError>;

#[derive(Debug, Error)]
pub enum FadingTextError {
    #[error("there must be at least one text")]
    EmptyTextList,

    #[error("timeout must be longer than 0")]
    InvalidTimeout,

    #[error("position {position} is out of range for {len} texts")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),
}
