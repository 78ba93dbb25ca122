use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SquareSumsError {
    #[error("domain too large: n = {n}, the path bitmask supports at most n = 63")]
    DomainTooLarge { n: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SquareSumsError>;
