use thiserror::Error;

use crate::theory::InvalidInputError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid progression: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
