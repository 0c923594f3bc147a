use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Tag identifier errors
    #[error("Invalid tag format: {0}")]
    InvalidTagFormat(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing configuration key: {0}")]
    MissingConfig(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
