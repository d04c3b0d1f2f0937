use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Unknown tier rarity: {0}")]
    UnknownTier(u32),

    #[error("Unknown training resource rarity: {0}")]
    UnknownResource(u32),

    #[error("'{0}' is not a valid stat name")]
    UnknownStat(String),

    #[error("'{0}' is not a valid priority code")]
    InvalidPriority(char),

    #[error("Class '{class}' has {actual} branches, search width is {expected}")]
    ShapeMismatch {
        class: String,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
