//! Error types for Homeroom Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid time slot key: {0}")]
    InvalidSlot(String),

    #[error("Invalid semester: {0}")]
    InvalidSemester(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
