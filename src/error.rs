//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Retrieval failures never surface here; they are folded into
//! [`crate::retrieval::RetrievalOutcome`] at the handler boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] dotenvy::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
