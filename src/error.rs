//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Note that none of these escape [`crate::OutfitJudge::get_judgment`]; they
//! exist for the transport layer and the CLI, and are absorbed into fallback
//! selection inside the service.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider error: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, Error>;
