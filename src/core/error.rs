use std::io;
use thiserror::Error;

use crate::core::lookup::LookupError;

/// Crate-wide error taxonomy.
///
/// "Title not found" and "empty catalog" are expected business outcomes,
/// not errors; service operations report them as `bool`/`Option` results.
#[derive(Error, Debug)]
pub enum MarqueeError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Lookup failed: {0}")]
    LookupError(#[from] LookupError),
}
