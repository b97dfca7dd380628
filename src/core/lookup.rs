//! Metadata lookup collaborator contract.
//!
//! The catalog core consumes lookup results but does not ship an HTTP
//! client. Upstream movie APIs return every field as text and substitute
//! placeholder strings for unknowns, so fields stay raw here; parsing and
//! rejection rules live in the service.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("network failure: {0}")]
    Network(String),
    #[error("no match for '{0}'")]
    NoMatch(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Raw lookup result as delivered by a provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieMetadata {
    pub title: String,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub poster: Option<String>,
}

pub trait MetadataLookup {
    fn lookup(&self, title: &str) -> Result<MovieMetadata, LookupError>;
}
