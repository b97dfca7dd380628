//! Structured-document backend: one JSON object mapping title to record.
//!
//! Fields arrive already typed by the serialization, so there is no
//! per-record recovery here: a document that does not parse fails the
//! whole load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::error::MarqueeError;
use crate::core::record::Catalog;
use crate::core::store::CatalogStore;

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        JsonStore { path }
    }
}

impl CatalogStore for JsonStore {
    fn load(&self) -> Result<Catalog, MarqueeError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Catalog::new()),
            Err(err) => return Err(MarqueeError::IoError(err)),
        };
        serde_json::from_str(&raw).map_err(|err| {
            MarqueeError::MalformedCatalog(format!(
                "invalid catalog document {}: {}",
                self.path.display(),
                err
            ))
        })
    }

    fn save(&self, catalog: &Catalog) -> Result<(), MarqueeError> {
        let bytes = serde_json::to_vec_pretty(catalog).map_err(|err| {
            MarqueeError::MalformedCatalog(format!("failed to serialize catalog: {}", err))
        })?;
        fs::write(&self.path, bytes).map_err(MarqueeError::IoError)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
