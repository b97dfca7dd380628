//! Storage abstraction for the movie catalog.
//!
//! One trait, two interchangeable flat-file backends (JSON document, CSV
//! records), selected at construction from a path plus an optional declared
//! format. Every mutation above this layer is load -> mutate -> save, never
//! an in-place patch, so the backing file always holds a complete snapshot.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::core::error::MarqueeError;
use crate::core::record::Catalog;
use crate::core::store_csv::CsvStore;
use crate::core::store_json::JsonStore;

/// Backend discriminator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum StoreFormat {
    /// One JSON object mapping title to record.
    Json,
    /// CSV with a `title,year,rating,poster` header row.
    Csv,
}

impl StoreFormat {
    /// Format implied by the file extension; `.csv` selects CSV, anything
    /// else (including no extension) selects JSON.
    pub fn infer(path: &Path) -> StoreFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => StoreFormat::Csv,
            _ => StoreFormat::Json,
        }
    }
}

/// Durable whole-catalog read/write.
pub trait CatalogStore {
    /// Reads the backing file in full. A missing file is the first-run
    /// case and yields an empty catalog, not an error.
    fn load(&self) -> Result<Catalog, MarqueeError>;

    /// Serializes the entire catalog and replaces the backing file. No
    /// rollback on failure; the caller sees the error.
    fn save(&self, catalog: &Catalog) -> Result<(), MarqueeError>;

    /// Path of the backing file.
    fn path(&self) -> &Path;
}

/// Constructs the backend for `path`, inferring the format from the
/// extension unless one is declared.
pub fn open_store(path: PathBuf, format: Option<StoreFormat>) -> Box<dyn CatalogStore> {
    match format.unwrap_or_else(|| StoreFormat::infer(&path)) {
        StoreFormat::Json => Box::new(JsonStore::new(path)),
        StoreFormat::Csv => Box::new(CsvStore::new(path)),
    }
}
