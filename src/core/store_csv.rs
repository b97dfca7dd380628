//! Delimited-record backend: CSV with a `title,year,rating,poster` header.
//!
//! Numeric fields arrive as text, so this backend can recover per row: a
//! row whose year or rating does not parse is skipped with a warning and
//! the rest of the file still loads. A file the CSV reader cannot process
//! at all fails the whole load, same class as a broken JSON document.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::MarqueeError;
use crate::core::output;
use crate::core::record::{Catalog, MovieRecord};
use crate::core::store::CatalogStore;

const HEADER: [&str; 4] = ["title", "year", "rating", "poster"];

/// Raw row shape; parsing to numbers happens after deserialization so a
/// bad row can be dropped without failing the load.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    title: String,
    year: String,
    rating: String,
    #[serde(default)]
    poster: String,
}

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: PathBuf) -> Self {
        CsvStore { path }
    }
}

impl CatalogStore for CsvStore {
    fn load(&self) -> Result<Catalog, MarqueeError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Catalog::new()),
            Err(err) => return Err(MarqueeError::IoError(err)),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut catalog = Catalog::new();
        for row in reader.deserialize() {
            let row: CsvRow = row.map_err(|err| csv_failure(&self.path, err))?;
            let title = row.title.trim().to_string();
            if title.is_empty() {
                output::warn("skipping row with an empty title");
                continue;
            }
            let Ok(year) = row.year.trim().parse::<i32>() else {
                output::warn(&format!(
                    "skipping '{}': invalid year '{}'",
                    title, row.year
                ));
                continue;
            };
            let Ok(rating) = row.rating.trim().parse::<f64>() else {
                output::warn(&format!(
                    "skipping '{}': invalid rating '{}'",
                    title, row.rating
                ));
                continue;
            };
            catalog.insert(title, MovieRecord::new(year, rating, row.poster));
        }
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> Result<(), MarqueeError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|err| csv_failure(&self.path, err))?;

        // Written explicitly so an empty catalog still produces a header.
        writer
            .write_record(HEADER)
            .map_err(|err| csv_failure(&self.path, err))?;
        for (title, record) in catalog {
            writer
                .serialize(CsvRow {
                    title: title.clone(),
                    year: record.year.to_string(),
                    rating: record.rating.to_string(),
                    poster: record.poster.clone(),
                })
                .map_err(|err| csv_failure(&self.path, err))?;
        }
        writer.flush().map_err(MarqueeError::IoError)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

fn csv_failure(path: &Path, err: csv::Error) -> MarqueeError {
    let rendered = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => MarqueeError::IoError(io_err),
        _ => MarqueeError::MalformedCatalog(format!("{}: {}", path.display(), rendered)),
    }
}
