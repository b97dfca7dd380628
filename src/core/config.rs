//! Catalog location and format resolution.
//!
//! Precedence: CLI flags, then `MARQUEE_CATALOG`, then `./marquee.toml`,
//! then the default `movies.json`. The resolved settings are handed
//! explicitly to store construction; nothing below this module reads the
//! environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::error::MarqueeError;
use crate::core::store::StoreFormat;

pub const CATALOG_ENV: &str = "MARQUEE_CATALOG";
pub const CONFIG_FILE: &str = "marquee.toml";
pub const DEFAULT_CATALOG: &str = "movies.json";

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    catalog: Option<PathBuf>,
    format: Option<String>,
}

/// Fully resolved store settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub path: PathBuf,
    pub format: StoreFormat,
}

/// Resolves the backing file and format. `base_dir` is where the optional
/// `marquee.toml` is looked up (the working directory at the CLI edge).
pub fn resolve(
    flag_path: Option<PathBuf>,
    flag_format: Option<StoreFormat>,
    base_dir: &Path,
) -> Result<Settings, MarqueeError> {
    let file_config = read_file_config(&base_dir.join(CONFIG_FILE))?;

    let path = flag_path
        .or_else(|| env::var_os(CATALOG_ENV).map(PathBuf::from))
        .or(file_config.catalog)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));

    let format = match flag_format {
        Some(format) => format,
        None => match file_config.format.as_deref() {
            Some("json") => StoreFormat::Json,
            Some("csv") => StoreFormat::Csv,
            Some(other) => {
                return Err(MarqueeError::ConfigError(format!(
                    "unknown format '{}' in {} (expected 'json' or 'csv')",
                    other, CONFIG_FILE
                )));
            }
            None => StoreFormat::infer(&path),
        },
    };

    Ok(Settings { path, format })
}

/// An absent config file is fine; a present but unparsable one is not.
fn read_file_config(path: &Path) -> Result<FileConfig, MarqueeError> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let raw = fs::read_to_string(path).map_err(MarqueeError::IoError)?;
    toml::from_str(&raw)
        .map_err(|err| MarqueeError::ConfigError(format!("invalid {}: {}", path.display(), err)))
}
