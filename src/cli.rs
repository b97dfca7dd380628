//! CLI struct definitions for the marquee command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::store::StoreFormat;

#[derive(Parser, Debug)]
#[clap(
    name = "marquee",
    version = env!("CARGO_PKG_VERSION"),
    about = "Flat-file movie catalog manager: one file as the source of truth, swappable JSON/CSV backends, derived views for stats, search, and sorting. 🎬"
)]
pub(crate) struct Cli {
    /// Path to the catalog file (overrides MARQUEE_CATALOG and marquee.toml).
    #[clap(long, global = true)]
    pub file: Option<PathBuf>,
    /// Storage backend; inferred from the file extension when omitted.
    #[clap(long, global = true, value_enum)]
    pub store_format: Option<StoreFormat>,
    /// Output format for command results.
    #[clap(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum SortKey {
    /// Descending by rating; unrated records are excluded.
    Rating,
    /// Ascending by year; records without a parseable year sort last.
    Year,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// List every movie in the catalog.
    List,
    /// Add a movie (a movie with the same title is overwritten).
    Add {
        /// Movie title (positional argument)
        #[clap(value_name = "TITLE")]
        title: String,
        /// Release year.
        #[clap(long)]
        year: i32,
        /// Rating between 0 and 10.
        #[clap(long)]
        rating: f64,
        /// Poster URL or path.
        #[clap(long, default_value = "")]
        poster: String,
    },
    /// Delete a movie by exact title.
    Delete {
        #[clap(value_name = "TITLE")]
        title: String,
    },
    /// Update the rating of an existing movie; year and poster are kept.
    Update {
        #[clap(value_name = "TITLE")]
        title: String,
        /// New rating between 0 and 10.
        #[clap(long)]
        rating: f64,
    },
    /// Rating statistics: average, median, and the tied best/worst sets.
    Stats,
    /// Pick one movie uniformly at random.
    Random,
    /// Case-insensitive substring search on titles.
    Search {
        #[clap(value_name = "TERM")]
        term: String,
    },
    /// List movies sorted by rating or year.
    Sort {
        #[clap(value_enum)]
        by: SortKey,
    },
}
