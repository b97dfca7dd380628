//! Marquee: a flat-file movie catalog manager.
//!
//! One backing file is the source of truth. Every command loads the whole
//! catalog from it, computes in memory, and (for mutations) writes the
//! whole catalog back. There is no cache, no index, and no lock: catalogs
//! are small and single-user, and the whole-file rewrite keeps the two
//! storage backends trivially swappable behind one contract.
//!
//! # Architecture
//!
//! - [`core::store`]: the persistence contract, with a JSON-document
//!   backend and a CSV-record backend selected at construction
//! - [`core::service`]: validation, mutations, and derived views (stats,
//!   search, sorts, random pick) on top of the store
//! - [`core::lookup`]: the consumed contract for external metadata
//!   enrichment; no HTTP client ships in this crate
//! - [`core::config`]: catalog path/format resolution (flags, environment,
//!   `marquee.toml`)
//!
//! # Examples
//!
//! ```bash
//! # Add a movie to the default movies.json
//! marquee add "The Thing" --year 1982 --rating 8.6
//!
//! # Same catalog, machine-readable
//! marquee --format json list
//!
//! # A CSV catalog somewhere else
//! marquee --file ~/films.csv stats
//! ```

pub mod core;

mod cli;

use clap::Parser;
use serde_json::Value as JsonValue;

use crate::cli::{Cli, Command, OutputFormat, SortKey};
use crate::core::config;
use crate::core::error::MarqueeError;
use crate::core::output;
use crate::core::record::MovieRecord;
use crate::core::service::CatalogService;
use crate::core::store;

pub fn run() -> Result<(), MarqueeError> {
    let cli = Cli::parse();
    let current_dir = std::env::current_dir()?;
    let settings = config::resolve(cli.file.clone(), cli.store_format, &current_dir)?;
    let service = CatalogService::new(store::open_store(settings.path, Some(settings.format)));

    match cli.command {
        Command::List => {
            let catalog = service.list()?;
            match cli.format {
                OutputFormat::Text => {
                    if catalog.is_empty() {
                        println!("No movies in the catalog.");
                    } else {
                        println!("{} movie(s):", catalog.len());
                        for (title, record) in &catalog {
                            println!("{}", output::movie_line(title, record));
                        }
                    }
                }
                OutputFormat::Json => {
                    let movies: Vec<(String, MovieRecord)> = catalog.into_iter().collect();
                    print_envelope(
                        "list",
                        "ok",
                        serde_json::json!({
                            "count": movies.len(),
                            "movies": movies_payload(&movies),
                        }),
                    );
                }
            }
        }
        Command::Add {
            title,
            year,
            rating,
            poster,
        } => {
            service.add(&title, year, rating, &poster)?;
            match cli.format {
                OutputFormat::Text => {
                    println!("Added '{}' ({}) rated {}.", title.trim(), year, rating);
                }
                OutputFormat::Json => {
                    print_envelope("add", "ok", serde_json::json!({"title": title.trim()}));
                }
            }
        }
        Command::Delete { title } => {
            let removed = service.delete(&title)?;
            match cli.format {
                OutputFormat::Text => {
                    if removed {
                        println!("Deleted '{}'.", title);
                    } else {
                        println!("Movie '{}' not found.", title);
                    }
                }
                OutputFormat::Json => {
                    let status = if removed { "ok" } else { "not_found" };
                    print_envelope("delete", status, serde_json::json!({"title": title}));
                }
            }
        }
        Command::Update { title, rating } => {
            let updated = service.update(&title, rating)?;
            match cli.format {
                OutputFormat::Text => {
                    if updated {
                        println!("Rating for '{}' is now {}.", title, rating);
                    } else {
                        println!("Movie '{}' not found.", title);
                    }
                }
                OutputFormat::Json => {
                    let status = if updated { "ok" } else { "not_found" };
                    print_envelope(
                        "update",
                        status,
                        serde_json::json!({"title": title, "rating": rating}),
                    );
                }
            }
        }
        Command::Stats => match service.stats()? {
            Some(stats) => match cli.format {
                OutputFormat::Text => println!("{}", output::stats_block(&stats)),
                OutputFormat::Json => {
                    print_envelope("stats", "ok", serde_json::json!({"stats": stats}));
                }
            },
            None => match cli.format {
                OutputFormat::Text => println!("No rated movies to summarize."),
                OutputFormat::Json => print_envelope("stats", "empty", serde_json::json!({})),
            },
        },
        Command::Random => match service.random()? {
            Some((title, record)) => match cli.format {
                OutputFormat::Text => {
                    println!("Tonight's pick: {}", output::movie_line(&title, &record));
                }
                OutputFormat::Json => {
                    print_envelope(
                        "random",
                        "ok",
                        serde_json::json!({"movies": movies_payload(&[(title, record)])}),
                    );
                }
            },
            None => match cli.format {
                OutputFormat::Text => println!("No movies in the catalog."),
                OutputFormat::Json => print_envelope("random", "empty", serde_json::json!({})),
            },
        },
        Command::Search { term } => {
            let matches = service.search(&term)?;
            match cli.format {
                OutputFormat::Text => {
                    if matches.is_empty() {
                        println!("No movies matching '{}'.", term);
                    } else {
                        for (title, record) in &matches {
                            println!("{}", output::movie_line(title, record));
                        }
                    }
                }
                OutputFormat::Json => {
                    print_envelope(
                        "search",
                        "ok",
                        serde_json::json!({
                            "term": term,
                            "count": matches.len(),
                            "movies": movies_payload(&matches),
                        }),
                    );
                }
            }
        }
        Command::Sort { by } => {
            let movies = match by {
                SortKey::Rating => service.sorted_by_rating()?,
                SortKey::Year => service.sorted_by_year()?,
            };
            match cli.format {
                OutputFormat::Text => {
                    if movies.is_empty() {
                        println!("No movies to sort.");
                    } else {
                        for (title, record) in &movies {
                            println!("{}", output::movie_line(title, record));
                        }
                    }
                }
                OutputFormat::Json => {
                    print_envelope(
                        "sort",
                        "ok",
                        serde_json::json!({
                            "count": movies.len(),
                            "movies": movies_payload(&movies),
                        }),
                    );
                }
            }
        }
    }

    Ok(())
}

fn movies_payload(movies: &[(String, MovieRecord)]) -> JsonValue {
    JsonValue::Array(
        movies
            .iter()
            .map(|(title, record)| {
                serde_json::json!({
                    "title": title,
                    "year": record.year,
                    "rating": record.rating,
                    "poster": record.poster,
                })
            })
            .collect(),
    )
}

/// Command response envelope shape shared by every JSON-mode command.
fn print_envelope(cmd: &str, status: &str, extra: JsonValue) {
    let mut base = serde_json::json!({
        "cmd": cmd,
        "status": status,
    });
    if let (Some(base_obj), Some(extra_obj)) = (base.as_object_mut(), extra.as_object()) {
        for (key, value) in extra_obj {
            base_obj.insert(key.clone(), value.clone());
        }
    }
    println!("{}", serde_json::to_string_pretty(&base).unwrap());
}
