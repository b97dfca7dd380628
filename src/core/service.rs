//! Catalog operations: validation, mutation orchestration, derived views.
//!
//! Every operation is a single-shot transaction against the store: load the
//! whole catalog, compute in memory, and (for mutations) write the whole
//! catalog back. Nothing is cached between calls; the backing file is the
//! only source of truth, so concurrent external writers resolve to last
//! writer wins.

use chrono::Datelike;
use rand::seq::IteratorRandom;
use serde::Serialize;

use crate::core::error::MarqueeError;
use crate::core::lookup::{MetadataLookup, MovieMetadata};
use crate::core::record::{Catalog, MovieRecord, RatingValue};
use crate::core::store::CatalogStore;

/// Earliest accepted release year (the Roundhay Garden Scene, 1888).
pub const MIN_YEAR: i32 = 1888;

/// Rating statistics over every record with a numerically valid rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    /// Records that carried a valid rating and were counted.
    pub counted: usize,
    pub average: f64,
    pub median: f64,
    pub best_rating: f64,
    /// Every title tied at `best_rating`, in catalog order.
    pub best: Vec<String>,
    pub worst_rating: f64,
    /// Every title tied at `worst_rating`, in catalog order.
    pub worst: Vec<String>,
}

pub struct CatalogService {
    store: Box<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Box<dyn CatalogStore>) -> Self {
        CatalogService { store }
    }

    /// The whole catalog, straight from the store.
    pub fn list(&self) -> Result<Catalog, MarqueeError> {
        self.store.load()
    }

    /// Inserts a movie after validating all fields. A movie with the same
    /// title is overwritten; titles are unique within a catalog.
    pub fn add(
        &self,
        title: &str,
        year: i32,
        rating: f64,
        poster: &str,
    ) -> Result<(), MarqueeError> {
        let title = validate_title(title)?;
        validate_year(year)?;
        validate_rating(rating)?;

        let mut catalog = self.store.load()?;
        catalog.insert(title, MovieRecord::new(year, rating, poster));
        self.store.save(&catalog)
    }

    /// Removes a movie by exact title. `Ok(false)` when absent; the store
    /// is not rewritten in that case.
    pub fn delete(&self, title: &str) -> Result<bool, MarqueeError> {
        let mut catalog = self.store.load()?;
        if catalog.remove(title).is_none() {
            return Ok(false);
        }
        self.store.save(&catalog)?;
        Ok(true)
    }

    /// Replaces the rating of an existing movie, leaving year and poster
    /// untouched. `Ok(false)` when the title is absent.
    pub fn update(&self, title: &str, rating: f64) -> Result<bool, MarqueeError> {
        validate_rating(rating)?;

        let mut catalog = self.store.load()?;
        let Some(record) = catalog.get_mut(title) else {
            return Ok(false);
        };
        record.rating = RatingValue::Number(rating);
        self.store.save(&catalog)?;
        Ok(true)
    }

    /// `None` when the catalog is empty or no record carries a valid
    /// rating; callers render a "nothing to show" message, not an error.
    pub fn stats(&self) -> Result<Option<CatalogStats>, MarqueeError> {
        Ok(compute_stats(&self.store.load()?))
    }

    /// Uniform random pick; `None` on an empty catalog.
    pub fn random(&self) -> Result<Option<(String, MovieRecord)>, MarqueeError> {
        let catalog = self.store.load()?;
        let mut rng = rand::thread_rng();
        Ok(catalog.into_iter().choose(&mut rng))
    }

    /// Case-insensitive substring match on titles, catalog order preserved.
    /// An empty result is not an error.
    pub fn search(&self, term: &str) -> Result<Vec<(String, MovieRecord)>, MarqueeError> {
        let needle = term.to_lowercase();
        let catalog = self.store.load()?;
        Ok(catalog
            .into_iter()
            .filter(|(title, _)| title.to_lowercase().contains(&needle))
            .collect())
    }

    /// Descending by rating; records without a valid rating are excluded.
    /// Ties keep catalog order (stable sort).
    pub fn sorted_by_rating(&self) -> Result<Vec<(String, MovieRecord)>, MarqueeError> {
        let catalog = self.store.load()?;
        let mut rated: Vec<(String, MovieRecord)> = catalog
            .into_iter()
            .filter(|(_, record)| record.rating.as_f64().is_some())
            .collect();
        rated.sort_by(|left, right| {
            let left = left.1.rating.as_f64().unwrap_or(f64::NEG_INFINITY);
            let right = right.1.rating.as_f64().unwrap_or(f64::NEG_INFINITY);
            right.total_cmp(&left)
        });
        Ok(rated)
    }

    /// Ascending by year. Records with an unparseable year sort last so
    /// legacy entries stay visible instead of vanishing.
    pub fn sorted_by_year(&self) -> Result<Vec<(String, MovieRecord)>, MarqueeError> {
        let catalog = self.store.load()?;
        let mut movies: Vec<(String, MovieRecord)> = catalog.into_iter().collect();
        movies.sort_by_key(|(_, record)| {
            record.year.as_i32().map(i64::from).unwrap_or(i64::MAX)
        });
        Ok(movies)
    }

    /// Drives `add` from a lookup result. Rejects the addition when any of
    /// the four fields is missing/empty or when year/rating is a
    /// placeholder like `"N/A"`, so upstream unknowns never reach the
    /// catalog. Returns the stored title and record.
    pub fn add_from_lookup(
        &self,
        provider: &dyn MetadataLookup,
        title: &str,
    ) -> Result<(String, MovieRecord), MarqueeError> {
        let meta = provider.lookup(title)?;
        let MovieMetadata {
            title: found_title,
            year,
            rating,
            poster,
        } = meta;
        if found_title.trim().is_empty() {
            return Err(MarqueeError::InvalidInput(
                "lookup result is missing a title".to_string(),
            ));
        }
        let year_raw = required_field(year, "year")?;
        let rating_raw = required_field(rating, "rating")?;
        let poster = required_field(poster, "poster")?;

        let year: i32 = year_raw.trim().parse().map_err(|_| {
            MarqueeError::InvalidInput(format!("lookup returned a non-numeric year '{year_raw}'"))
        })?;
        let rating: f64 = rating_raw.trim().parse().map_err(|_| {
            MarqueeError::InvalidInput(format!(
                "lookup returned a non-numeric rating '{rating_raw}'"
            ))
        })?;

        self.add(&found_title, year, rating, &poster)?;
        Ok((found_title, MovieRecord::new(year, rating, poster)))
    }
}

/// Stats over `catalog`; `None` when no record has a valid rating.
pub fn compute_stats(catalog: &Catalog) -> Option<CatalogStats> {
    let rated: Vec<(&str, f64)> = catalog
        .iter()
        .filter_map(|(title, record)| record.rating.as_f64().map(|r| (title.as_str(), r)))
        .collect();
    if rated.is_empty() {
        return None;
    }

    let counted = rated.len();
    let average = rated.iter().map(|(_, rating)| rating).sum::<f64>() / counted as f64;

    let mut sorted: Vec<f64> = rated.iter().map(|(_, rating)| *rating).collect();
    sorted.sort_by(f64::total_cmp);
    let median = if counted % 2 == 0 {
        (sorted[counted / 2 - 1] + sorted[counted / 2]) / 2.0
    } else {
        sorted[counted / 2]
    };

    // Ties are common in small catalogs; best/worst are the full tied sets.
    let best_rating = sorted[counted - 1];
    let worst_rating = sorted[0];
    let tied_titles = |target: f64| -> Vec<String> {
        rated
            .iter()
            .filter(|(_, rating)| *rating == target)
            .map(|(title, _)| title.to_string())
            .collect()
    };

    Some(CatalogStats {
        counted,
        average,
        median,
        best_rating,
        best: tied_titles(best_rating),
        worst_rating,
        worst: tied_titles(worst_rating),
    })
}

fn validate_title(title: &str) -> Result<String, MarqueeError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(MarqueeError::InvalidInput(
            "title cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_year(year: i32) -> Result<(), MarqueeError> {
    let max_year = chrono::Utc::now().year() + 1;
    if year < MIN_YEAR || year > max_year {
        return Err(MarqueeError::InvalidInput(format!(
            "year {} out of range [{}, {}]",
            year, MIN_YEAR, max_year
        )));
    }
    Ok(())
}

fn validate_rating(rating: f64) -> Result<(), MarqueeError> {
    if !rating.is_finite() || !(0.0..=10.0).contains(&rating) {
        return Err(MarqueeError::InvalidInput(format!(
            "rating {} out of range [0.0, 10.0]",
            rating
        )));
    }
    Ok(())
}

fn required_field(value: Option<String>, name: &str) -> Result<String, MarqueeError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MarqueeError::InvalidInput(format!(
            "lookup result is missing '{name}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::YearValue;

    fn record(year: i32, rating: f64) -> MovieRecord {
        MovieRecord::new(year, rating, "")
    }

    #[test]
    fn median_averages_middle_pair_on_even_counts() {
        let mut catalog = Catalog::new();
        catalog.insert("A".to_string(), record(2000, 4.0));
        catalog.insert("B".to_string(), record(2001, 6.0));
        catalog.insert("C".to_string(), record(2002, 8.0));
        catalog.insert("D".to_string(), record(2003, 9.0));
        let stats = compute_stats(&catalog).expect("rated catalog");
        assert_eq!(stats.median, 7.0);
    }

    #[test]
    fn placeholder_ratings_are_filtered_out() {
        let mut catalog = Catalog::new();
        catalog.insert("Rated".to_string(), record(2000, 5.0));
        catalog.insert(
            "Unrated".to_string(),
            MovieRecord {
                year: YearValue::Number(2001),
                rating: RatingValue::Text("N/A".to_string()),
                poster: String::new(),
            },
        );
        let stats = compute_stats(&catalog).expect("one rated record");
        assert_eq!(stats.counted, 1);
        assert_eq!(stats.average, 5.0);
    }

    #[test]
    fn stats_are_none_without_valid_ratings() {
        assert_eq!(compute_stats(&Catalog::new()), None);

        let mut catalog = Catalog::new();
        catalog.insert(
            "Only".to_string(),
            MovieRecord {
                year: YearValue::Number(2001),
                rating: RatingValue::Text("N/A".to_string()),
                poster: String::new(),
            },
        );
        assert_eq!(compute_stats(&catalog), None);
    }
}
