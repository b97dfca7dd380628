//! Data model for the movie catalog.
//!
//! A catalog is the whole collection for one operation, keyed by title.
//! It is loaded wholesale from a backing store, mutated in memory, and
//! written back wholesale; nothing is cached between operations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Complete in-memory catalog: title -> record.
///
/// A BTreeMap so "catalog order" (search results, stats tie lists, sort
/// tie-breaks) is lexicographic title order, deterministic across loads
/// and identical for both backends.
pub type Catalog = BTreeMap<String, MovieRecord>;

/// Release year as stored: a native number for everything marquee writes,
/// with a text arm so legacy files carrying placeholders like `"n/a"`
/// still load and stay visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(i32),
    Text(String),
}

impl YearValue {
    /// Numeric view. Text arms that parse as integers count as numeric.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            YearValue::Number(year) => Some(*year),
            YearValue::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

impl fmt::Display for YearValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearValue::Number(year) => write!(f, "{}", year),
            YearValue::Text(raw) => write!(f, "{}", raw),
        }
    }
}

/// Rating on the 0–10 scale, with the same tolerant text arm as
/// [`YearValue`] for placeholder strings like `"N/A"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingValue {
    Number(f64),
    Text(String),
}

impl RatingValue {
    /// Numeric view; non-finite numbers and unparseable text are `None`
    /// and excluded from stats and rating sorts.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            RatingValue::Number(rating) => *rating,
            RatingValue::Text(raw) => raw.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingValue::Number(rating) => write!(f, "{}", rating),
            RatingValue::Text(raw) => write!(f, "{}", raw),
        }
    }
}

/// One movie. The title is the map key in [`Catalog`], not duplicated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub year: YearValue,
    pub rating: RatingValue,
    /// Poster URL or path; empty when unknown.
    #[serde(default)]
    pub poster: String,
}

impl MovieRecord {
    /// Record with validated numeric fields, as produced by every mutation.
    pub fn new(year: i32, rating: f64, poster: impl Into<String>) -> Self {
        MovieRecord {
            year: YearValue::Number(year),
            rating: RatingValue::Number(rating),
            poster: poster.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_deserialize_into_number_arms() {
        let record: MovieRecord =
            serde_json::from_str(r#"{"year": 1999, "rating": 8.5, "poster": ""}"#)
                .expect("valid record");
        assert_eq!(record.year, YearValue::Number(1999));
        assert_eq!(record.rating, RatingValue::Number(8.5));
    }

    #[test]
    fn legacy_text_fields_deserialize_and_stay_visible() {
        let record: MovieRecord =
            serde_json::from_str(r#"{"year": "n/a", "rating": "N/A"}"#).expect("legacy record");
        assert_eq!(record.year.as_i32(), None);
        assert_eq!(record.rating.as_f64(), None);
        assert_eq!(record.poster, "");
    }

    #[test]
    fn numeric_text_counts_as_numeric() {
        assert_eq!(YearValue::Text("2001".to_string()).as_i32(), Some(2001));
        assert_eq!(RatingValue::Text(" 7.5 ".to_string()).as_f64(), Some(7.5));
    }

    #[test]
    fn non_finite_ratings_are_invalid() {
        assert_eq!(RatingValue::Number(f64::NAN).as_f64(), None);
        assert_eq!(RatingValue::Number(f64::INFINITY).as_f64(), None);
    }

    #[test]
    fn display_round_trips_both_arms() {
        assert_eq!(YearValue::Number(1972).to_string(), "1972");
        assert_eq!(YearValue::Text("n/a".to_string()).to_string(), "n/a");
        assert_eq!(RatingValue::Number(9.0).to_string(), "9");
        assert_eq!(RatingValue::Number(8.5).to_string(), "8.5");
    }
}
