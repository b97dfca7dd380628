//! Terminal rendering helpers for CLI surfaces.
//!
//! Keeps command result output bounded and readable while preserving signal.

use colored::Colorize;

use crate::core::record::MovieRecord;
use crate::core::service::CatalogStats;

const POSTER_PREVIEW_CHARS: usize = 48;

/// Collapse newlines/extra whitespace and bound length for terminal display.
pub fn compact_line(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// One movie per line: bold title, year, rating, bounded poster preview.
pub fn movie_line(title: &str, record: &MovieRecord) -> String {
    let mut line = format!(
        "{} ({}) rated {}",
        title.bold(),
        record.year,
        record.rating
    );
    if !record.poster.is_empty() {
        line.push_str(&format!(
            " [{}]",
            compact_line(&record.poster, POSTER_PREVIEW_CHARS)
        ));
    }
    line
}

/// Stats block; average is rendered to two decimals, the rest as stored.
pub fn stats_block(stats: &CatalogStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Movies counted: {}\n", stats.counted));
    out.push_str(&format!("Average rating: {:.2}\n", stats.average));
    out.push_str(&format!("Median rating:  {}\n", stats.median));
    out.push_str(&format!(
        "Best ({}):  {}\n",
        stats.best_rating,
        stats.best.join(", ")
    ));
    out.push_str(&format!(
        "Worst ({}): {}",
        stats.worst_rating,
        stats.worst.join(", ")
    ));
    out
}

/// Operator-facing warning on stderr; recoverable, load continues.
pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

/// Fatal error prefix used at the binary edge.
pub fn error(message: &str) {
    eprintln!("{} {}", "error:".bright_red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::MovieRecord;

    #[test]
    fn compact_line_collapses_and_bounds() {
        assert_eq!(compact_line("a  b\nc", 10), "a b c");
        assert_eq!(compact_line("abcdefgh", 5), "abcde...");
        assert_eq!(compact_line("abcde", 5), "abcde");
    }

    #[test]
    fn movie_line_truncates_long_posters() {
        colored::control::set_override(false);
        let poster = "https://example.com/".to_string() + &"p".repeat(100);
        let line = movie_line("Alien", &MovieRecord::new(1979, 8.5, poster));
        assert!(line.starts_with("Alien (1979) rated 8.5 [https://"));
        assert!(line.ends_with("...]"));
    }

    #[test]
    fn movie_line_omits_empty_poster() {
        colored::control::set_override(false);
        let line = movie_line("Alien", &MovieRecord::new(1979, 8.5, ""));
        assert_eq!(line, "Alien (1979) rated 8.5");
    }
}
