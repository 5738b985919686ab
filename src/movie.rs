//! Movie model and the fixed set of catalog tabs.
//!
//! Movies come back from the remote catalog as camelCase JSON. Entries from
//! the read-only catalog collections carry no `id`; only favourites (which
//! the store persists itself) have one, and only those can be deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A movie record as returned by the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Store-assigned identifier. Present only for persisted favourites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub year: i32,
    pub poster: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    #[serde(default)]
    pub storyline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<f32>,
    /// Runtime in the catalog's `PT<minutes>M` form, e.g. `PT142M`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// Maximum card title length before truncation.
const CARD_TITLE_MAX: usize = 23;

impl Movie {
    /// Title shortened for card display, matching the list card layout.
    pub fn short_title(&self) -> String {
        if self.title.chars().count() > CARD_TITLE_MAX {
            let truncated: String = self.title.chars().take(CARD_TITLE_MAX).collect();
            format!("{}...", truncated)
        } else {
            self.title.clone()
        }
    }

    /// Runtime formatted as `2h 22m`, or None if the duration string is
    /// absent or not in the `PT<minutes>M` form.
    pub fn runtime_display(&self) -> Option<String> {
        let minutes = parse_runtime_minutes(self.duration.as_deref()?)?;
        Some(format!("{}h {}m", minutes / 60, minutes % 60))
    }

    /// Release date in a readable form when it parses as `YYYY-MM-DD`,
    /// otherwise the raw stored string.
    pub fn release_date_display(&self) -> Option<String> {
        let raw = self.release_date.as_deref()?;
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date.format("%-d %b %Y").to_string()),
            Err(_) => Some(raw.to_string()),
        }
    }
}

/// Parse a `PT<minutes>M` runtime string into total minutes.
pub fn parse_runtime_minutes(duration: &str) -> Option<i64> {
    duration
        .strip_prefix("PT")?
        .strip_suffix('M')?
        .parse()
        .ok()
}

/// The fixed set of catalog tabs the browser can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    MoviesInTheaters,
    ComingSoon,
    TopRatedIndian,
    TopRatedMovies,
    Favourites,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::MoviesInTheaters,
        Tab::ComingSoon,
        Tab::TopRatedIndian,
        Tab::TopRatedMovies,
        Tab::Favourites,
    ];

    /// Remote collection name for this tab.
    pub fn collection(&self) -> &'static str {
        match self {
            Tab::MoviesInTheaters => "movies-in-theaters",
            Tab::ComingSoon => "movies-coming",
            Tab::TopRatedIndian => "top-rated-india",
            Tab::TopRatedMovies => "top-rated-movies",
            Tab::Favourites => "favourit",
        }
    }

    /// Label shown on the tab button.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::MoviesInTheaters => "In Theaters",
            Tab::ComingSoon => "Coming Soon",
            Tab::TopRatedIndian => "Top Rated India",
            Tab::TopRatedMovies => "Top Rated",
            Tab::Favourites => "Favourites",
        }
    }

    /// Heading above the movie grid.
    pub fn heading(&self) -> &'static str {
        if *self == Tab::Favourites {
            "Favourites"
        } else {
            "Movies"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            id: None,
            title: title.to_string(),
            year: 2021,
            poster: "dune.jpg".to_string(),
            genres: vec!["Sci-Fi".to_string()],
            actors: vec![],
            storyline: String::new(),
            content_rating: None,
            average_rating: None,
            imdb_rating: None,
            duration: None,
            release_date: None,
        }
    }

    #[test]
    fn test_collection_names() {
        assert_eq!(Tab::MoviesInTheaters.collection(), "movies-in-theaters");
        assert_eq!(Tab::ComingSoon.collection(), "movies-coming");
        assert_eq!(Tab::TopRatedIndian.collection(), "top-rated-india");
        assert_eq!(Tab::TopRatedMovies.collection(), "top-rated-movies");
        assert_eq!(Tab::Favourites.collection(), "favourit");
        assert_eq!(Tab::ALL.len(), 5);
    }

    #[test]
    fn test_heading_per_tab() {
        assert_eq!(Tab::Favourites.heading(), "Favourites");
        assert_eq!(Tab::TopRatedMovies.heading(), "Movies");
    }

    #[test]
    fn test_parse_runtime_minutes() {
        assert_eq!(parse_runtime_minutes("PT142M"), Some(142));
        assert_eq!(parse_runtime_minutes("PT90M"), Some(90));
        assert_eq!(parse_runtime_minutes("142"), None);
        assert_eq!(parse_runtime_minutes("PT142"), None);
        assert_eq!(parse_runtime_minutes("PTxM"), None);
    }

    #[test]
    fn test_runtime_display() {
        let mut m = movie("Dune");
        m.duration = Some("PT142M".to_string());
        assert_eq!(m.runtime_display().as_deref(), Some("2h 22m"));

        m.duration = Some("PT60M".to_string());
        assert_eq!(m.runtime_display().as_deref(), Some("1h 0m"));

        m.duration = None;
        assert_eq!(m.runtime_display(), None);
    }

    #[test]
    fn test_short_title_truncation() {
        let long = movie("The Lord of the Rings: The Return of the King");
        assert_eq!(long.short_title(), "The Lord of the Rings: ...");

        let short = movie("Dune");
        assert_eq!(short.short_title(), "Dune");
    }

    #[test]
    fn test_release_date_display() {
        let mut m = movie("Dune");
        m.release_date = Some("2021-10-22".to_string());
        assert_eq!(m.release_date_display().as_deref(), Some("22 Oct 2021"));

        m.release_date = Some("late 2021".to_string());
        assert_eq!(m.release_date_display().as_deref(), Some("late 2021"));
    }

    #[test]
    fn test_absent_id_not_serialized() {
        let m = movie("Dune");
        let value = serde_json::to_value(&m).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["title"], "Dune");
        assert_eq!(value["year"], 2021);
    }
}
