//! HTTP client for the remote movie catalog and favourites store.
//!
//! This module provides:
//!
//! - `ApiClient`: reqwest wrapper scoped to one catalog base URL
//! - `ApiError`: the error taxonomy surfaced to the views
//!
//! The backend is json-server shaped: each tab is a top-level collection,
//! `?q=` does full-text search, and the favourites collection assigns its
//! own ids on insert. Every failure is terminal for the current operation;
//! there are no retries and no timeouts beyond reqwest's defaults.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::movie::{Movie, Tab};

/// User agent for API requests
const USER_AGENT: &str = concat!("Marquee/", env!("CARGO_PKG_VERSION"));

/// Errors from the catalog API. Messages are shown to the user verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("no movie titled \"{title}\" ({year}) in {collection}")]
    NotFound {
        collection: String,
        title: String,
        year: i32,
    },
}

/// Query parameter for a text search, or None when the text is empty and
/// the request is the plain unfiltered collection.
fn search_query(text: &str) -> Option<(&'static str, String)> {
    if text.is_empty() {
        None
    } else {
        Some(("q", text.to_string()))
    }
}

/// Catalog API client
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the given catalog base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self, tab: Tab) -> String {
        format!("{}/{}", self.base_url, tab.collection())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch the full collection behind a tab.
    pub async fn list_collection(&self, tab: Tab) -> Result<Vec<Movie>, ApiError> {
        let movies: Vec<Movie> = self.get_json(&self.collection_url(tab), &[]).await?;
        tracing::debug!("Fetched {} movies from {}", movies.len(), tab.collection());
        Ok(movies)
    }

    /// Search a tab's collection by free text. Empty text is the unfiltered
    /// collection, same result set as `list_collection`.
    pub async fn search_collection(&self, tab: Tab, text: &str) -> Result<Vec<Movie>, ApiError> {
        match search_query(text) {
            None => self.list_collection(tab).await,
            Some(query) => self.get_json(&self.collection_url(tab), &[query]).await,
        }
    }

    /// Fetch one movie by its store-assigned id.
    pub async fn get_by_id(&self, tab: Tab, id: &str) -> Result<Movie, ApiError> {
        let url = format!("{}/{}", self.collection_url(tab), id);
        self.get_json(&url, &[]).await
    }

    /// Fetch movies matching an exact (title, year) pair.
    pub async fn get_by_title_and_year(
        &self,
        tab: Tab,
        title: &str,
        year: i32,
    ) -> Result<Vec<Movie>, ApiError> {
        self.get_json(
            &self.collection_url(tab),
            &[("title", title.to_string()), ("year", year.to_string())],
        )
        .await
    }

    /// Submit a movie to the favourites store. The upstream id is stripped
    /// so the store assigns its own; the returned record carries it.
    pub async fn create_favourite(&self, movie: &Movie) -> Result<Movie, ApiError> {
        let mut payload = movie.clone();
        payload.id = None;

        let url = self.collection_url(Tab::Favourites);
        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                url,
            });
        }

        let created: Movie = response.json().await?;
        tracing::info!("Added \"{}\" ({}) to favourites", created.title, created.year);
        Ok(created)
    }

    /// Delete a favourite by id.
    pub async fn delete_favourite(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.collection_url(Tab::Favourites), id);
        let response = self.client.delete(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                url,
            });
        }

        tracing::info!("Deleted favourite {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url() {
        let client = ApiClient::new("http://localhost:4000").unwrap();
        assert_eq!(
            client.collection_url(Tab::MoviesInTheaters),
            "http://localhost:4000/movies-in-theaters"
        );
        assert_eq!(
            client.collection_url(Tab::Favourites),
            "http://localhost:4000/favourit"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:4000/").unwrap();
        assert_eq!(
            client.collection_url(Tab::ComingSoon),
            "http://localhost:4000/movies-coming"
        );
    }

    #[test]
    fn test_search_query_empty_is_unfiltered() {
        // Empty search text issues the same request as the plain list fetch.
        assert_eq!(search_query(""), None);
        assert_eq!(search_query("dune"), Some(("q", "dune".to_string())));
        assert_eq!(search_query(" "), Some(("q", " ".to_string())));
    }

    #[test]
    fn test_not_found_message() {
        let err = ApiError::NotFound {
            collection: "top-rated-movies".to_string(),
            title: "Dune".to_string(),
            year: 2021,
        };
        assert_eq!(
            err.to_string(),
            "no movie titled \"Dune\" (2021) in top-rated-movies"
        );
    }
}
