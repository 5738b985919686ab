//! Detail view state: loads one movie by id or by (title, year).

use eframe::egui;
use tokio::task::JoinHandle;

use crate::api::{ApiClient, ApiError};
use crate::movie::{Movie, Tab};
use crate::state::{LoadingStatus, StateEvent};
use crate::task::{poll_task, PollResult, Stamped};

/// Navigation payload handed over by the list view: which collection the
/// movie came from, plus enough to identify it. Catalog entries have no id,
/// so those are looked up by (title, year) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub tab: Tab,
    pub id: Option<String>,
    pub title: String,
    pub year: i32,
}

/// State for the movie detail view.
pub struct DetailState {
    pub request: DetailRequest,
    pub status: LoadingStatus<Movie>,
    epoch: u64,
    task: Option<JoinHandle<Stamped<Result<Movie, ApiError>>>>,
}

impl DetailState {
    fn new(request: DetailRequest) -> Self {
        Self {
            request,
            status: LoadingStatus::Loading,
            epoch: 0,
            task: None,
        }
    }

    /// Create the state for a freshly opened detail view and start its fetch.
    pub fn open(client: &ApiClient, request: DetailRequest) -> Self {
        let mut state = Self::new(request);
        state.fetch(client);
        state
    }

    /// Re-enter `Loading` only if the navigation target actually changed;
    /// returning to the same movie keeps whatever state it was in.
    pub fn navigate(&mut self, client: &ApiClient, request: DetailRequest) {
        if request == self.request {
            return;
        }
        self.request = request;
        self.fetch(client);
    }

    fn fetch(&mut self, client: &ApiClient) {
        self.status = LoadingStatus::Loading;
        self.epoch += 1;
        let epoch = self.epoch;
        let client = client.clone();
        let request = self.request.clone();

        self.task = Some(tokio::spawn(async move {
            let result = fetch_movie(&client, &request).await;
            Stamped::new(epoch, result)
        }));
    }

    /// Poll the in-flight fetch. Call once per frame.
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        match poll_task(&mut self.task) {
            PollResult::Complete(Ok(result)) => self.apply(result),
            PollResult::Complete(Err(e)) => {
                tracing::error!("Detail fetch task panicked: {}", e);
                self.status = LoadingStatus::Failed(e.to_string());
                Vec::new()
            }
            PollResult::Pending => {
                ctx.request_repaint();
                Vec::new()
            }
            PollResult::NoTask => Vec::new(),
        }
    }

    /// Apply a finished detail fetch, discarding it if navigation moved on.
    fn apply(&mut self, result: Stamped<Result<Movie, ApiError>>) -> Vec<StateEvent> {
        if !result.is_current(self.epoch) {
            tracing::debug!(
                "Discarding stale detail response (epoch {} != {})",
                result.epoch,
                self.epoch
            );
            return Vec::new();
        }

        match result.value {
            Ok(movie) => {
                let events = vec![StateEvent::StatusMessage(format!(
                    "Loaded details for {}",
                    movie.title
                ))];
                self.status = LoadingStatus::Loaded(movie);
                events
            }
            Err(e) => {
                let msg = e.to_string();
                tracing::error!("Failed to load movie details: {}", msg);
                self.status = LoadingStatus::Failed(msg);
                Vec::new()
            }
        }
    }
}

/// Fetch by id when the request carries one, otherwise by (title, year)
/// taking the first match. Zero matches is a typed not-found error rather
/// than a blank record.
async fn fetch_movie(client: &ApiClient, request: &DetailRequest) -> Result<Movie, ApiError> {
    if let Some(ref id) = request.id {
        return client.get_by_id(request.tab, id).await;
    }

    let matches = client
        .get_by_title_and_year(request.tab, &request.title, request.year)
        .await?;

    matches
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::NotFound {
            collection: request.tab.collection().to_string(),
            title: request.title.clone(),
            year: request.year,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: Option<&str>) -> DetailRequest {
        DetailRequest {
            tab: Tab::TopRatedMovies,
            id: id.map(str::to_string),
            title: "Dune".to_string(),
            year: 2021,
        }
    }

    fn dune() -> Movie {
        Movie {
            id: None,
            title: "Dune".to_string(),
            year: 2021,
            poster: "dune.jpg".to_string(),
            genres: vec!["Sci-Fi".to_string()],
            actors: vec!["Timothée Chalamet".to_string()],
            storyline: "Spice.".to_string(),
            content_rating: Some("PG-13".to_string()),
            average_rating: Some(8.1),
            imdb_rating: Some(8.0),
            duration: Some("PT155M".to_string()),
            release_date: Some("2021-10-22".to_string()),
        }
    }

    #[test]
    fn test_success_transitions_to_loaded() {
        let mut state = DetailState::new(request(Some("42")));
        state.epoch = 1;

        let events = state.apply(Stamped::new(1, Ok(dune())));

        match &state.status {
            LoadingStatus::Loaded(movie) => assert_eq!(movie.title, "Dune"),
            other => panic!("expected Loaded, got {:?}", other),
        }
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_error_surfaces_message_verbatim() {
        let mut state = DetailState::new(request(None));
        state.epoch = 1;

        let err = ApiError::NotFound {
            collection: "top-rated-movies".to_string(),
            title: "Dune".to_string(),
            year: 2021,
        };
        let expected = err.to_string();
        state.apply(Stamped::new(1, Err(err)));

        match &state.status {
            LoadingStatus::Failed(msg) => assert_eq!(*msg, expected),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut state = DetailState::new(request(Some("42")));
        state.epoch = 2;

        state.apply(Stamped::new(1, Ok(dune())));

        assert!(state.status.is_loading());
    }

    #[test]
    fn test_request_equality_drives_refetch() {
        // Same target: no refetch. Different id, title, year, or tab: refetch.
        assert_eq!(request(Some("42")), request(Some("42")));
        assert_ne!(request(Some("42")), request(None));

        let mut other_year = request(None);
        other_year.year = 1984;
        assert_ne!(request(None), other_year);

        let mut other_tab = request(None);
        other_tab.tab = Tab::Favourites;
        assert_ne!(request(None), other_tab);
    }
}
