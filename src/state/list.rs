//! List view state: fetch-and-display for one catalog tab, remote search,
//! and favourites mutations.

use eframe::egui;
use tokio::task::JoinHandle;

use crate::api::{ApiClient, ApiError};
use crate::movie::{Movie, Tab};
use crate::notify::Notice;
use crate::state::{LoadingStatus, StateEvent};
use crate::task::{poll_task, PollResult, Stamped};

pub const ADDED_TO_FAVOURITES: &str = "Successfully added to Favourite";
pub const ALREADY_IN_FAVOURITES: &str = "Already added in Favourite";
pub const REMOVED_FROM_FAVOURITES: &str = "Successfully removed from Favourite";

/// A finished list fetch: the movies (or error) plus a toast to emit once
/// the list has been applied. The toast rides along so removal feedback can
/// never appear before the refreshed list does.
struct ListFetch {
    result: Result<Vec<Movie>, ApiError>,
    notice: Option<Notice>,
}

/// What the add-to-favourites flow decided after the existence check.
enum AddOutcome {
    /// Inserted; the store assigned the contained record its id.
    Added(Movie),
    /// A favourite with the same (title, year) already exists.
    AlreadyPresent,
}

/// Whether a candidate may be inserted, given the favourites entries
/// matching its (title, year). Favourites are keyed by that pair, not by
/// upstream id.
fn can_insert(matching: &[Movie]) -> bool {
    matching.is_empty()
}

/// State for the movie list view of one tab.
pub struct ListState {
    pub tab: Tab,
    pub status: LoadingStatus<Vec<Movie>>,
    /// Current contents of the search box. Empty means unfiltered.
    pub search_text: String,
    /// Text the last search fetch was issued for.
    queried_text: String,
    /// Fetch generation. Bumped on every new fetch; completed tasks from
    /// an older generation are discarded.
    epoch: u64,
    fetch_task: Option<JoinHandle<Stamped<ListFetch>>>,
    add_task: Option<JoinHandle<Result<AddOutcome, ApiError>>>,
}

impl ListState {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            status: LoadingStatus::Loading,
            search_text: String::new(),
            queried_text: String::new(),
            epoch: 0,
            fetch_task: None,
            add_task: None,
        }
    }

    /// Create the state for a freshly mounted tab and start its fetch.
    pub fn open(tab: Tab, client: &ApiClient) -> Self {
        let mut state = Self::new(tab);
        state.load(client);
        state
    }

    /// Fetch the full collection for this tab.
    pub fn load(&mut self, client: &ApiClient) {
        self.status = LoadingStatus::Loading;
        let epoch = self.next_epoch();
        let client = client.clone();
        let tab = self.tab;

        self.fetch_task = Some(tokio::spawn(async move {
            let result = client.list_collection(tab).await;
            Stamped::new(epoch, ListFetch { result, notice: None })
        }));
    }

    /// Re-query the collection when the search box content changed.
    ///
    /// Fires on every keystroke with no debounce, like the original; the
    /// epoch stamp is what keeps a slow stale response from overwriting a
    /// newer one. The current list stays rendered until the response lands.
    pub fn search(&mut self, client: &ApiClient) {
        if self.search_text == self.queried_text {
            return;
        }
        self.queried_text = self.search_text.clone();

        let epoch = self.next_epoch();
        let client = client.clone();
        let tab = self.tab;
        let text = self.queried_text.clone();

        self.fetch_task = Some(tokio::spawn(async move {
            let result = client.search_collection(tab, &text).await;
            Stamped::new(epoch, ListFetch { result, notice: None })
        }));
    }

    /// Add a movie to the favourites store unless one with the same
    /// (title, year) already exists there.
    pub fn add_to_favourites(&mut self, client: &ApiClient, movie: Movie) {
        if self.add_task.is_some() {
            return; // Previous mutation still in flight
        }

        let client = client.clone();
        self.add_task = Some(tokio::spawn(async move {
            let matching = client
                .get_by_title_and_year(Tab::Favourites, &movie.title, movie.year)
                .await?;

            if can_insert(&matching) {
                let created = client.create_favourite(&movie).await?;
                Ok(AddOutcome::Added(created))
            } else {
                tracing::debug!(
                    "\"{}\" ({}) already in favourites, skipping insert",
                    movie.title,
                    movie.year
                );
                Ok(AddOutcome::AlreadyPresent)
            }
        }));
    }

    /// Delete a favourite by id, then refetch the tab. The delete completes
    /// before the refetch begins, and the success toast is emitted only
    /// after the refreshed list is applied.
    pub fn remove_from_favourites(&mut self, client: &ApiClient, id: String) {
        self.status = LoadingStatus::Loading;
        let epoch = self.next_epoch();
        let client = client.clone();
        let tab = self.tab;

        self.fetch_task = Some(tokio::spawn(async move {
            let result = async {
                client.delete_favourite(&id).await?;
                client.list_collection(tab).await
            }
            .await;

            let notice = result
                .is_ok()
                .then(|| Notice::success(REMOVED_FROM_FAVOURITES));
            Stamped::new(epoch, ListFetch { result, notice })
        }));
    }

    /// Poll in-flight tasks. Call once per frame.
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        let mut events = Vec::new();

        match poll_task(&mut self.fetch_task) {
            PollResult::Complete(Ok(fetch)) => events.extend(self.apply_fetch(fetch)),
            PollResult::Complete(Err(e)) => {
                tracing::error!("List fetch task panicked: {}", e);
                self.status = LoadingStatus::Failed(e.to_string());
            }
            PollResult::Pending => ctx.request_repaint(),
            PollResult::NoTask => {}
        }

        match poll_task(&mut self.add_task) {
            PollResult::Complete(Ok(outcome)) => events.extend(self.apply_add(outcome)),
            PollResult::Complete(Err(e)) => {
                tracing::error!("Favourites task panicked: {}", e);
                events.push(StateEvent::Notify(Notice::error(e.to_string())));
            }
            PollResult::Pending => ctx.request_repaint(),
            PollResult::NoTask => {}
        }

        events
    }

    /// Apply a finished list fetch, discarding it if the view has moved on.
    fn apply_fetch(&mut self, fetch: Stamped<ListFetch>) -> Vec<StateEvent> {
        if !fetch.is_current(self.epoch) {
            tracing::debug!(
                "Discarding stale list response (epoch {} != {})",
                fetch.epoch,
                self.epoch
            );
            return Vec::new();
        }

        let mut events = Vec::new();
        match fetch.value.result {
            Ok(movies) => {
                events.push(StateEvent::StatusMessage(format!(
                    "Fetched {} movies from {}",
                    movies.len(),
                    self.tab.collection()
                )));
                self.status = LoadingStatus::Loaded(movies);
                if let Some(notice) = fetch.value.notice {
                    events.push(StateEvent::Notify(notice));
                }
            }
            Err(e) => {
                let msg = e.to_string();
                tracing::error!("Failed to fetch {}: {}", self.tab.collection(), msg);
                events.push(StateEvent::StatusMessage(format!("Error: {}", msg)));
                self.status = LoadingStatus::Failed(msg);
            }
        }
        events
    }

    /// Turn the add-to-favourites outcome into its toast.
    fn apply_add(&mut self, outcome: Result<AddOutcome, ApiError>) -> Vec<StateEvent> {
        let notice = match outcome {
            Ok(AddOutcome::Added(movie)) => {
                tracing::info!("Favourite added: {}", movie.title);
                Notice::success(ADDED_TO_FAVOURITES)
            }
            Ok(AddOutcome::AlreadyPresent) => Notice::error(ALREADY_IN_FAVOURITES),
            Err(e) => {
                tracing::error!("Favourites mutation failed: {}", e);
                Notice::error(e.to_string())
            }
        };
        vec![StateEvent::Notify(notice)]
    }

    fn next_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoticeKind;

    fn movie(title: &str, year: i32, id: Option<&str>) -> Movie {
        Movie {
            id: id.map(str::to_string),
            title: title.to_string(),
            year,
            poster: format!("{}.jpg", title.to_lowercase()),
            genres: Vec::new(),
            actors: Vec::new(),
            storyline: String::new(),
            content_rating: None,
            average_rating: None,
            imdb_rating: None,
            duration: None,
            release_date: None,
        }
    }

    fn stamped(epoch: u64, result: Result<Vec<Movie>, ApiError>) -> Stamped<ListFetch> {
        Stamped::new(epoch, ListFetch { result, notice: None })
    }

    #[test]
    fn test_load_transitions_to_loaded() {
        let mut state = ListState::new(Tab::TopRatedMovies);
        state.epoch = 1;
        assert!(state.status.is_loading());

        let events = state.apply_fetch(stamped(1, Ok(vec![movie("Dune", 2021, None)])));

        match &state.status {
            LoadingStatus::Loaded(movies) => assert_eq!(movies.len(), 1),
            other => panic!("expected Loaded, got {:?}", other),
        }
        assert!(matches!(events[0], StateEvent::StatusMessage(_)));
    }

    #[test]
    fn test_fetch_error_surfaces_message_verbatim() {
        let mut state = ListState::new(Tab::MoviesInTheaters);
        state.epoch = 1;

        let err = ApiError::NotFound {
            collection: "movies-in-theaters".to_string(),
            title: "timeout".to_string(),
            year: 0,
        };
        let expected = err.to_string();
        state.apply_fetch(stamped(1, Err(err)));

        match &state.status {
            LoadingStatus::Failed(msg) => assert_eq!(*msg, expected),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_result_is_loaded_not_failed() {
        let mut state = ListState::new(Tab::ComingSoon);
        state.epoch = 1;

        state.apply_fetch(stamped(1, Ok(Vec::new())));

        match &state.status {
            LoadingStatus::Loaded(movies) => assert!(movies.is_empty()),
            other => panic!("expected empty Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut state = ListState::new(Tab::TopRatedMovies);
        state.epoch = 2;

        // A slow response from epoch 1 lands after a newer fetch started.
        let events = state.apply_fetch(stamped(1, Ok(vec![movie("Old", 1999, None)])));

        assert!(events.is_empty());
        assert!(state.status.is_loading());

        // The current epoch's response still applies.
        state.apply_fetch(stamped(2, Ok(vec![movie("New", 2024, None)])));
        match &state.status {
            LoadingStatus::Loaded(movies) => assert_eq!(movies[0].title, "New"),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_can_insert_keyed_by_title_and_year() {
        // Same title and year already stored: no insert, regardless of ids.
        let stored = vec![movie("Dune", 2021, Some("7"))];
        assert!(!can_insert(&stored));

        assert!(can_insert(&[]));
    }

    #[test]
    fn test_duplicate_add_reports_already_present() {
        let mut state = ListState::new(Tab::Favourites);

        let events = state.apply_add(Ok(AddOutcome::AlreadyPresent));

        match &events[0] {
            StateEvent::Notify(notice) => {
                assert_eq!(notice.kind, NoticeKind::Error);
                assert_eq!(notice.message, ALREADY_IN_FAVOURITES);
            }
            other => panic!("expected Notify, got {:?}", other),
        }
    }

    #[test]
    fn test_successful_add_reports_success() {
        let mut state = ListState::new(Tab::TopRatedMovies);

        let events = state.apply_add(Ok(AddOutcome::Added(movie("Dune", 2021, Some("12")))));

        match &events[0] {
            StateEvent::Notify(notice) => {
                assert_eq!(notice.kind, NoticeKind::Success);
                assert_eq!(notice.message, ADDED_TO_FAVOURITES);
            }
            other => panic!("expected Notify, got {:?}", other),
        }
    }

    #[test]
    fn test_removal_applies_list_before_toast() {
        let mut state = ListState::new(Tab::Favourites);
        state.epoch = 1;

        // Refreshed list after deletion of id "7" no longer contains it.
        let refreshed = vec![movie("Arrival", 2016, Some("3"))];
        let fetch = Stamped::new(
            1,
            ListFetch {
                result: Ok(refreshed),
                notice: Some(Notice::success(REMOVED_FROM_FAVOURITES)),
            },
        );

        let events = state.apply_fetch(fetch);

        match &state.status {
            LoadingStatus::Loaded(movies) => {
                assert!(movies.iter().all(|m| m.id.as_deref() != Some("7")));
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
        // Status message for the applied list first, then the toast.
        assert!(matches!(events[0], StateEvent::StatusMessage(_)));
        match &events[1] {
            StateEvent::Notify(notice) => {
                assert_eq!(notice.message, REMOVED_FROM_FAVOURITES)
            }
            other => panic!("expected Notify, got {:?}", other),
        }
    }
}
