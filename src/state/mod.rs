//! View-level state machines.
//!
//! Each data-fetching view owns one state struct holding its loading
//! lifecycle and in-flight tasks. Poll methods return events instead of
//! mutating the app directly.

mod detail;
mod list;

pub use detail::{DetailRequest, DetailState};
pub use list::ListState;

use crate::notify::Notice;

/// The three-state lifecycle of a data-fetching view. Exactly one variant
/// is active at a time; a view starts in `Loading` and lands in `Loaded`
/// or `Failed` until the next fetch re-enters `Loading`.
#[derive(Debug)]
pub enum LoadingStatus<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadingStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingStatus::Loading)
    }
}

/// Events that state poll methods can return.
#[derive(Debug)]
pub enum StateEvent {
    /// Show a toast notification
    Notify(Notice),
    /// Update the status bar message
    StatusMessage(String),
}
