use crate::data::Item;
use crate::ui::mvi::Intent;

/// User interactions forwarded by a search view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The screen became visible.
    ScreenLoaded,
    /// Search again with the current keyword.
    RefreshRequested,
    /// Search with a new keyword.
    SearchSubmitted(String),
    /// A row was chosen.
    ItemSelected(Item),
}

impl Intent for SearchEvent {}

/// Destinations reachable from the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    ShowDetail(Item),
}

impl Intent for NavigationIntent {}
