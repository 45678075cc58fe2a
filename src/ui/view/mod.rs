//! Search screen views.
//!
//! Two interchangeable front ends over the same presenter contract:
//! [`ListView`] keeps its own rows and applies keyed diffs, while
//! [`ReactiveView`] folds field changes into a view model and re-renders it
//! wholesale. Either one, on [`SearchView::appear`], subscribes to the
//! presenter's fields and sends a single `ScreenLoaded`.

mod diff;
mod list;
mod reactive;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::config::ViewKind;
use crate::data::Item;
use crate::reactive::{EventSender, Observable, SubscriptionBag};
use crate::search::{SearchEvent, SearchFailure, SearchPresenter};

pub use diff::{apply, diff, RowChange};
pub use list::ListView;
pub use reactive::{ReactiveView, SearchViewIntent, SearchViewModel, SearchViewReducer};

/// Dismissible error alert derived from a [`SearchFailure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub suggestion: String,
}

impl Alert {
    pub fn from_failure(failure: &SearchFailure) -> Self {
        Self {
            title: "Search failed".to_string(),
            message: failure.description(),
            suggestion: failure.recovery_suggestion().to_string(),
        }
    }
}

pub trait SearchView: Send {
    fn kind(&self) -> ViewKind;

    /// Subscribe to the presenter's fields and request the initial load.
    fn appear(&mut self);

    fn move_selection(&mut self, delta: isize);

    /// Send `ItemSelected` for the highlighted row. Returns `false` if
    /// nothing is highlighted.
    fn select_current(&mut self) -> bool;

    fn refresh(&self);

    fn submit_keyword(&self, keyword: String);

    fn alert(&self) -> Option<Alert>;

    /// Hide the alert. The presenter's error field is left as it is.
    fn dismiss_alert(&mut self);

    fn rows(&self) -> Vec<Item>;

    fn selected(&self) -> Option<usize>;

    fn render(&mut self, frame: &mut Frame, area: Rect);
}

pub fn build_view(kind: ViewKind, presenter: &SearchPresenter) -> Box<dyn SearchView> {
    let binding = ViewBinding::new(presenter);
    match kind {
        ViewKind::List => Box::new(ListView::new(binding)),
        ViewKind::Reactive => Box::new(ReactiveView::new(binding)),
    }
}

/// What a view holds of its presenter: the event sender, read-only fields
/// and the subscriptions it made.
pub struct ViewBinding {
    events: EventSender<SearchEvent>,
    items: Observable<Vec<Item>>,
    error: Observable<Option<SearchFailure>>,
    subscriptions: SubscriptionBag,
}

impl ViewBinding {
    pub fn new(presenter: &SearchPresenter) -> Self {
        Self {
            events: presenter.events(),
            items: presenter.items(),
            error: presenter.error(),
            subscriptions: SubscriptionBag::new(),
        }
    }

    fn send(&self, event: SearchEvent) {
        if !self.events.send(event) {
            tracing::debug!("view event dropped: presenter gone");
        }
    }

    fn select(&self, rows: &[Item], selected: Option<usize>) -> bool {
        match selected.and_then(|index| rows.get(index)) {
            Some(item) => {
                self.send(SearchEvent::ItemSelected(item.clone()));
                true
            }
            None => false,
        }
    }
}

/// Move `selected` by `delta`, clamped to `0..len`.
fn move_selection(selected: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = selected.unwrap_or(0) as isize;
    Some((current + delta).clamp(0, len as isize - 1) as usize)
}

/// Keep a selection valid after the row count changed.
fn clamp_selection(selected: Option<usize>, len: usize) -> Option<usize> {
    match (selected, len) {
        (_, 0) => None,
        (None, _) => Some(0),
        (Some(index), len) => Some(index.min(len - 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_moves_within_bounds() {
        assert_eq!(move_selection(None, 1, 0), None);
        assert_eq!(move_selection(None, 1, 3), Some(1));
        assert_eq!(move_selection(Some(2), 1, 3), Some(2));
        assert_eq!(move_selection(Some(0), -1, 3), Some(0));
    }

    #[test]
    fn selection_is_clamped_when_rows_shrink() {
        assert_eq!(clamp_selection(Some(5), 2), Some(1));
        assert_eq!(clamp_selection(None, 2), Some(0));
        assert_eq!(clamp_selection(Some(0), 0), None);
    }

    #[test]
    fn alert_uses_failure_text() {
        let alert = Alert::from_failure(&SearchFailure::ConnectionError);
        assert_eq!(alert.message, "Could not connect to the server");
        assert_eq!(
            alert.suggestion,
            "Check your network connection and refresh."
        );
    }
}
