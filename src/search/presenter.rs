//! Search presenter: view events in, use-case calls and navigation out.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::data::Item;
use crate::reactive::{EventBus, EventSender, MainHandle, Observable, StateField, Subscription};
use crate::search::{NavigationIntent, SearchEvent, SearchFailure, SearchUseCase};

/// What the presenter does with one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    Ignore,
    Search(String),
    Navigate(NavigationIntent),
}

impl Reaction {
    /// Decide the reaction to `event`, updating `keyword` for submissions.
    pub fn for_event(event: SearchEvent, keyword: &mut String) -> Self {
        match event {
            SearchEvent::ScreenLoaded | SearchEvent::RefreshRequested => {
                Reaction::Search(keyword.clone())
            }
            SearchEvent::SearchSubmitted(submitted) => {
                let submitted = submitted.trim();
                if submitted.is_empty() {
                    Reaction::Ignore
                } else {
                    *keyword = submitted.to_string();
                    Reaction::Search(keyword.clone())
                }
            }
            SearchEvent::ItemSelected(item) => {
                Reaction::Navigate(NavigationIntent::ShowDetail(item))
            }
        }
    }
}

struct PresenterCore {
    items: StateField<Vec<Item>>,
    error: StateField<Option<SearchFailure>>,
    keyword: Mutex<String>,
    interactor: Arc<SearchUseCase>,
    navigation: EventSender<NavigationIntent>,
    main: MainHandle,
    last_request: AtomicU64,
}

impl PresenterCore {
    fn handle(self: &Arc<Self>, event: SearchEvent) {
        tracing::trace!(?event, "search event");
        let reaction = Reaction::for_event(event, &mut self.keyword.lock());
        match reaction {
            Reaction::Ignore => {}
            Reaction::Search(keyword) => self.search(keyword),
            Reaction::Navigate(intent) => {
                if !self.navigation.send(intent) {
                    tracing::debug!("navigation intent dropped: router gone");
                }
            }
        }
    }

    fn search(self: &Arc<Self>, keyword: String) {
        let request = self.last_request.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(request, %keyword, "search requested");

        let interactor = Arc::clone(&self.interactor);
        let presenter: Weak<Self> = Arc::downgrade(self);
        self.main.spawn_then(
            async move { interactor.execute(keyword).await },
            move |result| match presenter.upgrade() {
                Some(core) => core.complete(request, result),
                None => tracing::debug!(request, "search completed after teardown, dropped"),
            },
        );
    }

    fn complete(&self, request: u64, result: Result<Vec<Item>, SearchFailure>) {
        let latest = self.last_request.load(Ordering::SeqCst);
        if request != latest {
            // Superseded calls are not cancelled; the last completion wins.
            tracing::debug!(request, latest, "applying completion of superseded search");
        }
        match result {
            Ok(items) => self.items.set(items),
            Err(failure) => {
                tracing::warn!(request, %failure, "search failure surfaced");
                self.error.set(Some(failure));
            }
        }
    }
}

/// Presenter of the search screen.
///
/// Owns the event bus and the `items` / `error` state fields. Dropping it
/// tears the screen state down: the bus handler is unregistered, every field
/// observer is released, and completions still in flight find nothing to
/// update.
pub struct SearchPresenter {
    core: Arc<PresenterCore>,
    events: EventBus<SearchEvent>,
    _dispatch: Subscription,
}

impl SearchPresenter {
    pub fn new(
        interactor: Arc<SearchUseCase>,
        navigation: EventSender<NavigationIntent>,
        main: MainHandle,
        keyword: impl Into<String>,
    ) -> Self {
        let core = Arc::new(PresenterCore {
            items: StateField::new("items", Vec::new()),
            error: StateField::new("error", None),
            keyword: Mutex::new(keyword.into()),
            interactor,
            navigation,
            main,
            last_request: AtomicU64::new(0),
        });

        let events = EventBus::new("search-events");
        let handler_core = Arc::downgrade(&core);
        let dispatch = events.subscribe_owned(move |event| {
            if let Some(core) = handler_core.upgrade() {
                core.handle(event);
            }
        });

        Self {
            core,
            events,
            _dispatch: dispatch,
        }
    }

    /// Sending side for the attached view.
    pub fn events(&self) -> EventSender<SearchEvent> {
        self.events.sender()
    }

    pub fn items(&self) -> Observable<Vec<Item>> {
        self.core.items.observable()
    }

    pub fn error(&self) -> Observable<Option<SearchFailure>> {
        self.core.error.observable()
    }

    pub fn keyword(&self) -> String {
        self.core.keyword.lock().clone()
    }

    /// Number of searches issued so far.
    pub fn requests_issued(&self) -> u64 {
        self.core.last_request.load(Ordering::SeqCst)
    }
}

impl Drop for SearchPresenter {
    fn drop(&mut self) {
        self.core.items.release_observers();
        self.core.error.release_observers();
        tracing::debug!("search presenter torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_and_refresh_search_current_keyword() {
        let mut keyword = "rust".to_string();
        assert_eq!(
            Reaction::for_event(SearchEvent::ScreenLoaded, &mut keyword),
            Reaction::Search("rust".into())
        );
        assert_eq!(
            Reaction::for_event(SearchEvent::RefreshRequested, &mut keyword),
            Reaction::Search("rust".into())
        );
    }

    #[test]
    fn submission_replaces_keyword() {
        let mut keyword = "rust".to_string();
        let reaction =
            Reaction::for_event(SearchEvent::SearchSubmitted("  tokio ".into()), &mut keyword);
        assert_eq!(reaction, Reaction::Search("tokio".into()));
        assert_eq!(keyword, "tokio");
    }

    #[test]
    fn blank_submission_is_ignored() {
        let mut keyword = "rust".to_string();
        let reaction = Reaction::for_event(SearchEvent::SearchSubmitted("   ".into()), &mut keyword);
        assert_eq!(reaction, Reaction::Ignore);
        assert_eq!(keyword, "rust");
    }

    #[test]
    fn selection_navigates_without_searching() {
        let mut keyword = "rust".to_string();
        let item = Item::new("a1", "t1");
        assert_eq!(
            Reaction::for_event(SearchEvent::ItemSelected(item.clone()), &mut keyword),
            Reaction::Navigate(NavigationIntent::ShowDetail(item))
        );
    }
}
