use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::contracts::{ScreenHost, Wireframe};
use crate::reactive::{EventBus, EventSender, Subscription};
use crate::search::NavigationIntent;
use crate::ui::detail::DetailScreen;

/// Screen the router pushes on top of the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Detail(DetailScreen),
}

impl Destination {
    pub fn title(&self) -> &str {
        match self {
            Destination::Detail(detail) => detail.title(),
        }
    }
}

type HostSlot = Arc<Mutex<Option<Weak<dyn ScreenHost<Destination>>>>>;

/// Router of the search module.
///
/// Listens on its own intent bus for its whole lifetime. The host screen is
/// held weakly and attached after construction.
pub struct SearchRouter {
    intents: EventBus<NavigationIntent>,
    host: HostSlot,
    _subscription: Subscription,
}

impl SearchRouter {
    pub fn new() -> Self {
        let intents = EventBus::new("search-navigation");
        let host: HostSlot = Arc::new(Mutex::new(None));

        let slot = Arc::clone(&host);
        let subscription = intents.subscribe_owned(move |intent| route(&slot, intent));

        Self {
            intents,
            host,
            _subscription: subscription,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.host
            .lock()
            .as_ref()
            .is_some_and(|host| host.strong_count() > 0)
    }
}

impl Default for SearchRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Wireframe for SearchRouter {
    type Intent = NavigationIntent;
    type Destination = Destination;

    fn intents(&self) -> EventSender<NavigationIntent> {
        self.intents.sender()
    }

    fn attach(&self, host: Weak<dyn ScreenHost<Destination>>) {
        *self.host.lock() = Some(host);
    }
}

fn destination_for(intent: NavigationIntent) -> Destination {
    match intent {
        NavigationIntent::ShowDetail(item) => Destination::Detail(DetailScreen::new(item)),
    }
}

fn route(slot: &HostSlot, intent: NavigationIntent) {
    let host = slot.lock().as_ref().and_then(Weak::upgrade);
    match host {
        Some(host) => {
            let destination = destination_for(intent);
            tracing::debug!(destination = destination.title(), "navigating");
            host.present(destination);
        }
        None => tracing::debug!(?intent, "navigation dropped: no screen attached"),
    }
}
