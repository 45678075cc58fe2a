//! The search screen: the attached view plus whatever the router presented
//! on top of it.

use parking_lot::Mutex;

use crate::contracts::ScreenHost;
use crate::search::Destination;
use crate::ui::view::SearchView;

pub struct SearchScreen {
    view: Mutex<Box<dyn SearchView>>,
    presented: Mutex<Option<Destination>>,
}

impl SearchScreen {
    pub fn new(view: Box<dyn SearchView>) -> Self {
        Self {
            view: Mutex::new(view),
            presented: Mutex::new(None),
        }
    }

    pub fn with_view<R>(&self, f: impl FnOnce(&mut dyn SearchView) -> R) -> R {
        let mut view = self.view.lock();
        f(view.as_mut())
    }

    /// Swap the view variant. The old view and its subscriptions are
    /// dropped.
    pub fn replace_view(&self, view: Box<dyn SearchView>) {
        let old = std::mem::replace(&mut *self.view.lock(), view);
        tracing::debug!(
            from = old.kind().label(),
            to = self.with_view(|v| v.kind().label()),
            "view replaced"
        );
    }

    pub fn presented(&self) -> Option<Destination> {
        self.presented.lock().clone()
    }

    /// Pop the presented destination. Returns `false` if there was none.
    pub fn dismiss_presented(&self) -> bool {
        self.presented.lock().take().is_some()
    }
}

impl ScreenHost<Destination> for SearchScreen {
    fn present(&self, destination: Destination) {
        *self.presented.lock() = Some(destination);
    }
}
