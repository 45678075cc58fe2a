use std::sync::Arc;

use crate::config::ViewKind;
use crate::contracts::{ScreenHost, Wireframe};
use crate::reactive::MainHandle;
use crate::search::{Destination, SearchPresenter, SearchRouter, SearchUseCase};
use crate::ui::screen::SearchScreen;
use crate::ui::view::build_view;

/// A fully wired search screen.
///
/// Assembly order: router, presenter (given the router's intent sender),
/// view and screen (given the presenter), then the screen is attached to the
/// router as a weak back-reference.
pub struct SearchModule {
    screen: Arc<SearchScreen>,
    presenter: SearchPresenter,
    router: SearchRouter,
}

impl SearchModule {
    pub fn assemble(
        interactor: Arc<SearchUseCase>,
        main: MainHandle,
        keyword: impl Into<String>,
        view: ViewKind,
    ) -> Self {
        let router = SearchRouter::new();
        let presenter = SearchPresenter::new(interactor, router.intents(), main, keyword);
        let screen = Arc::new(SearchScreen::new(build_view(view, &presenter)));

        let host: Arc<dyn ScreenHost<Destination>> = screen.clone();
        router.attach(Arc::downgrade(&host));

        tracing::debug!(view = view.label(), "search module assembled");
        Self {
            screen,
            presenter,
            router,
        }
    }

    pub fn screen(&self) -> &Arc<SearchScreen> {
        &self.screen
    }

    pub fn presenter(&self) -> &SearchPresenter {
        &self.presenter
    }

    pub fn router(&self) -> &SearchRouter {
        &self.router
    }

    /// Make the screen visible: the view subscribes and requests a load.
    pub fn appear(&self) {
        self.screen.with_view(|view| view.appear());
    }

    /// Replace the attached view with another variant over the same
    /// presenter. The new view becomes visible immediately.
    pub fn switch_view(&self, kind: ViewKind) {
        self.screen.replace_view(build_view(kind, &self.presenter));
        self.appear();
    }

    /// Tear the screen down, releasing every subscription.
    pub fn dismiss(self) {
        let SearchModule {
            screen,
            presenter,
            router,
        } = self;
        drop(screen);
        drop(presenter);
        drop(router);
        tracing::debug!("search module dismissed");
    }
}
