use std::sync::Arc;

use crate::config::ViewKind;
use crate::search::{Destination, SearchModule};
use crate::ui::screen::SearchScreen;
use crate::ui::view::Alert;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputMode {
    Normal,
    /// Typing a new keyword in the header.
    Editing,
}

/// Top-level UI state around one search module.
pub struct App {
    module: SearchModule,
    view_kind: ViewKind,
    mode: InputMode,
    query: String,
    should_quit: bool,
}

impl App {
    pub fn new(module: SearchModule, view_kind: ViewKind) -> Self {
        Self {
            module,
            view_kind,
            mode: InputMode::Normal,
            query: String::new(),
            should_quit: false,
        }
    }

    /// Show the search screen (subscribes the view and triggers the first
    /// load).
    pub fn start(&self) {
        self.module.appear();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn keyword(&self) -> String {
        self.module.presenter().keyword()
    }

    pub fn view_kind(&self) -> ViewKind {
        self.view_kind
    }

    pub fn module(&self) -> &SearchModule {
        &self.module
    }

    pub fn screen(&self) -> &Arc<SearchScreen> {
        self.module.screen()
    }

    pub fn presented(&self) -> Option<Destination> {
        self.screen().presented()
    }

    pub fn alert(&self) -> Option<Alert> {
        self.screen().with_view(|view| view.alert())
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.presented().is_none() {
            self.screen().with_view(|view| view.move_selection(delta));
        }
    }

    pub fn open_selected(&mut self) {
        if self.presented().is_none() {
            self.screen().with_view(|view| view.select_current());
        }
    }

    pub fn refresh(&mut self) {
        self.screen().with_view(|view| view.refresh());
    }

    pub fn begin_editing(&mut self) {
        self.mode = InputMode::Editing;
        self.query.clear();
    }

    pub fn push_char(&mut self, ch: char) {
        if self.mode == InputMode::Editing {
            self.query.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        if self.mode == InputMode::Editing {
            self.query.pop();
        }
    }

    pub fn cancel_editing(&mut self) {
        self.mode = InputMode::Normal;
        self.query.clear();
    }

    pub fn submit_query(&mut self) {
        let keyword = std::mem::take(&mut self.query);
        self.mode = InputMode::Normal;
        self.screen().with_view(|view| view.submit_keyword(keyword));
    }

    /// Swap between the list and reactive views over the same presenter.
    pub fn toggle_view(&mut self) {
        self.view_kind = self.view_kind.toggled();
        self.module.switch_view(self.view_kind);
    }

    /// Esc in normal mode: close the detail screen, else the alert, else
    /// quit.
    pub fn back(&mut self) {
        if self.screen().dismiss_presented() {
            return;
        }
        if self.alert().is_some() {
            self.screen().with_view(|view| view.dismiss_alert());
            return;
        }
        self.request_quit();
    }

    /// Dismiss the search screen, releasing all of its subscriptions.
    pub fn shutdown(self) {
        self.module.dismiss();
    }
}
