//! Declarative view: every field change is reduced into a fresh view model
//! and the whole model is rendered from scratch.

use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::{clamp_selection, move_selection, Alert, SearchView, ViewBinding};
use crate::config::ViewKind;
use crate::data::Item;
use crate::search::{SearchEvent, SearchFailure};
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchViewModel {
    pub items: Vec<Item>,
    pub selected: Option<usize>,
    pub alert: Option<Alert>,
    /// Bumped on every field change.
    pub revision: u64,
}

impl UiState for SearchViewModel {}

#[derive(Debug, Clone)]
pub enum SearchViewIntent {
    ItemsChanged(Vec<Item>),
    ErrorChanged(Option<SearchFailure>),
    MoveSelection(isize),
    DismissAlert,
}

impl Intent for SearchViewIntent {}

pub struct SearchViewReducer;

impl Reducer for SearchViewReducer {
    type State = SearchViewModel;
    type Intent = SearchViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchViewIntent::ItemsChanged(items) => SearchViewModel {
                selected: clamp_selection(state.selected, items.len()),
                items,
                revision: state.revision + 1,
                ..state
            },
            SearchViewIntent::ErrorChanged(error) => match error {
                Some(failure) => SearchViewModel {
                    alert: Some(Alert::from_failure(&failure)),
                    revision: state.revision + 1,
                    ..state
                },
                None => SearchViewModel {
                    revision: state.revision + 1,
                    ..state
                },
            },
            SearchViewIntent::MoveSelection(delta) => SearchViewModel {
                selected: move_selection(state.selected, delta, state.items.len()),
                ..state
            },
            SearchViewIntent::DismissAlert => SearchViewModel {
                alert: None,
                ..state
            },
        }
    }
}

pub struct ReactiveView {
    binding: ViewBinding,
    model: Arc<Mutex<SearchViewModel>>,
}

impl ReactiveView {
    pub fn new(binding: ViewBinding) -> Self {
        Self {
            binding,
            model: Arc::new(Mutex::new(SearchViewModel::default())),
        }
    }

    pub fn model(&self) -> SearchViewModel {
        self.model.lock().clone()
    }

    fn dispatch(&self, intent: SearchViewIntent) {
        dispatch(&self.model, intent);
    }
}

fn dispatch(model: &Mutex<SearchViewModel>, intent: SearchViewIntent) {
    let mut model = model.lock();
    *model = SearchViewReducer::reduce(std::mem::take(&mut *model), intent);
}

/// Lines of the result body for a model snapshot.
pub fn body_lines(model: &SearchViewModel) -> Vec<Line<'static>> {
    if model.items.is_empty() {
        return vec![Line::from(Span::styled(
            "No results",
            Style::default().fg(MUTED_TEXT),
        ))];
    }

    model
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let focused = model.selected == Some(index);
            let marker = if focused { "▸ " } else { "  " };
            let title_style = if focused {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            let mut spans = vec![
                Span::raw(marker),
                Span::styled(item.title.clone(), title_style),
            ];
            if let Some(summary) = &item.summary {
                spans.push(Span::styled(
                    format!(" · {}", summary),
                    Style::default().fg(MUTED_TEXT),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

impl SearchView for ReactiveView {
    fn kind(&self) -> ViewKind {
        ViewKind::Reactive
    }

    fn appear(&mut self) {
        self.binding.subscriptions.clear();

        let model = Arc::clone(&self.model);
        let items = self.binding.items.subscribe(move |items: &Vec<Item>| {
            dispatch(&model, SearchViewIntent::ItemsChanged(items.clone()));
        });
        self.binding.subscriptions.insert(items);

        let model = Arc::clone(&self.model);
        let error = self.binding.error.subscribe(move |error: &Option<SearchFailure>| {
            dispatch(&model, SearchViewIntent::ErrorChanged(error.clone()));
        });
        self.binding.subscriptions.insert(error);

        self.binding.send(SearchEvent::ScreenLoaded);
    }

    fn move_selection(&mut self, delta: isize) {
        self.dispatch(SearchViewIntent::MoveSelection(delta));
    }

    fn select_current(&mut self) -> bool {
        let model = self.model();
        self.binding.select(&model.items, model.selected)
    }

    fn refresh(&self) {
        self.binding.send(SearchEvent::RefreshRequested);
    }

    fn submit_keyword(&self, keyword: String) {
        self.binding.send(SearchEvent::SearchSubmitted(keyword));
    }

    fn alert(&self) -> Option<Alert> {
        self.model.lock().alert.clone()
    }

    fn dismiss_alert(&mut self) {
        self.dispatch(SearchViewIntent::DismissAlert);
    }

    fn rows(&self) -> Vec<Item> {
        self.model.lock().items.clone()
    }

    fn selected(&self) -> Option<usize> {
        self.model.lock().selected
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let model = self.model();
        let paragraph = Paragraph::new(body_lines(&model))
            .block(
                Block::default()
                    .title(format!(" Results ({}) ", model.items.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(ids: &[&str]) -> SearchViewModel {
        let items = ids.iter().map(|id| Item::new(*id, *id)).collect();
        SearchViewReducer::reduce(
            SearchViewModel::default(),
            SearchViewIntent::ItemsChanged(items),
        )
    }

    #[test]
    fn items_change_selects_first_row() {
        let model = loaded(&["a", "b"]);
        assert_eq!(model.selected, Some(0));
        assert_eq!(model.revision, 1);
    }

    #[test]
    fn empty_items_clear_selection() {
        let model = SearchViewReducer::reduce(
            loaded(&["a"]),
            SearchViewIntent::ItemsChanged(Vec::new()),
        );
        assert_eq!(model.selected, None);
    }

    #[test]
    fn error_shows_alert_and_keeps_items() {
        let model = SearchViewReducer::reduce(
            loaded(&["a"]),
            SearchViewIntent::ErrorChanged(Some(SearchFailure::Timeout)),
        );
        assert_eq!(model.items.len(), 1);
        assert_eq!(
            model.alert,
            Some(Alert::from_failure(&SearchFailure::Timeout))
        );
    }

    #[test]
    fn dismissing_alert_leaves_everything_else() {
        let with_alert = SearchViewReducer::reduce(
            loaded(&["a"]),
            SearchViewIntent::ErrorChanged(Some(SearchFailure::Timeout)),
        );
        let dismissed =
            SearchViewReducer::reduce(with_alert.clone(), SearchViewIntent::DismissAlert);
        assert_eq!(dismissed.alert, None);
        assert_eq!(dismissed.items, with_alert.items);
        assert_eq!(dismissed.revision, with_alert.revision);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let model = SearchViewReducer::reduce(loaded(&["a", "b"]), SearchViewIntent::MoveSelection(5));
        assert_eq!(model.selected, Some(1));
    }

    #[test]
    fn empty_model_renders_placeholder() {
        let lines = body_lines(&SearchViewModel::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), "No results");
    }
}
