//! Imperative list view: owns its rows and patches them with keyed diffs.

use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use super::{clamp_selection, diff, move_selection, Alert, RowChange, SearchView, ViewBinding};
use crate::config::ViewKind;
use crate::data::Item;
use crate::search::SearchEvent;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

#[derive(Default)]
struct ListModel {
    rows: Vec<Item>,
    selected: Option<usize>,
    alert: Option<Alert>,
    last_changes: Vec<RowChange>,
}

pub struct ListView {
    binding: ViewBinding,
    model: Arc<Mutex<ListModel>>,
    list_state: ListState,
}

impl ListView {
    pub fn new(binding: ViewBinding) -> Self {
        Self {
            binding,
            model: Arc::new(Mutex::new(ListModel::default())),
            list_state: ListState::default(),
        }
    }

    /// Edits applied by the most recent `items` update.
    pub fn last_changes(&self) -> Vec<RowChange> {
        self.model.lock().last_changes.clone()
    }
}

impl SearchView for ListView {
    fn kind(&self) -> ViewKind {
        ViewKind::List
    }

    fn appear(&mut self) {
        self.binding.subscriptions.clear();

        let model = Arc::clone(&self.model);
        let items = self.binding.items.subscribe(move |items: &Vec<Item>| {
            let mut model = model.lock();
            let changes = diff::diff(&model.rows, items);
            diff::apply(&mut model.rows, &changes);
            model.selected = clamp_selection(model.selected, model.rows.len());
            tracing::trace!(changes = changes.len(), rows = model.rows.len(), "list patched");
            model.last_changes = changes;
        });
        self.binding.subscriptions.insert(items);

        let model = Arc::clone(&self.model);
        let error = self.binding.error.subscribe(move |error| {
            if let Some(failure) = error {
                model.lock().alert = Some(Alert::from_failure(failure));
            }
        });
        self.binding.subscriptions.insert(error);

        self.binding.send(SearchEvent::ScreenLoaded);
    }

    fn move_selection(&mut self, delta: isize) {
        let mut model = self.model.lock();
        model.selected = move_selection(model.selected, delta, model.rows.len());
    }

    fn select_current(&mut self) -> bool {
        let (rows, selected) = {
            let model = self.model.lock();
            (model.rows.clone(), model.selected)
        };
        self.binding.select(&rows, selected)
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
        self.model.lock().alert = None;
    }

    fn rows(&self) -> Vec<Item> {
        self.model.lock().rows.clone()
    }

    fn selected(&self) -> Option<usize> {
        self.model.lock().selected
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let model = self.model.lock();
        let rows: Vec<ListItem> = model
            .rows
            .iter()
            .map(|item| {
                let mut spans = vec![Span::styled(
                    item.title.clone(),
                    Style::default().fg(HEADER_TEXT),
                )];
                if let Some(stars) = item.stars {
                    spans.push(Span::styled(
                        format!("  ★ {}", stars),
                        Style::default().fg(MUTED_TEXT),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(rows)
            .block(
                Block::default()
                    .title(format!(" Results ({}) ", model.rows.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            )
            .highlight_style(
                Style::default()
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        self.list_state.select(model.selected);
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
