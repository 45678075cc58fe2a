//! Detail screen presented by the search router.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::data::Item;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailScreen {
    item: Item,
}

impl DetailScreen {
    pub fn new(item: Item) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn title(&self) -> &str {
        &self.item.title
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let label = Style::default().fg(MUTED_TEXT);
        let value = Style::default().fg(HEADER_TEXT);

        let mut lines = vec![
            Line::from(Span::styled(
                self.item.title.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if let Some(summary) = &self.item.summary {
            lines.push(Line::from(Span::styled(summary.clone(), value)));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled("id     ", label),
            Span::styled(self.item.id.clone(), value),
        ]));
        if let Some(url) = &self.item.url {
            lines.push(Line::from(vec![
                Span::styled("url    ", label),
                Span::styled(url.clone(), value),
            ]));
        }
        if let Some(stars) = self.item.stars {
            lines.push(Line::from(vec![
                Span::styled("stars  ", label),
                Span::styled(stars.to_string(), value),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Esc: back", label)));
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let paragraph = Paragraph::new(self.lines())
            .block(
                Block::default()
                    .title(" Detail ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
