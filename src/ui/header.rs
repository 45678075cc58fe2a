use crate::config::ViewKind;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// What the header shows in its keyword slot.
pub enum KeywordSlot<'a> {
    Current(&'a str),
    Editing(&'a str),
}

pub struct Header<'a> {
    keyword: KeywordSlot<'a>,
    view: ViewKind,
}

impl<'a> Header<'a> {
    pub fn new(keyword: KeywordSlot<'a>, view: ViewKind) -> Self {
        Self { keyword, view }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(MUTED_TEXT);

        let keyword = match self.keyword {
            KeywordSlot::Current(keyword) => Span::styled(format!("\"{}\"", keyword), text_style),
            KeywordSlot::Editing(query) => Span::styled(
                format!("/{}_", query),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        };

        let line = Line::from(vec![
            Span::styled("  rxviper", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled("search ", separator_style),
            keyword,
            Span::styled("  │  ", separator_style),
            Span::styled(format!("view: {}", self.view.label()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
