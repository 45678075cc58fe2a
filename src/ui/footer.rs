use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const NORMAL_HINTS: &str =
    " ↑↓: Move │ Enter: Open │ r: Refresh │ /: Search │ Tab: Switch view │ Esc: Back │ q: Quit";
const EDITING_HINTS: &str = " Enter: Search │ Esc: Cancel";

pub struct Footer {
    editing: bool,
}

impl Footer {
    pub fn new(editing: bool) -> Self {
        Self { editing }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = if self.editing {
            EDITING_HINTS
        } else {
            NORMAL_HINTS
        };
        let version = format!("v{} ", VERSION);

        // Padding is measured in chars: the hints contain multi-byte glyphs.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
