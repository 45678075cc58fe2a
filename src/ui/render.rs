use crate::ui::app::{App, InputMode};
use crate::ui::footer::Footer;
use crate::ui::header::{Header, KeywordSlot};
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::view::Alert;
use crate::search::Destination;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const ALERT_WIDTH: u16 = 56;
const ALERT_HEIGHT: u16 = 8;

pub fn draw(frame: &mut Frame, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    let keyword = app.keyword();
    let slot = match app.mode() {
        InputMode::Editing => KeywordSlot::Editing(app.query()),
        InputMode::Normal => KeywordSlot::Current(&keyword),
    };
    frame.render_widget(Header::new(slot, app.view_kind()).widget(), header);

    frame.render_widget(Clear, body);
    match app.presented() {
        Some(Destination::Detail(detail)) => detail.render(frame, body),
        None => {
            app.screen().with_view(|view| view.render(frame, body));
            if let Some(alert) = app.alert() {
                render_alert(frame, &alert, body);
            }
        }
    }

    let editing = app.mode() == InputMode::Editing;
    frame.render_widget(Footer::new(editing).widget(footer), footer);
}

fn render_alert(frame: &mut Frame, alert: &Alert, area: Rect) {
    let area = centered_rect_by_size(ALERT_WIDTH, ALERT_HEIGHT, area);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", alert.message),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(Span::styled(
            format!("  {}", alert.suggestion),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Esc: dismiss   r: retry",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {} ", alert.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR)),
    );
    frame.render_widget(paragraph, area);
}
