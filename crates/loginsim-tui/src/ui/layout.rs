//! Layout helpers for consistent screen structure

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Theme;

/// Standard screen layout with header, content, and footer
pub struct ScreenLayout {
    /// Header area
    pub header: Rect,
    /// Main content area
    pub content: Rect,
    /// Footer/help area
    pub footer: Rect,
}

impl ScreenLayout {
    /// Create a standard layout from the total area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(10),   // Content
                Constraint::Length(2), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            content: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Create a fixed-size centered box
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the header bar with the app name and a clock
pub fn render_header(frame: &mut Frame, area: Rect, status: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(10),
            Constraint::Length(8),
        ])
        .split(inner);

    let logo = Paragraph::new(" ◆ LOGINSIM").style(theme.title());
    frame.render_widget(logo, chunks[0]);

    let status_text = Paragraph::new(status)
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(status_text, chunks[1]);

    let time = chrono::Local::now().format("%H:%M").to_string();
    let time_widget = Paragraph::new(time)
        .style(theme.text_muted())
        .alignment(Alignment::Right);
    frame.render_widget(time_widget, chunks[2]);
}

/// Render a footer with help hints
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!("[{}]", key), theme.label()),
                Span::styled(format!(" {}  ", action), theme.text_muted()),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    frame.render_widget(footer, inner);
}
