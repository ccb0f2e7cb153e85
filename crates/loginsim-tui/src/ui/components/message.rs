//! Inline form message (errors and the lockout notice)

use loginsim_core::MessageKind;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::ui::Theme;

/// Get icon for kind
pub fn icon(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Error => "✗",
        MessageKind::Lockout => "⛔",
    }
}

/// Width of the box needed to show `message` on one line, capped at `max`
pub fn box_width(message: &str, kind: MessageKind, max: u16) -> u16 {
    let text_width = icon(kind).width() + 1 + message.width();
    // Borders plus one column of padding each side
    let wanted = text_width.saturating_add(4);
    u16::try_from(wanted).unwrap_or(u16::MAX).min(max)
}

/// Render the message centered in `area`
pub fn render_message(frame: &mut Frame, area: Rect, message: &str, kind: MessageKind, theme: &Theme) {
    let style = match kind {
        MessageKind::Error => theme.danger(),
        MessageKind::Lockout => theme.warning(),
    };

    let width = box_width(message, kind, area.width);
    let x = area.x + (area.width - width) / 2;
    let box_area = Rect::new(x, area.y, width, area.height.min(3));

    frame.render_widget(Clear, box_area);

    let block = Block::default().borders(Borders::ALL).border_style(style);
    let content = Paragraph::new(format!("{} {}", icon(kind), message))
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(content, box_area);
}
