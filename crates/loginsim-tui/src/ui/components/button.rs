//! Single-line push button

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::ui::Theme;

/// Render a button; disabled buttons keep their label but lose the accent
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    enabled: bool,
    focused: bool,
    theme: &Theme,
) {
    let text = if focused && enabled {
        format!("▶ {} ◀", label)
    } else {
        label.to_string()
    };

    let button = Paragraph::new(text)
        .style(theme.button(enabled, focused))
        .alignment(Alignment::Center);
    frame.render_widget(button, area);
}
