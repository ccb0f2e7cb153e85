//! Text progress bar

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::ui::Theme;

/// Build the bar text for a ratio in [0, 1]
pub fn bar(ratio: f64, width: u16) -> (String, String) {
    let inner = width.saturating_sub(2) as usize;
    let filled = ((ratio.clamp(0.0, 1.0) * inner as f64).round() as usize).min(inner);
    ("█".repeat(filled), "░".repeat(inner - filled))
}

/// Render a bracketed progress bar filling `area` horizontally
pub fn render_progress_bar(frame: &mut Frame, area: Rect, ratio: f64, theme: &Theme) {
    let (filled, empty) = bar(ratio, area.width);

    let line = Line::from(vec![
        Span::styled("[", theme.text_muted()),
        Span::styled(filled, theme.progress_filled()),
        Span::styled(empty, theme.progress_empty()),
        Span::styled("]", theme.text_muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
