//! Lockout countdown shown while submit is blocked

use std::time::Duration;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::progress::render_progress_bar;

/// Format the time left the way the banner shows it
pub fn countdown_text(remaining: Duration) -> String {
    // Round up so the banner never reads 0 while still locked
    let secs = remaining.as_millis().div_ceil(1000) as u64;
    let mins = secs / 60;
    let secs = secs % 60;

    if mins > 0 {
        format!("Time remaining: {:02}:{:02}", mins, secs)
    } else if secs == 1 {
        "Time remaining: 1 second".to_string()
    } else {
        format!("Time remaining: {} seconds", secs)
    }
}

/// Draw the countdown and progress bar
pub fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let total = app.controller.state().policy().duration();
    let remaining = app.controller.lockout_remaining().unwrap_or_default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Countdown
            Constraint::Length(1), // Bar
            Constraint::Min(0),
        ])
        .split(area);

    let countdown = Paragraph::new(countdown_text(remaining))
        .style(theme.warning())
        .alignment(Alignment::Center);
    frame.render_widget(countdown, chunks[1]);

    let progress = if total.is_zero() {
        1.0
    } else {
        1.0 - remaining.as_secs_f64() / total.as_secs_f64()
    };
    let bar_area = Rect::new(
        chunks[2].x + 2,
        chunks[2].y,
        chunks[2].width.saturating_sub(4),
        chunks[2].height,
    );
    render_progress_bar(frame, bar_area, progress, theme);
}
