//! Login form screen

use loginsim_core::FormView;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Focus};
use crate::ui::components::{button::render_button, message::render_message};
use crate::ui::layout::centered_rect_fixed;

use super::lockout;

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 19;

const SPINNER: [char; 4] = ['⠋', '⠙', '⠸', '⠴'];

/// Draw the login form
pub fn draw(frame: &mut Frame, area: Rect, app: &App, form: &FormView) {
    let theme = &app.theme;

    let dialog = centered_rect_fixed(DIALOG_WIDTH, DIALOG_HEIGHT, area);

    let border = if form.locked {
        theme.danger()
    } else {
        theme.border_focused()
    };
    let block = Block::default()
        .title(" Sign In ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(border);

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .vertical_margin(1)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Button
            Constraint::Length(1), // Loading
            Constraint::Length(3), // Message
            Constraint::Length(1), // Attempts hint
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(app.form.username_widget(), chunks[0]);
    frame.render_widget(app.form.password_widget(), chunks[1]);

    render_button(
        frame,
        chunks[3],
        "Log in",
        form.submit_enabled,
        app.form.focus() == Focus::Submit,
        theme,
    );

    if form.loading {
        let frame_char = SPINNER[(app.tick % SPINNER.len() as u64) as usize];
        let loading = Paragraph::new(format!("{} Loading profile...", frame_char))
            .style(theme.info())
            .alignment(Alignment::Center);
        frame.render_widget(loading, chunks[4]);
    }

    if let (Some(message), Some(kind)) = (&form.message, form.message_kind) {
        render_message(frame, chunks[5], message, kind, theme);
    }

    if let Some(remaining) = form.attempts_remaining {
        let warning = format!(
            "⚠ {} attempt{} remaining before lockout",
            remaining,
            if remaining == 1 { "" } else { "s" }
        );
        let warning_widget = Paragraph::new(warning)
            .style(theme.warning())
            .alignment(Alignment::Center);
        frame.render_widget(warning_widget, chunks[6]);
    }

    // Countdown sits under the dialog while locked
    if form.locked {
        let banner_y = dialog.y + dialog.height;
        let banner_height = (area.y + area.height).saturating_sub(banner_y).min(4);
        if banner_height > 0 {
            let banner = Rect::new(dialog.x, banner_y, dialog.width, banner_height);
            lockout::draw_banner(frame, banner, app);
        }
    }
}
