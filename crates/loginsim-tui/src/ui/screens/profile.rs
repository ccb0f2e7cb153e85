//! Profile screen shown after a successful login

use loginsim_core::Profile;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::app::App;
use crate::ui::layout::centered_rect_fixed;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, profile: &Profile) {
    let theme = &app.theme;

    let dialog = centered_rect_fixed(48, 9, area);

    let block = Block::default()
        .title(" ✔ Welcome ")
        .title_style(theme.success())
        .borders(Borders::ALL)
        .border_style(theme.success())
        .padding(Padding::horizontal(2));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Name:  ", theme.label()),
            Span::styled(profile.name.as_str(), theme.text()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Email: ", theme.label()),
            Span::styled(profile.email.as_str(), theme.text()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Signed in", theme.text_muted())),
    ];

    let content = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(content, dialog);
}
