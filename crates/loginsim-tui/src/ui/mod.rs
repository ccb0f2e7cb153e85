//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
mod theme;

pub use theme::Theme;

use loginsim_core::{LoginView, Phase};
use ratatui::prelude::*;

use crate::app::App;
use layout::{render_footer, render_header, ScreenLayout};

/// Main render function - delegates to the form or the profile screen
pub fn render(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());

    render_header(
        frame,
        layout.header,
        phase_label(app.controller.state().phase()),
        &app.theme,
    );

    let hints: &[(&str, &str)] = match app.controller.view() {
        LoginView::Form(form) => {
            screens::login::draw(frame, layout.content, app, &form);
            &[("Tab", "Next field"), ("Enter", "Log in"), ("Esc", "Quit")]
        }
        LoginView::Profile(profile) => {
            screens::profile::draw(frame, layout.content, app, &profile);
            &[("Esc", "Quit")]
        }
    };

    render_footer(frame, layout.footer, hints, &app.theme);
}

/// Short status shown in the header
pub fn phase_label(phase: &Phase) -> &'static str {
    match phase {
        Phase::Idle => "Welcome",
        Phase::Editing => "Signing in",
        Phase::Loading { .. } => "Loading",
        Phase::Authenticated(_) => "Authenticated",
        Phase::LockedOut => "Locked",
    }
}
