//! Application state and event handling

mod events;
mod form;

pub use events::{Event, EventHandler};
pub use form::{FieldEdit, Focus, FormInputs, MASK_CHAR};

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use loginsim_core::{LoginConfig, LoginController, LoginError};
use ratatui::prelude::*;

use crate::ui::{self, Theme};

/// Redraw interval; drives the lockout countdown
const TICK_RATE: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Login form controller
    pub controller: LoginController,

    /// Text inputs and focus
    pub form: FormInputs,

    /// Visual theme
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter for the loading spinner
    pub tick: u64,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &LoginConfig) -> Self {
        Self::with_controller(LoginController::new(config))
    }

    pub fn with_controller(controller: LoginController) -> Self {
        Self {
            controller,
            form: FormInputs::new(),
            theme: Theme::default(),
            should_quit: false,
            tick: 0,
        }
    }

    /// Run the application main loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut events = EventHandler::new(TICK_RATE);

        while !self.should_quit {
            self.draw(terminal)?;

            tokio::select! {
                event = events.next() => match event? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Tick => self.tick = self.tick.wrapping_add(1),
                    Event::Resize(..) => {}
                    Event::Closed => self.should_quit = true,
                },
                Some(msg) = self.controller.next_message() => {
                    self.controller.dispatch(msg);
                }
            }
        }

        Ok(())
    }

    /// Render one frame
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        let enabled = self.controller.view().form().is_some_and(|f| f.submit_enabled);
        self.form.style(&self.theme, enabled);
        terminal.draw(|frame| ui::render(frame, self))?;
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global quit handler
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        // Authenticated is terminal: only quit is handled
        if self.controller.state().is_authenticated() {
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Enter => self.handle_enter(),
            _ => match self.form.input(key) {
                Some(FieldEdit::Username(value)) => self.controller.set_username(value),
                Some(FieldEdit::Password(value)) => self.controller.set_password(value),
                None => {}
            },
        }
    }

    fn handle_enter(&mut self) {
        if self.form.focus() == Focus::Username && self.form.password().is_empty() {
            self.form.focus_next();
            return;
        }

        match self.controller.submit() {
            Ok(()) => {}
            Err(LoginError::Validation) => {
                // Jump to the first empty field
                if self.form.username().is_empty() {
                    while self.form.focus() != Focus::Username {
                        self.form.focus_next();
                    }
                } else if self.form.password().is_empty() {
                    while self.form.focus() != Focus::Password {
                        self.form.focus_next();
                    }
                }
            }
            Err(e) => tracing::debug!("Submit rejected: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_updates_controller() {
        let mut app = App::new(&LoginConfig::default());

        type_text(&mut app, "usuario1");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "123");

        assert_eq!(app.controller.state().username(), "usuario1");
        assert_eq!(app.controller.state().password(), "123");
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_on_username_moves_to_password() {
        let mut app = App::new(&LoginConfig::default());
        type_text(&mut app, "usuario1");

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.form.focus(), Focus::Password);
        assert!(app.controller.state().error().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_submit_focuses_missing_field() {
        let mut app = App::new(&LoginConfig::default());
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.controller.state().error(), Some(&LoginError::Validation));
        assert_eq!(app.form.focus(), Focus::Username);
    }

    #[tokio::test(start_paused = true)]
    async fn test_escape_quits() {
        let mut app = App::new(&LoginConfig::default());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ctrl_c_quits() {
        let mut app = App::new(&LoginConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.controller.state().username(), "");
    }
}
