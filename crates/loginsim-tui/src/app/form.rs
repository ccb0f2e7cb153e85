//! Form inputs and focus

use crossterm::event::KeyEvent;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::ui::Theme;

/// Character shown in place of each password character
pub const MASK_CHAR: char = '●';

/// Focusable elements, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Username,
    Password,
    Submit,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Username => Focus::Password,
            Focus::Password => Focus::Submit,
            Focus::Submit => Focus::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Username => Focus::Submit,
            Focus::Password => Focus::Username,
            Focus::Submit => Focus::Password,
        }
    }
}

/// Which field an edit landed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Username(String),
    Password(String),
}

/// The two text inputs of the login form
pub struct FormInputs {
    username: TextArea<'static>,
    password: TextArea<'static>,
    focus: Focus,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self::new()
    }
}

impl FormInputs {
    pub fn new() -> Self {
        let mut username = TextArea::default();
        username.set_placeholder_text("Username");
        username.set_cursor_line_style(Style::default());

        let mut password = TextArea::default();
        password.set_placeholder_text("Password");
        password.set_mask_char(MASK_CHAR);
        password.set_cursor_line_style(Style::default());

        Self {
            username,
            password,
            focus: Focus::default(),
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn username(&self) -> String {
        self.username.lines().concat()
    }

    pub fn password(&self) -> String {
        self.password.lines().concat()
    }

    /// Feed a key to the focused text field
    ///
    /// Returns the new field value when the key changed it.
    pub fn input(&mut self, key: KeyEvent) -> Option<FieldEdit> {
        match self.focus {
            Focus::Username => self
                .username
                .input(key)
                .then(|| FieldEdit::Username(self.username())),
            Focus::Password => self
                .password
                .input(key)
                .then(|| FieldEdit::Password(self.password())),
            Focus::Submit => None,
        }
    }

    /// Apply focus-dependent styling before drawing
    pub fn style(&mut self, theme: &Theme, enabled: bool) {
        let focus = self.focus;
        for (field, title, focused) in [
            (&mut self.username, " Username ", focus == Focus::Username),
            (&mut self.password, " Password ", focus == Focus::Password),
        ] {
            let border = if focused && enabled {
                theme.border_focused()
            } else {
                theme.border()
            };
            field.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(title),
            );
            field.set_style(theme.input(focused));
            field.set_placeholder_style(theme.text_muted());
            field.set_cursor_style(if focused {
                theme.cursor()
            } else {
                Style::default()
            });
        }
    }

    pub fn username_widget(&self) -> &TextArea<'static> {
        &self.username
    }

    pub fn password_widget(&self) -> &TextArea<'static> {
        &self.password
    }
}
