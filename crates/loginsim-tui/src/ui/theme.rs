//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// Loginsim color palette
pub struct Theme {
    // Primary branding colors
    pub brand: Color,
    pub brand_dark: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub disabled: Color,
    pub field_bg: Color,

    // Progress bar colors
    pub progress_filled: Color,
    pub progress_empty: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Primary branding - blue accent for buttons and focus
            brand: Color::Rgb(59, 130, 246),    // #3B82F6
            brand_dark: Color::Rgb(37, 99, 235), // #2563EB

            // Status colors
            success: Color::Rgb(76, 175, 80), // #4CAF50 - Green
            warning: Color::Rgb(202, 138, 4), // #CA8A04 - Yellow
            danger: Color::Rgb(239, 68, 68),  // #EF4444 - Red
            info: Color::Rgb(33, 150, 243),   // #2196F3 - Blue

            // UI elements
            border: Color::Rgb(66, 66, 66),            // #424242
            border_focused: Color::Rgb(59, 130, 246),  // #3B82F6
            text_primary: Color::Rgb(250, 250, 250),   // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),     // #757575
            disabled: Color::Rgb(156, 163, 175),       // #9CA3AF
            field_bg: Color::Rgb(33, 33, 33),          // #212121

            // Progress bars
            progress_filled: Color::Rgb(239, 68, 68),
            progress_empty: Color::Rgb(66, 66, 66),
        }
    }
}

impl Theme {
    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get label style (bold key in key/value lines)
    pub fn label(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Get success style
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Get warning style
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Get danger style
    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Get info style
    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Get input field style
    pub fn input(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.text_primary).bg(self.field_bg)
        } else {
            Style::default().fg(self.text_secondary).bg(self.field_bg)
        }
    }

    /// Get text cursor style
    pub fn cursor(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Get submit button style
    pub fn button(&self, enabled: bool, focused: bool) -> Style {
        match (enabled, focused) {
            (false, _) => Style::default().fg(self.text_primary).bg(self.disabled),
            (true, true) => Style::default()
                .fg(self.text_primary)
                .bg(self.brand_dark)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(self.text_primary).bg(self.brand),
        }
    }

    /// Get filled progress style
    pub fn progress_filled(&self) -> Style {
        Style::default().fg(self.progress_filled)
    }

    /// Get empty progress style
    pub fn progress_empty(&self) -> Style {
        Style::default().fg(self.progress_empty)
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            ..Self::default()
        }
    }
}
