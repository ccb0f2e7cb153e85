//! Render projection of the form state
//!
//! Front ends draw from a [`LoginView`] instead of reading the state
//! directly, so the rules for what is visible live in one place.

use crate::profile::Profile;
use crate::state::LoginState;

/// How the current message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Lockout,
}

/// Snapshot of the unauthenticated form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub username: String,
    /// Length only; the password itself is never projected
    pub password_len: usize,
    pub submit_enabled: bool,
    pub loading: bool,
    pub locked: bool,
    pub message: Option<String>,
    pub message_kind: Option<MessageKind>,
    /// Set once at least one attempt failed and the form is not locked
    pub attempts_remaining: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginView {
    Form(FormView),
    Profile(Profile),
}

impl LoginView {
    pub fn project(state: &LoginState) -> Self {
        if let Some(profile) = state.profile() {
            return LoginView::Profile(profile.clone());
        }

        let locked = state.is_locked_out();
        let loading = state.is_loading();

        let message_kind = state.error().map(|error| {
            if error.is_lockout_notice() {
                MessageKind::Lockout
            } else {
                MessageKind::Error
            }
        });

        let attempts_remaining = (!locked && state.attempts() > 0)
            .then(|| state.policy().attempts_remaining(state.attempts()));

        LoginView::Form(FormView {
            username: state.username().to_string(),
            password_len: state.password().chars().count(),
            submit_enabled: !locked && !loading,
            loading,
            locked,
            message: state.error_message(),
            message_kind,
            attempts_remaining,
        })
    }

    pub fn form(&self) -> Option<&FormView> {
        match self {
            LoginView::Form(form) => Some(form),
            LoginView::Profile(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoginMsg;

    fn state_with(username: &str, password: &str) -> LoginState {
        let mut state = LoginState::default();
        state.update(LoginMsg::UsernameChanged(username.to_string()));
        state.update(LoginMsg::PasswordChanged(password.to_string()));
        state
    }

    #[test]
    fn test_empty_form() {
        let view = LoginView::project(&LoginState::default());
        let form = view.form().unwrap();

        assert!(form.submit_enabled);
        assert!(!form.loading);
        assert!(form.message.is_none());
        assert!(form.attempts_remaining.is_none());
    }

    #[test]
    fn test_password_is_masked() {
        let view = LoginView::project(&state_with("usuario1", "ñandú"));
        let form = view.form().unwrap();

        assert_eq!(form.username, "usuario1");
        assert_eq!(form.password_len, 5);
    }

    #[test]
    fn test_failed_attempt_shows_remaining() {
        let mut state = state_with("usuario1", "nope");
        state.submit().0.unwrap_err();

        let view = LoginView::project(&state);
        let form = view.form().unwrap();

        assert_eq!(form.attempts_remaining, Some(2));
        assert_eq!(form.message.as_deref(), Some("Invalid credentials."));
        assert_eq!(form.message_kind, Some(MessageKind::Error));
    }

    #[test]
    fn test_locked_form_disables_submit() {
        let mut state = state_with("usuario1", "nope");
        for _ in 0..3 {
            state.submit().0.unwrap_err();
        }

        let view = LoginView::project(&state);
        let form = view.form().unwrap();

        assert!(form.locked);
        assert!(!form.submit_enabled);
        assert!(form.attempts_remaining.is_none());
        assert_eq!(form.message_kind, Some(MessageKind::Lockout));
    }

    #[test]
    fn test_loading_disables_submit() {
        let mut state = state_with("usuario1", "123456");
        state.submit().0.unwrap();

        let view = LoginView::project(&state);
        let form = view.form().unwrap();

        assert!(form.loading);
        assert!(!form.submit_enabled);
    }
}
