//! Login form state and its reducer

use std::time::Duration;

use zeroize::Zeroizing;

use crate::config::{Credentials, LoginConfig};
use crate::effects::{LoginEffect, RequestId, TimerKind};
use crate::error::{FetchError, LoginError};
use crate::lockout::LockoutPolicy;
use crate::profile::Profile;

/// Where the form is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing typed yet
    #[default]
    Idle,

    /// User is filling in the form
    Editing,

    /// Credentials accepted, waiting for the profile
    Loading { request: RequestId },

    /// Profile loaded; terminal for the session
    Authenticated(Profile),

    /// Submit blocked after too many failures
    LockedOut,
}

/// Everything that can change the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMsg {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
    ProfileLoaded {
        request: RequestId,
        result: Result<Profile, FetchError>,
    },
    ErrorExpired {
        generation: u64,
    },
    LockoutExpired {
        generation: u64,
    },
}

/// Form state owned by the controller
pub struct LoginState {
    credentials: Credentials,
    policy: LockoutPolicy,
    error_clear_after: Duration,

    username: String,
    password: Zeroizing<String>,
    attempts: u32,
    phase: Phase,
    error: Option<LoginError>,

    error_generation: u64,
    lockout_generation: u64,
    next_request: RequestId,
}

impl LoginState {
    pub fn new(credentials: Credentials, policy: LockoutPolicy, error_clear_after: Duration) -> Self {
        Self {
            credentials,
            policy,
            error_clear_after,
            username: String::new(),
            password: Zeroizing::new(String::new()),
            attempts: 0,
            phase: Phase::Idle,
            error: None,
            error_generation: 0,
            lockout_generation: 0,
            next_request: RequestId::first(),
        }
    }

    pub fn from_config(config: &LoginConfig) -> Self {
        Self::new(
            config.credentials.clone(),
            config.lockout_policy(),
            config.timing.error_clear(),
        )
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Failed attempts since the last reset
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn policy(&self) -> &LockoutPolicy {
        &self.policy
    }

    pub fn error(&self) -> Option<&LoginError> {
        self.error.as_ref()
    }

    /// The single user-facing message, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn is_locked_out(&self) -> bool {
        self.phase == Phase::LockedOut
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, Phase::Authenticated(_))
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.phase {
            Phase::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    /// Apply a message and return the effects the controller must run
    pub fn update(&mut self, msg: LoginMsg) -> Vec<LoginEffect> {
        let mut effects = Vec::new();

        match msg {
            LoginMsg::UsernameChanged(value) => {
                if !self.is_authenticated() {
                    self.username = value;
                    self.mark_editing();
                }
            }
            LoginMsg::PasswordChanged(value) => {
                if !self.is_authenticated() {
                    self.password = Zeroizing::new(value);
                    self.mark_editing();
                }
            }
            LoginMsg::Submit => {
                let (_, submit_effects) = self.submit();
                effects = submit_effects;
            }
            LoginMsg::ProfileLoaded { request, result } => {
                self.profile_loaded(request, result, &mut effects);
            }
            LoginMsg::ErrorExpired { generation } => {
                if generation == self.error_generation && self.error.take().is_some() {
                    tracing::debug!(generation, "Error message expired");
                }
            }
            LoginMsg::LockoutExpired { generation } => {
                if self.is_locked_out() && generation == self.lockout_generation {
                    self.attempts = 0;
                    self.phase = Phase::Editing;
                    self.clear_error(&mut effects);
                    tracing::info!("Lockout expired, submit re-enabled");
                }
            }
        }

        effects
    }

    /// Submit the current input
    ///
    /// Returns the failure this submit produced. `Ok(())` means a profile
    /// fetch was started, or the submit was ignored because one is already
    /// in flight or the user is authenticated.
    pub fn submit(&mut self) -> (Result<(), LoginError>, Vec<LoginEffect>) {
        let mut effects = Vec::new();

        if self.is_loading() || self.is_authenticated() {
            tracing::debug!(phase = ?self.phase, "Submit ignored");
            return (Ok(()), effects);
        }

        self.clear_error(&mut effects);

        if self.username.is_empty() || self.password.is_empty() {
            self.set_error(LoginError::Validation, &mut effects);
            return (Err(LoginError::Validation), effects);
        }

        if self.is_locked_out() {
            self.set_error(LoginError::LockedOut, &mut effects);
            return (Err(LoginError::LockedOut), effects);
        }

        if !self.credentials.matches(&self.username, &self.password) {
            self.attempts += 1;
            self.phase = Phase::Editing;
            tracing::debug!(attempts = self.attempts, "Invalid credentials");

            if self.policy.should_lock(self.attempts) {
                self.lock(&mut effects);
            } else {
                self.set_error(LoginError::InvalidCredentials, &mut effects);
            }
            return (Err(LoginError::InvalidCredentials), effects);
        }

        let request = self.next_request;
        self.next_request = request.next();
        self.phase = Phase::Loading { request };
        tracing::debug!(?request, "Credentials accepted, fetching profile");

        effects.push(LoginEffect::FetchProfile {
            request,
            username: self.username.clone(),
        });
        (Ok(()), effects)
    }

    fn profile_loaded(
        &mut self,
        request: RequestId,
        result: Result<Profile, FetchError>,
        effects: &mut Vec<LoginEffect>,
    ) {
        match self.phase {
            Phase::Loading { request: active } if active == request => {}
            _ => {
                tracing::debug!(?request, "Ignoring stale profile result");
                return;
            }
        }

        // Reset on both outcomes
        self.attempts = 0;

        match result {
            Ok(profile) => {
                self.clear_error(effects);
                tracing::info!(name = %profile.name, "Authenticated");
                self.phase = Phase::Authenticated(profile);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Profile fetch failed");
                self.phase = Phase::Editing;
                self.set_error(LoginError::Fetch(e), effects);
            }
        }
    }

    fn lock(&mut self, effects: &mut Vec<LoginEffect>) {
        self.phase = Phase::LockedOut;
        self.lockout_generation += 1;

        let duration = self.policy.duration();
        self.set_error(LoginError::TooManyAttempts { duration }, effects);
        effects.push(LoginEffect::ScheduleTimer {
            kind: TimerKind::Unlock,
            generation: self.lockout_generation,
            after: duration,
        });

        tracing::info!(
            attempts = self.attempts,
            "Too many failed attempts, locked for {}",
            self.policy.description()
        );
    }

    fn set_error(&mut self, error: LoginError, effects: &mut Vec<LoginEffect>) {
        self.error = Some(error);
        self.error_generation += 1;
        effects.push(LoginEffect::ScheduleTimer {
            kind: TimerKind::ErrorClear,
            generation: self.error_generation,
            after: self.error_clear_after,
        });
    }

    fn clear_error(&mut self, effects: &mut Vec<LoginEffect>) {
        if self.error.take().is_some() {
            effects.push(LoginEffect::CancelTimer(TimerKind::ErrorClear));
        }
    }

    fn mark_editing(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Editing;
        }
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::from_config(&LoginConfig::default())
    }
}
