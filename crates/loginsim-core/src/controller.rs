//! Login form controller
//!
//! Owns the [`LoginState`] and executes the effects its reducer returns:
//! timers and the profile fetch run as tokio tasks that report back over an
//! unbounded channel, so every state change goes through [`LoginController::dispatch`]
//! on the caller's task.
//!
//! The controller must be used from inside a tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::LoginConfig;
use crate::effects::{LoginEffect, TimerKind};
use crate::error::LoginError;
use crate::profile::{ProfileSource, SimulatedProfileSource};
use crate::state::{LoginMsg, LoginState};
use crate::view::LoginView;

pub struct LoginController {
    state: LoginState,
    source: Arc<dyn ProfileSource>,

    sender: mpsc::UnboundedSender<LoginMsg>,
    receiver: mpsc::UnboundedReceiver<LoginMsg>,

    error_timer: Option<JoinHandle<()>>,
    unlock_timer: Option<JoinHandle<()>>,
    unlock_deadline: Option<Instant>,
}

impl LoginController {
    /// Controller backed by the simulated profile lookup
    pub fn new(config: &LoginConfig) -> Self {
        let source = SimulatedProfileSource::new(config.profile.clone(), config.timing.fetch_delay());
        Self::with_source(config, Arc::new(source))
    }

    /// Controller with an injected profile source
    pub fn with_source(config: &LoginConfig, source: Arc<dyn ProfileSource>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            state: LoginState::from_config(config),
            source,
            sender,
            receiver,
            error_timer: None,
            unlock_timer: None,
            unlock_deadline: None,
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn view(&self) -> LoginView {
        LoginView::project(&self.state)
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.dispatch(LoginMsg::UsernameChanged(username.into()));
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.dispatch(LoginMsg::PasswordChanged(password.into()));
    }

    /// Submit the current input and report what this submit produced
    pub fn submit(&mut self) -> Result<(), LoginError> {
        let (result, effects) = self.state.submit();
        self.run_effects(effects);
        result
    }

    /// Run the reducer and execute its effects
    pub fn dispatch(&mut self, msg: LoginMsg) {
        let effects = self.state.update(msg);
        self.run_effects(effects);
    }

    /// Wait for the next timer or fetch completion without applying it
    pub async fn next_message(&mut self) -> Option<LoginMsg> {
        self.receiver.recv().await
    }

    /// Wait for the next timer or fetch completion and apply it
    pub async fn step(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Apply one already delivered message, if any
    pub fn try_step(&mut self) -> bool {
        match self.receiver.try_recv() {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(_) => false,
        }
    }

    /// Time left before submit is re-enabled
    pub fn lockout_remaining(&self) -> Option<Duration> {
        self.unlock_deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    fn run_effects(&mut self, effects: Vec<LoginEffect>) {
        for effect in effects {
            self.run_effect(effect);
        }

        if !self.state.is_locked_out() {
            self.unlock_deadline = None;
        }
    }

    fn run_effect(&mut self, effect: LoginEffect) {
        match effect {
            LoginEffect::ScheduleTimer {
                kind,
                generation,
                after,
            } => {
                let msg = match kind {
                    TimerKind::ErrorClear => LoginMsg::ErrorExpired { generation },
                    TimerKind::Unlock => LoginMsg::LockoutExpired { generation },
                };
                let sender = self.sender.clone();
                let handle = tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = sender.send(msg);
                });

                if let Some(previous) = self.timer_slot(kind).replace(handle) {
                    previous.abort();
                }
                if kind == TimerKind::Unlock {
                    self.unlock_deadline = Some(Instant::now() + after);
                }
                tracing::trace!(?kind, generation, ?after, "Timer scheduled");
            }
            LoginEffect::CancelTimer(kind) => {
                if let Some(handle) = self.timer_slot(kind).take() {
                    handle.abort();
                    tracing::trace!(?kind, "Timer cancelled");
                }
                if kind == TimerKind::Unlock {
                    self.unlock_deadline = None;
                }
            }
            LoginEffect::FetchProfile { request, username } => {
                let source = Arc::clone(&self.source);
                let sender = self.sender.clone();

                // Not tracked: the fetch is never cancelled, and a result that
                // arrives after the controller is gone is dropped with the channel.
                tokio::spawn(async move {
                    let result = source.fetch_profile(&username).await;
                    let _ = sender.send(LoginMsg::ProfileLoaded { request, result });
                });
            }
        }
    }

    fn timer_slot(&mut self, kind: TimerKind) -> &mut Option<JoinHandle<()>> {
        match kind {
            TimerKind::ErrorClear => &mut self.error_timer,
            TimerKind::Unlock => &mut self.unlock_timer,
        }
    }
}

impl Drop for LoginController {
    fn drop(&mut self) {
        for handle in [self.error_timer.take(), self.unlock_timer.take()]
            .into_iter()
            .flatten()
        {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::profile::Profile;
    use crate::state::Phase;
    use async_trait::async_trait;

    struct FailingSource;

    #[async_trait]
    impl ProfileSource for FailingSource {
        async fn fetch_profile(&self, _username: &str) -> Result<Profile, FetchError> {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Err(FetchError::Unavailable("maintenance".to_string()))
        }
    }

    fn controller() -> LoginController {
        LoginController::new(&LoginConfig::default())
    }

    fn fill(controller: &mut LoginController, username: &str, password: &str) {
        controller.set_username(username);
        controller.set_password(password);
    }

    fn assert_near(actual: Duration, expected: Duration) {
        let diff = if actual > expected {
            actual - expected
        } else {
            expected - actual
        };
        assert!(
            diff <= Duration::from_millis(5),
            "expected ~{:?}, got {:?}",
            expected,
            actual
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_login_loads_profile_after_delay() {
        let mut controller = controller();
        fill(&mut controller, "usuario1", "123456");
        let start = Instant::now();

        assert!(controller.submit().is_ok());
        assert!(controller.state().is_loading());

        assert!(controller.step().await);

        assert_near(start.elapsed(), Duration::from_secs(2));
        assert!(!controller.state().is_loading());
        assert_eq!(
            controller.state().profile(),
            Some(&Profile::new("Esteban Guaña", "esteban.guana@uisek.edu.ec"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_clears_after_three_seconds() {
        let mut controller = controller();
        fill(&mut controller, "usuario1", "wrong");
        let start = Instant::now();

        assert_eq!(controller.submit(), Err(LoginError::InvalidCredentials));
        assert!(controller.state().error().is_some());

        controller.step().await;

        assert_near(start.elapsed(), Duration::from_secs(3));
        assert!(controller.state().error().is_none());
        assert_eq!(controller.state().attempts(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_error_restarts_clear_timer() {
        let mut controller = controller();
        fill(&mut controller, "usuario1", "wrong");
        let start = Instant::now();

        controller.submit().unwrap_err();
        tokio::time::sleep(Duration::from_secs(2)).await;
        controller.set_password("");
        assert_eq!(controller.submit(), Err(LoginError::Validation));

        controller.step().await;

        assert_near(start.elapsed(), Duration::from_secs(5));
        assert!(controller.state().error().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_lockout_lifts_after_ten_seconds() {
        let mut controller = controller();
        fill(&mut controller, "usuario1", "wrong");
        let start = Instant::now();

        for _ in 0..3 {
            assert_eq!(controller.submit(), Err(LoginError::InvalidCredentials));
        }
        assert!(controller.state().is_locked_out());
        assert_eq!(controller.lockout_remaining(), Some(Duration::from_secs(10)));

        // Fourth attempt only reproduces the lockout error
        assert_eq!(controller.submit(), Err(LoginError::LockedOut));
        assert_eq!(controller.state().attempts(), 3);

        // Lockout message clears on its own before the lock lifts
        controller.step().await;
        assert_near(start.elapsed(), Duration::from_secs(3));
        assert!(controller.state().is_locked_out());
        assert!(controller.state().error().is_none());
        assert_near(
            controller.lockout_remaining().unwrap(),
            Duration::from_secs(7),
        );

        controller.step().await;
        assert_near(start.elapsed(), Duration::from_secs(10));
        assert!(!controller.state().is_locked_out());
        assert_eq!(controller.state().attempts(), 0);
        assert!(controller.state().error().is_none());
        assert_eq!(controller.state().phase(), &Phase::Editing);
        assert!(controller.lockout_remaining().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_resets_attempts() {
        let mut controller = controller();
        fill(&mut controller, "usuario1", "wrong");
        controller.submit().unwrap_err();
        controller.submit().unwrap_err();
        assert_eq!(controller.state().attempts(), 2);

        controller.set_password("123456");
        controller.submit().unwrap();

        while !controller.state().is_authenticated() {
            assert!(controller.step().await);
        }
        assert_eq!(controller.state().attempts(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_failure_surfaces_error() {
        let config = LoginConfig::default();
        let mut controller = LoginController::with_source(&config, Arc::new(FailingSource));
        fill(&mut controller, "usuario1", "123456");

        controller.submit().unwrap();
        controller.step().await;

        assert_eq!(controller.state().phase(), &Phase::Editing);
        assert_eq!(
            controller.state().error(),
            Some(&LoginError::Fetch(FetchError::Unavailable(
                "maintenance".to_string()
            )))
        );
        assert_eq!(
            controller.state().error_message().as_deref(),
            Some("Failed to load profile data.")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_step_without_messages() {
        let mut controller = controller();
        assert!(!controller.try_step());

        fill(&mut controller, "usuario1", "wrong");
        controller.submit().unwrap_err();
        tokio::time::sleep(Duration::from_secs(4)).await;

        assert!(controller.try_step());
        assert!(controller.state().error().is_none());
        assert!(!controller.try_step());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_during_fetch_is_harmless() {
        let mut controller = controller();
        fill(&mut controller, "usuario1", "123456");
        controller.submit().unwrap();
        drop(controller);

        tokio::time::sleep(Duration::from_secs(3)).await;
    }
}
