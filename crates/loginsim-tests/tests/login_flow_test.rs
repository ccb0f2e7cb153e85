//! End-to-end tests for the login form
//!
//! These drive the terminal front end the way a user would (key events in,
//! rendered buffer out) on a paused tokio clock, so the 2 s fetch, the 3 s
//! error timer and the 10 s lockout all run deterministically.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use loginsim_core::{
    FetchError, LoginConfig, LoginController, LoginError, LoginView, Profile, ProfileSource,
};
use loginsim_tui::App;

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 32)).unwrap()
}

/// Rendered buffer as plain text, one line per row
fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn fill_form(app: &mut App, username: &str, password: &str) {
    type_text(app, username);
    press(app, KeyCode::Tab);
    type_text(app, password);
}

#[tokio::test(start_paused = true)]
async fn test_successful_login_shows_profile() {
    let mut app = App::new(&LoginConfig::default());
    let mut terminal = terminal();

    app.draw(&mut terminal).unwrap();
    let initial = screen(&terminal);
    assert!(initial.contains("Sign In"));
    assert!(initial.contains("Log in"));

    fill_form(&mut app, "usuario1", "123456");
    app.draw(&mut terminal).unwrap();
    let typed = screen(&terminal);
    assert!(typed.contains("usuario1"));
    assert!(!typed.contains("123456"), "password must be masked");
    assert!(typed.contains("●●●●●●"));

    let started = tokio::time::Instant::now();
    press(&mut app, KeyCode::Enter);
    assert!(app.controller.state().is_loading());

    app.draw(&mut terminal).unwrap();
    assert!(screen(&terminal).contains("Loading profile..."));

    // A second submit while the fetch runs is ignored
    press(&mut app, KeyCode::Enter);
    assert!(app.controller.state().is_loading());
    assert!(app.controller.state().error().is_none());

    // The ignored submit must not have started a second fetch
    assert!(app.controller.step().await);
    assert!(!app.controller.try_step());
    assert!(started.elapsed() >= Duration::from_secs(2));
    assert!(app.controller.state().is_authenticated());
    assert_eq!(app.controller.state().attempts(), 0);

    app.draw(&mut terminal).unwrap();
    let profile = screen(&terminal);
    assert!(profile.contains("Welcome"));
    assert!(profile.contains("Esteban Guaña"));
    assert!(profile.contains("esteban.guana@uisek.edu.ec"));
    assert!(!profile.contains("Sign In"));
}

#[tokio::test(start_paused = true)]
async fn test_three_failures_lock_then_unlock() {
    let mut app = App::new(&LoginConfig::default());
    let mut terminal = terminal();

    fill_form(&mut app, "usuario1", "wrong");

    // ==========================================
    // First failure: inline error and attempts hint
    // ==========================================
    press(&mut app, KeyCode::Enter);
    app.draw(&mut terminal).unwrap();
    let first = screen(&terminal);
    assert!(first.contains("Invalid credentials."));
    assert!(first.contains("2 attempts remaining before lockout"));

    // ==========================================
    // Third failure locks the form
    // ==========================================
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert!(app.controller.state().is_locked_out());
    assert_eq!(app.controller.state().attempts(), 3);

    app.draw(&mut terminal).unwrap();
    let locked = screen(&terminal);
    assert!(locked.contains("Too many attempts. Locked for 10 seconds."));
    assert!(locked.contains("Time remaining: 10 seconds"));
    assert!(!locked.contains("attempts remaining"));
    assert!(!app.controller.view().form().unwrap().submit_enabled);

    // ==========================================
    // Submitting while locked only shows the blocked notice
    // ==========================================
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.controller.state().error(), Some(&LoginError::LockedOut));
    assert_eq!(app.controller.state().attempts(), 3);
    app.draw(&mut terminal).unwrap();
    assert!(screen(&terminal).contains("Access blocked. Please wait a few seconds."));

    // ==========================================
    // Wait out the lockout
    // ==========================================
    let locked_at = tokio::time::Instant::now();
    while app.controller.state().is_locked_out() {
        assert!(app.controller.step().await);
    }
    assert!(locked_at.elapsed() >= Duration::from_secs(10));
    assert_eq!(app.controller.state().attempts(), 0);
    assert!(app.controller.state().error().is_none());

    app.draw(&mut terminal).unwrap();
    let unlocked = screen(&terminal);
    assert!(!unlocked.contains("Time remaining"));
    assert!(app.controller.view().form().unwrap().submit_enabled);

    // The form still holds the last input; correct it and log in
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::BackTab);
    for _ in 0.."wrong".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "123456");
    press(&mut app, KeyCode::Enter);
    assert!(app.controller.state().is_loading());
    assert!(app.controller.step().await);
    assert!(app.controller.state().is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn test_config_file_drives_timing_and_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[credentials]
username = "admin"
password = "secret"

[profile]
name = "Ada Lovelace"
email = "ada@example.com"

[timing]
fetch_delay_ms = 500
lockout_ms = 2000

[lockout]
max_attempts = 1
"#,
    )
    .unwrap();

    let config = LoginConfig::load(&path).unwrap();
    let mut controller = LoginController::new(&config);

    controller.set_username("admin");
    controller.set_password("nope");
    assert_eq!(controller.submit(), Err(LoginError::InvalidCredentials));
    assert!(controller.state().is_locked_out());
    assert_eq!(
        controller.state().error_message().as_deref(),
        Some("Too many attempts. Locked for 2 seconds.")
    );

    let locked_at = tokio::time::Instant::now();
    while controller.state().is_locked_out() {
        assert!(controller.step().await);
    }
    let waited = locked_at.elapsed();
    assert!(waited >= Duration::from_secs(2));
    assert!(waited < Duration::from_millis(2100));

    controller.set_password("secret");
    let submitted_at = tokio::time::Instant::now();
    assert_eq!(controller.submit(), Ok(()));
    while !controller.state().is_authenticated() {
        assert!(controller.step().await);
    }
    assert!(submitted_at.elapsed() >= Duration::from_millis(500));
    assert!(submitted_at.elapsed() < Duration::from_secs(2));

    match controller.view() {
        LoginView::Profile(profile) => {
            assert_eq!(profile.name, "Ada Lovelace");
            assert_eq!(profile.email, "ada@example.com");
        }
        LoginView::Form(_) => panic!("expected the profile view"),
    }
}

struct OfflineSource;

#[async_trait]
impl ProfileSource for OfflineSource {
    async fn fetch_profile(&self, _username: &str) -> Result<Profile, FetchError> {
        tokio::time::sleep(Duration::from_secs(1)).await;
        Err(FetchError::Unavailable("offline".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_failed_fetch_returns_to_form() {
    let config = LoginConfig::default();
    let controller = LoginController::with_source(&config, Arc::new(OfflineSource));
    let mut app = App::with_controller(controller);
    let mut terminal = terminal();

    fill_form(&mut app, "usuario1", "123456");
    press(&mut app, KeyCode::Enter);
    assert!(app.controller.state().is_loading());

    assert!(app.controller.step().await);
    assert!(!app.controller.state().is_loading());
    assert!(!app.controller.state().is_authenticated());
    assert!(matches!(
        app.controller.state().error(),
        Some(LoginError::Fetch(_))
    ));

    app.draw(&mut terminal).unwrap();
    let form = screen(&terminal);
    assert!(form.contains("Sign In"));
    assert!(form.contains("Failed to load profile data."));

    // The error clears on its own
    assert!(app.controller.step().await);
    assert!(app.controller.state().error().is_none());
}
