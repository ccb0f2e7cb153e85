//! loginsim - terminal login screen
//!
//! Presents a username/password form, simulates a profile fetch on success
//! and locks the form for a while after repeated failures.

use std::fs::{self, File};
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use loginsim_core::LoginConfig;
use loginsim_tui::{ui::Theme, App};

const DEFAULT_LOG_FILTER: &str = "loginsim=info,loginsim_tui=info,loginsim_core=info";

/// Terminal login form with simulated profile fetch and lockout
#[derive(Parser, Debug)]
#[command(name = "loginsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML, or JSON with a .json extension)
    #[arg(short, long, env = "LOGINSIM_CONFIG")]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Use the high contrast theme
    #[arg(long)]
    high_contrast: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = LoginConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let log_path = cli.log_file.unwrap_or_else(default_log_path);
    init_logging(&log_path)?;

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!("loginsim v{} starting", env!("CARGO_PKG_VERSION"));

    let mut app = App::new(&config);
    if cli.high_contrast {
        app.theme = Theme::high_contrast();
    }

    let result = run_app(&mut app).await;

    if let Err(e) = &result {
        tracing::error!("Application error: {}", e);
    }

    result
}

/// Main application runner
async fn run_app(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// `<cache dir>/loginsim/loginsim.log`, or the temp dir when there is no cache dir
fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("loginsim")
        .join("loginsim.log")
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();

    Ok(())
}
