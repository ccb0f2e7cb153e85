//! Loginsim TUI Library
//!
//! Terminal front end for the simulated login form: renders the controller's
//! view and turns key presses into controller calls.

pub mod app;
pub mod ui;

pub use app::App;
