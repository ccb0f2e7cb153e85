//! Loginsim core
//!
//! The login form controller behind the `loginsim` terminal app: an explicit
//! state object with a pure reducer, the effects it asks for (error auto-clear,
//! lockout auto-unlock, simulated profile fetch), and a tokio runtime that
//! executes them.
//!
//! Nothing here authenticates anyone. The accepted credential pair and the
//! profile come from [`LoginConfig`].

pub mod config;
pub mod controller;
pub mod effects;
pub mod error;
pub mod lockout;
pub mod profile;
pub mod state;
pub mod view;

pub use config::{Credentials, LoginConfig};
pub use controller::LoginController;
pub use effects::{LoginEffect, RequestId, TimerKind};
pub use error::{ConfigError, FetchError, LoginError};
pub use lockout::LockoutPolicy;
pub use profile::{Profile, ProfileSource, SimulatedProfileSource};
pub use state::{LoginMsg, LoginState, Phase};
pub use view::{FormView, LoginView, MessageKind};
