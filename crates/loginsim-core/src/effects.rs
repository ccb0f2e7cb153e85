//! Effects returned by the reducer for the controller to execute.
//!
//! The reducer only mutates state; scheduling timers and spawning the
//! profile fetch happen in the controller.

use std::time::Duration;

/// Opaque id matching a profile fetch to its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub(crate) fn first() -> Self {
        Self(0)
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// The two independently cancellable timer families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Clears the current error message
    ErrorClear,
    /// Ends the lockout window
    Unlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEffect {
    /// Start (or restart) a timer; replaces any pending timer of the same kind
    ScheduleTimer {
        kind: TimerKind,
        generation: u64,
        after: Duration,
    },

    /// Drop the pending timer of this kind, if any
    CancelTimer(TimerKind),

    /// Spawn the profile lookup for a verified user
    FetchProfile { request: RequestId, username: String },
}
