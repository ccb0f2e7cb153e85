//! Brute-force protection through a fixed lockout window

use std::time::Duration;

/// Default number of failed attempts before the form locks
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default lockout window
pub const DEFAULT_LOCKOUT: Duration = Duration::from_secs(10);

/// Lockout policy for failed login attempts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockoutPolicy {
    /// Failed attempts that trigger the lockout
    max_attempts: u32,
    /// How long submit stays blocked
    duration: Duration,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            duration: DEFAULT_LOCKOUT,
        }
    }
}

impl LockoutPolicy {
    /// Create a custom lockout policy
    pub fn new(max_attempts: u32, duration: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            duration,
        }
    }

    /// Get the maximum attempts before lockout
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Get the lockout window
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Check if this many failures should lock the form
    pub fn should_lock(&self, failed_attempts: u32) -> bool {
        failed_attempts >= self.max_attempts
    }

    /// Attempts left before the form locks
    pub fn attempts_remaining(&self, failed_attempts: u32) -> u32 {
        self.max_attempts.saturating_sub(failed_attempts)
    }

    /// Get a human-readable description of the lockout
    pub fn description(&self) -> String {
        describe_duration(&self.duration)
    }
}

/// Format a duration the way lockout messages show it
///
/// Uses the largest unit that divides the duration exactly, otherwise whole
/// seconds rounded up, so the message never understates the wait.
pub fn describe_duration(duration: &Duration) -> String {
    let secs = duration.as_millis().div_ceil(1000) as u64;
    let exact_secs = duration.subsec_nanos() == 0;

    let (value, unit) = if exact_secs && secs >= 3600 && secs % 3600 == 0 {
        (secs / 3600, "hour")
    } else if exact_secs && secs >= 60 && secs % 60 == 0 {
        (secs / 60, "minute")
    } else {
        (secs, "second")
    };

    if value == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", value, unit)
    }
}
