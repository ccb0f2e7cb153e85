//! Profile data and the simulated lookup that produces it

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Display data of the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new("Esteban Guaña", "esteban.guana@uisek.edu.ec")
    }
}

/// Source of profile data once credentials check out
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Look up the profile for an already verified user
    async fn fetch_profile(&self, username: &str) -> Result<Profile, FetchError>;
}

/// Stand-in for a remote lookup: waits, then always returns the same profile
#[derive(Debug, Clone)]
pub struct SimulatedProfileSource {
    profile: Profile,
    delay: Duration,
}

impl SimulatedProfileSource {
    pub fn new(profile: Profile, delay: Duration) -> Self {
        Self { profile, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedProfileSource {
    fn default() -> Self {
        Self::new(Profile::default(), Duration::from_secs(2))
    }
}

#[async_trait]
impl ProfileSource for SimulatedProfileSource {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, FetchError> {
        tracing::debug!(username, delay_ms = self.delay.as_millis() as u64, "Simulating profile fetch");
        tokio::time::sleep(self.delay).await;
        Ok(self.profile.clone())
    }
}
