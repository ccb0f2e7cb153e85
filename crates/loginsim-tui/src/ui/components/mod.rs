//! Reusable UI components

pub mod button;
pub mod message;
pub mod progress;
