//! Screen modules for different views

pub mod lockout;
pub mod login;
pub mod profile;
