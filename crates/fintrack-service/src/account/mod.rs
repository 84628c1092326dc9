//! Account operations: registration, login, profile.

pub mod service;

pub use service::{AccountService, LoginOutcome};
