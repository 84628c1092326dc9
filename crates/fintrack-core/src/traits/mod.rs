//! Traits implemented by provider crates.

pub mod mailer;

pub use mailer::Mailer;
