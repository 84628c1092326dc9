//! # fintrack-mail
//!
//! SMTP implementation of the [`Mailer`] trait defined in
//! `fintrack-core`. Delivery failures are reported to the caller, which
//! logs and drops them; there is no retry or dead-letter mechanism.
//!
//! [`Mailer`]: fintrack_core::traits::Mailer

pub mod smtp;

pub use smtp::SmtpMailer;
