//! # fintrack-service
//!
//! Business logic services for Fintrack. The budget guard and the
//! notification sweep live here; the surrounding services orchestrate
//! repositories, auth primitives, and the mail transport.

pub mod account;
pub mod context;
pub mod notification;
pub mod transaction;

pub use context::RequestContext;
