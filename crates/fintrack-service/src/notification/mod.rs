//! Notification history and the budget-threshold sweep.

pub mod service;
pub mod sweep;

pub use service::NotificationService;
pub use sweep::{SweepOutcome, SweepService};
