//! # fintrack-entity
//!
//! Domain entity models for Fintrack. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod budget;
pub mod category;
pub mod fixed_payment;
pub mod notification;
pub mod payment;
pub mod transaction;
pub mod user;

pub use budget::Budget;
pub use category::Category;
pub use fixed_payment::FixedPayment;
pub use notification::{Notification, NotificationChannel};
pub use payment::Payment;
pub use transaction::{Transaction, TransactionKind};
pub use user::User;
