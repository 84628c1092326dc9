//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod budget;
pub mod category;
pub mod fixed_payment;
pub mod health;
pub mod notification;
pub mod payment;
pub mod transaction;
