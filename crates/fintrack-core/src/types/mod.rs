//! Shared domain types.

pub mod id;

pub use id::{
    BudgetId, CategoryId, FixedPaymentId, NotificationId, PaymentId, TransactionId, UserId,
};
