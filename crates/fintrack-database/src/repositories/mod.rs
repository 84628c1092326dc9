//! Repository implementations for all Fintrack entities.

pub mod budget;
pub mod category;
pub mod fixed_payment;
pub mod notification;
pub mod payment;
pub mod transaction;
pub mod user;

pub use budget::BudgetRepository;
pub use category::CategoryRepository;
pub use fixed_payment::FixedPaymentRepository;
pub use notification::NotificationRepository;
pub use payment::PaymentRepository;
pub use transaction::TransactionRepository;
pub use user::UserRepository;
