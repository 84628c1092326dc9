//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use fintrack_auth::jwt::decoder::JwtDecoder;
use fintrack_core::config::AppConfig;

use fintrack_database::repositories::budget::BudgetRepository;
use fintrack_database::repositories::category::CategoryRepository;
use fintrack_database::repositories::fixed_payment::FixedPaymentRepository;
use fintrack_database::repositories::payment::PaymentRepository;
use fintrack_database::repositories::user::UserRepository;

use fintrack_service::account::service::AccountService;
use fintrack_service::notification::service::NotificationService;
use fintrack_service::notification::sweep::SweepService;
use fintrack_service::transaction::service::TransactionService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Category repository.
    pub category_repo: Arc<CategoryRepository>,
    /// Budget repository.
    pub budget_repo: Arc<BudgetRepository>,
    /// Fixed payment repository.
    pub fixed_payment_repo: Arc<FixedPaymentRepository>,
    /// Payment repository.
    pub payment_repo: Arc<PaymentRepository>,

    /// Account service.
    pub account_service: Arc<AccountService>,
    /// Transaction service (budget guard).
    pub transaction_service: Arc<TransactionService>,
    /// Notification history service.
    pub notification_service: Arc<NotificationService>,
    /// Notification sweep service.
    pub sweep_service: Arc<SweepService>,
}
