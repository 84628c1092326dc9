//! Fintrack Server - Personal Finance Tracking Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use fintrack_core::config::AppConfig;
use fintrack_core::error::AppError;
use fintrack_core::traits::Mailer;

#[tokio::main]
async fn main() {
    let env = std::env::var("FINTRACK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Fintrack v{}", env!("CARGO_PKG_VERSION"));

    // Database connection + migrations
    let db = fintrack_database::DatabasePool::connect(&config.database).await?;
    fintrack_database::migration::run_migrations(db.pool()).await?;
    let db_pool = db.into_pool();

    // Repositories
    let user_repo = Arc::new(fintrack_database::repositories::UserRepository::new(
        db_pool.clone(),
    ));
    let category_repo = Arc::new(fintrack_database::repositories::CategoryRepository::new(
        db_pool.clone(),
    ));
    let transaction_repo = Arc::new(fintrack_database::repositories::TransactionRepository::new(
        db_pool.clone(),
    ));
    let budget_repo = Arc::new(fintrack_database::repositories::BudgetRepository::new(
        db_pool.clone(),
    ));
    let fixed_payment_repo = Arc::new(
        fintrack_database::repositories::FixedPaymentRepository::new(db_pool.clone()),
    );
    let payment_repo = Arc::new(fintrack_database::repositories::PaymentRepository::new(
        db_pool.clone(),
    ));
    let notification_repo = Arc::new(
        fintrack_database::repositories::NotificationRepository::new(db_pool.clone()),
    );

    // Auth primitives
    let password_hasher = Arc::new(fintrack_auth::PasswordHasher::new());
    let password_validator = Arc::new(fintrack_auth::PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(fintrack_auth::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(fintrack_auth::JwtDecoder::new(&config.auth));

    // Mail transport
    let mailer: Arc<dyn Mailer> = Arc::new(fintrack_mail::SmtpMailer::new(&config.mail)?);

    // Services
    let account_service = Arc::new(fintrack_service::account::AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
    ));
    let transaction_service = Arc::new(fintrack_service::transaction::TransactionService::new(
        Arc::clone(&transaction_repo),
        Arc::clone(&budget_repo),
        Arc::clone(&category_repo),
    ));
    let notification_service = Arc::new(fintrack_service::notification::NotificationService::new(
        Arc::clone(&notification_repo),
    ));
    let sweep_service = Arc::new(fintrack_service::notification::SweepService::new(
        Arc::clone(&fixed_payment_repo),
        Arc::clone(&budget_repo),
        Arc::clone(&user_repo),
        Arc::clone(&notification_repo),
        Arc::clone(&mailer),
    ));

    // HTTP server
    let state = fintrack_api::AppState {
        config: Arc::new(config.clone()),
        db_pool,
        jwt_decoder,
        user_repo,
        category_repo,
        budget_repo,
        fixed_payment_repo,
        payment_repo,
        account_service,
        transaction_service,
        notification_service,
        sweep_service,
    };

    let app = fintrack_api::build_app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Fintrack server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Fintrack server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
