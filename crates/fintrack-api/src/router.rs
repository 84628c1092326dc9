//! Route definitions for the Fintrack HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(category_routes())
        .merge(transaction_routes())
        .merge(budget_routes())
        .merge(fixed_payment_routes())
        .merge(payment_routes())
        .merge(notification_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Shared category dimension
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list))
        .route("/categories", post(handlers::category::create))
        .route("/categories/{id}", get(handlers::category::get))
        .route("/categories/{id}", put(handlers::category::update))
        .route("/categories/{id}", delete(handlers::category::delete))
}

/// Transaction CRUD plus the per-category summary
fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(handlers::transaction::list))
        .route("/transactions", post(handlers::transaction::create))
        .route("/transactions/summary", get(handlers::transaction::summary))
        .route("/transactions/{id}", get(handlers::transaction::get))
        .route("/transactions/{id}", put(handlers::transaction::update))
        .route("/transactions/{id}", delete(handlers::transaction::delete))
}

/// Budget CRUD
fn budget_routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(handlers::budget::list))
        .route("/budgets", post(handlers::budget::create))
        .route("/budgets/{id}", get(handlers::budget::get))
        .route("/budgets/{id}", put(handlers::budget::update))
        .route("/budgets/{id}", delete(handlers::budget::delete))
}

/// Fixed payment CRUD
fn fixed_payment_routes() -> Router<AppState> {
    Router::new()
        .route("/fixed-payments", get(handlers::fixed_payment::list))
        .route("/fixed-payments", post(handlers::fixed_payment::create))
        .route("/fixed-payments/{id}", get(handlers::fixed_payment::get))
        .route("/fixed-payments/{id}", put(handlers::fixed_payment::update))
        .route(
            "/fixed-payments/{id}",
            delete(handlers::fixed_payment::delete),
        )
}

/// One-off payment CRUD
fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/payments", get(handlers::payment::list))
        .route("/payments", post(handlers::payment::create))
        .route("/payments/{id}", get(handlers::payment::get))
        .route("/payments/{id}", put(handlers::payment::update))
        .route("/payments/{id}", delete(handlers::payment::delete))
}

/// Notification history and the sweep trigger
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notification::list))
        .route("/notifications/sweep", post(handlers::notification::sweep))
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/db", get(handlers::health::health_db))
}
