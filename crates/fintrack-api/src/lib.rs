//! # fintrack-api
//!
//! HTTP API layer for Fintrack, built on Axum. Contains the shared
//! application state, error-to-response mapping, the `AuthUser`
//! extractor, request/response DTOs, handlers, middleware, and the
//! router.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
