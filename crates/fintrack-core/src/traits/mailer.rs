//! Mail transport trait for outbound alert delivery.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for outbound mail delivery.
///
/// The trait is defined here in `fintrack-core` and implemented in
/// `fintrack-mail`. Callers treat delivery as fire-and-forget: a failed
/// `send` is logged at the dispatch boundary and never propagated into
/// the surrounding operation.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug + 'static {
    /// Send a plain-text message to a single recipient address.
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> AppResult<()>;
}
