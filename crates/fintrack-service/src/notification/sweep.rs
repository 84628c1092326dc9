//! Budget-threshold notification sweep.
//!
//! Scans active fixed payments due within the lookahead window and,
//! for each one whose category budget is missing or too small, sends an
//! alert mail and appends a notification record. Candidates commit
//! independently: a mail failure or a crash mid-sweep never rolls back
//! alerts already recorded. Nothing deduplicates across invocations;
//! overlapping runs may alert the same payment more than once.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use fintrack_core::error::AppError;
use fintrack_core::traits::Mailer;
use fintrack_database::repositories::budget::BudgetRepository;
use fintrack_database::repositories::fixed_payment::FixedPaymentRepository;
use fintrack_database::repositories::notification::NotificationRepository;
use fintrack_database::repositories::user::UserRepository;
use fintrack_entity::budget::Budget;
use fintrack_entity::fixed_payment::FixedPayment;
use fintrack_entity::notification::NotificationChannel;

/// How many days ahead the sweep looks for due fixed payments.
pub const LOOKAHEAD_DAYS: i64 = 2;

/// Subject line for alert mails.
const ALERT_SUBJECT: &str = "Budget alert";

/// One alert emitted during a sweep invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepOutcome {
    /// Email address the alert was dispatched to.
    pub user_email: String,
    /// Description of the flagged fixed payment.
    pub payment_description: String,
}

/// Runs the budget-threshold sweep over fixed payments.
#[derive(Debug, Clone)]
pub struct SweepService {
    /// Fixed payment repository (candidate selection).
    fixed_payment_repo: Arc<FixedPaymentRepository>,
    /// Budget repository (unscoped cross-reference).
    budget_repo: Arc<BudgetRepository>,
    /// User repository (recipient resolution).
    user_repo: Arc<UserRepository>,
    /// Notification repository (audit records).
    notification_repo: Arc<NotificationRepository>,
    /// Outbound mail transport.
    mailer: Arc<dyn Mailer>,
}

impl SweepService {
    /// Creates a new sweep service.
    pub fn new(
        fixed_payment_repo: Arc<FixedPaymentRepository>,
        budget_repo: Arc<BudgetRepository>,
        user_repo: Arc<UserRepository>,
        notification_repo: Arc<NotificationRepository>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            fixed_payment_repo,
            budget_repo,
            user_repo,
            notification_repo,
            mailer,
        }
    }

    /// Runs one sweep invocation.
    ///
    /// Returns one entry per alerted payment. Mail dispatch is
    /// fire-and-forget on a spawned task; the notification record is
    /// written after the dispatch attempt is initiated, regardless of
    /// the transport outcome.
    pub async fn run(&self, today: NaiveDate) -> Result<Vec<SweepOutcome>, AppError> {
        let cutoff = today + Duration::days(LOOKAHEAD_DAYS);
        let due = self.fixed_payment_repo.find_due(cutoff).await?;
        let budgets = self.budget_repo.find_all().await?;

        let mut notified = Vec::new();

        for payment in &due {
            let budget = budgets
                .iter()
                .find(|b| b.user_id == payment.user_id && b.category_id == payment.category_id);

            if !requires_alert(budget, payment) {
                continue;
            }

            let Some(user) = self.user_repo.find_by_id(payment.user_id).await? else {
                // Should not occur under referential integrity.
                warn!(
                    user_id = %payment.user_id,
                    fixed_payment_id = %payment.id,
                    "Fixed payment owner not found; skipping"
                );
                continue;
            };

            let message = compose_message(payment, budget);

            let mailer = Arc::clone(&self.mailer);
            let recipient = user.email.clone();
            let body = message.clone();
            tokio::spawn(async move {
                if let Err(e) = mailer.send(ALERT_SUBJECT, &body, &recipient).await {
                    warn!(error = %e, recipient = %recipient, "Alert delivery failed");
                }
            });

            self.notification_repo
                .create(
                    payment.user_id,
                    NotificationChannel::Email,
                    &message,
                    Utc::now(),
                    true,
                )
                .await?;

            notified.push(SweepOutcome {
                user_email: user.email,
                payment_description: payment.description.clone(),
            });
        }

        info!(
            candidates = due.len(),
            notified = notified.len(),
            "Notification sweep completed"
        );

        Ok(notified)
    }
}

/// Whether a due fixed payment warrants an alert.
///
/// Both "no budget configured" and "budget too small" trigger: absence
/// of a budget is treated as insufficient.
fn requires_alert(budget: Option<&Budget>, payment: &FixedPayment) -> bool {
    match budget {
        None => true,
        Some(b) => b.amount < payment.amount,
    }
}

/// Alert body embedding the payment and the (possibly absent) ceiling.
fn compose_message(payment: &FixedPayment, budget: Option<&Budget>) -> String {
    let ceiling = budget.map(|b| b.amount).unwrap_or(Decimal::ZERO);
    format!(
        "Your upcoming fixed payment \"{}\" of {:.2} exceeds the available budget of {:.2} for its category.",
        payment.description, payment.amount, ceiling
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintrack_core::types::{BudgetId, CategoryId, FixedPaymentId, UserId};

    fn payment(amount: &str) -> FixedPayment {
        FixedPayment {
            id: FixedPaymentId::from_i64(1),
            user_id: UserId::from_i64(1),
            category_id: CategoryId::from_i64(1),
            description: "Rent".to_string(),
            amount: amount.parse().unwrap(),
            starts_on: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            active: true,
        }
    }

    fn budget(amount: &str) -> Budget {
        Budget {
            id: BudgetId::from_i64(1),
            user_id: UserId::from_i64(1),
            category_id: CategoryId::from_i64(1),
            amount: amount.parse().unwrap(),
            created_on: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            expires_on: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        }
    }

    #[test]
    fn test_missing_budget_triggers() {
        assert!(requires_alert(None, &payment("800.00")));
    }

    #[test]
    fn test_smaller_budget_triggers() {
        let b = budget("150.00");
        assert!(requires_alert(Some(&b), &payment("800.00")));
    }

    #[test]
    fn test_sufficient_budget_does_not_trigger() {
        let b = budget("150.00");
        assert!(!requires_alert(Some(&b), &payment("100.00")));
        // Exactly equal is sufficient: the trigger is strictly less-than.
        assert!(!requires_alert(Some(&b), &payment("150.00")));
    }

    #[test]
    fn test_message_embeds_amounts_with_two_decimals() {
        let msg = compose_message(&payment("800.00"), None);
        assert!(msg.contains("\"Rent\""));
        assert!(msg.contains("800.00"));
        assert!(msg.contains("0.00"));

        let b = budget("150.00");
        let msg = compose_message(&payment("800.00"), Some(&b));
        assert!(msg.contains("150.00"));
    }
}
