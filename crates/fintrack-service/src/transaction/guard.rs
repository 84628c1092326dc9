//! Budget guard: gates expense creation against a monthly ceiling.
//!
//! The guard is a pure decision over a read snapshot; it performs no
//! I/O. The caller looks up the active budget and the month-to-date
//! expense sum, then persists the transaction only on [`Verdict::Allow`].

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use fintrack_entity::budget::Budget;
use fintrack_entity::transaction::TransactionKind;

/// Outcome of a budget guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The transaction may be created.
    Allow,
    /// Creating the expense would overdraw the budget.
    Reject {
        /// The active budget's ceiling.
        ceiling: Decimal,
        /// The month-to-date expense sum before the proposed amount.
        month_to_date: Decimal,
    },
}

/// First calendar day of `today`'s month.
pub fn month_start(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today)
}

/// Evaluate whether a proposed transaction may be created.
///
/// Income never triggers rejection, and the absence of a budget means no
/// ceiling. The boundary is strict: a sum landing exactly on the ceiling
/// is allowed. Amounts are compared with exact fixed-point arithmetic.
pub fn evaluate(
    kind: TransactionKind,
    budget: Option<&Budget>,
    month_to_date: Decimal,
    proposed: Decimal,
) -> Verdict {
    if kind != TransactionKind::Expense {
        return Verdict::Allow;
    }

    let Some(budget) = budget else {
        return Verdict::Allow;
    };

    if month_to_date + proposed > budget.amount {
        Verdict::Reject {
            ceiling: budget.amount,
            month_to_date,
        }
    } else {
        Verdict::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintrack_core::types::{BudgetId, CategoryId, UserId};

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

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_budget_always_allows() {
        let verdict = evaluate(TransactionKind::Expense, None, dec("0"), dec("1000000.00"));
        assert_eq!(verdict, Verdict::Allow);
    }

    #[test]
    fn test_income_never_rejected() {
        let b = budget("10.00");
        let verdict = evaluate(TransactionKind::Income, Some(&b), dec("9999.00"), dec("9999.00"));
        assert_eq!(verdict, Verdict::Allow);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        // Ceiling 200.00, 150.00 already spent: 50.00 lands exactly on
        // the ceiling and passes, 50.01 does not.
        let b = budget("200.00");
        assert_eq!(
            evaluate(TransactionKind::Expense, Some(&b), dec("150.00"), dec("50.00")),
            Verdict::Allow
        );
        assert_eq!(
            evaluate(TransactionKind::Expense, Some(&b), dec("150.00"), dec("50.01")),
            Verdict::Reject {
                ceiling: dec("200.00"),
                month_to_date: dec("150.00"),
            }
        );
    }

    #[test]
    fn test_zero_amount_always_passes() {
        let b = budget("200.00");
        assert_eq!(
            evaluate(TransactionKind::Expense, Some(&b), dec("200.00"), dec("0.00")),
            Verdict::Allow
        );
    }

    #[test]
    fn test_month_start() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 17).unwrap();
        assert_eq!(month_start(today), NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        let first = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert_eq!(month_start(first), first);
    }
}
