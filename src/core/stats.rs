//! Aggregate metrics derived from a transaction log.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryId, Transaction, TransactionKind};

/// Totals recomputed from scratch on every query; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseStats {
    pub total_expense: f64,
    pub total_income: f64,
    pub balance: f64,
    /// Signed net per referenced category: incomes add, expenses subtract.
    /// Categories without transactions are absent.
    pub by_category: BTreeMap<CategoryId, f64>,
}

impl ExpenseStats {
    pub fn net_for(&self, category: &CategoryId) -> Option<f64> {
        self.by_category.get(category).copied()
    }

    /// Total the per-category percentages of `kind` are measured against.
    pub fn total_for(&self, kind: TransactionKind) -> f64 {
        match kind {
            TransactionKind::Expense => self.total_expense,
            TransactionKind::Income => self.total_income,
        }
    }
}

/// Pure aggregation over `transactions`.
pub fn compute_stats(transactions: &[Transaction]) -> ExpenseStats {
    let mut stats = ExpenseStats::default();
    for txn in transactions {
        match txn.kind {
            TransactionKind::Expense => stats.total_expense += txn.amount,
            TransactionKind::Income => stats.total_income += txn.amount,
        }
        *stats.by_category.entry(txn.category.clone()).or_insert(0.0) += txn.signed_amount();
    }
    stats.balance = stats.total_income - stats.total_expense;
    stats
}

/// `net / total * 100`, unguarded. A zero `total` yields a non-finite value
/// which callers are expected to special-case.
pub fn percentage_of(net: f64, total: f64) -> f64 {
    net / total * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionDraft;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn empty_log_yields_zeroes() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, ExpenseStats::default());
        assert!(stats.by_category.is_empty());
    }

    #[test]
    fn single_expense_nets_negative() {
        let txns = vec![TransactionDraft::expense("Coffee", 4.5, "1", date()).into_transaction()];
        let stats = compute_stats(&txns);
        assert_eq!(stats.total_expense, 4.5);
        assert_eq!(stats.total_income, 0.0);
        assert_eq!(stats.balance, -4.5);
        assert_eq!(stats.net_for(&"1".into()), Some(-4.5));
        assert_eq!(stats.by_category.len(), 1);
    }

    #[test]
    fn mixed_kinds_in_one_category_offset() {
        let txns = vec![
            TransactionDraft::income("Refund", 30.0, "7", date()).into_transaction(),
            TransactionDraft::expense("Shoes", 30.0, "7", date()).into_transaction(),
        ];
        let stats = compute_stats(&txns);
        assert_eq!(stats.net_for(&"7".into()), Some(0.0));
        assert_eq!(stats.balance, 0.0);
    }

    #[test]
    fn is_idempotent() {
        let txns = vec![
            TransactionDraft::income("Paycheck", 1000.0, "9", date()).into_transaction(),
            TransactionDraft::expense("Rent", 600.0, "4", date()).into_transaction(),
        ];
        assert_eq!(compute_stats(&txns), compute_stats(&txns));
    }

    #[test]
    fn zero_total_percentage_is_not_finite() {
        assert!(!percentage_of(-10.0, 0.0).is_finite());
        assert!(percentage_of(0.0, 0.0).is_nan());
        assert_eq!(percentage_of(25.0, 100.0), 25.0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(compute_stats(&[])).unwrap();
        assert!(value.get("totalExpense").is_some());
        assert!(value.get("byCategory").is_some());
    }
}
