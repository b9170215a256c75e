//! Domain models for recorded income and expense transactions.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// Direction of a money flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    /// Sign applied to amounts when computing per-category net totals.
    pub fn sign(self) -> f64 {
        match self {
            TransactionKind::Expense => -1.0,
            TransactionKind::Income => 1.0,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        };
        f.write_str(label)
    }
}

/// A single recorded flow of money tied to a category and a date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: f64,
    pub category: CategoryId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Amount with the sign implied by the transaction kind.
    pub fn signed_amount(&self) -> f64 {
        self.kind.sign() * self.amount
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} {} {:.2} [{}]", self.date, self.description, self.amount, self.kind)
    }
}

/// User input for a transaction that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub category: Option<CategoryId>,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

impl TransactionDraft {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<CategoryId>,
        date: NaiveDate,
        kind: TransactionKind,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: Some(category.into()),
            date,
            kind,
        }
    }

    pub fn expense(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<CategoryId>,
        date: NaiveDate,
    ) -> Self {
        Self::new(description, amount, category, date, TransactionKind::Expense)
    }

    pub fn income(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<CategoryId>,
        date: NaiveDate,
    ) -> Self {
        Self::new(description, amount, category, date, TransactionKind::Income)
    }

    /// Assigns a fresh identifier. Callers are expected to validate first.
    pub fn into_transaction(self) -> Transaction {
        self.into_transaction_with_id(TransactionId::generate())
    }

    /// Builds a transaction that keeps `id`, used when editing an existing entry.
    pub fn into_transaction_with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            category: self.category.unwrap_or_else(|| CategoryId::from("")),
            date: self.date,
            kind: self.kind,
        }
    }
}

impl From<&Transaction> for TransactionDraft {
    fn from(txn: &Transaction) -> Self {
        Self {
            description: txn.description.clone(),
            amount: txn.amount,
            category: Some(txn.category.clone()),
            date: txn.date,
            kind: txn.kind,
        }
    }
}
