//! Dashboard derivations layered over [`ExpenseStats`].

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::core::stats::{percentage_of, ExpenseStats};
use crate::domain::{Category, CategoryId, CategoryKind, Transaction, TransactionKind};

/// One category's slice of the expense or income total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub id: CategoryId,
    /// `None` when the category no longer exists.
    pub name: Option<String>,
    pub color: Option<String>,
    pub kind: CategoryKind,
    pub amount: f64,
    /// Raw `amount / total * 100`; non-finite when the total is zero.
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub expenses: Vec<CategoryShare>,
    pub incomes: Vec<CategoryShare>,
}

/// Splits the non-zero per-category nets by the declared category type.
///
/// Dangling ids are treated as expense categories. Categories typed `both`
/// belong to neither list. Each list is sorted by amount, largest first.
pub fn category_breakdown(stats: &ExpenseStats, categories: &[Category]) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::default();
    for (id, &amount) in &stats.by_category {
        if amount == 0.0 {
            continue;
        }
        let category = categories.iter().find(|category| &category.id == id);
        let kind = category.map_or(CategoryKind::Expense, |category| category.kind);
        let (bucket, total) = match kind {
            CategoryKind::Expense => (&mut breakdown.expenses, stats.total_expense),
            CategoryKind::Income => (&mut breakdown.incomes, stats.total_income),
            CategoryKind::Both => continue,
        };
        bucket.push(CategoryShare {
            id: id.clone(),
            name: category.map(|category| category.name.clone()),
            color: category.map(|category| category.color.clone()),
            kind,
            amount,
            percentage: percentage_of(amount, total),
        });
    }
    breakdown
        .expenses
        .sort_by(|a, b| b.amount.total_cmp(&a.amount));
    breakdown.incomes.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    breakdown
}

/// The `limit` most recent transactions, newest first. Ties keep log order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut recent = transactions.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}

/// Categories a form for `kind` may offer.
pub fn categories_for(categories: &[Category], kind: TransactionKind) -> Vec<Category> {
    categories
        .iter()
        .filter(|category| category.kind.applies_to(kind))
        .cloned()
        .collect()
}

/// Transactions whose category reference no longer resolves.
pub fn dangling_references<'a>(
    transactions: &'a [Transaction],
    categories: &[Category],
) -> Vec<&'a Transaction> {
    let known: HashSet<&CategoryId> = categories.iter().map(|category| &category.id).collect();
    let dangling: Vec<_> = transactions
        .iter()
        .filter(|txn| !known.contains(&txn.category))
        .collect();
    for txn in &dangling {
        debug!(transaction = %txn.id, category = %txn.category, "Dangling category reference.");
    }
    dangling
}
