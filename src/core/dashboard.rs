//! Read-side summary a home screen renders from.

use crate::config::Config;
use crate::core::api::FinanceStore;
use crate::core::reports::{
    categories_for, category_breakdown, recent_transactions, CategoryBreakdown,
};
use crate::core::stats::ExpenseStats;
use crate::domain::{Category, CategoryId, Transaction, TransactionKind};
use crate::utils::format::format_amount;

/// Borrows a [`FinanceStore`] for its whole lifetime; it cannot be built
/// without one.
pub struct Dashboard<'a, S: FinanceStore + ?Sized> {
    store: &'a S,
    config: &'a Config,
}

/// Everything the summary cards, breakdown lists, and activity feed need.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: ExpenseStats,
    pub expense_count: usize,
    pub income_count: usize,
    pub breakdown: CategoryBreakdown,
    pub recent: Vec<Transaction>,
}

impl<'a, S: FinanceStore + ?Sized> Dashboard<'a, S> {
    pub fn new(store: &'a S, config: &'a Config) -> Self {
        Self { store, config }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let stats = self.store.financial_stats();
        let categories = self.store.categories();
        let transactions = self.store.transactions();
        DashboardSnapshot {
            breakdown: category_breakdown(&stats, &categories),
            expense_count: transactions.iter().filter(|t| t.is_expense()).count(),
            income_count: transactions.iter().filter(|t| t.is_income()).count(),
            recent: recent_transactions(&transactions, self.config.recent_limit),
            stats,
        }
    }

    /// Category name, or the configured fallback for deleted categories.
    pub fn category_label(&self, id: &CategoryId) -> String {
        self.store
            .categories()
            .into_iter()
            .find(|category| &category.id == id)
            .map(|category| category.name)
            .unwrap_or_else(|| self.config.unknown_category_label.clone())
    }

    /// Renders `amount` in the configured currency and locale.
    pub fn format_amount(&self, amount: f64) -> String {
        format_amount(amount, &self.config.currency, &self.config.locale)
    }

    /// Categories an entry form for `kind` should offer.
    pub fn form_categories(&self, kind: TransactionKind) -> Vec<Category> {
        categories_for(&self.store.categories(), kind)
    }
}
