//! Stable, public-facing contract for presentation collaborators.
//!
//! Screens, CLIs, or FFI shims depend on [`FinanceStore`] rather than on a
//! concrete state holder, so tests can hand them an isolated instance.

use crate::core::errors::Result;
use crate::core::stats::ExpenseStats;
use crate::core::state_manager::StateManager;
use crate::domain::{Category, CategoryId, Transaction, TransactionId};

/// Operations and read-only snapshots exposed to presentation code.
pub trait FinanceStore {
    fn add_transaction(&mut self, txn: Transaction) -> Result<()>;
    fn update_transaction(&mut self, txn: Transaction) -> Result<()>;
    fn delete_transaction(&mut self, id: &TransactionId) -> Result<()>;
    fn add_category(&mut self, category: Category) -> Result<()>;
    fn update_category(&mut self, category: Category) -> Result<()>;
    fn delete_category(&mut self, id: &CategoryId) -> Result<()>;
    fn financial_stats(&self) -> ExpenseStats;

    fn transactions(&self) -> Vec<Transaction>;
    fn expenses(&self) -> Vec<Transaction>;
    fn incomes(&self) -> Vec<Transaction>;
    fn categories(&self) -> Vec<Category>;
}

impl FinanceStore for StateManager {
    fn add_transaction(&mut self, txn: Transaction) -> Result<()> {
        StateManager::add_transaction(self, txn)
    }

    fn update_transaction(&mut self, txn: Transaction) -> Result<()> {
        StateManager::update_transaction(self, txn)
    }

    fn delete_transaction(&mut self, id: &TransactionId) -> Result<()> {
        StateManager::delete_transaction(self, id)
    }

    fn add_category(&mut self, category: Category) -> Result<()> {
        StateManager::add_category(self, category)
    }

    fn update_category(&mut self, category: Category) -> Result<()> {
        StateManager::update_category(self, category)
    }

    fn delete_category(&mut self, id: &CategoryId) -> Result<()> {
        StateManager::delete_category(self, id)
    }

    fn financial_stats(&self) -> ExpenseStats {
        StateManager::financial_stats(self)
    }

    fn transactions(&self) -> Vec<Transaction> {
        StateManager::transactions(self).to_vec()
    }

    fn expenses(&self) -> Vec<Transaction> {
        StateManager::expenses(self)
    }

    fn incomes(&self) -> Vec<Transaction> {
        StateManager::incomes(self)
    }

    fn categories(&self) -> Vec<Category> {
        StateManager::categories(self).to_vec()
    }
}
