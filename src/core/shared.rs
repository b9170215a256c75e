//! Handle for hosts that call into the core from several threads.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::api::FinanceStore;
use crate::core::errors::Result;
use crate::core::state_manager::StateManager;
use crate::core::stats::ExpenseStats;
use crate::domain::{Category, CategoryId, Transaction, TransactionId};

/// Cloneable handle serializing every operation, persistence included,
/// behind a single lock.
#[derive(Clone)]
pub struct SharedStateManager {
    inner: Arc<Mutex<StateManager>>,
}

impl SharedStateManager {
    pub fn new(state: StateManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Runs `f` with exclusive access to the state.
    pub fn with<R>(&self, f: impl FnOnce(&mut StateManager) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    // State is swapped only after a successful write, so a poisoned lock
    // still guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, StateManager> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FinanceStore for SharedStateManager {
    fn add_transaction(&mut self, txn: Transaction) -> Result<()> {
        self.lock().add_transaction(txn)
    }

    fn update_transaction(&mut self, txn: Transaction) -> Result<()> {
        self.lock().update_transaction(txn)
    }

    fn delete_transaction(&mut self, id: &TransactionId) -> Result<()> {
        self.lock().delete_transaction(id)
    }

    fn add_category(&mut self, category: Category) -> Result<()> {
        self.lock().add_category(category)
    }

    fn update_category(&mut self, category: Category) -> Result<()> {
        self.lock().update_category(category)
    }

    fn delete_category(&mut self, id: &CategoryId) -> Result<()> {
        self.lock().delete_category(id)
    }

    fn financial_stats(&self) -> ExpenseStats {
        self.lock().financial_stats()
    }

    fn transactions(&self) -> Vec<Transaction> {
        self.lock().transactions().to_vec()
    }

    fn expenses(&self) -> Vec<Transaction> {
        self.lock().expenses()
    }

    fn incomes(&self) -> Vec<Transaction> {
        self.lock().incomes()
    }

    fn categories(&self) -> Vec<Category> {
        self.lock().categories().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionDraft;
    use crate::storage::{DurableStore, MemoryStore};
    use chrono::NaiveDate;
    use std::thread;

    #[test]
    fn concurrent_writers_are_serialized() {
        let medium = MemoryStore::new();
        let state = StateManager::open(DurableStore::new(Box::new(medium.clone()))).unwrap();
        let shared = SharedStateManager::new(state);
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let mut handle = shared.clone();
                thread::spawn(move || {
                    for j in 0..10 {
                        let txn = TransactionDraft::expense(format!("t{i}-{j}"), 1.0, "1", date)
                            .into_transaction();
                        handle.add_transaction(txn).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.transactions().len(), 80);
        assert_eq!(shared.with(|state| state.expenses().len()), 80);
        assert_eq!(shared.financial_stats().total_expense, 80.0);
        let reopened = StateManager::open(DurableStore::new(Box::new(medium))).unwrap();
        assert_eq!(reopened.transactions().len(), 80);
    }
}
