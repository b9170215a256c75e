//! Authoritative in-memory holder of transactions and categories.

use tracing::{debug, info};

use crate::core::errors::{FinanceError, Result};
use crate::core::stats::{compute_stats, ExpenseStats};
use crate::domain::{
    default_categories, validate_category, validate_transaction, Category, CategoryDraft,
    CategoryId, Transaction, TransactionDraft, TransactionId, TransactionKind, ValidationErrors,
};
use crate::storage::DurableStore;

/// Owns the session's financial state and mediates every mutation through the
/// [`DurableStore`].
///
/// Each mutation validates, persists the full updated collection, and only then
/// adopts it in memory. A failed write leaves the in-memory state untouched.
pub struct StateManager {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    store: DurableStore,
}

impl StateManager {
    /// Bootstraps the store, loads both collections, and re-seeds the default
    /// categories when none are present.
    pub fn open(store: DurableStore) -> Result<Self> {
        store.initialize()?;
        let transactions = store.load_transactions();
        let mut categories = store.load_categories();
        if categories.is_empty() {
            info!("No categories found; adopting the default set.");
            categories = default_categories();
            store.save_categories(&categories)?;
        }
        info!(
            transactions = transactions.len(),
            categories = categories.len(),
            "Financial state loaded."
        );
        Ok(Self {
            transactions,
            categories,
            store,
        })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| &txn.id == id)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| &category.id == id)
    }

    pub fn expenses(&self) -> Vec<Transaction> {
        self.filtered(TransactionKind::Expense)
    }

    pub fn incomes(&self) -> Vec<Transaction> {
        self.filtered(TransactionKind::Income)
    }

    pub fn financial_stats(&self) -> ExpenseStats {
        compute_stats(&self.transactions)
    }

    /// Validates `draft`, assigns an id, and appends it.
    pub fn record_transaction(&mut self, draft: TransactionDraft) -> Result<TransactionId> {
        ValidationErrors::check(validate_transaction(&draft))?;
        let txn = draft.into_transaction();
        let id = txn.id.clone();
        self.add_transaction(txn)?;
        Ok(id)
    }

    pub fn add_transaction(&mut self, txn: Transaction) -> Result<()> {
        ValidationErrors::check(validate_transaction(&TransactionDraft::from(&txn)))?;
        if self.transaction(&txn.id).is_some() {
            return Err(FinanceError::DuplicateId(txn.id.to_string()));
        }
        debug!(transaction = %txn.id, kind = %txn.kind, "Adding transaction.");
        let mut next = self.transactions.clone();
        next.push(txn);
        self.commit_transactions(next)
    }

    /// Replaces the transaction sharing `txn.id`. Unknown ids leave the
    /// collection unchanged, but it is persisted either way.
    pub fn update_transaction(&mut self, txn: Transaction) -> Result<()> {
        ValidationErrors::check(validate_transaction(&TransactionDraft::from(&txn)))?;
        debug!(transaction = %txn.id, "Updating transaction.");
        let next = self
            .transactions
            .iter()
            .map(|existing| {
                if existing.id == txn.id {
                    txn.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        self.commit_transactions(next)
    }

    pub fn delete_transaction(&mut self, id: &TransactionId) -> Result<()> {
        debug!(transaction = %id, "Deleting transaction.");
        let next = self
            .transactions
            .iter()
            .filter(|txn| &txn.id != id)
            .cloned()
            .collect();
        self.commit_transactions(next)
    }

    /// Validates `draft` against the current categories, assigns an id, and appends it.
    pub fn create_category(&mut self, draft: CategoryDraft) -> Result<CategoryId> {
        let category = draft.into_category();
        let id = category.id.clone();
        self.add_category(category)?;
        Ok(id)
    }

    pub fn add_category(&mut self, category: Category) -> Result<()> {
        let draft = CategoryDraft::from(&category);
        ValidationErrors::check(validate_category(&draft, &self.categories, None))?;
        if self.category(&category.id).is_some() {
            return Err(FinanceError::DuplicateId(category.id.to_string()));
        }
        debug!(category = %category.id, name = %category.name, "Adding category.");
        let mut next = self.categories.clone();
        next.push(category);
        self.commit_categories(next)
    }

    /// Replaces the category sharing `category.id`; unknown ids are a no-op.
    pub fn update_category(&mut self, category: Category) -> Result<()> {
        let draft = CategoryDraft::from(&category);
        ValidationErrors::check(validate_category(
            &draft,
            &self.categories,
            Some(&category.id),
        ))?;
        debug!(category = %category.id, "Updating category.");
        let next = self
            .categories
            .iter()
            .map(|existing| {
                if existing.id == category.id {
                    category.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        self.commit_categories(next)
    }

    /// Removes the category. Transactions referencing it are kept as they are.
    pub fn delete_category(&mut self, id: &CategoryId) -> Result<()> {
        debug!(category = %id, "Deleting category.");
        let next = self
            .categories
            .iter()
            .filter(|category| &category.id != id)
            .cloned()
            .collect();
        self.commit_categories(next)
    }

    fn filtered(&self, kind: TransactionKind) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .cloned()
            .collect()
    }

    fn commit_transactions(&mut self, next: Vec<Transaction>) -> Result<()> {
        self.store.save_transactions(&next)?;
        self.transactions = next;
        Ok(())
    }

    fn commit_categories(&mut self, next: Vec<Category>) -> Result<()> {
        self.store.save_categories(&next)?;
        self.categories = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryKind, Field};
    use crate::storage::{KeyValueStore, MemoryStore, CATEGORIES_KEY, TRANSACTIONS_KEY};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn manager() -> (StateManager, MemoryStore) {
        let medium = MemoryStore::new();
        let manager =
            StateManager::open(DurableStore::new(Box::new(medium.clone()))).expect("open state");
        (manager, medium)
    }

    #[test]
    fn open_starts_with_defaults_and_no_transactions() {
        let (state, _medium) = manager();
        assert_eq!(state.categories().len(), 13);
        assert!(state.transactions().is_empty());
    }

    #[test]
    fn open_reseeds_an_externally_cleared_category_list() {
        let medium = MemoryStore::new();
        medium.set(CATEGORIES_KEY, "[]").unwrap();
        let state = StateManager::open(DurableStore::new(Box::new(medium.clone()))).unwrap();
        assert_eq!(state.categories().len(), 13);
        let persisted: Vec<Category> =
            serde_json::from_str(&medium.get(CATEGORIES_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(persisted.len(), 13);
    }

    #[test]
    fn invalid_transaction_is_never_persisted() {
        let (mut state, medium) = manager();
        let before = medium.get(TRANSACTIONS_KEY).unwrap();
        let err = state
            .record_transaction(TransactionDraft::expense("", -3.0, "1", date()))
            .expect_err("invalid draft");
        let errors = err.validation().expect("validation error");
        assert!(errors.for_field(Field::Description).is_some());
        assert!(errors.for_field(Field::Amount).is_some());
        assert!(state.transactions().is_empty());
        assert_eq!(medium.get(TRANSACTIONS_KEY).unwrap(), before);
    }

    #[test]
    fn derived_subsets_follow_the_canonical_log() {
        let (mut state, _medium) = manager();
        state
            .record_transaction(TransactionDraft::income("Paycheck", 1000.0, "9", date()))
            .unwrap();
        let rent = state
            .record_transaction(TransactionDraft::expense("Rent", 600.0, "4", date()))
            .unwrap();
        assert_eq!(state.expenses().len(), 1);
        assert_eq!(state.incomes().len(), 1);

        state.delete_transaction(&rent).unwrap();
        assert!(state.expenses().is_empty());
        assert_eq!(state.incomes().len(), 1);
    }

    #[test]
    fn duplicate_category_is_rejected_and_distinct_one_accepted() {
        let (mut state, _medium) = manager();
        let err = state
            .create_category(CategoryDraft::new("SALARY", CategoryKind::Income))
            .unwrap_err();
        assert!(matches!(err, FinanceError::Validation(_)));
        assert_eq!(state.categories().len(), 13);

        let id = state
            .create_category(CategoryDraft::new("Pets", CategoryKind::Expense))
            .unwrap();
        assert_eq!(state.category(&id).map(|c| c.name.as_str()), Some("Pets"));
    }

    #[test]
    fn renaming_a_category_onto_another_name_is_rejected() {
        let (mut state, _medium) = manager();
        let mut food = state.categories()[0].clone();
        food.name = "housing".into();
        assert!(state.update_category(food).is_err());

        let mut food = state.categories()[0].clone();
        food.color = "#000000".into();
        state.update_category(food).unwrap();
        assert_eq!(state.categories()[0].color, "#000000");
    }

    #[test]
    fn update_and_delete_of_unknown_ids_change_nothing() {
        let (mut state, _medium) = manager();
        state
            .record_transaction(TransactionDraft::expense("Coffee", 4.5, "1", date()))
            .unwrap();
        let snapshot = state.transactions().to_vec();

        let categories = state.categories().to_vec();

        let ghost = TransactionDraft::expense("Ghost", 1.0, "1", date()).into_transaction();
        state.update_transaction(ghost.clone()).unwrap();
        state.delete_transaction(&ghost.id).unwrap();
        let stray = CategoryDraft::new("Stray", CategoryKind::Both).into_category();
        state.update_category(stray).unwrap();
        state.delete_category(&CategoryId::from("missing")).unwrap();

        assert_eq!(state.transactions(), snapshot.as_slice());
        assert_eq!(state.categories(), categories.as_slice());
    }

    #[test]
    fn adding_a_transaction_with_a_taken_id_is_rejected() {
        let (mut state, medium) = manager();
        let txn = TransactionDraft::expense("Coffee", 10.0, "1", date()).into_transaction();
        state.add_transaction(txn.clone()).unwrap();
        let persisted = medium.get(TRANSACTIONS_KEY).unwrap();

        let mut copy = txn.clone();
        copy.description = "Tea".into();
        let err = state.add_transaction(copy).expect_err("id already taken");
        assert!(matches!(err, FinanceError::DuplicateId(ref id) if id == txn.id.as_str()));
        assert_eq!(state.transactions().len(), 1);
        assert_eq!(medium.get(TRANSACTIONS_KEY).unwrap(), persisted);

        let mut edited = txn.clone();
        edited.amount = 20.0;
        state.update_transaction(edited).unwrap();
        assert_eq!(state.financial_stats().total_expense, 20.0);
        state.delete_transaction(&txn.id).unwrap();
        assert!(state.transactions().is_empty());
    }

    #[test]
    fn adding_a_category_with_a_taken_id_is_rejected() {
        let (mut state, medium) = manager();
        let persisted = medium.get(CATEGORIES_KEY).unwrap();
        let pets = Category::new("1", "Pets", "#AA5500", CategoryKind::Expense);

        let err = state.add_category(pets).expect_err("id already taken");
        assert!(matches!(err, FinanceError::DuplicateId(ref id) if id == "1"));
        assert_eq!(state.categories().len(), 13);
        assert_eq!(state.category(&"1".into()).map(|c| c.name.as_str()), Some("Food"));
        assert_eq!(medium.get(CATEGORIES_KEY).unwrap(), persisted);
    }
}
