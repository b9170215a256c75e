#![doc(test(attr(deny(warnings))))]

//! Expense Core is the financial state and aggregation engine of a personal
//! finance tracker: transactions and categories, their persistence in a local
//! key-value store, and the statistics a dashboard renders.

pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

pub use crate::core::{
    Dashboard, ExpenseStats, FinanceError, FinanceStore, SharedStateManager, StateManager,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
