pub mod api;
pub mod dashboard;
pub mod errors;
pub mod reports;
pub mod shared;
pub mod state_manager;
pub mod stats;

pub use api::FinanceStore;
pub use dashboard::{Dashboard, DashboardSnapshot};
pub use errors::{FinanceError, Result};
pub use reports::{
    categories_for, category_breakdown, dangling_references, recent_transactions,
    CategoryBreakdown, CategoryShare,
};
pub use shared::SharedStateManager;
pub use state_manager::StateManager;
pub use stats::{compute_stats, percentage_of, ExpenseStats};
