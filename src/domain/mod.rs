//! Pure domain models for transactions and categories. No I/O.

pub mod category;
pub mod common;
pub mod transaction;
pub mod validation;

pub use category::{default_categories, Category, CategoryDraft, CategoryKind};
pub use common::{CategoryId, Displayable, Identifiable, NamedEntity, TransactionId};
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
pub use validation::{validate_category, validate_transaction, Field, FieldError, ValidationErrors};
