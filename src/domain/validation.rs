//! Field-level validation applied before any mutation is persisted.

use std::fmt;

use crate::domain::category::{Category, CategoryDraft};
use crate::domain::common::CategoryId;
use crate::domain::transaction::TransactionDraft;

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Description,
    Amount,
    Category,
    Name,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Description => "description",
            Field::Amount => "amount",
            Field::Category => "category",
            Field::Name => "name",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Non-empty collection of field errors for a rejected mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Wraps `errors`, returning `Ok(())` when there is nothing to report.
    pub fn check(errors: Vec<FieldError>) -> Result<(), ValidationErrors> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    pub fn for_field(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than 0";
pub const CATEGORY_REQUIRED: &str = "Category is required";
pub const CATEGORY_NAME_REQUIRED: &str = "Category name is required";
pub const CATEGORY_NAME_TAKEN: &str = "Category with this name already exists";

/// Returns one message per failing field; an empty list means the draft is valid.
pub fn validate_transaction(draft: &TransactionDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if draft.description.trim().is_empty() {
        errors.push(FieldError::new(Field::Description, DESCRIPTION_REQUIRED));
    }
    // NaN and infinities fail this check too.
    if !(draft.amount.is_finite() && draft.amount > 0.0) {
        errors.push(FieldError::new(Field::Amount, AMOUNT_NOT_POSITIVE));
    }
    if draft.category.as_ref().map_or(true, CategoryId::is_empty) {
        errors.push(FieldError::new(Field::Category, CATEGORY_REQUIRED));
    }
    errors
}

/// Checks the name is present and case-insensitively unique among `existing`,
/// ignoring the entry identified by `excluding`.
pub fn validate_category(
    draft: &CategoryDraft,
    existing: &[Category],
    excluding: Option<&CategoryId>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let candidate = draft.name.trim();
    if candidate.is_empty() {
        errors.push(FieldError::new(Field::Name, CATEGORY_NAME_REQUIRED));
        return errors;
    }
    let normalized = candidate.to_lowercase();
    let duplicate = existing.iter().any(|category| {
        Some(&category.id) != excluding && category.name.trim().to_lowercase() == normalized
    });
    if duplicate {
        errors.push(FieldError::new(Field::Name, CATEGORY_NAME_TAKEN));
    }
    errors
}
