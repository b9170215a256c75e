//! Domain types representing transaction categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::*;
use crate::domain::transaction::TransactionKind;

/// Which transaction forms may offer a category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Expense,
    Income,
    Both,
}

impl CategoryKind {
    /// Returns `true` when a transaction of `kind` may use this category.
    pub fn applies_to(self, kind: TransactionKind) -> bool {
        matches!(
            (self, kind),
            (CategoryKind::Both, _)
                | (CategoryKind::Expense, TransactionKind::Expense)
                | (CategoryKind::Income, TransactionKind::Income)
        )
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryKind::Expense => "expense",
            CategoryKind::Income => "income",
            CategoryKind::Both => "both",
        };
        f.write_str(label)
    }
}

/// Classifies transactions for reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}

impl Category {
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        color: impl Into<String>,
        kind: CategoryKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            kind,
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

/// User input for a category that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
    pub kind: CategoryKind,
}

impl CategoryDraft {
    pub const DEFAULT_COLOR: &'static str = "#808080";

    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            name: name.into(),
            color: Self::DEFAULT_COLOR.to_string(),
            kind,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn into_category(self) -> Category {
        self.into_category_with_id(CategoryId::generate())
    }

    pub fn into_category_with_id(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            color: self.color,
            kind: self.kind,
        }
    }
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            color: category.color.clone(),
            kind: category.kind,
        }
    }
}

const DEFAULT_SEED: [(&str, &str, &str, CategoryKind); 13] = [
    ("1", "Food", "#FF5733", CategoryKind::Expense),
    ("2", "Transportation", "#33A8FF", CategoryKind::Expense),
    ("3", "Entertainment", "#B033FF", CategoryKind::Expense),
    ("4", "Housing", "#4FD1C5", CategoryKind::Expense),
    ("5", "Utilities", "#FFD433", CategoryKind::Expense),
    ("6", "Healthcare", "#FF33A8", CategoryKind::Expense),
    ("7", "Shopping", "#33FFF5", CategoryKind::Expense),
    ("8", "Other Expense", "#808080", CategoryKind::Expense),
    ("9", "Salary", "#319795", CategoryKind::Income),
    ("10", "Freelance", "#38B2AC", CategoryKind::Income),
    ("11", "Investments", "#2C7A7B", CategoryKind::Income),
    ("12", "Gifts", "#285E61", CategoryKind::Income),
    ("13", "Other Income", "#234E52", CategoryKind::Income),
];

/// The seed installed the first time the store holds no categories.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_SEED
        .iter()
        .map(|(id, name, color, kind)| Category::new(*id, *name, *color, *kind))
        .collect()
}
