//! Category filter state and selector options.

use tracing::debug;

use crate::breakdown::distinct_categories;
use crate::entities::decode_entities;
use crate::models::Snapshot;

/// Sentinel selection meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Selector label for the sentinel option
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// Holds the selected category (raw, undecoded) or the `All` sentinel.
///
/// The filter does not validate what it is given; the selector only ever
/// offers `All` and categories present in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: String,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            selected: ALL_CATEGORIES.to_string(),
        }
    }
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_all(&self) -> bool {
        self.selected == ALL_CATEGORIES
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.selected = value.into();
        debug!(selected = %self.selected, "category filter changed");
    }

    pub fn reset(&mut self) {
        self.set_category(ALL_CATEGORIES);
    }
}

/// One entry of the category selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Raw value written to the filter
    pub value: String,
    /// Decoded text shown to the user
    pub label: String,
}

/// `All Categories` followed by every distinct raw category in first-seen order
pub fn category_options(snapshot: &Snapshot) -> Vec<CategoryOption> {
    let mut options = vec![CategoryOption {
        value: ALL_CATEGORIES.to_string(),
        label: ALL_CATEGORIES_LABEL.to_string(),
    }];
    options.extend(
        distinct_categories(snapshot.questions())
            .into_iter()
            .map(|category| CategoryOption {
                value: category.to_string(),
                label: decode_entities(category),
            }),
    );
    options
}
