//! Category distributions (value counts).

use indexmap::IndexMap;
use serde::Serialize;

use crate::artifact::Table;
use crate::error::Result;

/// One category and how many rows carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u64,
}

/// Label → count, ordered by descending count with ties in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryDistribution {
    entries: Vec<CategoryCount>,
}

impl CategoryDistribution {
    /// Build from counts in first-seen order; sorting happens here.
    #[must_use]
    pub fn from_counts(counts: IndexMap<String, u64>) -> Self {
        let mut entries: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(label, count)| CategoryCount { label, count })
            .collect();
        // Stable sort keeps first-seen order among equal counts.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[CategoryCount] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryCount> {
        self.entries.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.count)
    }

    /// Share of the total for `count`, in percent. Zero when the total is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent_of_total(&self, count: u64) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        count as f64 / total as f64 * 100.0
    }
}

impl<'a> IntoIterator for &'a CategoryDistribution {
    type Item = &'a CategoryCount;
    type IntoIter = std::slice::Iter<'a, CategoryCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Group rows by the value in `column`.
///
/// Empty cells are not a category and are left out.
///
/// # Errors
/// Returns `UnknownColumns` if the column does not exist.
pub fn count_by_category(table: &Table, column: &str) -> Result<CategoryDistribution> {
    let values = table.column_values(column)?;

    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for value in values.into_iter().filter(|v| !v.is_empty()) {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }

    Ok(CategoryDistribution::from_counts(counts))
}

#[cfg(test)]
#[path = "distribution_tests.rs"]
mod tests;
