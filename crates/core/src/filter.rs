//! Filter-id lists, product predicates, and filter-option grouping.

use serde::{Deserialize, Serialize};

use crate::types::{FilterLevel, FilterOption, FilterOptionUid};

/// Separator between ids in the URL filter segment.
pub const FILTER_SEPARATOR: char = ',';

// =============================================================================
// FilterIdList
// =============================================================================

/// The set of filter identifiers currently narrowing the product query.
///
/// Parsing keeps the raw shape of the URL segment, so `""` becomes `[""]` and
/// `"a,,b"` keeps its empty entry. Empty ids never reach the backend: they are
/// dropped by [`FilterIdList::predicate_ids`] and therefore mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterIdList(Vec<String>);

impl FilterIdList {
    /// Create a list from already-split ids.
    #[must_use]
    pub const fn new(ids: Vec<String>) -> Self {
        Self(ids)
    }

    /// Split a comma-separated filter segment.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self(raw.split(FILTER_SEPARATOR).map(str::to_owned).collect())
    }

    /// All entries, including empty ones.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of entries, including empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-empty ids, in order.
    pub fn predicate_ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str).filter(|id| !id.is_empty())
    }

    /// Whether `id` is one of the non-empty entries.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        !id.is_empty() && self.0.iter().any(|existing| existing == id)
    }

    /// `base` followed by `self`, deduplicated, with empty ids removed.
    ///
    /// This is how a navigation's own filter ids combine with the ids picked
    /// in the URL.
    #[must_use]
    pub fn layered_on(&self, base: &[String]) -> Self {
        let mut merged: Vec<String> = Vec::with_capacity(base.len() + self.0.len());
        for id in base.iter().map(String::as_str).chain(self.predicate_ids()) {
            if !id.is_empty() && !merged.iter().any(|existing| existing == id) {
                merged.push(id.to_owned());
            }
        }
        Self(merged)
    }

    /// Copy of the list with `id` removed if present, appended otherwise.
    #[must_use]
    pub fn toggled(&self, id: &str) -> Self {
        let mut ids: Vec<String> = self.predicate_ids().map(str::to_owned).collect();
        if let Some(pos) = ids.iter().position(|existing| existing == id) {
            ids.remove(pos);
        } else if !id.is_empty() {
            ids.push(id.to_owned());
        }
        Self(ids)
    }

    /// Join back into a URL filter segment.
    #[must_use]
    pub fn to_segment(&self) -> String {
        self.0.join(",")
    }
}

impl From<Vec<String>> for FilterIdList {
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl From<FilterIdList> for Vec<String> {
    fn from(list: FilterIdList) -> Self {
        list.0
    }
}

// =============================================================================
// ProductFilter
// =============================================================================

/// One conjunct of the product predicate: the product's `filters` column
/// must match the given filter id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
    pub filters: RegexMatch,
}

/// Regex comparison operator understood by the catalog backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexMatch {
    #[serde(rename = "_regex")]
    pub regex: String,
}

/// Product predicate built from a filter-id list.
///
/// An empty predicate matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductFilter(Vec<FilterClause>);

impl ProductFilter {
    /// Build the conjunction of one clause per non-empty id.
    #[must_use]
    pub fn from_ids(ids: &FilterIdList) -> Self {
        Self(
            ids.predicate_ids()
                .map(|id| FilterClause {
                    filters: RegexMatch {
                        regex: id.to_owned(),
                    },
                })
                .collect(),
        )
    }

    /// The individual clauses.
    #[must_use]
    pub fn clauses(&self) -> &[FilterClause] {
        &self.0
    }

    /// Whether the predicate matches everything.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.0.is_empty()
    }
}

// =============================================================================
// Filter option grouping
// =============================================================================

/// A `filter`-level entry together with its `option`-level children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    #[serde(flatten)]
    pub filter: FilterOption,
    pub options: Vec<FilterOption>,
}

/// Attach each `option` entry to the `filter` entry it names as parent.
///
/// Filters keep their input order, as do the options inside each filter.
/// Options whose parent is not in the list, and entries of unknown level,
/// belong to no group.
#[must_use]
pub fn group_filter_options(entries: &[FilterOption]) -> Vec<FilterGroup> {
    entries
        .iter()
        .filter(|entry| entry.level == FilterLevel::Filter)
        .map(|filter| FilterGroup {
            filter: filter.clone(),
            options: options_of(entries, &filter.uid),
        })
        .collect()
}

fn options_of(entries: &[FilterOption], parent: &FilterOptionUid) -> Vec<FilterOption> {
    entries
        .iter()
        .filter(|entry| entry.level == FilterLevel::Option && entry.parent_uid.as_ref() == Some(parent))
        .cloned()
        .collect()
}
