//! Queryable catalog store: free-text/family/habitat filtering, stable
//! sorting, and 1-based pagination over an immutable record list.
//!
//! The store caches a filtered-and-sorted view (as indices into the record
//! list) and recomputes it only on filter or sort mutations, never on
//! pagination-only changes. Every operation is total: out-of-range pages
//! and unmatched filter values degrade to a no-op or an empty result set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::record::CatalogRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    ScientificName,
    Family,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Mutable query state owned by the store. Empty filter strings mean "no
/// constraint"; `sort` is `None` until a sort is requested, leaving the
/// view in catalog (traversal) order; `page_index` is 1-based and always
/// within `[1, max(1, ceil(filtered / page_size))]` after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    pub family_filter: String,
    pub habitat_filter: String,
    pub sort: Option<(SortKey, SortDirection)>,
    pub page_index: usize,
    pub page_size: usize,
}

impl QueryState {
    fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            family_filter: String::new(),
            habitat_filter: String::new(),
            sort: None,
            page_index: 1,
            page_size: page_size.max(1),
        }
    }
}

/// Partial filter update. `None` fields keep their prior value; an update
/// with no fields set is a complete no-op (it does not reset the page).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub search: Option<String>,
    pub family: Option<String>,
    pub habitat: Option<String>,
}

impl FilterUpdate {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn family(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::default()
        }
    }

    pub fn habitat(habitat: impl Into<String>) -> Self {
        Self {
            habitat: Some(habitat.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.family.is_none() && self.habitat.is_none()
    }
}

/// One page of the filtered-and-sorted view, plus the totals pagination
/// controls need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub records: Vec<&'a CatalogRecord>,
    pub page_index: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Distinct-value summary over the full (unfiltered) record list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_records: usize,
    pub families: BTreeSet<String>,
    pub habitats: BTreeSet<String>,
    pub with_video: usize,
    pub with_reference: usize,
}

#[derive(Debug)]
pub struct CatalogStore {
    records: Vec<CatalogRecord>,
    query: QueryState,
    /// Indices into `records`, filtered and sorted.
    view: Vec<usize>,
}

impl CatalogStore {
    pub fn new(records: Vec<CatalogRecord>, page_size: usize) -> Self {
        let mut store = Self {
            query: QueryState::new(page_size),
            view: Vec::with_capacity(records.len()),
            records,
        };
        store.rebuild_view();
        store
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Merge the provided filter fields into the query state, reset to the
    /// first page, and recompute the view. An update carrying no fields
    /// leaves everything untouched, including the page index.
    pub fn set_filters(&mut self, update: FilterUpdate) {
        if update.is_empty() {
            return;
        }
        if let Some(search) = update.search {
            self.query.search_text = search;
        }
        if let Some(family) = update.family {
            self.query.family_filter = family;
        }
        if let Some(habitat) = update.habitat {
            self.query.habitat_filter = habitat;
        }
        self.query.page_index = 1;
        self.rebuild_view();
    }

    /// Clear all three filters and return to the first page.
    pub fn reset_filters(&mut self) {
        self.query.search_text.clear();
        self.query.family_filter.clear();
        self.query.habitat_filter.clear();
        self.query.page_index = 1;
        self.rebuild_view();
    }

    /// Change the sort, reset to the first page, and re-sort the cached
    /// view in place. The filtered set is untouched.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.query.sort = Some((key, direction));
        self.query.page_index = 1;
        self.sort_view();
    }

    /// Jump to page `n` if it is within `[1, total_pages]`; otherwise a
    /// silent no-op.
    pub fn go_to_page(&mut self, n: usize) {
        if (1..=self.total_pages()).contains(&n) {
            self.query.page_index = n;
        }
    }

    pub fn total_pages(&self) -> usize {
        self.view.len().div_ceil(self.query.page_size).max(1)
    }

    /// The current page of the filtered-and-sorted view.
    pub fn get_page(&self) -> Page<'_> {
        let start = (self.query.page_index - 1) * self.query.page_size;
        let end = (start + self.query.page_size).min(self.view.len());
        let records = if start < self.view.len() {
            self.view[start..end]
                .iter()
                .map(|&i| &self.records[i])
                .collect()
        } else {
            Vec::new()
        };
        Page {
            records,
            page_index: self.query.page_index,
            total_pages: self.total_pages(),
            total_count: self.view.len(),
        }
    }

    /// Distinct family/habitat values (case-sensitive, empty strings
    /// excluded) and media counts, over the full record list.
    pub fn get_stats(&self) -> CatalogStats {
        let mut families = BTreeSet::new();
        let mut habitats = BTreeSet::new();
        let mut with_video = 0;
        let mut with_reference = 0;

        for record in &self.records {
            if !record.family.is_empty() {
                families.insert(record.family.clone());
            }
            if !record.habitat.is_empty() {
                habitats.insert(record.habitat.clone());
            }
            if record.has_video() {
                with_video += 1;
            }
            if record.has_reference() {
                with_reference += 1;
            }
        }

        CatalogStats {
            total_records: self.records.len(),
            families,
            habitats,
            with_video,
            with_reference,
        }
    }

    pub fn record_by_id(&self, id: &str) -> Option<&CatalogRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records_in_family(&self, family: &str) -> Vec<&CatalogRecord> {
        self.records.iter().filter(|r| r.family == family).collect()
    }

    fn rebuild_view(&mut self) {
        let search = self.query.search_text.to_lowercase();
        let habitat = self.query.habitat_filter.to_lowercase();

        self.view = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| Self::matches(record, &search, &self.query.family_filter, &habitat))
            .map(|(i, _)| i)
            .collect();
        self.sort_view();
    }

    fn matches(record: &CatalogRecord, search: &str, family: &str, habitat: &str) -> bool {
        let matches_search = search.is_empty()
            || record.common_name.to_lowercase().contains(search)
            || record.scientific_name.to_lowercase().contains(search)
            || record.description.to_lowercase().contains(search);

        let matches_family = family.is_empty() || record.family == family;

        let matches_habitat =
            habitat.is_empty() || record.habitat.to_lowercase().contains(habitat);

        matches_search && matches_family && matches_habitat
    }

    fn sort_view(&mut self) {
        let Some((key, direction)) = self.query.sort else {
            return;
        };
        let records = &self.records;

        // Stable sort: ties keep their filtered (original relative) order,
        // in both directions.
        self.view.sort_by(|&a, &b| {
            let ordering = sort_value(&records[a], key).cmp(&sort_value(&records[b], key));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

fn sort_value(record: &CatalogRecord, key: SortKey) -> String {
    match key {
        SortKey::Name => record.common_name.to_lowercase(),
        SortKey::ScientificName => record.scientific_name.to_lowercase(),
        SortKey::Family => record.family.to_lowercase(),
    }
}
