//! Filter state, pagination and fetch bookkeeping shared by every
//! remotely-backed list page.
//!
//! `ListState` is the pure core: page, page size, sort and named filters,
//! plus a version counter. Components issue exactly one refetch per
//! version bump. `ListController` wraps it in signals and adds the
//! request sequence stamping that drops out-of-order responses.

use contracts::list::{ListQuery, Paged, SortDirection};
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Page sizes offered by the pagination controls
pub const PAGE_SIZES: [u64; 3] = [10, 25, 50];

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    page: u64,
    page_size: u64,
    sort_column: Option<String>,
    sort_direction: SortDirection,
    filters: BTreeMap<String, String>,
    version: u64,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZES[0],
            sort_column: None,
            sort_direction: SortDirection::Asc,
            filters: BTreeMap::new(),
            version: 0,
        }
    }

    pub fn sorted_by(mut self, column: &str, direction: SortDirection) -> Self {
        self.sort_column = Some(column.to_string());
        self.sort_direction = direction;
        self
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn sort_column(&self) -> Option<&str> {
        self.sort_column.as_deref()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn filter(&self, name: &str) -> &str {
        self.filters.get(name).map(String::as_str).unwrap_or("")
    }

    /// Bumped once per tracked change; drives the refetch effect
    pub fn version(&self) -> u64 {
        self.version
    }

    /// A page move keeps filters untouched
    pub fn set_page(&mut self, page: u64) {
        let page = page.max(1);
        if page != self.page {
            self.page = page;
            self.version += 1;
        }
    }

    /// A new page size restarts from page 1
    pub fn set_page_size(&mut self, size: u64) {
        if size != self.page_size {
            self.page_size = size;
            self.page = 1;
            self.version += 1;
        }
    }

    /// Any filter change resets to page 1 so the request can never point
    /// past the filtered result set. Setting an empty value clears the
    /// filter.
    pub fn set_filter(&mut self, name: &str, value: &str) {
        let changed = if value.trim().is_empty() {
            self.filters.remove(name).is_some()
        } else if self.filters.get(name).map(String::as_str) == Some(value) {
            false
        } else {
            self.filters.insert(name.to_string(), value.to_string());
            true
        };
        if changed {
            self.page = 1;
            self.version += 1;
        }
    }

    /// Repeated clicks on the same column flip the direction
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_column.as_deref() == Some(column) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = Some(column.to_string());
            self.sort_direction = SortDirection::Asc;
        }
        self.version += 1;
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.len()
    }

    pub fn to_query(&self) -> ListQuery {
        let mut query = ListQuery::new(self.page, self.page_size);
        if let Some(column) = &self.sort_column {
            query = query.sorted_by(column, self.sort_direction);
        }
        for (name, value) in &self.filters {
            query = query.filter(name, value);
        }
        query
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Signal wrapper owning one list page: rows, total count, loading and
/// error state, and the monotonically increasing request stamps.
pub struct ListController<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub state: RwSignal<ListState>,
    pub items: RwSignal<Vec<T>>,
    pub total_records: RwSignal<u64>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    issued: StoredValue<u64>,
}

// Signals and stored values are Copy handles; a derive would demand
// T: Copy, which row types are not
impl<T: Clone + Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: Clone + Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(state: ListState) -> Self {
        Self {
            state: RwSignal::new(state),
            items: RwSignal::new(Vec::new()),
            total_records: RwSignal::new(0),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            issued: StoredValue::new(0),
        }
    }

    /// Stamp a new fetch. Every network-triggering change toggles the
    /// loading flag, not just the first load.
    pub fn begin_fetch(&self) -> u64 {
        let seq = self.issued.get_value() + 1;
        self.issued.set_value(seq);
        self.loading.set(true);
        seq
    }

    /// Apply a response only if it belongs to the most recently issued
    /// request; a later-issued fetch wins regardless of arrival order.
    pub fn apply_page(&self, seq: u64, result: Result<Paged<T>, String>) {
        if seq != self.issued.get_value() {
            log::debug!("dropping stale list response (seq {seq})");
            return;
        }
        self.loading.set(false);
        match result {
            Ok(page) => {
                self.items.set(page.data);
                self.total_records.set(page.total_records);
                self.error.set(None);
            }
            Err(e) => self.error.set(Some(e)),
        }
    }

    pub fn total_pages(&self) -> u64 {
        Paged::<T>::pages_for(
            self.total_records.get(),
            self.state.with(|s| s.page_size()),
        )
    }

    /// Optimistic update: replace one row by key after the server
    /// confirmed the write; no refetch.
    pub fn apply_updated(&self, key: &str, record: T, row_key: fn(&T) -> String) {
        self.items
            .update(|items| crate::shared::list_utils::apply_updated(items, key, record, row_key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_change_resets_page() {
        let mut state = ListState::new();
        state.set_page(3);
        assert_eq!(state.page(), 3);
        state.set_filter("customerId", "c1");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn page_change_keeps_filters() {
        let mut state = ListState::new();
        state.set_filter("status", "Pending");
        state.set_page(2);
        assert_eq!(state.filter("status"), "Pending");
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut state = ListState::new();
        state.set_page(4);
        state.set_page_size(25);
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 25);
    }

    #[test]
    fn each_change_bumps_version_exactly_once() {
        let mut state = ListState::new();
        let v0 = state.version();
        state.set_filter("customerId", "c1");
        assert_eq!(state.version(), v0 + 1);
        state.set_filter("customerId", "c1"); // no-op
        assert_eq!(state.version(), v0 + 1);
        state.set_page(2);
        assert_eq!(state.version(), v0 + 2);
        state.set_page(2); // no-op
        assert_eq!(state.version(), v0 + 2);
        state.set_filter("customerId", ""); // clears -> reset + bump
        assert_eq!(state.version(), v0 + 3);
        state.set_filter("customerId", ""); // already clear
        assert_eq!(state.version(), v0 + 3);
    }

    #[test]
    fn toggle_sort_flips_direction_on_same_column() {
        let mut state = ListState::new().sorted_by("OrderDate", SortDirection::Desc);
        state.toggle_sort("OrderDate");
        assert_eq!(state.sort_direction(), SortDirection::Asc);
        state.toggle_sort("Status");
        assert_eq!(state.sort_column(), Some("Status"));
        assert_eq!(state.sort_direction(), SortDirection::Asc);
    }

    #[test]
    fn query_rendering_omits_cleared_filters() {
        let mut state = ListState::new();
        state.set_filter("customerId", "c1");
        state.set_filter("status", "Pending");
        state.set_filter("status", "");
        assert_eq!(
            state.to_query().to_query_string(),
            "page=1&pageSize=10&customerId=c1"
        );
    }
}
