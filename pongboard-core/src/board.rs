//! Leaderboard state — stored order, sort toggle, live name filter.
//!
//! The two invariants from the source UI, preserved exactly:
//! - Sorting mutates the STORED order. The last sort is the new canonical
//!   order and survives applying and clearing a filter.
//! - Filtering never mutates. `visible()` derives a view on each call.

use crate::player::Named;
use crate::sort::{SortConfig, SortKey};

/// One leaderboard view: a fixed record set plus its two pieces of derived
/// mutable state (ordering and search string).
///
/// Seeded once at construction and never added to or removed from. The seed
/// order is taken as-is; callers pass rosters already ordered to match the
/// initial sort config, mirroring the source's pre-sorted literals.
pub struct Leaderboard<K: SortKey> {
    players: Vec<K::Record>,
    sort: SortConfig<K>,
    search: String,
}

impl<K: SortKey> Leaderboard<K> {
    pub fn new(players: Vec<K::Record>, sort: SortConfig<K>) -> Self {
        Self {
            players,
            sort,
            search: String::new(),
        }
    }

    pub fn sort(&self) -> SortConfig<K> {
        self.sort
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Sort-key click: flip direction on the active key, or adopt a new key
    /// ascending, then re-sort the stored order.
    pub fn toggle_sort(&mut self, key: K) {
        self.sort = self.sort.toggled(key);
        self.apply_sort();
    }

    /// Adopt a full sort config (restored preferences) and re-sort.
    pub fn set_sort(&mut self, sort: SortConfig<K>) {
        self.sort = sort;
        self.apply_sort();
    }

    fn apply_sort(&mut self) {
        let sort = self.sort;
        // sort_by is stable: equal keys retain their relative order.
        self.players.sort_by(|a, b| sort.compare(a, b));
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    fn matches(&self, record: &K::Record) -> bool {
        if self.search.is_empty() {
            return true;
        }
        record
            .name()
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    /// The ordered, filtered sequence to display. Case-insensitive substring
    /// match on the name only; the empty term matches all.
    pub fn visible(&self) -> Vec<&K::Record> {
        self.players.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.players.iter().filter(|p| self.matches(p)).count()
    }

    /// Full record set in its last-sorted order.
    pub fn players(&self) -> &[K::Record] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
