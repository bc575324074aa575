//! Building queries and derived views
//!
//! Stateless, pure query functions over the immutable store: every call
//! re-evaluates against the store's records and returns a fresh view of
//! references. The [`ALL_CITIES`] sentinel widens any city filter to the
//! whole store.

use super::BuildingStore;
use crate::constants::ALL_CITIES;
use crate::models::BuildingRecord;
use std::collections::{BTreeMap, BTreeSet};

/// Result of a tallest-buildings query
///
/// `count` always equals `records.len()` and may be below the requested `n`
/// when fewer buildings match; the caller surfaces the actual count rather
/// than silently truncating.
#[derive(Debug, Clone)]
pub struct TallestResult<'a> {
    /// Matching records, tallest first
    pub records: Vec<&'a BuildingRecord>,

    /// Number of records actually returned
    pub count: usize,
}

impl BuildingStore {
    /// All records ordered by height descending
    ///
    /// The sort is stable: buildings of equal height keep their source-file
    /// order.
    pub fn sorted_by_height_desc(&self) -> Vec<&BuildingRecord> {
        let mut sorted: Vec<&BuildingRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.height.total_cmp(&a.height));
        sorted
    }

    /// Completed buildings only, tallest first
    pub fn completed(&self) -> Vec<&BuildingRecord> {
        self.sorted_by_height_desc()
            .into_iter()
            .filter(|record| record.is_completed)
            .collect()
    }

    /// Distinct city names, sorted ascending, with the [`ALL_CITIES`]
    /// sentinel prepended
    pub fn unique_city_list(&self) -> Vec<String> {
        let cities: BTreeSet<&str> = self.records.iter().map(|r| r.city.as_str()).collect();

        let mut list = Vec::with_capacity(cities.len() + 1);
        list.push(ALL_CITIES.to_string());
        list.extend(cities.into_iter().map(String::from));
        list
    }

    /// The `n` tallest buildings, optionally restricted to one city
    ///
    /// Ranks the full store regardless of completion status. When fewer than
    /// `n` buildings match, all matches are returned and `count` carries the
    /// actual number; that is a valid result, not an error.
    pub fn top_n_tallest(&self, city: &str, n: usize) -> TallestResult<'_> {
        let records: Vec<&BuildingRecord> = if city == ALL_CITIES {
            self.sorted_by_height_desc().into_iter().take(n).collect()
        } else {
            self.sorted_by_height_desc()
                .into_iter()
                .filter(|record| record.city == city)
                .take(n)
                .collect()
        };

        let count = records.len();
        TallestResult { records, count }
    }

    /// Completed buildings in one city, or all completed buildings for the
    /// [`ALL_CITIES`] sentinel; tallest first
    pub fn completed_in_city(&self, city: &str) -> Vec<&BuildingRecord> {
        let completed = self.completed();
        if city == ALL_CITIES {
            completed
        } else {
            completed
                .into_iter()
                .filter(|record| record.city == city)
                .collect()
        }
    }

    /// Buildings with `min_height <= height <= max_height`, inclusive on
    /// both ends, optionally restricted to one city; tallest first
    pub fn by_height_range_and_city(
        &self,
        city: &str,
        min_height: f64,
        max_height: f64,
    ) -> Vec<&BuildingRecord> {
        self.sorted_by_height_desc()
            .into_iter()
            .filter(|record| record.height >= min_height && record.height <= max_height)
            .filter(|record| city == ALL_CITIES || record.city == city)
            .collect()
    }

    /// Find which city a skyscraper is located in
    ///
    /// Case-insensitive, whitespace-trimmed exact match against each record's
    /// name. Duplicate names across cities are not reported as ambiguous: the
    /// first match in store order wins. `None` means no match, which is a
    /// valid "not found" result.
    pub fn find_city_of_skyscraper(&self, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.records
            .iter()
            .find(|record| record.name.trim().to_lowercase() == needle)
            .map(|record| record.city.as_str())
    }
}

/// Arithmetic mean of building height per raw completion year
///
/// Groups by the raw numeric year, including the `0` "unknown" sentinel;
/// years absent from the input produce no entry (no zero-fill).
pub fn average_height_by_completion_year(records: &[&BuildingRecord]) -> BTreeMap<i32, f64> {
    let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();

    for record in records {
        let entry = sums.entry(record.completion_year).or_insert((0.0, 0));
        entry.0 += record.height;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(year, (total, count))| (year, total / count as f64))
        .collect()
}
