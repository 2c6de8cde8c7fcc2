//! City Index
//!
//! Maps a normalized city name to every record in that city, in load
//! order. The index is built once and only exposes read accessors, so it
//! can be shared across request workers without locking.
//!
//! Normalization is Unicode lower-casing only. Names are not trimmed and
//! casing is not locale-aware, so `" Seattle"` and `"Seattle"` land in
//! different groups.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::ZipRecord;

/// Normalize a city name into an index key
pub fn normalize_key(city: &str) -> String {
    city.to_lowercase()
}

/// Aggregate counts describing a built index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub records: usize,
    pub cities: usize,
    pub largest_group: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityIndex {
    groups: HashMap<String, Vec<ZipRecord>>,
    records: usize,
}

impl CityIndex {
    /// Group `records` by normalized city, preserving input order per group
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ZipRecord>,
    {
        let mut groups: HashMap<String, Vec<ZipRecord>> = HashMap::new();
        let mut count = 0;

        for record in records {
            groups
                .entry(normalize_key(&record.city))
                .or_default()
                .push(record);
            count += 1;
        }

        Self {
            groups,
            records: count,
        }
    }

    /// Records for `city`, matched exactly after normalization
    ///
    /// A city with no records yields an empty slice.
    pub fn lookup(&self, city: &str) -> &[ZipRecord] {
        self.get_normalized(&normalize_key(city))
    }

    /// Records stored under an already-normalized key
    pub fn get_normalized(&self, key: &str) -> &[ZipRecord] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.groups.contains_key(&normalize_key(city))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[ZipRecord])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct city keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of indexed records
    pub fn record_count(&self) -> usize {
        self.records
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.records,
            cities: self.groups.len(),
            largest_group: self.groups.values().map(Vec::len).max().unwrap_or(0),
        }
    }
}

impl FromIterator<ZipRecord> for CityIndex {
    fn from_iter<I: IntoIterator<Item = ZipRecord>>(iter: I) -> Self {
        Self::build(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Vec<ZipRecord> {
        vec![
            ZipRecord::new("98101", "Seattle", "WA"),
            ZipRecord::new("10001", "New York", "NY"),
            ZipRecord::new("98102", "SEATTLE", "WA"),
            ZipRecord::new("98103", "seattle", "WA"),
            ZipRecord::new("97201", "Portland", "OR"),
            ZipRecord::new("04101", "Portland", "ME"),
        ]
    }

    #[test]
    fn test_groups_preserve_load_order() {
        let index = CityIndex::build(sample());
        let codes: Vec<&str> = index.lookup("seattle").iter().map(|r| r.code.as_str()).collect();

        assert_eq!(codes, vec!["98101", "98102", "98103"]);
    }

    #[test]
    fn test_every_record_in_exactly_one_group() {
        let records = sample();
        let index = CityIndex::build(records.clone());

        for record in &records {
            let key = normalize_key(&record.city);
            let holders: Vec<&str> = index
                .groups()
                .filter(|(_, group)| group.contains(record))
                .map(|(k, _)| k)
                .collect();
            assert_eq!(holders, vec![key.as_str()]);
        }

        let total: usize = index.groups().map(|(_, g)| g.len()).sum();
        assert_eq!(total, records.len());
        assert_eq!(index.record_count(), records.len());
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = CityIndex::build(sample());
        let second = CityIndex::build(sample());

        let mut first_keys: Vec<&str> = first.keys().collect();
        let mut second_keys: Vec<&str> = second.keys().collect();
        first_keys.sort_unstable();
        second_keys.sort_unstable();
        assert_eq!(first_keys, second_keys);

        for key in first_keys {
            assert_eq!(first.get_normalized(key), second.get_normalized(key));
        }
        assert_eq!(first, second);
    }

    #[rstest]
    #[case("Seattle")]
    #[case("seattle")]
    #[case("SEATTLE")]
    #[case("sEaTtLe")]
    fn test_lookup_is_case_insensitive(#[case] query: &str) {
        let index = CityIndex::build(sample());
        assert_eq!(index.lookup(query).len(), 3);
    }

    #[test]
    fn test_no_trimming_or_partial_matching() {
        let index = CityIndex::build(sample());

        assert!(index.lookup(" seattle").is_empty());
        assert!(index.lookup("seat").is_empty());
        assert!(index.lookup("new york ").is_empty());
        assert_eq!(index.lookup("new york").len(), 1);
    }

    #[test]
    fn test_unicode_lowercasing() {
        let index = CityIndex::build(vec![ZipRecord::new("00000", "ÅLESUND", "NO")]);
        assert_eq!(index.lookup("ålesund").len(), 1);
        assert!(index.contains_city("Ålesund"));
    }

    #[test]
    fn test_absent_city_is_empty_slice() {
        let index = CityIndex::build(sample());
        assert!(index.lookup("atlantis").is_empty());
        assert!(!index.contains_city("atlantis"));
    }

    #[test]
    fn test_empty_input() {
        let index = CityIndex::build(Vec::new());

        assert!(index.is_empty());
        assert_eq!(
            index.stats(),
            IndexStats {
                records: 0,
                cities: 0,
                largest_group: 0
            }
        );
    }

    #[test]
    fn test_stats() {
        let index: CityIndex = sample().into_iter().collect();
        assert_eq!(
            index.stats(),
            IndexStats {
                records: 6,
                cities: 3,
                largest_group: 3
            }
        );
    }
}
