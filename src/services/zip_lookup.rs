//! City lookup service
//!
//! Wraps the shared [`CityIndex`] and produces the JSON bodies served by
//! the city endpoint.

use std::sync::Arc;

use crate::{
    errors::AppResult,
    index::{CityIndex, IndexStats},
    models::ZipRecord,
};

#[derive(Debug, Clone)]
pub struct ZipLookupService {
    index: Arc<CityIndex>,
}

impl ZipLookupService {
    pub fn new(index: CityIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }

    /// Records for a raw city name as it arrived in the request
    pub fn lookup_by_city(&self, city: &str) -> &[ZipRecord] {
        self.index.lookup(city)
    }

    /// Encode the records for `city` as a JSON array
    ///
    /// Unknown cities encode as `[]`. The body carries no trailing newline.
    pub fn render_city(&self, city: &str) -> AppResult<Vec<u8>> {
        let records = self.lookup_by_city(city);
        Ok(serde_json::to_vec(records)?)
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    pub fn index(&self) -> &CityIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ZipLookupService {
        ZipLookupService::new(CityIndex::build(vec![
            ZipRecord::new("98101", "Seattle", "WA"),
            ZipRecord::new("98102", "Seattle", "WA"),
            ZipRecord::new("10001", "New York", "NY"),
        ]))
    }

    #[test]
    fn test_render_known_city() {
        let body = service().render_city("SEATTLE").unwrap();
        assert_eq!(
            String::from_utf8(body).unwrap(),
            r#"[{"zip":"98101","city":"Seattle","state":"WA"},{"zip":"98102","city":"Seattle","state":"WA"}]"#
        );
    }

    #[test]
    fn test_render_unknown_city_is_empty_array() {
        let body = service().render_city("atlantis").unwrap();
        assert_eq!(body, b"[]");
    }

    #[test]
    fn test_render_empty_key() {
        assert_eq!(service().render_city("").unwrap(), b"[]");
    }

    #[test]
    fn test_clones_share_index() {
        let a = service();
        let b = a.clone();
        assert!(std::ptr::eq(a.index(), b.index()));
        assert_eq!(b.lookup_by_city("new york").len(), 1);
    }
}
