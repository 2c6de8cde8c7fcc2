//! Domain models
//!
//! A [`ZipRecord`] is one postal entry. Records carry no identity beyond
//! their field values and are never mutated once loaded.

use serde::{Deserialize, Serialize};

/// A single postal record
///
/// Serialized as `{"zip": ..., "city": ..., "state": ...}`. Missing
/// fields in structured input decode to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ZipRecord {
    /// Postal identifier
    #[serde(rename = "zip")]
    pub code: String,
    /// Free-text locality name
    pub city: String,
    /// Administrative subdivision
    #[serde(rename = "state")]
    pub region: String,
}

impl ZipRecord {
    pub fn new(
        code: impl Into<String>,
        city: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            city: city.into(),
            region: region.into(),
        }
    }
}
