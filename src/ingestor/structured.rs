//! Structured-text (JSON) record reader
//!
//! The whole stream must be one JSON array of record objects. Trailing
//! content after the array is a decode error.

use serde::de::{DeserializeSeed, Deserializer, SeqAccess, Visitor};
use std::fmt;
use std::io::{BufReader, Read};

use super::RecordReader;
use crate::errors::LoadResult;
use crate::models::ZipRecord;

#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredReader;

impl RecordReader for StructuredReader {
    fn read_records(&self, reader: &mut dyn Read, capacity: usize) -> LoadResult<Vec<ZipRecord>> {
        let mut de = serde_json::Deserializer::from_reader(BufReader::new(reader));
        let records = PresizedRecords { capacity }.deserialize(&mut de)?;
        de.end()?;
        Ok(records)
    }
}

/// Decodes a record array into a vector allocated up front
struct PresizedRecords {
    capacity: usize,
}

impl<'de> DeserializeSeed<'de> for PresizedRecords {
    type Value = Vec<ZipRecord>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for PresizedRecords {
    type Value = Vec<ZipRecord>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of zip records")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut records = Vec::with_capacity(self.capacity);
        while let Some(record) = seq.next_element::<ZipRecord>()? {
            records.push(record);
        }
        Ok(records)
    }
}
