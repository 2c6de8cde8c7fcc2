//! Record Loader
//!
//! Turns a dataset file into an ordered sequence of [`ZipRecord`]s. The
//! two encodings share one entry point, [`DatasetLoader`], which picks a
//! [`RecordReader`] by [`DatasetFormat`]. Loading is all-or-nothing: any
//! failure aborts and no records are returned.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

pub mod decompression;
pub mod delimited;
pub mod format;
pub mod structured;

pub use decompression::{CompressionFormat, open_stream};
pub use delimited::DelimitedReader;
pub use format::DatasetFormat;
pub use structured::StructuredReader;

use crate::config::{DatasetConfig, defaults::DEFAULT_EXPECTED_RECORDS};
use crate::errors::{LoadError, LoadResult};
use crate::models::ZipRecord;

/// Decodes one dataset encoding into records
///
/// `capacity` is an allocation hint for the output vector.
pub trait RecordReader {
    fn read_records(&self, reader: &mut dyn Read, capacity: usize) -> LoadResult<Vec<ZipRecord>>;
}

impl DatasetFormat {
    /// The reader for this encoding
    pub fn reader(&self) -> &'static dyn RecordReader {
        match self {
            Self::Delimited => &DelimitedReader,
            Self::Structured => &StructuredReader,
        }
    }
}

/// Loads a dataset in a fixed format
#[derive(Debug, Clone, Copy)]
pub struct DatasetLoader {
    format: DatasetFormat,
    expected_records: usize,
}

impl DatasetLoader {
    pub fn new(format: DatasetFormat) -> Self {
        Self {
            format,
            expected_records: DEFAULT_EXPECTED_RECORDS,
        }
    }

    /// Resolve the loader for a dataset configuration, inferring the
    /// format from the path when none is configured
    pub fn from_config(config: &DatasetConfig) -> LoadResult<Self> {
        let format = config
            .format
            .or_else(|| DatasetFormat::from_path(&config.path))
            .ok_or_else(|| LoadError::UnknownFormat {
                path: config.path.clone(),
            })?;

        Ok(Self::new(format).with_expected_records(config.expected_records))
    }

    pub fn with_expected_records(mut self, expected_records: usize) -> Self {
        self.expected_records = expected_records;
        self
    }

    pub fn format(&self) -> DatasetFormat {
        self.format
    }

    /// Load every record from an uncompressed stream
    pub fn load<R: Read>(&self, mut reader: R) -> LoadResult<Vec<ZipRecord>> {
        self.format
            .reader()
            .read_records(&mut reader, self.expected_records)
    }

    /// Open, decompress if needed, and load the dataset at `path`
    pub fn load_from_path(&self, path: impl AsRef<Path>) -> LoadResult<Vec<ZipRecord>> {
        let path = path.as_ref();
        let started = Instant::now();

        let file = File::open(path).map_err(|e| LoadError::open(path, e))?;
        let stream = open_stream(file)?;
        let records = self.load(stream)?;

        if records.is_empty() {
            warn!(
                path = %path.display(),
                format = %self.format,
                "Dataset contains no records; every lookup will return []"
            );
        }

        debug!(
            path = %path.display(),
            format = %self.format,
            records = records.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "Dataset loaded"
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    const CSV: &str = "zip,type,decommissioned,primary_city,acceptable_cities,unacceptable_cities,state\n\
                       98101,STANDARD,0,Seattle,,,WA\n\
                       98102,STANDARD,0,Seattle,,,WA\n\
                       10001,STANDARD,0,New York,,,NY\n";

    fn dataset_config(path: PathBuf, format: Option<DatasetFormat>) -> DatasetConfig {
        DatasetConfig {
            path,
            format,
            expected_records: 4,
        }
    }

    #[test]
    fn test_both_formats_yield_same_records() {
        let json = r#"[
            {"zip": "98101", "city": "Seattle", "state": "WA"},
            {"zip": "98102", "city": "Seattle", "state": "WA"},
            {"zip": "10001", "city": "New York", "state": "NY"}
        ]"#;

        let from_csv = DatasetLoader::new(DatasetFormat::Delimited)
            .load(CSV.as_bytes())
            .unwrap();
        let from_json = DatasetLoader::new(DatasetFormat::Structured)
            .load(json.as_bytes())
            .unwrap();

        assert_eq!(from_csv, from_json);
        assert_eq!(from_csv.len(), 3);
    }

    #[test]
    fn test_from_config_infers_format() {
        let loader =
            DatasetLoader::from_config(&dataset_config(PathBuf::from("zips.json"), None)).unwrap();
        assert_eq!(loader.format(), DatasetFormat::Structured);

        let loader = DatasetLoader::from_config(&dataset_config(
            PathBuf::from("zips.data"),
            Some(DatasetFormat::Delimited),
        ))
        .unwrap();
        assert_eq!(loader.format(), DatasetFormat::Delimited);

        let err = DatasetLoader::from_config(&dataset_config(PathBuf::from("zips.data"), None))
            .unwrap_err();
        assert!(matches!(err, LoadError::UnknownFormat { .. }));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let records = DatasetLoader::new(DatasetFormat::Delimited)
            .load_from_path(file.path())
            .unwrap();
        assert_eq!(records[2], ZipRecord::new("10001", "New York", "NY"));
    }

    #[test]
    fn test_empty_file_loads_with_no_records() {
        let file = NamedTempFile::new().unwrap();

        let records = DatasetLoader::new(DatasetFormat::Delimited)
            .load_from_path(file.path())
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let err = DatasetLoader::new(DatasetFormat::Delimited)
            .load_from_path("/nonexistent/zips.csv")
            .unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/zips.csv"));
    }
}
