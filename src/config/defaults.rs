/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Environment variables
pub const ENV_ADDR: &str = "ADDR";
pub const ENV_DATASET: &str = "ZIPSVR_DATASET";
pub const ENV_DATASET_FORMAT: &str = "ZIPSVR_DATASET_FORMAT";

// Web server defaults
// Note: the bind address has no default and must be supplied
pub const DEFAULT_REQUEST_LOGGING: bool = true;

// Dataset defaults
pub const DEFAULT_DATASET_PATH: &str = "../data/zips.csv";
pub const DEFAULT_EXPECTED_RECORDS: usize = 43_000;
