//! Centralized error handling for the zip lookup service
//!
//! Errors fall into two groups. Startup errors ([`ConfigError`],
//! [`LoadError`]) are fatal: the process reports them and exits without
//! serving. Request errors are isolated to a single response and never
//! touch the index.
//!
//! # Usage
//!
//! ```rust
//! use zipsvr::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Ok("success".to_string())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for loader Results
pub type LoadResult<T> = Result<T, LoadError>;
