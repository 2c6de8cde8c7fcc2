//! Service layer
//!
//! Handlers stay thin and delegate to the services here.

pub mod greeting;
pub mod zip_lookup;

pub use greeting::greet;
pub use zip_lookup::ZipLookupService;
