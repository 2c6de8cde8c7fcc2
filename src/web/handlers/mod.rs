//! HTTP request handlers organized by endpoint

pub mod health;
pub mod hello;
pub mod zips;
