//! # ayur-infra
//!
//! Infrastructure adapters for the ingredient admin console: the file-backed
//! catalog repository and the system clock.

pub mod catalog;
pub mod time;

pub use catalog::FileCatalogRepository;
pub use time::SystemClock;
