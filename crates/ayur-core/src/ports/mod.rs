//! Abstract interfaces the application layer depends on.

pub mod catalog_repository;
pub mod clock;

pub use catalog_repository::CatalogRepository;
pub use clock::ClockPort;
