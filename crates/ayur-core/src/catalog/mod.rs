//! Catalog browsing logic and change notifications.

pub mod event;
pub mod list;

pub use event::CatalogEvent;
pub use list::{CatalogListState, CatalogPage, PAGE_SIZE};
