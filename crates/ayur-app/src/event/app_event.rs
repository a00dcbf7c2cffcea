use ayur_core::catalog::CatalogEvent;

/// Application-level events views subscribe to.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Leave the wizard for the catalog list (successful submit or cancel).
    NavigateToCatalog,
    /// The persisted catalog changed; snapshots should be refreshed.
    CatalogChanged(CatalogEvent),
}
