//! List-view state: free-text search plus fixed-page-size pagination.

use serde::{Deserialize, Serialize};

use crate::ingredient::IngredientSummary;

pub const PAGE_SIZE: usize = 5;

/// Search text and requested page for the catalog list.
///
/// The requested page is re-clamped into `[1, total_pages]` every time a page
/// is computed, so a narrowing search or a removal that shrinks the filtered
/// set pulls the view back onto a valid page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogListState {
    search: String,
    page: usize,
}

impl Default for CatalogListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

/// One rendered page of the filtered catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub items: Vec<IngredientSummary>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based display range; both zero when there are no results.
    pub start: usize,
    pub end: usize,
}

impl CatalogPage {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// The range caption the list footer shows.
    pub fn range_label(&self) -> String {
        if self.is_empty() {
            "No results".to_string()
        } else {
            format!(
                "Showing {}-{} of {} results",
                self.start, self.end, self.total_items
            )
        }
    }
}

impl CatalogListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Every search change resets to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Filter, clamp and slice the current page out of the live collection.
    pub fn page_of(&mut self, summaries: &[IngredientSummary]) -> CatalogPage {
        let filtered: Vec<&IngredientSummary> = summaries
            .iter()
            .filter(|summary| summary.matches(&self.search))
            .collect();

        let total_items = filtered.len();
        let total_pages = total_items.div_ceil(PAGE_SIZE).max(1);
        self.page = self.page.clamp(1, total_pages);

        let start_index = (self.page - 1) * PAGE_SIZE;
        let items: Vec<IngredientSummary> = filtered
            .into_iter()
            .skip(start_index)
            .take(PAGE_SIZE)
            .cloned()
            .collect();

        let (start, end) = if total_items == 0 {
            (0, 0)
        } else {
            (start_index + 1, start_index + items.len())
        };

        CatalogPage {
            items,
            page: self.page,
            total_pages,
            total_items,
            start,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogListState, PAGE_SIZE};
    use crate::ids::IngredientId;
    use crate::ingredient::{IngredientStatus, IngredientSummary};

    fn summary(id: i64, name: &str, description: &str) -> IngredientSummary {
        IngredientSummary {
            id: IngredientId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            status: IngredientStatus::Active,
            color: "#fef3c7".to_string(),
            icon: "🍃".to_string(),
        }
    }

    fn catalog(count: i64) -> Vec<IngredientSummary> {
        (1..=count)
            .map(|id| summary(id, &format!("Herb {id}"), &format!("Description {id}")))
            .collect()
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let summaries = vec![
            summary(1, "Khus Khus", "Enhances fertility"),
            summary(2, "Giloy", "A powerful IMMUNOMODULATOR"),
        ];
        let mut state = CatalogListState::new();

        state.set_search("immuno");
        let page = state.page_of(&summaries);
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].id, IngredientId::new(2));

        state.set_search("khus");
        let page = state.page_of(&summaries);
        assert_eq!(page.items[0].id, IngredientId::new(1));
    }

    #[test]
    fn no_matches_yields_an_explicit_empty_page() {
        let mut state = CatalogListState::new();
        state.set_search("turmeric");
        let page = state.page_of(&catalog(6));
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.range_label(), "No results");
    }

    #[test]
    fn pagination_slices_fixed_size_pages() {
        let mut state = CatalogListState::new();
        let summaries = catalog(12);

        let page = state.page_of(&summaries);
        assert_eq!(page.items.len(), PAGE_SIZE);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.range_label(), "Showing 1-5 of 12 results");

        state.go_to_page(3);
        let page = state.page_of(&summaries);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.range_label(), "Showing 11-12 of 12 results");
    }

    #[test]
    fn page_clamps_down_when_the_collection_shrinks() {
        let mut state = CatalogListState::new();
        let mut summaries = catalog(6);

        state.go_to_page(2);
        assert_eq!(state.page_of(&summaries).page, 2);

        // removing one item leaves 5: page 2 no longer exists
        summaries.pop();
        let page = state.page_of(&summaries);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn search_change_resets_to_page_one() {
        let mut state = CatalogListState::new();
        state.go_to_page(3);
        state.set_search("herb");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut state = CatalogListState::new();
        state.previous_page();
        assert_eq!(state.page(), 1);

        state.go_to_page(99);
        let page = state.page_of(&catalog(6));
        assert_eq!(page.page, 2, "clamped to the last page");
    }
}
