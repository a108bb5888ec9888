//! Search state: the current criteria plus the current page.
//!
//! State changes only through the methods here, Elm style: one message per
//! criteria field, applied by [`SearchState::apply`]. The page resets to 1
//! on every criteria change because the old page number is meaningless over
//! a different result set; [`SearchState::set_page`] exists for pagination
//! controls and deliberately leaves the criteria alone.

use serde::{Deserialize, Serialize};

use crate::filter::FilterCriteria;
use crate::record::{Category, TransactionKind};

/// A single-field criteria change. `Some` sets the constraint, `None`
/// clears it.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaUpdate {
    Transaction(Option<TransactionKind>),
    Category(Option<Category>),
    Location(Option<String>),
    PriceMin(Option<f64>),
    PriceMax(Option<f64>),
    Bedrooms(Option<u32>),
    Bathrooms(Option<u32>),
    AreaMin(Option<f64>),
    AreaMax(Option<f64>),
    Search(Option<String>),
}

/// The single source of truth for what the listing page currently shows.
///
/// The URL query string is a derived projection of this state, never the
/// other way around. The one exception runs exactly once on page load, when
/// [`SearchState::from_query_string`] seeds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    criteria: FilterCriteria,
    page: u32,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Merge one criteria change and reset to the first page.
    pub fn apply(&mut self, update: CriteriaUpdate) {
        match update {
            CriteriaUpdate::Transaction(value) => self.criteria.transaction = value,
            CriteriaUpdate::Category(value) => self.criteria.category = value,
            CriteriaUpdate::Location(value) => self.criteria.location = normalize(value),
            CriteriaUpdate::PriceMin(value) => self.criteria.price_min = value,
            CriteriaUpdate::PriceMax(value) => self.criteria.price_max = value,
            CriteriaUpdate::Bedrooms(value) => self.criteria.bedrooms = value,
            CriteriaUpdate::Bathrooms(value) => self.criteria.bathrooms = value,
            CriteriaUpdate::AreaMin(value) => self.criteria.area_min = value,
            CriteriaUpdate::AreaMax(value) => self.criteria.area_max = value,
            CriteriaUpdate::Search(value) => self.criteria.search = normalize(value),
        }
        self.page = 1;
    }

    /// Drop every constraint and return to the first page.
    pub fn clear(&mut self) {
        self.criteria = FilterCriteria::default();
        self.page = 1;
    }

    /// Jump to a page without touching the criteria. Out-of-range values
    /// are clamped against the live result set by the pagination
    /// calculator, not here.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Assemble a load-time seed. The page-reset rule of [`apply`] is about
    /// interactive edits and does not concern restoring a shared URL.
    ///
    /// [`apply`]: SearchState::apply
    pub(crate) fn seeded(criteria: FilterCriteria, page: u32) -> Self {
        Self {
            criteria,
            page: page.max(1),
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty text inputs mean "no constraint", same as a cleared field.
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_on_page_one() {
        let state = SearchState::new();
        assert!(state.criteria().is_empty());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn criteria_changes_reset_the_page() {
        let mut state = SearchState::new();
        state.set_page(3);
        assert_eq!(state.page(), 3);

        state.apply(CriteriaUpdate::Bedrooms(Some(2)));
        assert_eq!(state.page(), 1);
        assert_eq!(state.criteria().bedrooms, Some(2));
    }

    #[test]
    fn clearing_a_field_also_resets_the_page() {
        let mut state = SearchState::new();
        state.apply(CriteriaUpdate::Bedrooms(Some(2)));
        state.set_page(2);

        state.apply(CriteriaUpdate::Bedrooms(None));
        assert_eq!(state.criteria().bedrooms, None);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn set_page_leaves_criteria_untouched() {
        let mut state = SearchState::new();
        state.apply(CriteriaUpdate::Search(Some("pool".into())));
        let before = state.criteria().clone();

        state.set_page(4);
        assert_eq!(state.criteria(), &before);
        assert_eq!(state.page(), 4);
    }

    #[test]
    fn set_page_floors_at_one() {
        let mut state = SearchState::new();
        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn updates_merge_field_by_field() {
        let mut state = SearchState::new();
        state.apply(CriteriaUpdate::Transaction(Some(TransactionKind::Rent)));
        state.apply(CriteriaUpdate::PriceMax(Some(2_000_000.0)));

        assert_eq!(
            state.criteria().transaction,
            Some(TransactionKind::Rent),
            "earlier fields survive later updates"
        );
        assert_eq!(state.criteria().price_max, Some(2_000_000.0));
    }

    #[test]
    fn empty_strings_clear_text_constraints() {
        let mut state = SearchState::new();
        state.apply(CriteriaUpdate::Location(Some(String::new())));
        assert_eq!(state.criteria().location, None);

        state.apply(CriteriaUpdate::Search(Some(String::new())));
        assert_eq!(state.criteria().search, None);
        assert!(state.criteria().is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = SearchState::new();
        state.apply(CriteriaUpdate::Category(Some(Category::Land)));
        state.set_page(2);

        state.clear();
        assert!(state.criteria().is_empty());
        assert_eq!(state.page(), 1);
    }
}
