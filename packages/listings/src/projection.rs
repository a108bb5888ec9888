//! Result projection: filter, paginate, slice.

use crate::filter::FilterCriteria;
use crate::pagination::{paginate, PageSlice};
use crate::record::ListingRecord;

/// The currently visible page of records plus its pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub visible: Vec<ListingRecord>,
    pub page: PageSlice,
}

/// Derive the visible page for `criteria` and `page` over the full catalog.
///
/// Pure and deterministic. The whole set is re-filtered on every call; with
/// a catalog of hundreds of records that is cheaper to reason about than any
/// cache, and the page count always reflects the filtered set, so a stale
/// page number clamps instead of slicing past the end.
pub fn project(
    records: &[ListingRecord],
    criteria: &FilterCriteria,
    page: u32,
    page_size: usize,
) -> Projection {
    let filtered: Vec<&ListingRecord> = records.iter().filter(|r| criteria.matches(r)).collect();
    let slice = paginate(filtered.len(), page_size, page);
    let visible = filtered[slice.start..slice.end]
        .iter()
        .map(|record| (*record).clone())
        .collect();

    Projection {
        visible,
        page: slice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Category, TransactionKind};
    use crate::store::{CriteriaUpdate, SearchState};

    const PAGE_SIZE: usize = 6;

    fn catalog() -> Vec<ListingRecord> {
        (0..10)
            .map(|i| ListingRecord {
                id: format!("prop-{i}"),
                title: format!("Listing {i}"),
                description: "A property".into(),
                price: 10_000_000.0 + i as f64 * 1_000_000.0,
                currency: Some("NGN".into()),
                location: "Ikeja".into(),
                state: "Lagos".into(),
                bedrooms: (i % 5) as u32 + 1,
                bathrooms: 2,
                area: 100.0 + i as f64 * 10.0,
                // Records 0, 1, 2 are rentals; the rest are sales.
                transaction: if i < 3 {
                    TransactionKind::Rent
                } else {
                    TransactionKind::Sale
                },
                category: Category::Apartment,
                images: Vec::new(),
                features: Vec::new(),
                agent: None,
                created_at: "2024-05-01T09:00:00Z".into(),
                slug: format!("listing-{i}"),
            })
            .collect()
    }

    #[test]
    fn unfiltered_catalog_pages_in_order() {
        // Scenario A: 10 records, page size 6, no filters.
        let records = catalog();
        let first = project(&records, &FilterCriteria::default(), 1, PAGE_SIZE);

        assert_eq!(first.page.total_pages, 2);
        assert_eq!(first.visible.len(), 6);
        assert_eq!(first.visible[0].id, "prop-0");
        assert_eq!(first.visible[5].id, "prop-5");

        let second = project(&records, &FilterCriteria::default(), 2, PAGE_SIZE);
        assert_eq!(second.visible.len(), 4);
        assert_eq!(second.visible[0].id, "prop-6");
    }

    #[test]
    fn filtering_shrinks_the_page_count() {
        // Scenario B: 3 of 10 records are rentals.
        let records = catalog();
        let mut state = SearchState::new();
        state.set_page(2);
        state.apply(CriteriaUpdate::Transaction(Some(TransactionKind::Rent)));

        let projection = project(&records, state.criteria(), state.page(), PAGE_SIZE);
        assert_eq!(state.page(), 1, "criteria change resets the page");
        assert_eq!(projection.page.total_items, 3);
        assert_eq!(projection.page.total_pages, 1);
        assert_eq!(projection.visible.len(), 3);
    }

    #[test]
    fn widening_a_filter_clamps_a_stale_page() {
        // Scenario C: on page 2, then the filtered set drops to 4 records.
        let records = catalog();
        let narrow = FilterCriteria::default();
        let on_page_two = project(&records, &narrow, 2, PAGE_SIZE);
        assert_eq!(on_page_two.page.current_page, 2);

        let wide = FilterCriteria {
            bedrooms: Some(4),
            ..Default::default()
        };
        let clamped = project(&records, &wide, 2, PAGE_SIZE);
        assert_eq!(clamped.page.total_items, 4);
        assert_eq!(clamped.page.current_page, 1);
        assert_eq!(clamped.visible.len(), 4);
    }

    #[test]
    fn inverted_range_projects_nothing() {
        // Scenario E.
        let records = catalog();
        let criteria = FilterCriteria {
            price_min: Some(50_000_000.0),
            price_max: Some(10_000_000.0),
            ..Default::default()
        };

        let projection = project(&records, &criteria, 1, PAGE_SIZE);
        assert!(projection.visible.is_empty());
        assert!(projection.page.is_empty());
        assert_eq!(projection.page.total_pages, 1);
    }

    #[test]
    fn empty_catalog_is_a_normal_state() {
        let projection = project(&[], &FilterCriteria::default(), 1, PAGE_SIZE);
        assert!(projection.visible.is_empty());
        assert_eq!(projection.page.total_pages, 1);
        assert_eq!(projection.page.current_page, 1);
    }

    #[test]
    fn url_seed_drives_the_projection() {
        // Scenario D: a pasted URL restores criteria and page together.
        let records = catalog();
        let state = SearchState::from_query_string("?type=sale&bedrooms=3&page=2");

        let projection = project(&records, state.criteria(), state.page(), PAGE_SIZE);
        // 7 sales, 5 of which have at least 3 bedrooms: one page only, so
        // the requested page 2 clamps.
        assert_eq!(projection.page.total_items, 5);
        assert_eq!(projection.page.current_page, 1);
        for record in &projection.visible {
            assert_eq!(record.transaction, TransactionKind::Sale);
            assert!(record.bedrooms >= 3);
        }
    }

    #[test]
    fn projection_is_stable_for_equal_inputs() {
        let records = catalog();
        let criteria = FilterCriteria {
            search: Some("listing".into()),
            ..Default::default()
        };
        assert_eq!(
            project(&records, &criteria, 1, PAGE_SIZE),
            project(&records, &criteria, 1, PAGE_SIZE)
        );
    }
}
