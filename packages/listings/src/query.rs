//! Query-string synchronization.
//!
//! A filtered view must be shareable: the current [`SearchState`] serializes
//! into the page's query string, and a pasted URL restores it on load. The
//! recognized parameter names are case-sensitive: `type`, `category`,
//! `location`, `priceMin`, `priceMax`, `bedrooms`, `bathrooms`, `areaMin`,
//! `areaMax`, `search`, `page`. Unknown parameters are ignored; the URL is
//! user-editable, so malformed values are dropped rather than rejected.

use std::borrow::Cow;

use crate::filter::FilterCriteria;
use crate::store::SearchState;

/// The browser-visible location of the query string, injected so the sync
/// layer can be exercised without a browser.
pub trait QueryStringHost {
    /// Current query string, with or without the leading `?`.
    fn read(&self) -> String;

    /// Replace the query string without adding a history entry. An empty
    /// `query` restores the bare path.
    fn replace(&self, query: &str);
}

impl SearchState {
    /// Restore state from a query string. Runs exactly once, on page load.
    pub fn from_query_string(query: &str) -> Self {
        let mut criteria = FilterCriteria::default();
        let mut page = 1u32;
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let Some(value) = decode(parts.next().unwrap_or("")) else {
                tracing::debug!(key, "dropping undecodable query value");
                continue;
            };
            if value.is_empty() {
                continue;
            }

            match key {
                "type" => criteria.transaction = parse_variant(key, &value),
                "category" => criteria.category = parse_variant(key, &value),
                "location" => criteria.location = Some(value),
                "priceMin" => criteria.price_min = parse_bound(key, &value),
                "priceMax" => criteria.price_max = parse_bound(key, &value),
                "bedrooms" => criteria.bedrooms = parse_count(key, &value),
                "bathrooms" => criteria.bathrooms = parse_count(key, &value),
                "areaMin" => criteria.area_min = parse_bound(key, &value),
                "areaMax" => criteria.area_max = parse_bound(key, &value),
                "search" => criteria.search = Some(value),
                "page" => page = parse_count(key, &value).unwrap_or(1).max(1),
                _ => {}
            }
        }

        SearchState::seeded(criteria, page)
    }

    /// Serialize to the canonical shareable form.
    ///
    /// Only present fields are emitted, `page` is omitted when it is 1, and
    /// the field order is fixed, so output is deterministic and
    /// `from_query_string(to_query_string(s))` restores `s` field for field.
    pub fn to_query_string(&self) -> String {
        let criteria = self.criteria();
        let mut pairs: Vec<(&'static str, Cow<'_, str>)> = Vec::new();

        if let Some(kind) = criteria.transaction {
            pairs.push(("type", kind.as_str().into()));
        }
        if let Some(category) = criteria.category {
            pairs.push(("category", category.as_str().into()));
        }
        if let Some(location) = &criteria.location {
            pairs.push(("location", location.as_str().into()));
        }
        if let Some(min) = criteria.price_min {
            pairs.push(("priceMin", min.to_string().into()));
        }
        if let Some(max) = criteria.price_max {
            pairs.push(("priceMax", max.to_string().into()));
        }
        if let Some(min) = criteria.bedrooms {
            pairs.push(("bedrooms", min.to_string().into()));
        }
        if let Some(min) = criteria.bathrooms {
            pairs.push(("bathrooms", min.to_string().into()));
        }
        if let Some(min) = criteria.area_min {
            pairs.push(("areaMin", min.to_string().into()));
        }
        if let Some(max) = criteria.area_max {
            pairs.push(("areaMax", max.to_string().into()));
        }
        if let Some(search) = &criteria.search {
            pairs.push(("search", search.as_str().into()));
        }
        if self.page() > 1 {
            pairs.push(("page", self.page().to_string().into()));
        }

        pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Decode one percent-encoded query value. `+` is a space, per form
/// encoding. Invalid UTF-8 yields `None`.
fn decode(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(Cow::into_owned)
}

fn parse_variant<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    let parsed = value.parse::<T>().ok();
    if parsed.is_none() {
        tracing::debug!(key, value, "dropping unrecognized query value");
    }
    parsed
}

fn parse_bound(key: &str, value: &str) -> Option<f64> {
    let parsed = value.parse::<f64>().ok().filter(|n| n.is_finite());
    if parsed.is_none() {
        tracing::debug!(key, value, "dropping malformed numeric query value");
    }
    parsed
}

fn parse_count(key: &str, value: &str) -> Option<u32> {
    let parsed = value.parse::<u32>().ok();
    if parsed.is_none() {
        tracing::debug!(key, value, "dropping malformed numeric query value");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Category, TransactionKind};
    use crate::store::CriteriaUpdate;

    #[test]
    fn empty_query_yields_empty_state() {
        for query in ["", "?"] {
            let state = SearchState::from_query_string(query);
            assert!(state.criteria().is_empty());
            assert_eq!(state.page(), 1);
        }
    }

    #[test]
    fn recognized_keys_are_parsed() {
        let state = SearchState::from_query_string("?type=sale&bedrooms=3&page=2");
        assert_eq!(state.criteria().transaction, Some(TransactionKind::Sale));
        assert_eq!(state.criteria().bedrooms, Some(3));
        assert_eq!(state.criteria().category, None);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let state = SearchState::from_query_string("utm_source=mail&category=land&ref=abc");
        assert_eq!(state.criteria().category, Some(Category::Land));
        assert_eq!(state.criteria().search, None);
    }

    #[test]
    fn malformed_numbers_are_dropped_not_errors() {
        let state =
            SearchState::from_query_string("priceMin=abc&priceMax=1e4&bedrooms=-2&areaMin=NaN");
        assert_eq!(state.criteria().price_min, None);
        assert_eq!(state.criteria().price_max, Some(10_000.0));
        assert_eq!(state.criteria().bedrooms, None);
        assert_eq!(state.criteria().area_min, None, "non-finite is dropped");
    }

    #[test]
    fn empty_values_impose_no_constraint() {
        let state = SearchState::from_query_string("location=&search=&type=");
        assert!(state.criteria().is_empty());
    }

    #[test]
    fn unrecognized_enum_values_are_dropped() {
        let state = SearchState::from_query_string("type=lease&category=castle");
        assert!(state.criteria().is_empty());
    }

    #[test]
    fn percent_encoding_round_trips() {
        let state = SearchState::from_query_string("location=Port%20Harcourt&search=2%2B1+flat");
        assert_eq!(state.criteria().location.as_deref(), Some("Port Harcourt"));
        assert_eq!(state.criteria().search.as_deref(), Some("2+1 flat"));

        let reparsed = SearchState::from_query_string(&state.to_query_string());
        assert_eq!(reparsed, state);
    }

    #[test]
    fn page_one_is_omitted_from_the_canonical_form() {
        let mut state = SearchState::new();
        state.apply(CriteriaUpdate::Category(Some(Category::House)));
        assert_eq!(state.to_query_string(), "category=house");

        state.set_page(3);
        assert_eq!(state.to_query_string(), "category=house&page=3");
    }

    #[test]
    fn empty_state_serializes_to_nothing() {
        assert_eq!(SearchState::new().to_query_string(), "");
    }

    #[test]
    fn serialization_is_deterministic() {
        let mut state = SearchState::new();
        state.apply(CriteriaUpdate::Search(Some("garden flat".into())));
        state.apply(CriteriaUpdate::PriceMax(Some(75_000_000.0)));
        assert_eq!(state.to_query_string(), state.to_query_string());
    }

    #[test]
    fn full_criteria_round_trip() {
        let mut state = SearchState::new();
        state.apply(CriteriaUpdate::Transaction(Some(TransactionKind::Rent)));
        state.apply(CriteriaUpdate::Category(Some(Category::Apartment)));
        state.apply(CriteriaUpdate::Location(Some("Victoria Island".into())));
        state.apply(CriteriaUpdate::PriceMin(Some(500_000.0)));
        state.apply(CriteriaUpdate::PriceMax(Some(5_000_000.0)));
        state.apply(CriteriaUpdate::Bedrooms(Some(2)));
        state.apply(CriteriaUpdate::Bathrooms(Some(1)));
        state.apply(CriteriaUpdate::AreaMin(Some(80.5)));
        state.apply(CriteriaUpdate::AreaMax(Some(240.0)));
        state.apply(CriteriaUpdate::Search(Some("sea view".into())));
        state.set_page(2);

        let reparsed = SearchState::from_query_string(&state.to_query_string());
        assert_eq!(reparsed, state);
    }

    #[test]
    fn host_round_trip_restores_the_same_state() {
        use std::cell::RefCell;

        // In-memory stand-in for the address bar.
        struct MemoryHost {
            query: RefCell<String>,
        }

        impl QueryStringHost for MemoryHost {
            fn read(&self) -> String {
                self.query.borrow().clone()
            }

            fn replace(&self, query: &str) {
                *self.query.borrow_mut() = query.to_string();
            }
        }

        let host = MemoryHost {
            query: RefCell::new("?category=apartment&bedrooms=2".into()),
        };

        // Load, mutate, write back, reload: the reloaded state matches.
        let mut state = SearchState::from_query_string(&host.read());
        assert_eq!(state.criteria().category, Some(Category::Apartment));

        state.apply(CriteriaUpdate::Search(Some("garden".into())));
        state.set_page(2);
        host.replace(&state.to_query_string());

        let restored = SearchState::from_query_string(&host.read());
        assert_eq!(restored, state);
        assert_eq!(restored.page(), 2);
    }

    #[test]
    fn page_zero_in_the_url_falls_back_to_one() {
        let state = SearchState::from_query_string("page=0");
        assert_eq!(state.page(), 1);

        let state = SearchState::from_query_string("page=two");
        assert_eq!(state.page(), 1);
    }
}
