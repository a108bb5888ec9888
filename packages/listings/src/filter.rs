//! Filter criteria and the per-record predicate.

use serde::{Deserialize, Serialize};

use crate::record::{Category, ListingRecord, TransactionKind};

/// The visitor's current search constraints.
///
/// Every field is optional; an absent field imposes no constraint. Present
/// fields are combined with logical AND, so a record must satisfy all of
/// them to appear in the result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub transaction: Option<TransactionKind>,
    pub category: Option<Category>,
    pub location: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
    pub search: Option<String>,
}

impl FilterCriteria {
    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// Decide whether `record` satisfies every present criterion.
    ///
    /// Total over all well-formed inputs: never panics, no side effects.
    pub fn matches(&self, record: &ListingRecord) -> bool {
        if let Some(kind) = self.transaction {
            if record.transaction != kind {
                return false;
            }
        }

        if let Some(category) = self.category {
            if record.category != category {
                return false;
            }
        }

        if let Some(location) = &self.location {
            let needle = location.to_lowercase();
            if !record.location.to_lowercase().contains(&needle)
                && !record.state.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if !within(record.price, self.price_min, self.price_max) {
            return false;
        }

        if !within(record.area, self.area_min, self.area_max) {
            return false;
        }

        // Minimum semantics: "3 bedrooms" means three or more.
        if let Some(min) = self.bedrooms {
            if record.bedrooms < min {
                return false;
            }
        }

        if let Some(min) = self.bathrooms {
            if record.bathrooms < min {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !record.title.to_lowercase().contains(&needle)
                && !record.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        true
    }
}

/// Bounds check for one numeric dimension.
///
/// An inverted pair (`min > max`) admits no value at all: showing nothing
/// is preferred over silently showing wrong results.
fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return false;
        }
    }
    min.is_none_or(|lo| value >= lo) && max.is_none_or(|hi| value <= hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Agent;

    fn record() -> ListingRecord {
        ListingRecord {
            id: "prop-1".into(),
            title: "Modern 3-Bedroom Duplex".into(),
            description: "Spacious duplex with a swimming pool and gym".into(),
            price: 45_000_000.0,
            currency: Some("NGN".into()),
            location: "Lekki Phase 1".into(),
            state: "Lagos".into(),
            bedrooms: 3,
            bathrooms: 4,
            area: 320.0,
            transaction: TransactionKind::Sale,
            category: Category::House,
            images: vec!["https://cdn.example/p1.jpg".into()],
            features: vec!["Swimming Pool".into(), "Gym".into()],
            agent: Some(Agent {
                name: "Ada Obi".into(),
                email: "ada@example.com".into(),
                phone: "+2348000000000".into(),
                image: None,
            }),
            created_at: "2024-05-01T09:00:00Z".into(),
            slug: "modern-3-bedroom-duplex".into(),
        }
    }

    #[test]
    fn empty_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&record()));
    }

    #[test]
    fn transaction_kind_is_exact() {
        let criteria = FilterCriteria {
            transaction: Some(TransactionKind::Rent),
            ..Default::default()
        };
        assert!(!criteria.matches(&record()));

        let criteria = FilterCriteria {
            transaction: Some(TransactionKind::Sale),
            ..Default::default()
        };
        assert!(criteria.matches(&record()));
    }

    #[test]
    fn category_is_exact() {
        let criteria = FilterCriteria {
            category: Some(Category::Land),
            ..Default::default()
        };
        assert!(!criteria.matches(&record()));
    }

    #[test]
    fn location_matches_either_location_or_state_case_insensitively() {
        let by_location = FilterCriteria {
            location: Some("lekki".into()),
            ..Default::default()
        };
        assert!(by_location.matches(&record()));

        let by_state = FilterCriteria {
            location: Some("LAGOS".into()),
            ..Default::default()
        };
        assert!(by_state.matches(&record()));

        let elsewhere = FilterCriteria {
            location: Some("Abuja".into()),
            ..Default::default()
        };
        assert!(!elsewhere.matches(&record()));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let exact = FilterCriteria {
            price_min: Some(45_000_000.0),
            price_max: Some(45_000_000.0),
            ..Default::default()
        };
        assert!(exact.matches(&record()));

        let below = FilterCriteria {
            price_max: Some(44_999_999.0),
            ..Default::default()
        };
        assert!(!below.matches(&record()));

        let above = FilterCriteria {
            price_min: Some(45_000_001.0),
            ..Default::default()
        };
        assert!(!above.matches(&record()));
    }

    #[test]
    fn inverted_price_range_matches_nothing() {
        let criteria = FilterCriteria {
            price_min: Some(50_000_000.0),
            price_max: Some(10_000_000.0),
            ..Default::default()
        };
        // The record's price sits inside neither bound ordering; the
        // inverted pair must not degenerate into "matches everything".
        assert!(!criteria.matches(&record()));
    }

    #[test]
    fn inverted_area_range_matches_nothing() {
        let criteria = FilterCriteria {
            area_min: Some(400.0),
            area_max: Some(100.0),
            ..Default::default()
        };
        assert!(!criteria.matches(&record()));
    }

    #[test]
    fn bedroom_and_bathroom_counts_are_minimums() {
        let at_most_three = FilterCriteria {
            bedrooms: Some(3),
            ..Default::default()
        };
        assert!(at_most_three.matches(&record()));

        let four_plus = FilterCriteria {
            bedrooms: Some(4),
            ..Default::default()
        };
        assert!(!four_plus.matches(&record()));

        let bathrooms = FilterCriteria {
            bathrooms: Some(4),
            ..Default::default()
        };
        assert!(bathrooms.matches(&record()));
    }

    #[test]
    fn search_matches_title_or_description() {
        let in_title = FilterCriteria {
            search: Some("duplex".into()),
            ..Default::default()
        };
        assert!(in_title.matches(&record()));

        let in_description = FilterCriteria {
            search: Some("swimming pool".into()),
            ..Default::default()
        };
        assert!(in_description.matches(&record()));

        let nowhere = FilterCriteria {
            search: Some("penthouse".into()),
            ..Default::default()
        };
        assert!(!nowhere.matches(&record()));
    }

    #[test]
    fn all_present_criteria_must_hold() {
        let criteria = FilterCriteria {
            transaction: Some(TransactionKind::Sale),
            category: Some(Category::House),
            location: Some("lagos".into()),
            bedrooms: Some(2),
            search: Some("gym".into()),
            ..Default::default()
        };
        assert!(criteria.matches(&record()));

        let one_miss = FilterCriteria {
            bedrooms: Some(5),
            ..criteria
        };
        assert!(!one_miss.matches(&record()));
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut records = Vec::new();
        for (i, bedrooms) in [1u32, 2, 3, 4, 5].iter().enumerate() {
            let mut r = record();
            r.id = format!("prop-{i}");
            r.bedrooms = *bedrooms;
            records.push(r);
        }

        let criteria = FilterCriteria {
            bedrooms: Some(3),
            ..Default::default()
        };

        let once: Vec<_> = records.iter().filter(|r| criteria.matches(r)).collect();
        let twice: Vec<_> = once
            .iter()
            .copied()
            .filter(|r| criteria.matches(r))
            .collect();
        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }
}
