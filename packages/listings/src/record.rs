//! Listing record types.
//!
//! These mirror the normalized shape the CMS adapter produces. Records are
//! created and owned by the CMS; once fetched they are treated as immutable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a property is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Sale,
    Rent,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Sale => "sale",
            TransactionKind::Rent => "rent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Sale => "For Sale",
            TransactionKind::Rent => "For Rent",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(TransactionKind::Sale),
            "rent" => Ok(TransactionKind::Rent),
            _ => Err(UnknownVariant),
        }
    }
}

/// Property category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    House,
    Apartment,
    Land,
    Commercial,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::House => "house",
            Category::Apartment => "apartment",
            Category::Land => "land",
            Category::Commercial => "commercial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::House => "House",
            Category::Apartment => "Apartment",
            Category::Land => "Land",
            Category::Commercial => "Commercial",
        }
    }

    pub fn variants() -> &'static [Category] {
        &[
            Category::House,
            Category::Apartment,
            Category::Land,
            Category::Commercial,
        ]
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "house" => Ok(Category::House),
            "apartment" => Ok(Category::Apartment),
            "land" => Ok(Category::Land),
            "commercial" => Ok(Category::Commercial),
            _ => Err(UnknownVariant),
        }
    }
}

/// Parse error for the wire form of an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownVariant;

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown variant")
    }
}

impl std::error::Error for UnknownVariant {}

/// Contact block for the agent handling a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub image: Option<String>,
}

/// One property as displayed in a result list.
///
/// Invariants (upheld by the CMS adapter): `slug` is unique within the
/// active set; `price`, `bedrooms`, `bathrooms`, and `area` are all >= 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub currency: Option<String>,
    pub location: String,
    pub state: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    pub transaction: TransactionKind,
    pub category: Category,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub agent: Option<Agent>,
    pub created_at: String,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_kind_round_trips_through_wire_form() {
        for kind in [TransactionKind::Sale, TransactionKind::Rent] {
            assert_eq!(kind.as_str().parse::<TransactionKind>(), Ok(kind));
        }
    }

    #[test]
    fn category_round_trips_through_wire_form() {
        for category in Category::variants() {
            assert_eq!(category.as_str().parse::<Category>(), Ok(*category));
        }
    }

    #[test]
    fn unknown_wire_values_are_rejected() {
        assert!("lease".parse::<TransactionKind>().is_err());
        assert!("castle".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_wire_form() {
        let json = serde_json::to_string(&TransactionKind::Sale).unwrap();
        assert_eq!(json, "\"sale\"");
        let category: Category = serde_json::from_str("\"apartment\"").unwrap();
        assert_eq!(category, Category::Apartment);
    }
}
