//! Raw wire types for Sanity documents.
//!
//! Field names and casing mirror the studio schemas. Everything except the
//! document id is optional on the wire; normalization decides what is
//! defaulted and what makes a document unusable.

use serde::Deserialize;
use thiserror::Error;

use listings::{Agent, ListingRecord};

/// A Sanity slug object (`{ "current": "..." }`).
#[derive(Debug, Clone, Deserialize)]
pub struct RawSlug {
    pub current: Option<String>,
}

/// A property location as authored in the studio. Older documents carry a
/// plain string; newer ones a structured object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawLocation {
    Text(String),
    Structured {
        city: Option<String>,
        address: Option<String>,
        name: Option<String>,
    },
    Other(serde_json::Value),
}

impl RawLocation {
    /// Coerce to a display string: city, then address, then name, else a
    /// fixed fallback. Empty strings count as absent.
    pub fn display_string(&self) -> String {
        const FALLBACK: &str = "Unknown location";
        match self {
            RawLocation::Text(s) => s.clone(),
            RawLocation::Structured {
                city,
                address,
                name,
            } => [city, address, name]
                .into_iter()
                .flatten()
                .find(|s| !s.is_empty())
                .cloned()
                .unwrap_or_else(|| FALLBACK.to_string()),
            RawLocation::Other(_) => FALLBACK.to_string(),
        }
    }
}

/// Agent contact block as stored on a property document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAgent {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
}

/// A `property` document as returned by [`crate::queries::PROPERTIES`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProperty {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<RawSlug>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub location: Option<RawLocation>,
    pub state: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<f64>,
    pub property_type: Option<String>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub agent: Option<RawAgent>,
    pub created_at: Option<String>,
}

/// A property document that cannot be normalized.
#[derive(Debug, Error)]
#[error("property {id}: {reason}")]
pub struct InvalidProperty {
    pub id: String,
    pub reason: String,
}

impl RawProperty {
    /// Normalize into the shape the search engine works over.
    ///
    /// Presentation fields degrade gracefully (missing text becomes empty,
    /// missing collections become empty vecs), but the classification
    /// enums are load-bearing for filtering, so a document with an
    /// unrecognized `propertyType` or `category` is rejected rather than
    /// misfiled.
    pub fn into_record(self) -> Result<ListingRecord, InvalidProperty> {
        let transaction = self
            .property_type
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|_| InvalidProperty {
                id: self.id.clone(),
                reason: format!("unrecognized propertyType {:?}", self.property_type),
            })?;

        let category = self
            .category
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|_| InvalidProperty {
                id: self.id.clone(),
                reason: format!("unrecognized category {:?}", self.category),
            })?;

        Ok(ListingRecord {
            transaction,
            category,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            currency: self.currency,
            location: self
                .location
                .map(|l| l.display_string())
                .unwrap_or_else(|| "Unknown location".to_string()),
            state: self.state.unwrap_or_default(),
            bedrooms: self.bedrooms.unwrap_or_default(),
            bathrooms: self.bathrooms.unwrap_or_default(),
            area: self.area.unwrap_or_default(),
            images: self.images.unwrap_or_default(),
            features: self.features.unwrap_or_default(),
            agent: self.agent.map(|agent| Agent {
                name: agent.name.unwrap_or_default(),
                email: agent.email.unwrap_or_default(),
                phone: agent.phone.unwrap_or_default(),
                image: agent.image,
            }),
            created_at: self.created_at.unwrap_or_default(),
            slug: self
                .slug
                .and_then(|slug| slug.current)
                .unwrap_or_default(),
            id: self.id,
        })
    }
}

/// Main image of a blog post.
#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    pub url: Option<String>,
    pub alt: Option<String>,
}

/// A blog author, dereferenced into the post.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAuthor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<RawSlug>,
    pub image: Option<RawImage>,
    pub bio: Option<String>,
    pub email: Option<String>,
}

/// A `blog` document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<RawSlug>,
    pub excerpt: Option<String>,
    pub main_image: Option<RawImage>,
    pub category: Option<String>,
    /// Portable Text blocks, kept opaque here; the site extracts plain
    /// paragraphs at render time.
    pub content: Option<serde_json::Value>,
    pub author: Option<RawAuthor>,
    pub published_at: Option<String>,
    pub featured: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// One page of blog posts plus the total count.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlogPage {
    pub posts: Vec<RawBlogPost>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use listings::{Category, TransactionKind};
    use serde_json::json;

    fn raw_property(value: serde_json::Value) -> RawProperty {
        serde_json::from_value(value).unwrap()
    }

    fn complete_property() -> serde_json::Value {
        json!({
            "_id": "prop-1",
            "title": "Modern 3-Bedroom Duplex",
            "slug": { "current": "modern-3-bedroom-duplex" },
            "description": "Spacious duplex",
            "price": 45_000_000.0,
            "currency": "NGN",
            "location": "Lekki Phase 1",
            "state": "Lagos",
            "bedrooms": 3,
            "bathrooms": 4,
            "area": 320.0,
            "propertyType": "sale",
            "category": "house",
            "images": ["https://cdn.example/p1.jpg"],
            "features": ["Swimming Pool"],
            "agent": {
                "name": "Ada Obi",
                "email": "ada@example.com",
                "phone": "+2348000000000"
            },
            "createdAt": "2024-05-01T09:00:00Z"
        })
    }

    #[test]
    fn complete_documents_normalize_faithfully() {
        let record = raw_property(complete_property()).into_record().unwrap();
        assert_eq!(record.id, "prop-1");
        assert_eq!(record.transaction, TransactionKind::Sale);
        assert_eq!(record.category, Category::House);
        assert_eq!(record.location, "Lekki Phase 1");
        assert_eq!(record.slug, "modern-3-bedroom-duplex");
        assert_eq!(record.agent.as_ref().unwrap().name, "Ada Obi");
    }

    #[test]
    fn structured_locations_prefer_city_then_address_then_name() {
        let mut doc = complete_property();
        doc["location"] = json!({ "city": "Abuja", "address": "1 Main St", "name": "Estate" });
        assert_eq!(raw_property(doc).into_record().unwrap().location, "Abuja");

        let mut doc = complete_property();
        doc["location"] = json!({ "city": "", "address": "1 Main St" });
        assert_eq!(
            raw_property(doc).into_record().unwrap().location,
            "1 Main St",
            "empty strings count as absent"
        );

        let mut doc = complete_property();
        doc["location"] = json!({ "name": "Estate" });
        assert_eq!(raw_property(doc).into_record().unwrap().location, "Estate");
    }

    #[test]
    fn unusable_locations_fall_back_to_the_fixed_literal() {
        let mut doc = complete_property();
        doc["location"] = json!({});
        assert_eq!(
            raw_property(doc).into_record().unwrap().location,
            "Unknown location"
        );

        let mut doc = complete_property();
        doc["location"] = json!(42);
        assert_eq!(
            raw_property(doc).into_record().unwrap().location,
            "Unknown location"
        );

        let mut doc = complete_property();
        doc["location"] = serde_json::Value::Null;
        assert_eq!(
            raw_property(doc).into_record().unwrap().location,
            "Unknown location"
        );
    }

    #[test]
    fn missing_collections_become_empty() {
        let mut doc = complete_property();
        doc.as_object_mut().unwrap().remove("images");
        doc.as_object_mut().unwrap().remove("features");
        doc.as_object_mut().unwrap().remove("agent");

        let record = raw_property(doc).into_record().unwrap();
        assert!(record.images.is_empty());
        assert!(record.features.is_empty());
        assert!(record.agent.is_none());
    }

    #[test]
    fn missing_slug_becomes_empty_string() {
        let mut doc = complete_property();
        doc.as_object_mut().unwrap().remove("slug");
        assert_eq!(raw_property(doc).into_record().unwrap().slug, "");

        let mut doc = complete_property();
        doc["slug"] = json!({});
        assert_eq!(raw_property(doc).into_record().unwrap().slug, "");
    }

    #[test]
    fn unrecognized_classification_is_rejected() {
        let mut doc = complete_property();
        doc["propertyType"] = json!("timeshare");
        let err = raw_property(doc).into_record().unwrap_err();
        assert!(err.to_string().contains("timeshare"));

        let mut doc = complete_property();
        doc["category"] = json!("castle");
        assert!(raw_property(doc).into_record().is_err());
    }

    #[test]
    fn blog_page_decodes_posts_and_total() {
        let page: RawBlogPage = serde_json::from_value(json!({
            "posts": [{
                "_id": "post-1",
                "title": "Market Outlook",
                "slug": { "current": "market-outlook" },
                "excerpt": "Where prices are heading",
                "mainImage": { "url": "https://cdn.example/b1.jpg", "alt": "skyline" },
                "category": "market",
                "content": [{ "_type": "block", "children": [{ "text": "Hello" }] }],
                "author": { "_id": "author-1", "name": "Ada Obi" },
                "publishedAt": "2024-06-01T08:00:00Z",
                "featured": true
            }],
            "total": 14
        }))
        .unwrap();

        assert_eq!(page.total, 14);
        assert_eq!(page.posts.len(), 1);
        let post = &page.posts[0];
        assert_eq!(post.title.as_deref(), Some("Market Outlook"));
        assert_eq!(post.author.as_ref().unwrap().id, "author-1");
    }
}
