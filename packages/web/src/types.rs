//! View types for journal content.
//!
//! Property records come from the `listings` crate; the blog has its own,
//! simpler shape. Server functions normalize the raw CMS documents into
//! these before they cross to the client.

use serde::{Deserialize, Serialize};

/// A blog author as shown on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub image: Option<String>,
    pub bio: Option<String>,
}

/// One journal post, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub category: String,
    /// Plain paragraphs extracted from the studio's rich-text blocks.
    pub paragraphs: Vec<String>,
    pub author: Option<Author>,
    pub published_at: String,
    pub featured: bool,
    pub tags: Vec<String>,
}

/// One page of the journal plus pagination inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPage {
    pub posts: Vec<BlogPost>,
    pub total: usize,
}

/// A post with its sidebar of related reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostView {
    pub post: BlogPost,
    pub related: Vec<BlogPost>,
}

#[cfg(feature = "server")]
pub(crate) mod normalize {
    //! Raw CMS documents into view types. Server-side only.

    use sanity_client::RawBlogPost;

    use super::{Author, BlogPost};

    pub fn blog_post(raw: RawBlogPost) -> BlogPost {
        BlogPost {
            title: raw.title.unwrap_or_default(),
            slug: raw.slug.and_then(|s| s.current).unwrap_or_default(),
            excerpt: raw.excerpt.unwrap_or_default(),
            image: raw.main_image.as_ref().and_then(|i| i.url.clone()),
            image_alt: raw.main_image.and_then(|i| i.alt),
            category: raw.category.unwrap_or_default(),
            paragraphs: raw
                .content
                .as_ref()
                .map(portable_text_paragraphs)
                .unwrap_or_default(),
            author: raw.author.map(|author| Author {
                name: author.name.unwrap_or_default(),
                image: author.image.and_then(|i| i.url),
                bio: author.bio,
            }),
            published_at: raw.published_at.unwrap_or_default(),
            featured: raw.featured.unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
            id: raw.id,
        }
    }

    /// Flatten Portable Text into plain paragraphs: the text of each
    /// block's children, joined in order. Non-text blocks are skipped.
    fn portable_text_paragraphs(content: &serde_json::Value) -> Vec<String> {
        let Some(blocks) = content.as_array() else {
            return Vec::new();
        };

        blocks
            .iter()
            .filter_map(|block| {
                let children = block.get("children")?.as_array()?;
                let text: String = children
                    .iter()
                    .filter_map(|span| span.get("text")?.as_str())
                    .collect();
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            })
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use serde_json::json;

        use super::*;

        #[test]
        fn portable_text_flattens_to_paragraphs() {
            let content = json!([
                { "_type": "block", "children": [{ "text": "First " }, { "text": "paragraph." }] },
                { "_type": "image", "asset": { "_ref": "image-abc" } },
                { "_type": "block", "children": [{ "text": "Second." }] },
                { "_type": "block", "children": [] }
            ]);

            assert_eq!(
                portable_text_paragraphs(&content),
                vec!["First paragraph.".to_string(), "Second.".to_string()]
            );
        }

        #[test]
        fn non_array_content_yields_no_paragraphs() {
            assert!(portable_text_paragraphs(&json!("plain string")).is_empty());
        }

        #[test]
        fn raw_post_normalizes_with_defaults() {
            let raw: RawBlogPost = serde_json::from_value(json!({
                "_id": "post-1",
                "title": "Market Outlook",
                "slug": { "current": "market-outlook" }
            }))
            .unwrap();

            let post = blog_post(raw);
            assert_eq!(post.slug, "market-outlook");
            assert_eq!(post.category, "");
            assert!(!post.featured);
            assert!(post.paragraphs.is_empty());
        }
    }
}
