//! GROQ query definitions.
//!
//! These mirror the content studio's document schemas: `property` documents
//! for the catalog and `blog` documents for the journal.

/// Every property, newest first. The catalog is fetched whole and filtered
/// client-side.
pub const PROPERTIES: &str = r#"*[_type == "property"] | order(createdAt desc) {
  _id,
  title,
  slug,
  description,
  price,
  currency,
  location,
  state,
  bedrooms,
  bathrooms,
  area,
  propertyType,
  category,
  images,
  features,
  agent,
  createdAt
}"#;

/// One property by slug, or null.
pub const PROPERTY_BY_SLUG: &str = r#"*[_type == "property" && slug.current == $slug][0] {
  _id,
  title,
  slug,
  description,
  price,
  currency,
  location,
  state,
  bedrooms,
  bathrooms,
  area,
  propertyType,
  category,
  images,
  features,
  agent,
  createdAt
}"#;

/// Fields selected for every blog post.
const BLOG_POST_FIELDS: &str = r#"
  _id,
  title,
  slug,
  excerpt,
  mainImage,
  category,
  content,
  author->{
    _id,
    name,
    slug,
    image,
    bio,
    email
  },
  publishedAt,
  featured,
  tags
"#;

/// One page of blog posts plus the total count, newest first. The blog is
/// paged server-side, unlike the property catalog.
pub fn blog_page(page: u32, per_page: usize) -> String {
    let page = page.max(1) as usize;
    let offset = (page - 1) * per_page;
    format!(
        r#"{{
  "posts": *[_type == "blog"] | order(publishedAt desc) [{offset}...{end}] {{{BLOG_POST_FIELDS}}},
  "total": count(*[_type == "blog"])
}}"#,
        end = offset + per_page,
    )
}

/// One blog post by slug, or null.
pub fn blog_post_by_slug() -> String {
    format!(r#"*[_type == "blog" && slug.current == $slug][0] {{{BLOG_POST_FIELDS}}}"#)
}

/// Up to three featured posts for the front treatment.
pub fn featured_blog_posts() -> String {
    format!(
        r#"*[_type == "blog" && featured == true] | order(publishedAt desc) [0...3] {{{BLOG_POST_FIELDS}}}"#
    )
}

/// Up to three posts sharing a category, excluding the post itself.
pub fn related_blog_posts() -> String {
    format!(
        r#"*[_type == "blog" && category == $category && slug.current != $slug] | order(publishedAt desc) [0...3] {{{BLOG_POST_FIELDS}}}"#
    )
}

/// The three newest posts, for teaser strips.
pub fn recent_blog_posts() -> String {
    format!(r#"*[_type == "blog"] | order(publishedAt desc) [0...3] {{{BLOG_POST_FIELDS}}}"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_page_offsets_follow_the_page_number() {
        let first = blog_page(1, 9);
        assert!(first.contains("[0...9]"));
        assert!(first.contains(r#""total": count"#));

        let third = blog_page(3, 9);
        assert!(third.contains("[18...27]"));
    }

    #[test]
    fn blog_page_zero_is_treated_as_the_first() {
        assert!(blog_page(0, 9).contains("[0...9]"));
    }

    #[test]
    fn slug_queries_are_parameterized_not_interpolated() {
        assert!(PROPERTY_BY_SLUG.contains("$slug"));
        assert!(blog_post_by_slug().contains("$slug"));
        assert!(related_blog_posts().contains("$category"));
    }

    #[test]
    fn teaser_queries_cap_at_three_posts() {
        assert!(featured_blog_posts().contains("[0...3]"));
        assert!(recent_blog_posts().contains("[0...3]"));
    }
}
