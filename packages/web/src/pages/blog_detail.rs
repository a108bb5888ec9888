//! Blog post page.

use dioxus::prelude::*;

use crate::components::{BlogCard, LoadingSpinner};
use crate::format::{format_date, reading_time};
use crate::routes::Route;
use crate::types::BlogPostView;

/// Blog detail page - one post with related reading
#[component]
pub fn BlogDetail(slug: String) -> Element {
    let view = use_server_future(use_reactive!(|(slug,)| fetch_blog_post(slug)))?;

    rsx! {
        main {
            class: "min-h-screen bg-white",
            div {
                class: "max-w-4xl mx-auto px-4 py-8",

                Link {
                    to: Route::Blog {},
                    class: "text-red-600 hover:text-red-700 text-sm mb-6 inline-block",
                    "\u{2190} Back to Blog"
                }

                match &*view.value().read() {
                    None => rsx! {
                        div {
                            class: "flex items-center justify-center py-24",
                            LoadingSpinner {}
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div {
                            class: "text-center py-24",
                            h2 { class: "text-2xl font-bold text-gray-900 mb-4", "Unable to load this article" }
                            p { class: "text-sm text-gray-400", "{e}" }
                        }
                    },
                    Some(Ok(None)) => rsx! {
                        div {
                            class: "text-center py-24",
                            h2 { class: "text-2xl font-bold text-gray-900 mb-2", "Article not found" }
                            p { class: "text-gray-600", "This article may have been unpublished." }
                        }
                    },
                    Some(Ok(Some(view))) => {
                        let post = &view.post;
                        let published = format_date(&post.published_at);
                        let minutes = reading_time(&post.paragraphs.join(" "));

                        rsx! {
                            article {
                                header {
                                    class: "mb-8",
                                    div {
                                        class: "flex items-center gap-3 text-sm text-gray-500 mb-4",
                                        if !post.category.is_empty() {
                                            span {
                                                class: "bg-red-50 text-red-700 px-2 py-1 rounded-full font-medium text-xs",
                                                "{post.category}"
                                            }
                                        }
                                        span { "{published}" }
                                        span { "{minutes}" }
                                    }
                                    h1 {
                                        class: "text-4xl font-bold text-gray-900 mb-4",
                                        "{post.title}"
                                    }
                                    if let Some(author) = &post.author {
                                        div {
                                            class: "flex items-center gap-3",
                                            if let Some(photo) = &author.image {
                                                img {
                                                    src: "{photo}",
                                                    alt: "{author.name}",
                                                    class: "w-10 h-10 rounded-full object-cover"
                                                }
                                            }
                                            div {
                                                p { class: "text-sm font-medium text-gray-900", "{author.name}" }
                                                if let Some(bio) = &author.bio {
                                                    p { class: "text-xs text-gray-500", "{bio}" }
                                                }
                                            }
                                        }
                                    }
                                }

                                if let Some(image) = &post.image {
                                    img {
                                        src: "{image}",
                                        alt: post.image_alt.clone().unwrap_or_else(|| post.title.clone()),
                                        class: "w-full rounded-xl mb-8 object-cover max-h-[480px]"
                                    }
                                }

                                div {
                                    class: "prose prose-lg max-w-none",
                                    for paragraph in &post.paragraphs {
                                        p { class: "text-gray-700 leading-relaxed mb-4", "{paragraph}" }
                                    }
                                }

                                if !post.tags.is_empty() {
                                    div {
                                        class: "flex flex-wrap gap-2 mt-8 pt-6 border-t border-gray-100",
                                        for tag in &post.tags {
                                            span {
                                                class: "bg-gray-100 text-gray-600 text-xs px-2 py-1 rounded-full",
                                                "#{tag}"
                                            }
                                        }
                                    }
                                }
                            }

                            if !view.related.is_empty() {
                                section {
                                    class: "mt-12 pt-8 border-t border-gray-200",
                                    h2 { class: "text-2xl font-bold text-gray-900 mb-6", "Related Articles" }
                                    div {
                                        class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                                        for related in &view.related {
                                            BlogCard { key: "{related.id}", post: related.clone() }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[server]
async fn fetch_blog_post(slug: String) -> Result<Option<BlogPostView>, ServerFnError> {
    use crate::types::normalize;

    let config =
        sanity_client::SanityConfig::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
    let client = sanity_client::SanityClient::new(config);

    let raw: Option<sanity_client::RawBlogPost> = client
        .query(
            &sanity_client::queries::blog_post_by_slug(),
            &[("slug", slug.as_str())],
        )
        .await
        .map_err(|e| {
            tracing::error!(error = %e, slug, "blog post fetch failed");
            ServerFnError::new(e.to_string())
        })?;

    let Some(post) = raw.map(normalize::blog_post) else {
        return Ok(None);
    };

    // Related reading shares the category; a failure here should not take
    // the article down with it.
    let related = match client
        .query::<Vec<sanity_client::RawBlogPost>>(
            &sanity_client::queries::related_blog_posts(),
            &[("category", post.category.as_str()), ("slug", post.slug.as_str())],
        )
        .await
    {
        Ok(posts) => posts.into_iter().map(normalize::blog_post).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "related posts fetch failed");
            Vec::new()
        }
    };

    Ok(Some(BlogPostView { post, related }))
}
