//! Blog index page.
//!
//! Unlike the property catalog, the journal is paged server-side: each page
//! is one CMS query returning the slice plus the total count. The shared
//! pagination calculator turns that count into the control strip and clamps
//! a stale page number from a hand-edited URL.

use dioxus::prelude::*;

use listings::{paginate, QueryStringHost, SearchState};

use crate::components::{BlogCard, Hero, LoadingSpinner, Pagination};
use crate::types::BlogPage;
use crate::url::BrowserQuery;

const POSTS_PER_PAGE: usize = 9;

/// Blog page - paged journal index
#[component]
pub fn Blog() -> Element {
    // Only the page number lives in this URL; reuse the shared parser.
    let mut page = use_signal(|| SearchState::from_query_string(&BrowserQuery.read()).page());
    let blog = use_server_future(move || fetch_blog_page(page()))?;

    // A hand-edited page number past the end clamps against the live total
    // and the URL follows. Stable once clamped, so this settles in one pass.
    use_effect(move || {
        if let Some(Ok(blog_page)) = &*blog.value().read() {
            let requested = *page.peek();
            let clamped = paginate(blog_page.total, POSTS_PER_PAGE, requested).current_page;
            if clamped != requested {
                page.set(clamped);
                let query = if clamped <= 1 {
                    String::new()
                } else {
                    format!("page={clamped}")
                };
                BrowserQuery.replace(&query);
            }
        }
    });

    let handle_page = move |n: u32| {
        page.set(n);
        let query = if n <= 1 {
            String::new()
        } else {
            format!("page={n}")
        };
        BrowserQuery.replace(&query);
    };

    rsx! {
        main {
            class: "space-y-8",
            Hero {
                title: "Blog",
                subtitle: "Stay updated with the latest real estate news, market insights, and expert tips to help you make informed decisions.",
                background_image: "https://res.cloudinary.com/demo/image/upload/blog-hero.jpg",
            }

            div {
                class: "min-h-screen bg-white",
                div {
                    class: "max-w-7xl mx-auto px-8 py-8 space-y-8",

                    match &*blog.value().read() {
                        None => rsx! {
                            div {
                                class: "flex items-center justify-center py-12",
                                LoadingSpinner {}
                            }
                        },
                        Some(Err(e)) => rsx! {
                            div {
                                class: "text-center py-12",
                                h2 {
                                    class: "text-2xl font-bold text-gray-900 mb-4",
                                    "Unable to load blog posts"
                                }
                                p {
                                    class: "text-gray-600",
                                    "We're experiencing technical difficulties. Please try again later."
                                }
                                p { class: "text-sm text-gray-400 mt-2", "{e}" }
                            }
                        },
                        Some(Ok(blog_page)) => {
                            let slice = paginate(blog_page.total, POSTS_PER_PAGE, page());
                            let show_featured = slice.current_page == 1;

                            rsx! {
                                div {
                                    class: "flex items-center justify-between",
                                    div {
                                        h1 { class: "text-3xl font-bold text-gray-900", "Latest Articles" }
                                        p {
                                            class: "text-gray-600 mt-1",
                                            "Showing {blog_page.posts.len()} of {blog_page.total} articles"
                                        }
                                    }
                                    div {
                                        class: "text-sm text-gray-500",
                                        "Page {slice.current_page} of {slice.total_pages}"
                                    }
                                }

                                if blog_page.posts.is_empty() {
                                    div {
                                        class: "text-center py-12",
                                        p { class: "text-gray-500", "No articles published yet. Check back soon." }
                                    }
                                } else {
                                    div {
                                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                                        for (index, post) in blog_page.posts.iter().enumerate() {
                                            BlogCard {
                                                key: "{post.id}",
                                                post: post.clone(),
                                                featured: show_featured && index == 0 && post.featured,
                                            }
                                        }
                                    }
                                }

                                Pagination {
                                    page: slice,
                                    on_page: handle_page,
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

#[server]
async fn fetch_blog_page(page: u32) -> Result<BlogPage, ServerFnError> {
    let config =
        sanity_client::SanityConfig::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
    let client = sanity_client::SanityClient::new(config);

    let raw: sanity_client::RawBlogPage = client
        .query(&sanity_client::queries::blog_page(page, POSTS_PER_PAGE), &[])
        .await
        .map_err(|e| {
            tracing::error!(error = %e, page, "blog page fetch failed");
            ServerFnError::new(e.to_string())
        })?;

    Ok(BlogPage {
        posts: raw
            .posts
            .into_iter()
            .map(crate::types::normalize::blog_post)
            .collect(),
        total: raw.total,
    })
}
