//! Blog card component

use dioxus::prelude::*;

use crate::format::{format_date, reading_time, truncate_text};
use crate::routes::Route;
use crate::types::BlogPost;

#[derive(Props, Clone, PartialEq)]
pub struct BlogCardProps {
    pub post: BlogPost,
    /// Wider treatment for the lead post on the first page.
    #[props(default)]
    pub featured: bool,
}

#[component]
pub fn BlogCard(props: BlogCardProps) -> Element {
    let post = &props.post;
    let published = format_date(&post.published_at);
    let minutes = reading_time(&post.paragraphs.join(" "));
    let excerpt = truncate_text(&post.excerpt, if props.featured { 240 } else { 140 });

    let card_class = if props.featured {
        "md:col-span-2 lg:col-span-3 md:grid md:grid-cols-2 bg-white rounded-lg shadow-md overflow-hidden border border-gray-200 hover:shadow-lg transition-shadow"
    } else {
        "bg-white rounded-lg shadow-md overflow-hidden border border-gray-200 hover:shadow-lg transition-shadow flex flex-col"
    };

    rsx! {
        article {
            class: card_class,
            if let Some(image) = &post.image {
                div {
                    class: if props.featured { "h-full min-h-64" } else { "h-48" },
                    img {
                        src: "{image}",
                        alt: post.image_alt.clone().unwrap_or_else(|| post.title.clone()),
                        class: "w-full h-full object-cover"
                    }
                }
            }
            div {
                class: "p-6 flex flex-col flex-1",
                div {
                    class: "flex items-center gap-3 text-xs text-gray-500 mb-3",
                    if !post.category.is_empty() {
                        span {
                            class: "bg-red-50 text-red-700 px-2 py-1 rounded-full font-medium",
                            "{post.category}"
                        }
                    }
                    span { "{published}" }
                    span { "{minutes}" }
                }
                h3 {
                    class: if props.featured {
                        "text-2xl font-bold text-gray-900 mb-3"
                    } else {
                        "text-lg font-semibold text-gray-900 mb-2"
                    },
                    "{post.title}"
                }
                p { class: "text-gray-600 text-sm mb-4 flex-1", "{excerpt}" }
                div {
                    class: "flex items-center justify-between mt-auto",
                    if let Some(author) = &post.author {
                        span { class: "text-sm text-gray-700 font-medium", "{author.name}" }
                    }
                    Link {
                        to: Route::BlogDetail { slug: post.slug.clone() },
                        class: "text-red-600 text-sm font-medium hover:text-red-700",
                        "Read more \u{2192}"
                    }
                }
            }
        }
    }
}
