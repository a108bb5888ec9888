//! Home page component

use dioxus::prelude::*;

use listings::ListingRecord;

use crate::components::{BlogCard, ContactModal, Hero, LoadingSpinner, PropertyCard};
use crate::routes::Route;
use crate::state::ViewType;
use crate::types::BlogPost;

/// Home page - hero, featured listings, and marketing sections
#[component]
pub fn Home() -> Element {
    let featured = use_server_future(fetch_featured_properties)?;
    let recent_posts = use_server_future(fetch_recent_posts)?;
    let mut contact_property = use_signal(|| None::<ListingRecord>);

    rsx! {
        main {
            Hero {
                title: "Find Your Perfect Home",
                subtitle: "Premium residential and commercial properties across Nigeria, handpicked by our team.",
                background_image: "https://res.cloudinary.com/demo/image/upload/home-hero.jpg",
                height: "h-[28rem]",
            }

            // Featured listings
            section {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16",
                div {
                    class: "flex items-end justify-between mb-8",
                    div {
                        h2 { class: "text-3xl font-bold text-gray-900", "Featured Properties" }
                        p { class: "text-gray-600 mt-1", "A selection of our latest listings" }
                    }
                    Link {
                        to: Route::Properties {},
                        class: "text-red-600 font-medium hover:text-red-700",
                        "View all \u{2192}"
                    }
                }

                match &*featured.value().read() {
                    None => rsx! {
                        div { class: "py-12", LoadingSpinner {} }
                    },
                    Some(Err(_)) => rsx! {
                        // The home page degrades quietly; the catalog page
                        // owns the loud error state.
                        div {
                            class: "text-center py-12 text-gray-500",
                            "Listings are temporarily unavailable."
                        }
                    },
                    Some(Ok(records)) if records.is_empty() => rsx! {
                        div {
                            class: "text-center py-12 text-gray-500",
                            "New listings are on the way. Check back soon."
                        }
                    },
                    Some(Ok(records)) => rsx! {
                        div {
                            class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                            for record in records.iter() {
                                PropertyCard {
                                    key: "{record.id}",
                                    record: record.clone(),
                                    view: ViewType::Grid,
                                    on_contact: move |property| contact_property.set(Some(property)),
                                }
                            }
                        }
                    },
                }
            }

            // How it works
            section {
                class: "bg-gray-50 py-16",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    h2 { class: "text-3xl font-bold text-gray-900 text-center mb-12", "How It Works" }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                        for (step, title, body) in [
                            ("1", "Search", "Browse the catalog and narrow it down by type, location, price, and size."),
                            ("2", "Visit", "Schedule a viewing with the listing agent at a time that suits you."),
                            ("3", "Move in", "We handle the paperwork and hand you the keys."),
                        ] {
                            div {
                                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-8 text-center",
                                div {
                                    class: "w-12 h-12 bg-red-600 text-white rounded-full flex items-center justify-center mx-auto mb-4 text-xl font-bold",
                                    "{step}"
                                }
                                h3 { class: "text-lg font-semibold text-gray-900 mb-2", "{title}" }
                                p { class: "text-gray-600 text-sm", "{body}" }
                            }
                        }
                    }
                }
            }

            // Mission strip
            section {
                class: "py-16",
                div {
                    class: "max-w-4xl mx-auto px-4 text-center",
                    h2 { class: "text-3xl font-bold text-gray-900 mb-4", "Our Mission" }
                    p {
                        class: "text-lg text-gray-600 leading-relaxed",
                        "We believe finding a home should be simple and transparent. "
                        "Every listing we publish is verified by our team, priced "
                        "honestly, and backed by agents who know their neighborhoods."
                    }
                    Link {
                        to: Route::About {},
                        class: "inline-block mt-6 bg-red-600 text-white px-8 py-3 rounded-full font-medium hover:bg-red-700 transition-colors",
                        "More about us"
                    }
                }
            }

            // Journal teasers
            if let Some(Ok(posts)) = &*recent_posts.value().read() {
                if !posts.is_empty() {
                    section {
                        class: "bg-gray-50 py-16",
                        div {
                            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                            div {
                                class: "flex items-end justify-between mb-8",
                                div {
                                    h2 { class: "text-3xl font-bold text-gray-900", "From the Blog" }
                                    p { class: "text-gray-600 mt-1", "Market insight and buying tips from our team" }
                                }
                                Link {
                                    to: Route::Blog {},
                                    class: "text-red-600 font-medium hover:text-red-700",
                                    "All articles \u{2192}"
                                }
                            }
                            div {
                                class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                                for post in posts.iter() {
                                    BlogCard { key: "{post.id}", post: post.clone() }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(property) = contact_property() {
                ContactModal {
                    property: Some(property),
                    on_close: move |_| contact_property.set(None),
                }
            }
        }
    }
}

/// Newest journal posts for the teaser strip. A failure here quietly hides
/// the section rather than degrading the whole page.
#[server]
async fn fetch_recent_posts() -> Result<Vec<BlogPost>, ServerFnError> {
    let config =
        sanity_client::SanityConfig::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
    let client = sanity_client::SanityClient::new(config);

    let raw: Vec<sanity_client::RawBlogPost> = client
        .query(&sanity_client::queries::recent_blog_posts(), &[])
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "recent posts fetch failed");
            ServerFnError::new(e.to_string())
        })?;

    Ok(raw.into_iter().map(crate::types::normalize::blog_post).collect())
}

/// The three newest listings; the catalog query already orders by
/// creation date.
#[server]
async fn fetch_featured_properties() -> Result<Vec<ListingRecord>, ServerFnError> {
    use listings::ListingSource;

    let config =
        sanity_client::SanityConfig::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
    let catalog = sanity_client::PropertyCatalog::new(sanity_client::SanityClient::new(config));

    let mut records = catalog
        .fetch_all()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    records.truncate(3);
    Ok(records)
}
