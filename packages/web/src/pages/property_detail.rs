//! Property detail page.

use dioxus::prelude::*;

use listings::ListingRecord;

use crate::components::{ContactModal, LoadingSpinner};
use crate::format::{format_date, format_price};
use crate::routes::Route;

/// Property detail page - one listing by slug
#[component]
pub fn PropertyDetail(slug: String) -> Element {
    let property = use_server_future(use_reactive!(|(slug,)| fetch_property(slug)))?;

    let mut image_index = use_signal(|| 0usize);
    let mut modal_open = use_signal(|| false);

    rsx! {
        main {
            class: "min-h-screen bg-gray-50",
            div {
                class: "container mx-auto px-4 py-8",

                Link {
                    to: Route::Properties {},
                    class: "text-red-600 hover:text-red-700 text-sm mb-6 inline-block",
                    "\u{2190} Back to Properties"
                }

                match &*property.value().read() {
                    None => rsx! {
                        div {
                            class: "flex items-center justify-center py-24",
                            LoadingSpinner {}
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div {
                            class: "text-center py-24",
                            h3 {
                                class: "text-lg font-semibold text-gray-900 mb-2",
                                "Failed to load property. Please try again later."
                            }
                            p { class: "text-sm text-gray-500", "{e}" }
                        }
                    },
                    Some(Ok(None)) => rsx! {
                        div {
                            class: "text-center py-24",
                            h3 { class: "text-lg font-semibold text-gray-900 mb-2", "Property not found" }
                            p {
                                class: "text-gray-600",
                                "This listing may have been sold or removed."
                            }
                        }
                    },
                    Some(Ok(Some(record))) => {
                        let record = record.clone();
                        let contact_record = record.clone();
                        let price = format_price(record.price, record.currency.as_deref());
                        let image_count = record.images.len();
                        let current_image = record
                            .images
                            .get(image_index() % image_count.max(1))
                            .cloned();

                        rsx! {
                            div {
                                class: "grid grid-cols-1 lg:grid-cols-3 gap-8",

                                // Gallery + description
                                div {
                                    class: "lg:col-span-2 space-y-6",
                                    div {
                                        class: "relative bg-white rounded-lg shadow-md overflow-hidden",
                                        if let Some(image) = current_image {
                                            img {
                                                src: "{image}",
                                                alt: "{record.title}",
                                                class: "w-full h-96 object-cover"
                                            }
                                        } else {
                                            div {
                                                class: "w-full h-96 bg-gray-200 flex items-center justify-center text-gray-400",
                                                "No photos available"
                                            }
                                        }
                                        if image_count > 1 {
                                            button {
                                                onclick: move |_| {
                                                    image_index.set((image_index() + image_count - 1) % image_count);
                                                },
                                                class: "absolute left-3 top-1/2 -translate-y-1/2 bg-black/50 text-white w-10 h-10 rounded-full hover:bg-black/70",
                                                "\u{2190}"
                                            }
                                            button {
                                                onclick: move |_| {
                                                    image_index.set((image_index() + 1) % image_count);
                                                },
                                                class: "absolute right-3 top-1/2 -translate-y-1/2 bg-black/50 text-white w-10 h-10 rounded-full hover:bg-black/70",
                                                "\u{2192}"
                                            }
                                            span {
                                                class: "absolute bottom-3 right-3 bg-black/60 text-white text-xs px-2 py-1 rounded",
                                                "{image_index() % image_count + 1} / {image_count}"
                                            }
                                        }
                                    }

                                    div {
                                        class: "bg-white rounded-lg shadow-md p-6",
                                        h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Description" }
                                        p { class: "text-gray-700 leading-relaxed", "{record.description}" }
                                    }

                                    if !record.features.is_empty() {
                                        div {
                                            class: "bg-white rounded-lg shadow-md p-6",
                                            h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Features" }
                                            ul {
                                                class: "grid grid-cols-2 gap-2",
                                                for feature in &record.features {
                                                    li {
                                                        class: "text-gray-700 text-sm before:content-['\u{2713}'] before:text-red-600 before:mr-2",
                                                        "{feature}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }

                                // Summary + agent
                                div {
                                    class: "space-y-6",
                                    div {
                                        class: "bg-white rounded-lg shadow-md p-6",
                                        span {
                                            class: "inline-block bg-red-50 text-red-700 text-xs font-medium px-2 py-1 rounded-full mb-3",
                                            "{record.transaction.label()}"
                                        }
                                        h1 { class: "text-2xl font-bold text-gray-900 mb-1", "{record.title}" }
                                        p { class: "text-gray-600 mb-4", "{record.location}, {record.state}" }
                                        p { class: "text-3xl font-bold text-red-600 mb-4", "{price}" }
                                        div {
                                            class: "grid grid-cols-3 gap-3 text-center border-t border-gray-200 pt-4 text-sm text-gray-700",
                                            div {
                                                p { class: "font-semibold", "{record.bedrooms}" }
                                                p { class: "text-gray-500", "Bedrooms" }
                                            }
                                            div {
                                                p { class: "font-semibold", "{record.bathrooms}" }
                                                p { class: "text-gray-500", "Bathrooms" }
                                            }
                                            div {
                                                p { class: "font-semibold", "{record.area} sqm" }
                                                p { class: "text-gray-500", "Area" }
                                            }
                                        }
                                        p {
                                            class: "text-xs text-gray-400 mt-4",
                                            "Listed {format_date(&record.created_at)} \u{b7} {record.category.label()}"
                                        }
                                        button {
                                            onclick: move |_| modal_open.set(true),
                                            class: "w-full mt-4 bg-red-600 text-white py-3 rounded-md hover:bg-red-700 transition-colors font-medium",
                                            "Contact Us About This Property"
                                        }
                                    }

                                    if let Some(agent) = &record.agent {
                                        div {
                                            class: "bg-white rounded-lg shadow-md p-6",
                                            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Listing Agent" }
                                            div {
                                                class: "flex items-center gap-4",
                                                if let Some(photo) = &agent.image {
                                                    img {
                                                        src: "{photo}",
                                                        alt: "{agent.name}",
                                                        class: "w-14 h-14 rounded-full object-cover"
                                                    }
                                                }
                                                div {
                                                    p { class: "font-medium text-gray-900", "{agent.name}" }
                                                    p { class: "text-sm text-gray-600", "{agent.phone}" }
                                                    p { class: "text-sm text-gray-600", "{agent.email}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }

                            if modal_open() {
                                ContactModal {
                                    property: Some(contact_record.clone()),
                                    on_close: move |_| modal_open.set(false),
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
async fn fetch_property(slug: String) -> Result<Option<ListingRecord>, ServerFnError> {
    use listings::ListingSource;

    let config =
        sanity_client::SanityConfig::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
    let catalog = sanity_client::PropertyCatalog::new(sanity_client::SanityClient::new(config));

    catalog.fetch_by_slug(&slug).await.map_err(|e| {
        tracing::error!(error = %e, slug, "property fetch failed");
        ServerFnError::new(e.to_string())
    })
}
