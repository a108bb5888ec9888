//! Properties page: the searchable catalog.
//!
//! The catalog is fetched once per page view; filtering, pagination, and
//! the query string all derive from one [`SearchState`]. Loading, error,
//! empty, and populated results are four distinct states; a failed fetch
//! shows a retry control, never a silent "no results".

use dioxus::prelude::*;

use listings::{
    project, CriteriaUpdate, ListingRecord, QueryStringHost, SearchState,
};

use crate::components::{
    ContactModal, FilterPanel, Hero, LoadingSpinner, Pagination, PropertyCard,
};
use crate::state::ViewType;
use crate::url::BrowserQuery;

const ITEMS_PER_PAGE: usize = 6;

/// Properties page - searchable, filterable catalog
#[component]
pub fn Properties() -> Element {
    let mut properties = use_server_future(fetch_properties)?;

    // Seeded from the shared URL exactly once. The SSR pass sees an empty
    // query; the client re-reads the real one when the hook first runs.
    let mut search = use_signal(|| SearchState::from_query_string(&BrowserQuery.read()));
    let mut view_type = use_signal(ViewType::default);
    let mut contact_property = use_signal(|| None::<ListingRecord>);

    // Store -> URL: every mutation rewrites the query string.
    use_effect(move || {
        let query = search.read().to_query_string();
        BrowserQuery.replace(&query);
    });

    // Derive the visible slice from catalog + criteria + page.
    let projection = use_memo(move || {
        let records = match &*properties.value().read() {
            Some(Ok(r)) => r.clone(),
            _ => vec![],
        };
        let state = search.read();
        project(&records, state.criteria(), state.page(), ITEMS_PER_PAGE)
    });

    let handle_update = move |update: CriteriaUpdate| {
        search.write().apply(update);
    };
    let handle_clear = move |_| {
        search.write().clear();
    };
    let handle_page = move |page: u32| {
        search.write().set_page(page);
    };

    rsx! {
        main {
            Hero {
                title: "Properties",
                background_image: "https://res.cloudinary.com/demo/image/upload/properties-hero.jpg",
            }

            div {
                class: "min-h-screen bg-white py-12",
                div {
                    class: "container mx-auto px-4 py-8",
                    div {
                        class: "mb-8",
                        h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Our Properties" }
                        p {
                            class: "text-gray-600",
                            "Find your perfect property from our extensive collection"
                        }
                    }

                    match &*properties.value().read() {
                        None => rsx! {
                            div {
                                class: "flex items-center justify-center py-12",
                                LoadingSpinner {}
                            }
                        },
                        Some(Err(e)) => rsx! {
                            div {
                                class: "text-center py-12",
                                h3 {
                                    class: "text-lg font-semibold text-gray-900 mb-2",
                                    "Failed to load properties. Please try again later."
                                }
                                p { class: "text-sm text-gray-500 mb-4", "{e}" }
                                button {
                                    onclick: move |_| properties.restart(),
                                    class: "bg-red-600 text-white px-4 py-2 rounded-md hover:bg-red-700 transition-colors",
                                    "Retry"
                                }
                            }
                        },
                        Some(Ok(_)) => rsx! {
                            FilterPanel {
                                criteria: search.read().criteria().clone(),
                                total_matches: projection().page.total_items,
                                on_update: handle_update,
                                on_clear: handle_clear,
                            }

                            // Results count + view toggle
                            div {
                                class: "flex justify-between items-center mb-6",
                                div {
                                    class: "text-sm text-gray-600",
                                    {results_summary(&projection())}
                                }
                                div {
                                    class: "flex items-center space-x-2",
                                    span { class: "text-sm text-gray-600 mr-2", "View:" }
                                    div {
                                        class: "flex rounded-md border border-gray-300 overflow-hidden",
                                        for view in ViewType::variants() {
                                            button {
                                                onclick: move |_| view_type.set(*view),
                                                class: if view_type() == *view {
                                                    "px-3 py-2 text-sm bg-red-600 text-white transition-colors"
                                                } else {
                                                    "px-3 py-2 text-sm bg-white text-gray-700 hover:bg-gray-50 transition-colors"
                                                },
                                                "{view.label()}"
                                            }
                                        }
                                    }
                                }
                            }

                            // Results
                            if projection().visible.is_empty() {
                                div {
                                    class: "text-center py-12",
                                    h3 {
                                        class: "text-lg font-semibold text-gray-900 mb-2",
                                        "No properties found"
                                    }
                                    p { class: "text-gray-600", "Try adjusting your search filters" }
                                }
                            } else {
                                div {
                                    class: if view_type() == ViewType::Grid {
                                        "grid grid-cols-1 lg:grid-cols-3 gap-6"
                                    } else {
                                        "space-y-6"
                                    },
                                    for record in projection().visible {
                                        PropertyCard {
                                            key: "{record.id}",
                                            record: record.clone(),
                                            view: view_type(),
                                            on_contact: move |property| contact_property.set(Some(property)),
                                        }
                                    }
                                }
                            }

                            Pagination {
                                page: projection().page,
                                on_page: handle_page,
                            }
                        },
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

fn results_summary(projection: &listings::Projection) -> String {
    let page = &projection.page;
    if page.total_items == 0 {
        return "Showing 0 of 0 properties".to_string();
    }
    format!(
        "Showing {}-{} of {} properties",
        page.start + 1,
        page.end,
        page.total_items
    )
}

#[server]
async fn fetch_properties() -> Result<Vec<ListingRecord>, ServerFnError> {
    use listings::ListingSource;

    let config =
        sanity_client::SanityConfig::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
    let catalog = sanity_client::PropertyCatalog::new(sanity_client::SanityClient::new(config));

    catalog.fetch_all().await.map_err(|e| {
        tracing::error!(error = %e, "property catalog fetch failed");
        ServerFnError::new(e.to_string())
    })
}
