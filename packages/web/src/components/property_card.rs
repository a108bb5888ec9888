//! Property card component

use dioxus::prelude::*;

use listings::ListingRecord;

use crate::format::format_price;
use crate::routes::Route;
use crate::state::ViewType;

const PLACEHOLDER_IMAGE: &str = "/assets/placeholder-property.jpg";

/// Props for PropertyCard
#[derive(Props, Clone, PartialEq)]
pub struct PropertyCardProps {
    pub record: ListingRecord,
    #[props(default)]
    pub view: ViewType,
    pub on_contact: EventHandler<ListingRecord>,
}

/// One property in the results list, in either layout.
#[component]
pub fn PropertyCard(props: PropertyCardProps) -> Element {
    match props.view {
        ViewType::Grid => GridCard(props),
        ViewType::List => ListCard(props),
    }
}

fn image_url(record: &ListingRecord) -> &str {
    record
        .images
        .first()
        .map(String::as_str)
        .unwrap_or(PLACEHOLDER_IMAGE)
}

fn GridCard(props: PropertyCardProps) -> Element {
    let record = props.record.clone();
    let contact_record = props.record.clone();
    let price = format_price(record.price, record.currency.as_deref());

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-md overflow-hidden border border-gray-200 hover:shadow-lg transition-shadow",
            div {
                class: "relative h-64",
                img {
                    src: "{image_url(&record)}",
                    alt: "{record.title}",
                    class: "w-full h-full object-cover"
                }
            }
            div {
                class: "p-6",
                h3 { class: "text-xl font-semibold text-gray-900 mb-3", "{record.title}" }
                p {
                    class: "text-gray-600 mb-4",
                    "{record.location}, {record.state}"
                }
                div {
                    class: "border-t border-b border-gray-200 py-3 mb-4 flex items-center justify-between",
                    PropertyStats { record: record.clone() }
                    span { class: "text-xl font-bold text-red-600", "{price}" }
                }
                div {
                    class: "flex space-x-3",
                    Link {
                        to: Route::PropertyDetail { slug: record.slug.clone() },
                        class: "flex-1 text-center bg-red-600 text-white px-4 py-2 rounded-md hover:bg-red-700 transition-colors text-sm font-medium",
                        "View Details"
                    }
                    button {
                        onclick: move |_| props.on_contact.call(contact_record.clone()),
                        class: "flex-1 border border-red-600 text-red-600 px-4 py-2 rounded-md hover:bg-red-50 transition-colors text-sm font-medium",
                        "Contact Us"
                    }
                }
            }
        }
    }
}

fn ListCard(props: PropertyCardProps) -> Element {
    let record = props.record.clone();
    let contact_record = props.record.clone();
    let price = format_price(record.price, record.currency.as_deref());

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-md overflow-hidden hover:shadow-lg transition-shadow",
            div {
                class: "flex flex-col md:flex-row",
                div {
                    class: "md:w-96 flex-shrink-0 relative",
                    img {
                        src: "{image_url(&record)}",
                        alt: "{record.title}",
                        class: "w-full h-64 md:h-80 object-cover"
                    }
                    div {
                        class: "absolute bottom-0 left-0 right-0 bg-red-600 text-white p-4",
                        PropertyStats { record: record.clone() }
                    }
                }
                div {
                    class: "flex-1 px-8 py-6 flex flex-col justify-between border-2 border-red-200 md:rounded-r-lg",
                    div {
                        div {
                            class: "flex justify-between items-start mb-4",
                            h3 { class: "text-2xl font-semibold text-gray-900", "{record.title}" }
                            span { class: "text-3xl font-bold text-red-600", "{price}" }
                        }
                        p {
                            class: "text-gray-700 leading-relaxed py-2",
                            "{record.description}"
                        }
                    }
                    div {
                        class: "flex flex-col sm:flex-row justify-between sm:items-center gap-4 mt-4",
                        span {
                            class: "text-lg font-bold text-gray-600",
                            "{record.location}, {record.state}"
                        }
                        div {
                            class: "flex space-x-4",
                            Link {
                                to: Route::PropertyDetail { slug: record.slug.clone() },
                                class: "bg-red-600 text-white px-6 py-3 rounded-md hover:bg-red-700 transition-colors font-medium",
                                "View Details"
                            }
                            button {
                                onclick: move |_| props.on_contact.call(contact_record.clone()),
                                class: "border border-red-600 text-red-600 px-6 py-3 rounded-md hover:bg-red-50 transition-colors font-medium",
                                "Contact Us"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PropertyStatsProps {
    record: ListingRecord,
}

/// Bedroom / bathroom / area strip.
#[component]
fn PropertyStats(props: PropertyStatsProps) -> Element {
    let record = &props.record;
    rsx! {
        div {
            class: "flex items-center space-x-4 text-sm font-medium",
            span { "{record.bedrooms} bd" }
            span { "{record.bathrooms} ba" }
            span { "{record.area} sqm" }
        }
    }
}
