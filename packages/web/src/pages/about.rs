//! About page component

use dioxus::prelude::*;

use crate::components::Hero;
use crate::routes::Route;

/// About page - static marketing content
#[component]
pub fn About() -> Element {
    rsx! {
        main {
            class: "space-y-16",
            Hero {
                title: "About Us",
                subtitle: "A decade of helping families and businesses find the right address.",
                background_image: "https://res.cloudinary.com/demo/image/upload/about-hero.jpg",
            }

            section {
                class: "max-w-4xl mx-auto px-4",
                h2 { class: "text-3xl font-bold text-gray-900 mb-4", "Who We Are" }
                p {
                    class: "text-gray-700 leading-relaxed mb-4",
                    "Cornerstone Properties is a full-service real estate agency "
                    "serving buyers, renters, and investors across Nigeria. From "
                    "family homes in Lagos to commercial plots in Abuja, our "
                    "portfolio covers every stage of the property journey."
                }
                p {
                    class: "text-gray-700 leading-relaxed",
                    "Every listing on this site is inspected and verified by our "
                    "own agents before it is published, and every price is the "
                    "price you pay."
                }
            }

            section {
                class: "bg-gray-50 py-16",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    h2 { class: "text-3xl font-bold text-gray-900 text-center mb-12", "What We Offer" }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                        for (title, body) in [
                            ("Sales", "Verified residential and commercial properties for outright purchase."),
                            ("Rentals", "Quality homes and offices with transparent terms."),
                            ("Land", "Titled plots with complete documentation."),
                            ("Advisory", "Market insight for investors and first-time buyers alike."),
                        ] {
                            div {
                                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                                h3 { class: "text-lg font-semibold text-gray-900 mb-2", "{title}" }
                                p { class: "text-gray-600 text-sm", "{body}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "max-w-4xl mx-auto px-4 pb-16 text-center",
                h2 { class: "text-3xl font-bold text-gray-900 mb-4", "Ready to find your place?" }
                p { class: "text-gray-600 mb-6", "Browse the catalog or talk to one of our agents today." }
                div {
                    class: "flex items-center justify-center gap-4",
                    Link {
                        to: Route::Properties {},
                        class: "bg-red-600 text-white px-8 py-3 rounded-full font-medium hover:bg-red-700 transition-colors",
                        "Browse Properties"
                    }
                    Link {
                        to: Route::Contact {},
                        class: "border border-red-600 text-red-600 px-8 py-3 rounded-full font-medium hover:bg-red-50 transition-colors",
                        "Contact Us"
                    }
                }
            }
        }
    }
}
