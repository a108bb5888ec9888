//! Site chrome: navigation, footer, and the shared page layout.

use dioxus::prelude::*;

use crate::routes::Route;

/// Layout wrapping every page with the navigation bar and footer.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-white",
            NavBar {}
            div {
                class: "flex-1",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        header {
            class: "bg-white border-b border-gray-100 sticky top-0 z-40",
            nav {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between",
                Link {
                    to: Route::Home {},
                    class: "text-xl font-bold text-gray-900",
                    span { class: "text-red-600", "Cornerstone" }
                    " Properties"
                }
                div {
                    class: "hidden md:flex items-center space-x-8 text-sm font-medium text-gray-700",
                    Link { to: Route::Home {}, class: "hover:text-red-600 transition-colors", "Home" }
                    Link { to: Route::Properties {}, class: "hover:text-red-600 transition-colors", "Properties" }
                    Link { to: Route::Blog {}, class: "hover:text-red-600 transition-colors", "Blog" }
                    Link { to: Route::About {}, class: "hover:text-red-600 transition-colors", "About" }
                    Link {
                        to: Route::Contact {},
                        class: "bg-red-600 text-white px-4 py-2 rounded-md hover:bg-red-700 transition-colors",
                        "Contact Us"
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer {
            class: "bg-gray-900 text-gray-300",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 grid grid-cols-1 md:grid-cols-3 gap-8",
                div {
                    h3 { class: "text-white text-lg font-semibold mb-3", "Cornerstone Properties" }
                    p {
                        class: "text-sm leading-relaxed",
                        "Premium residential and commercial properties across Nigeria. Find your perfect home with us."
                    }
                }
                div {
                    h4 { class: "text-white font-semibold mb-3", "Explore" }
                    ul {
                        class: "space-y-2 text-sm",
                        li { Link { to: Route::Properties {}, class: "hover:text-white", "All Properties" } }
                        li { Link { to: Route::Blog {}, class: "hover:text-white", "Blog" } }
                        li { Link { to: Route::About {}, class: "hover:text-white", "About Us" } }
                        li { Link { to: Route::Contact {}, class: "hover:text-white", "Contact" } }
                    }
                }
                div {
                    h4 { class: "text-white font-semibold mb-3", "Get in Touch" }
                    p { class: "text-sm", "Lagos, Nigeria" }
                    p { class: "text-sm mt-1", "hello@cornerstoneproperties.example" }
                }
            }
            div {
                class: "border-t border-gray-800 py-4 text-center text-xs text-gray-500",
                "\u{a9} 2026 Cornerstone Properties. All rights reserved."
            }
        }
    }
}
