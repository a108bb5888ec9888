//! Search and filter panel for the properties page.
//!
//! Every control emits a single-field [`CriteriaUpdate`]; the page owns the
//! store. Numeric inputs go through an explicit parse here, so only typed
//! values ever reach the predicate.

use dioxus::prelude::*;

use listings::{Category, CriteriaUpdate, FilterCriteria, TransactionKind};

const NIGERIAN_STATES: &[&str] = &[
    "Abia", "Adamawa", "Akwa Ibom", "Anambra", "Bauchi", "Bayelsa", "Benue", "Borno",
    "Cross River", "Delta", "Ebonyi", "Edo", "Ekiti", "Enugu", "FCT", "Gombe", "Imo",
    "Jigawa", "Kaduna", "Kano", "Katsina", "Kebbi", "Kogi", "Kwara", "Lagos", "Nasarawa",
    "Niger", "Ogun", "Ondo", "Osun", "Oyo", "Plateau", "Rivers", "Sokoto", "Taraba",
    "Yobe", "Zamfara",
];

#[derive(Props, Clone, PartialEq)]
pub struct FilterPanelProps {
    pub criteria: FilterCriteria,
    /// Size of the current filtered set, shown in the footer.
    pub total_matches: usize,
    pub on_update: EventHandler<CriteriaUpdate>,
    pub on_clear: EventHandler<()>,
}

#[component]
pub fn FilterPanel(props: FilterPanelProps) -> Element {
    let criteria = props.criteria.clone();
    let has_active_filters = !criteria.is_empty();

    let select_class = "w-full px-4 py-3 bg-gray-50 border border-gray-200 rounded-xl focus:outline-none focus:ring-2 focus:ring-red-500 focus:border-transparent transition-all cursor-pointer";
    let input_class = "w-full px-4 py-3 bg-gray-50 border border-gray-200 rounded-xl focus:outline-none focus:ring-2 focus:ring-red-500 focus:border-transparent transition-all";

    rsx! {
        div {
            class: "bg-white shadow-xl rounded-2xl overflow-hidden mb-8 p-8",

            // Primary filters row
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8",

                div {
                    class: "space-y-2",
                    label { class: "block text-sm font-semibold text-gray-700", "Property Type" }
                    select {
                        class: select_class,
                        value: criteria.transaction.map(|k| k.as_str()).unwrap_or(""),
                        oninput: move |e| {
                            props.on_update.call(CriteriaUpdate::Transaction(e.value().parse().ok()));
                        },
                        option { value: "", "All Types" }
                        option { value: "sale", "For Sale" }
                        option { value: "rent", "For Rent" }
                    }
                }

                div {
                    class: "space-y-2",
                    label { class: "block text-sm font-semibold text-gray-700", "Location (State)" }
                    select {
                        class: select_class,
                        value: criteria.location.clone().unwrap_or_default(),
                        oninput: move |e| {
                            let value = e.value();
                            props.on_update.call(CriteriaUpdate::Location(
                                (!value.is_empty()).then_some(value),
                            ));
                        },
                        option { value: "", "All States" }
                        for state in NIGERIAN_STATES {
                            option { value: "{state}", "{state}" }
                        }
                    }
                }

                div {
                    class: "space-y-2",
                    label { class: "block text-sm font-semibold text-gray-700", "Category" }
                    select {
                        class: select_class,
                        value: criteria.category.map(|c| c.as_str()).unwrap_or(""),
                        oninput: move |e| {
                            props.on_update.call(CriteriaUpdate::Category(e.value().parse().ok()));
                        },
                        option { value: "", "All Categories" }
                        for category in Category::variants() {
                            option { value: "{category.as_str()}", "{category.label()}" }
                        }
                    }
                }

                div {
                    class: "space-y-2",
                    label { class: "block text-sm font-semibold text-gray-700", "Bedrooms" }
                    select {
                        class: select_class,
                        value: criteria.bedrooms.map(|n| n.to_string()).unwrap_or_default(),
                        oninput: move |e| {
                            props.on_update.call(CriteriaUpdate::Bedrooms(e.value().parse().ok()));
                        },
                        option { value: "", "Any" }
                        for n in 1u32..=5 {
                            option { value: "{n}", "{n}+" }
                        }
                    }
                }
            }

            // Secondary filters row
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-8",

                div {
                    class: "space-y-2",
                    label { class: "block text-sm font-semibold text-gray-700", "Price Range (\u{20a6})" }
                    div {
                        class: "grid grid-cols-2 gap-3",
                        input {
                            r#type: "number",
                            placeholder: "Min Price",
                            class: input_class,
                            value: criteria.price_min.map(|n| n.to_string()).unwrap_or_default(),
                            oninput: move |e| {
                                props.on_update.call(CriteriaUpdate::PriceMin(parse_number(&e.value())));
                            }
                        }
                        input {
                            r#type: "number",
                            placeholder: "Max Price",
                            class: input_class,
                            value: criteria.price_max.map(|n| n.to_string()).unwrap_or_default(),
                            oninput: move |e| {
                                props.on_update.call(CriteriaUpdate::PriceMax(parse_number(&e.value())));
                            }
                        }
                    }
                }

                div {
                    class: "space-y-2",
                    label { class: "block text-sm font-semibold text-gray-700", "Area (sqm)" }
                    div {
                        class: "grid grid-cols-2 gap-3",
                        input {
                            r#type: "number",
                            placeholder: "Min Area",
                            class: input_class,
                            value: criteria.area_min.map(|n| n.to_string()).unwrap_or_default(),
                            oninput: move |e| {
                                props.on_update.call(CriteriaUpdate::AreaMin(parse_number(&e.value())));
                            }
                        }
                        input {
                            r#type: "number",
                            placeholder: "Max Area",
                            class: input_class,
                            value: criteria.area_max.map(|n| n.to_string()).unwrap_or_default(),
                            oninput: move |e| {
                                props.on_update.call(CriteriaUpdate::AreaMax(parse_number(&e.value())));
                            }
                        }
                    }
                }

                div {
                    class: "space-y-2",
                    label {
                        class: "block text-sm font-semibold text-gray-700",
                        "Search by Location, Features, or Keywords"
                    }
                    input {
                        r#type: "text",
                        placeholder: "Search by city, features (e.g., swimming pool, gym)...",
                        class: input_class,
                        value: criteria.search.clone().unwrap_or_default(),
                        oninput: move |e| {
                            let value = e.value();
                            props.on_update.call(CriteriaUpdate::Search(
                                (!value.is_empty()).then_some(value),
                            ));
                        }
                    }
                }
            }

            // Footer: result count + clear
            div {
                class: "flex flex-col sm:flex-row justify-between items-center gap-4 pt-6 border-t border-gray-100",
                div {
                    p {
                        class: "text-lg font-bold text-gray-900",
                        if props.total_matches == 1 {
                            "1 Property"
                        } else {
                            "{props.total_matches} Properties"
                        }
                    }
                    p {
                        class: "text-sm text-gray-500",
                        if has_active_filters { "matching your criteria" } else { "available" }
                    }
                }
                if has_active_filters {
                    button {
                        onclick: move |_| props.on_clear.call(()),
                        class: "px-6 py-3 bg-gray-100 hover:bg-gray-200 text-gray-700 font-medium rounded-xl transition-all",
                        "Clear Filters"
                    }
                }
            }
        }
    }
}

/// Form inputs arrive as strings; only finite numbers become constraints.
fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}
