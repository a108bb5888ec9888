//! Pagination controls.

use dioxus::prelude::*;

use listings::{PageItem, PageSlice};

#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    pub page: PageSlice,
    pub on_page: EventHandler<u32>,
}

/// Previous / numbered / next controls. Renders nothing for a single page.
#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let page = props.page;
    if page.total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flex items-center justify-center space-x-2 py-8",

            if page.has_previous() {
                button {
                    onclick: move |_| props.on_page.call(page.current_page - 1),
                    class: "px-4 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 transition-colors",
                    "\u{2190} Previous"
                }
            }

            div {
                class: "flex items-center space-x-1",
                for (index, item) in page.page_numbers().into_iter().enumerate() {
                    match item {
                        PageItem::Gap => rsx! {
                            span { key: "{index}", class: "px-3 py-2 text-gray-500", "..." }
                        },
                        PageItem::Page(number) => rsx! {
                            button {
                                key: "{index}",
                                onclick: move |_| props.on_page.call(number),
                                class: if number == page.current_page {
                                    "px-3 py-2 text-sm font-medium rounded-lg bg-red-600 text-white"
                                } else {
                                    "px-3 py-2 text-sm font-medium rounded-lg text-gray-700 bg-white border border-gray-300 hover:bg-gray-50 transition-colors"
                                },
                                "{number}"
                            }
                        },
                    }
                }
            }

            if page.has_next() {
                button {
                    onclick: move |_| props.on_page.call(page.current_page + 1),
                    class: "px-4 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 transition-colors",
                    "Next \u{2192}"
                }
            }
        }
    }
}
