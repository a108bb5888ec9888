//! Hero banner used at the top of most pages.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct HeroProps {
    pub title: String,
    #[props(default)]
    pub subtitle: Option<String>,
    pub background_image: String,
    /// Tailwind height class, e.g. `h-80`.
    #[props(default = "h-80".to_string())]
    pub height: String,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    rsx! {
        section {
            class: "relative {props.height} rounded-xl overflow-hidden mx-4 sm:mx-8 mt-4",
            div {
                class: "absolute inset-0 bg-cover bg-center",
                style: "background-image: url('{props.background_image}')",
            }
            div { class: "absolute inset-0 bg-black/40" }
            div {
                class: "relative h-full flex flex-col items-center justify-center text-center px-4",
                h1 {
                    class: "text-4xl sm:text-5xl font-bold text-white mb-3",
                    "{props.title}"
                }
                if let Some(subtitle) = &props.subtitle {
                    p {
                        class: "text-lg text-white/90 max-w-2xl",
                        "{subtitle}"
                    }
                }
            }
        }
    }
}
