//! Contact page component

use dioxus::prelude::*;

use crate::components::submit_inquiry;

/// Contact page - general inquiry form
#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| false);

    let input_class = "w-full px-0 py-3 border-0 border-b-2 border-gray-300 focus:border-red-600 focus:ring-0 bg-transparent text-black text-base outline-none";

    let handle_submit = move |_| {
        if is_submitting() {
            return;
        }

        spawn(async move {
            is_submitting.set(true);
            error.set(None);

            let result = submit_inquiry(
                name().trim().to_string(),
                email().trim().to_string(),
                phone().trim().to_string(),
                message().trim().to_string(),
                None,
                None,
            )
            .await;

            match result {
                Ok(()) => {
                    success.set(true);
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    message.set(String::new());
                }
                Err(e) => error.set(Some(e.to_string())),
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        main {
            class: "min-h-screen bg-white",

            // Header
            div {
                class: "pt-8 pb-4 px-4 max-w-4xl",
                p { class: "text-sm text-gray-600 mb-4", "Get Started" }
                h1 {
                    class: "text-3xl lg:text-6xl font-bold text-black mb-2",
                    "Get in touch with us."
                }
                h2 {
                    class: "text-3xl lg:text-6xl font-bold text-black mb-4",
                    "We're here to assist you."
                }
            }

            div {
                class: "px-4 max-w-4xl pb-16",

                if success() {
                    div {
                        class: "mb-6 p-4 bg-green-100 border border-green-400 text-green-700 rounded-lg",
                        "Thank you! Your message has been sent successfully. We'll get back to you soon."
                    }
                }
                if let Some(err) = error() {
                    div {
                        class: "mb-6 p-4 bg-red-100 border border-red-400 text-red-700 rounded-lg",
                        "Sorry, there was an error sending your message. Please try again. ({err})"
                    }
                }

                form {
                    class: "space-y-8",
                    onsubmit: handle_submit,

                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                        div {
                            class: "space-y-2",
                            label { class: "block text-base font-medium text-black", "Your Name" }
                            input {
                                r#type: "text",
                                class: input_class,
                                value: "{name}",
                                oninput: move |e| name.set(e.value()),
                                required: true
                            }
                        }
                        div {
                            class: "space-y-2",
                            label { class: "block text-base font-medium text-black", "Email Address" }
                            input {
                                r#type: "email",
                                class: input_class,
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                                required: true
                            }
                        }
                        div {
                            class: "space-y-2",
                            label { class: "block text-base font-medium text-black", "Phone Number" }
                            input {
                                r#type: "tel",
                                class: input_class,
                                value: "{phone}",
                                oninput: move |e| phone.set(e.value()),
                                required: true
                            }
                        }
                    }

                    div {
                        class: "space-y-2",
                        label { class: "block text-base font-medium text-black", "Message" }
                        textarea {
                            class: input_class,
                            rows: "5",
                            placeholder: "Tell us what you're looking for...",
                            value: "{message}",
                            oninput: move |e| message.set(e.value()),
                            required: true
                        }
                    }

                    button {
                        r#type: "submit",
                        disabled: is_submitting(),
                        class: "bg-red-600 text-white px-8 py-4 rounded-full font-medium text-lg hover:bg-red-700 transition-colors disabled:opacity-50",
                        if is_submitting() { "Sending..." } else { "Leave us a Message \u{2192}" }
                    }
                }
            }
        }
    }
}
