//! Per-property contact modal.
//!
//! Mounted fresh on each open so the form seeds from the selected listing.
//! Submission goes through the shared [`submit_inquiry`] server function;
//! failure leaves the form intact for retry and never touches listing or
//! filter state.

use dioxus::prelude::*;

use listings::ListingRecord;

#[derive(Props, Clone, PartialEq)]
pub struct ContactModalProps {
    pub property: Option<ListingRecord>,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn ContactModal(props: ContactModalProps) -> Element {
    let property_id = props.property.as_ref().map(|p| p.id.clone());
    let prefill = props
        .property
        .as_ref()
        .map(|p| {
            format!(
                "I would like to get an appointment regarding the property presented in advertisement N\u{b0}{}",
                p.id
            )
        })
        .unwrap_or_default();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut message = use_signal(|| prefill);
    let mut kind = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut submitted = use_signal(|| false);

    let input_class = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-red-500";

    let handle_submit = move |_| {
        if is_submitting() {
            return;
        }
        let submission_property_id = property_id.clone();

        spawn(async move {
            is_submitting.set(true);
            error.set(None);

            let result = submit_inquiry(
                name().trim().to_string(),
                email().trim().to_string(),
                phone().trim().to_string(),
                message().trim().to_string(),
                submission_property_id,
                (!kind().is_empty()).then(|| kind()),
            )
            .await;

            match result {
                Ok(()) => {
                    submitted.set(true);
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
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4",
            div {
                class: "bg-white rounded-lg max-w-md w-full max-h-[90vh] overflow-y-auto",

                // Header
                div {
                    class: "bg-red-600 text-white p-4 rounded-t-lg flex items-center justify-between",
                    h3 {
                        class: "text-lg font-semibold",
                        if let Some(property) = &props.property {
                            "Inquire about {property.title}"
                        } else {
                            "Contact Us"
                        }
                    }
                    button {
                        onclick: move |_| props.on_close.call(()),
                        class: "text-white/80 hover:text-white text-xl leading-none",
                        "\u{2715}"
                    }
                }

                if submitted() {
                    div {
                        class: "p-8 text-center",
                        h4 { class: "text-lg font-semibold text-gray-900 mb-2", "Message sent!" }
                        p {
                            class: "text-gray-600 mb-6",
                            "Thank you for your inquiry. We'll get back to you within 24 hours."
                        }
                        button {
                            onclick: move |_| props.on_close.call(()),
                            class: "bg-red-600 text-white px-6 py-2 rounded-md hover:bg-red-700 transition-colors",
                            "Close"
                        }
                    }
                } else {
                    form {
                        class: "p-6 space-y-4",
                        onsubmit: handle_submit,

                        if let Some(err) = error() {
                            div {
                                class: "bg-red-50 border border-red-200 text-red-700 p-3 rounded-lg text-sm",
                                "{err} Please try again."
                            }
                        }

                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Your Name" }
                            input {
                                r#type: "text",
                                class: input_class,
                                value: "{name}",
                                oninput: move |e| name.set(e.value()),
                                required: true
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Email Address" }
                            input {
                                r#type: "email",
                                class: input_class,
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                                required: true
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Phone Number" }
                            input {
                                r#type: "tel",
                                class: input_class,
                                value: "{phone}",
                                oninput: move |e| phone.set(e.value()),
                                required: true
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Inquiry Type" }
                            select {
                                class: input_class,
                                value: "{kind}",
                                oninput: move |e| kind.set(e.value()),
                                option { value: "", "General" }
                                option { value: "viewing", "Schedule a Viewing" }
                                option { value: "information", "Request Information" }
                                option { value: "offer", "Make an Offer" }
                                option { value: "callback", "Request a Callback" }
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Message" }
                            textarea {
                                class: input_class,
                                rows: "4",
                                value: "{message}",
                                oninput: move |e| message.set(e.value()),
                                required: true
                            }
                        }
                        button {
                            r#type: "submit",
                            disabled: is_submitting(),
                            class: "w-full bg-red-600 text-white py-3 rounded-md hover:bg-red-700 transition-colors font-medium disabled:opacity-50",
                            if is_submitting() { "Sending..." } else { "Send Message" }
                        }
                    }
                }
            }
        }
    }
}

/// Dispatch one inquiry through the mail collaborator.
#[server]
pub async fn submit_inquiry(
    name: String,
    email: String,
    phone: String,
    message: String,
    property_id: Option<String>,
    kind: Option<String>,
) -> Result<(), ServerFnError> {
    let config = mailer::MailerConfig::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
    let submission = mailer::InquirySubmission {
        name,
        email,
        phone,
        message,
        property_id,
        kind: kind.as_deref().and_then(|k| k.parse().ok()),
    };

    mailer::Mailer::new(config)
        .send_inquiry(&submission)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "inquiry dispatch failed");
            ServerFnError::new(e.to_string())
        })
}
