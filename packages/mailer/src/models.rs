//! Inquiry submission types.

use serde::{Deserialize, Serialize};

use crate::MailerError;

/// What the visitor is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryKind {
    Viewing,
    Information,
    Offer,
    Callback,
}

impl InquiryKind {
    pub fn label(&self) -> &'static str {
        match self {
            InquiryKind::Viewing => "Schedule a Viewing",
            InquiryKind::Information => "Request Information",
            InquiryKind::Offer => "Make an Offer",
            InquiryKind::Callback => "Request a Callback",
        }
    }
}

impl std::str::FromStr for InquiryKind {
    type Err = MailerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "viewing" => Ok(InquiryKind::Viewing),
            "information" => Ok(InquiryKind::Information),
            "offer" => Ok(InquiryKind::Offer),
            "callback" => Ok(InquiryKind::Callback),
            _ => Err(MailerError::Invalid("unknown inquiry kind")),
        }
    }
}

/// One lead-capture form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquirySubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Set when the inquiry concerns a specific listing.
    pub property_id: Option<String>,
    pub kind: Option<InquiryKind>,
}

impl InquirySubmission {
    /// All four free-text fields are required, matching the contact form.
    pub fn validate(&self) -> Result<(), MailerError> {
        if self.name.trim().is_empty() {
            return Err(MailerError::Invalid("name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(MailerError::Invalid("email is required"));
        }
        if self.phone.trim().is_empty() {
            return Err(MailerError::Invalid("phone is required"));
        }
        if self.message.trim().is_empty() {
            return Err(MailerError::Invalid("message is required"));
        }
        Ok(())
    }

    pub fn notification_subject(&self) -> String {
        match &self.property_id {
            Some(id) => format!("New Property Inquiry - {id}"),
            None => "New Property Inquiry".to_string(),
        }
    }

    /// Notification sent to the agency inbox.
    pub fn notification_body(&self) -> String {
        let mut contact = format!(
            "<h2>New Property Inquiry</h2>\
             <h3>Contact Information</h3>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Phone:</strong> {}</p>",
            escape(&self.name),
            escape(&self.email),
            escape(&self.phone),
        );
        if let Some(id) = &self.property_id {
            contact.push_str(&format!("<p><strong>Property ID:</strong> {}</p>", escape(id)));
        }
        if let Some(kind) = self.kind {
            contact.push_str(&format!("<p><strong>Inquiry:</strong> {}</p>", kind.label()));
        }
        contact.push_str(&format!(
            "<h3>Message</h3><p style=\"white-space: pre-wrap;\">{}</p>",
            escape(&self.message)
        ));
        contact
    }

    /// Confirmation sent back to the visitor.
    pub fn confirmation_body(&self) -> String {
        let reference = match &self.property_id {
            Some(id) => format!(" (ID: {})", escape(id)),
            None => String::new(),
        };
        format!(
            "<h2>Thank You for Your Inquiry</h2>\
             <p>Dear {},</p>\
             <p>Thank you for contacting us regarding our property{}. We have \
             received your message and will get back to you within 24 hours.</p>\
             <h3>Your Message</h3>\
             <p style=\"white-space: pre-wrap;\">{}</p>\
             <p>Best regards,<br>Cornerstone Properties</p>",
            escape(&self.name),
            reference,
            escape(&self.message),
        )
    }
}

/// Minimal HTML escaping for user-entered text in mail bodies.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
