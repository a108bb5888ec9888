//! Outbound email client for inquiry notifications.
//!
//! Lead capture is a thin side effect: one HTTP POST to the mail delivery
//! service per submission. Two messages go out for each inquiry, a
//! notification to the agency inbox and a confirmation to the visitor. A
//! failed dispatch is recoverable; the caller shows a retryable error and
//! nothing else on the page is touched.

pub mod models;

use serde::Serialize;
use thiserror::Error;

pub use models::{InquiryKind, InquirySubmission};

pub type Result<T> = std::result::Result<T, MailerError>;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("mail API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid submission: {0}")]
    Invalid(&'static str),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Connection settings for the mail delivery service.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Send endpoint of the delivery API.
    pub endpoint: String,
    pub api_key: String,
    /// Address the messages are sent from.
    pub from: String,
    /// Agency inbox that receives inquiry notifications.
    pub contact_email: String,
}

impl MailerConfig {
    /// Read settings from the environment: `MAIL_API_ENDPOINT`,
    /// `MAIL_API_KEY`, `MAIL_FROM`, `CONTACT_EMAIL` (defaults to
    /// `MAIL_FROM`).
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var("MAIL_API_ENDPOINT")
            .map_err(|_| MailerError::Config("MAIL_API_ENDPOINT is not set".into()))?;
        let api_key = std::env::var("MAIL_API_KEY")
            .map_err(|_| MailerError::Config("MAIL_API_KEY is not set".into()))?;
        let from = std::env::var("MAIL_FROM")
            .map_err(|_| MailerError::Config("MAIL_FROM is not set".into()))?;
        let contact_email = std::env::var("CONTACT_EMAIL").unwrap_or_else(|_| from.clone());

        Ok(Self {
            endpoint,
            api_key,
            from,
            contact_email,
        })
    }
}

#[derive(Debug, Serialize)]
struct OutgoingMessage {
    from: String,
    to: String,
    subject: String,
    html: String,
}

/// Client for the mail delivery service.
#[derive(Debug, Clone)]
pub struct Mailer {
    client: reqwest::Client,
    config: MailerConfig,
}

impl Mailer {
    pub fn new(config: MailerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Dispatch one inquiry: notify the agency, confirm to the visitor.
    ///
    /// Validates required fields first so an incomplete submission never
    /// reaches the delivery service.
    pub async fn send_inquiry(&self, submission: &InquirySubmission) -> Result<()> {
        submission.validate()?;

        let notification = OutgoingMessage {
            from: self.config.from.clone(),
            to: self.config.contact_email.clone(),
            subject: submission.notification_subject(),
            html: submission.notification_body(),
        };
        self.send(&notification).await?;

        let confirmation = OutgoingMessage {
            from: self.config.from.clone(),
            to: submission.email.clone(),
            subject: "Thank you for your inquiry".to_string(),
            html: submission.confirmation_body(),
        };
        self.send(&confirmation).await?;

        tracing::info!(
            property_id = submission.property_id.as_deref(),
            "inquiry dispatched"
        );
        Ok(())
    }

    async fn send(&self, message: &OutgoingMessage) -> Result<()> {
        let resp = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(message)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "mail dispatch failed");
            return Err(MailerError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }
}
