use std::time::Duration;

use tracing::{info, warn};

use cedarheights_shared::contact::ContactSubmission;

use crate::message::{EmailMessage, business_message, confirmation_message};
use crate::DispatchConfig;

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("failed to render email template: {0}")]
    Template(#[from] askama::Error),

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Brevo API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Aggregate of one submission attempt. `success` tracks the business
/// notification only; a lost confirmation is recorded but non-fatal.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub contact_email_sent: bool,
    pub confirmation_email_sent: bool,
    pub success: bool,
    pub errors: Vec<String>,
}

/// Client for the provider's transactional-email endpoint. Built once at
/// startup from validated configuration; holds no per-call state.
#[derive(Clone)]
pub struct DispatchClient {
    http: reqwest::Client,
    config: DispatchConfig,
}

impl DispatchClient {
    pub fn new(config: DispatchConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(DispatchClient { http, config })
    }

    /// Send the business notification and the submitter confirmation.
    /// Both sends are always attempted; the two calls are independent and
    /// run concurrently, but failures are recorded in attempt order
    /// (business first) so the aggregate reads the same either way.
    pub async fn send_notifications(&self, submission: &ContactSubmission) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();

        let (business, confirmation) = futures::future::join(
            self.send(business_message(&self.config, submission)),
            self.send(confirmation_message(&self.config, submission)),
        )
        .await;

        match business {
            Ok(()) => {
                info!(subject = %submission.subject, "contact notification sent");
                outcome.contact_email_sent = true;
            }
            Err(err) => {
                warn!(error = %err, "contact notification failed");
                outcome.errors.push(format!("Contact email failed: {err}"));
            }
        }

        match confirmation {
            Ok(()) => {
                info!(to = %submission.email, "confirmation email sent");
                outcome.confirmation_email_sent = true;
            }
            Err(err) => {
                warn!(error = %err, "confirmation email failed");
                outcome
                    .errors
                    .push(format!("Confirmation email failed: {err}"));
            }
        }

        outcome.success = outcome.contact_email_sent;
        outcome
    }

    async fn send(&self, message: Result<EmailMessage, askama::Error>) -> Result<(), SendError> {
        let message = message?;
        let response = self
            .http
            .post(&self.config.endpoint)
            .header("accept", "application/json")
            .header("api-key", &self.config.api_key)
            .json(&message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let fallback = status
                .canonical_reason()
                .unwrap_or("Unknown Error")
                .to_owned();
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_owned)
                })
                .unwrap_or(fallback);
            return Err(SendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
