use askama::Template;
use serde::Serialize;

use cedarheights_shared::contact::ContactSubmission;

use crate::DispatchConfig;

/// One transactional-email request body, shaped the way the provider's
/// `POST /v3/smtp/email` endpoint expects it.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    pub sender: Party,
    pub to: Vec<Party>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Party>,
    pub subject: String,
    pub html_content: String,
    pub text_content: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Party {
    pub name: String,
    pub email: String,
}

#[derive(Template)]
#[template(path = "emails/contact_notification.html")]
struct ContactNotificationHtml<'a> {
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    subject: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "emails/contact_notification.txt")]
struct ContactNotificationText<'a> {
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    subject: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "emails/contact_confirmation.html")]
struct ContactConfirmationHtml<'a> {
    name: &'a str,
}

#[derive(Template)]
#[template(path = "emails/contact_confirmation.txt")]
struct ContactConfirmationText<'a> {
    name: &'a str,
}

/// The notification that lands in the studio inbox. Reply-to points at
/// the submitter so a plain reply reaches them.
pub fn business_message(
    config: &DispatchConfig,
    submission: &ContactSubmission,
) -> Result<EmailMessage, askama::Error> {
    let phone = submission.phone.as_deref();
    let html = ContactNotificationHtml {
        name: &submission.name,
        email: &submission.email,
        phone,
        subject: &submission.subject,
        message: &submission.message,
    }
    .render()?;
    let text = ContactNotificationText {
        name: &submission.name,
        email: &submission.email,
        phone,
        subject: &submission.subject,
        message: &submission.message,
    }
    .render()?;

    Ok(EmailMessage {
        sender: Party {
            name: config.from_name.clone(),
            email: config.from_email.clone(),
        },
        to: vec![Party {
            name: config.from_name.clone(),
            email: config.to_email.clone(),
        }],
        reply_to: Some(Party {
            name: submission.name.clone(),
            email: submission.email.clone(),
        }),
        subject: format!("{} - From {}", submission.subject, submission.name),
        html_content: html,
        text_content: text,
    })
}

/// The acknowledgement sent back to the submitter. Fixed copy, no echo
/// of the submitted fields beyond the greeting.
pub fn confirmation_message(
    config: &DispatchConfig,
    submission: &ContactSubmission,
) -> Result<EmailMessage, askama::Error> {
    let html = ContactConfirmationHtml {
        name: &submission.name,
    }
    .render()?;
    let text = ContactConfirmationText {
        name: &submission.name,
    }
    .render()?;

    Ok(EmailMessage {
        sender: Party {
            name: config.from_name.clone(),
            email: config.from_email.clone(),
        },
        to: vec![Party {
            name: submission.name.clone(),
            email: submission.email.clone(),
        }],
        reply_to: None,
        subject: "Thank you for contacting Cedar Heights Music Academy".to_owned(),
        html_content: html,
        text_content: text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DispatchConfig {
        DispatchConfig {
            api_key: "key".into(),
            from_name: "Cedar Heights Music Academy".into(),
            from_email: "hello@cedarheightsmusic.com".into(),
            to_email: "hello@cedarheightsmusic.com".into(),
            endpoint: crate::DEFAULT_ENDPOINT.into(),
            timeout_secs: 15,
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: None,
            subject: "General Inquiry".into(),
            message: "Interested in piano lessons.".into(),
        }
    }

    #[test]
    fn notification_goes_to_the_studio_with_reply_to_submitter() {
        let message = business_message(&config(), &submission()).unwrap();
        assert_eq!(message.to[0].email, "hello@cedarheightsmusic.com");
        assert_eq!(message.subject, "General Inquiry - From Jane Doe");
        let reply_to = message.reply_to.unwrap();
        assert_eq!(reply_to.email, "jane@example.com");
        assert_eq!(reply_to.name, "Jane Doe");
        assert!(message.html_content.contains("Interested in piano lessons."));
        assert!(message.text_content.contains("Interested in piano lessons."));
    }

    #[test]
    fn confirmation_goes_to_the_submitter_with_fixed_subject() {
        let message = confirmation_message(&config(), &submission()).unwrap();
        assert_eq!(message.to[0].email, "jane@example.com");
        assert_eq!(message.reply_to, None);
        assert_eq!(
            message.subject,
            "Thank you for contacting Cedar Heights Music Academy"
        );
        assert!(message.html_content.contains("Dear Jane Doe"));
    }

    #[test]
    fn html_body_escapes_markup_while_text_keeps_it() {
        let spicy = ContactSubmission {
            name: "Jane <script>alert(1)</script>".into(),
            message: "a < b > c".into(),
            ..submission()
        };
        let message = business_message(&config(), &spicy).unwrap();
        assert!(!message.html_content.contains("<script>"));
        assert!(message.html_content.contains("&lt;script&gt;"));
        assert!(message.text_content.contains("Jane <script>alert(1)</script>"));
    }

    #[test]
    fn wire_body_uses_provider_field_names() {
        let message = business_message(&config(), &submission()).unwrap();
        let value = serde_json::to_value(&message).unwrap();
        assert!(value.get("htmlContent").is_some());
        assert!(value.get("textContent").is_some());
        assert!(value.get("replyTo").is_some());
        assert_eq!(value["sender"]["name"], "Cedar Heights Music Academy");
    }

    #[test]
    fn absent_reply_to_is_omitted_from_the_wire_body() {
        let message = confirmation_message(&config(), &submission()).unwrap();
        let value = serde_json::to_value(&message).unwrap();
        assert!(value.get("replyTo").is_none());
    }
}
