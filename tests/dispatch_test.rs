use cedarheights_dispatch::{DispatchClient, DispatchConfig};
use cedarheights_shared::contact::ContactSubmission;

mod helpers;

fn dispatch_config(endpoint: &str) -> DispatchConfig {
    DispatchConfig {
        api_key: "xkeysib-test".to_string(),
        from_name: "Cedar Heights Music Academy".to_string(),
        from_email: "hello@cedarheightsmusic.com".to_string(),
        to_email: "hello@cedarheightsmusic.com".to_string(),
        endpoint: endpoint.to_string(),
        timeout_secs: 5,
    }
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: Some("(250) 555-0188".to_string()),
        subject: "General Inquiry".to_string(),
        message: "Interested in piano lessons.".to_string(),
    }
}

#[tokio::test]
async fn both_emails_sent_is_a_full_success() {
    let provider = helpers::StubProvider::start(None).await;
    let client = DispatchClient::new(dispatch_config(&provider.endpoint)).unwrap();

    let outcome = client.send_notifications(&submission()).await;

    assert!(outcome.success);
    assert!(outcome.contact_email_sent);
    assert!(outcome.confirmation_email_sent);
    assert!(outcome.errors.is_empty());

    let received = provider.received();
    assert_eq!(received.len(), 2);
    assert!(received.iter().all(|r| r.api_key == "xkeysib-test"));
    assert!(
        received
            .iter()
            .all(|r| r.sender == "hello@cedarheightsmusic.com")
    );
}

#[tokio::test]
async fn failed_business_email_fails_the_outcome() {
    let provider = helpers::StubProvider::start(Some("From Jane Doe")).await;
    let client = DispatchClient::new(dispatch_config(&provider.endpoint)).unwrap();

    let outcome = client.send_notifications(&submission()).await;

    assert!(!outcome.success);
    assert!(!outcome.contact_email_sent);
    assert!(outcome.confirmation_email_sent);
    assert_eq!(
        outcome.errors,
        vec!["Contact email failed: Brevo API error: 500 - stub failure".to_string()]
    );
}

#[tokio::test]
async fn lost_confirmation_is_recorded_but_not_fatal() {
    let provider = helpers::StubProvider::start(Some("Thank you for contacting")).await;
    let client = DispatchClient::new(dispatch_config(&provider.endpoint)).unwrap();

    let outcome = client.send_notifications(&submission()).await;

    assert!(outcome.success);
    assert!(outcome.contact_email_sent);
    assert!(!outcome.confirmation_email_sent);
    assert_eq!(
        outcome.errors,
        vec!["Confirmation email failed: Brevo API error: 500 - stub failure".to_string()]
    );
}

#[tokio::test]
async fn unreachable_provider_fails_both_sends() {
    // Nothing is listening on this port
    let client = DispatchClient::new(dispatch_config("http://127.0.0.1:9/v3/smtp/email")).unwrap();

    let outcome = client.send_notifications(&submission()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.errors.len(), 2);
    assert!(outcome.errors[0].starts_with("Contact email failed:"));
    assert!(outcome.errors[1].starts_with("Confirmation email failed:"));
}
