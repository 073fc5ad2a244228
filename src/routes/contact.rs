use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use strum::VariantArray;
use validator::ValidationErrors;

use cedarheights_shared::Error;
use cedarheights_shared::contact::{ContactFormInput, Subject};
use cedarheights_shared::validate::first_message;

use crate::routes::{AppState, forward, screen};
use crate::template::{Banner, Template};

const SUCCESS_MESSAGE: &str =
    "\u{2705} Thank you! Your message has been sent successfully. We'll get back to you within 24 hours.";
const FAILURE_MESSAGE: &str =
    "\u{274C} Sorry, there was an error sending your message. Please try again or contact us directly.";

/// One message per field, ready for the error spans under each input.
#[derive(Default)]
pub struct ContactFormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub consent: Option<String>,
}

impl ContactFormErrors {
    fn from_validation(errors: &ValidationErrors) -> Self {
        ContactFormErrors {
            name: first_message(errors, "name"),
            email: first_message(errors, "email"),
            message: first_message(errors, "message"),
            consent: first_message(errors, "consent"),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub current_path: &'static str,
    pub subjects: &'static [Subject],
    pub values: ContactFormInput,
    pub errors: ContactFormErrors,
    pub banner: Option<Banner>,
}

impl Default for ContactTemplate {
    fn default() -> Self {
        Self {
            current_path: "contact",
            subjects: Subject::VARIANTS,
            values: ContactFormInput::default(),
            errors: ContactFormErrors::default(),
            banner: None,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate::default())
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ContactFormInput>,
) -> impl IntoResponse {
    match screen(&input, &input.website) {
        Ok(()) => {}
        Err(Error::Validate(errors)) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                template.render(ContactTemplate {
                    errors: ContactFormErrors::from_validation(&errors),
                    values: input,
                    ..Default::default()
                }),
            )
                .into_response();
        }
        Err(err) => {
            // Honeypot: pretend nothing worked, keep the bot guessing
            tracing::info!(error = %err, "contact form submission rejected");
            return template
                .render(ContactTemplate {
                    values: input,
                    banner: Some(Banner::error(FAILURE_MESSAGE)),
                    ..Default::default()
                })
                .into_response();
        }
    }

    match forward(&app, input.clone().into_submission()).await {
        Ok(()) => {
            // Entered values are cleared on purpose, the lead is in.
            template
                .render(ContactTemplate {
                    banner: Some(Banner::success(SUCCESS_MESSAGE)),
                    ..Default::default()
                })
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "contact dispatch failed");
            template
                .render(ContactTemplate {
                    values: input,
                    banner: Some(Banner::error(FAILURE_MESSAGE)),
                    ..Default::default()
                })
                .into_response()
        }
    }
}
