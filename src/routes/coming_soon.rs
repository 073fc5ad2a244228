//! Maintenance-mode holding page. While the site is flagged down every
//! path renders this page, but the inquiry form stays live so leads are
//! not lost during the outage.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use strum::VariantArray;
use validator::ValidationErrors;

use cedarheights_shared::Error;
use cedarheights_shared::contact::InquiryFormInput;
use cedarheights_shared::enrollment::Instrument;
use cedarheights_shared::validate::first_message;

use crate::routes::{AppState, forward, screen};
use crate::template::{Banner, Template};

const SUCCESS_MESSAGE: &str = "Thank you! We'll contact you soon.";
const FAILURE_MESSAGE: &str = "Please try again or contact us directly.";

#[derive(Default)]
pub struct InquiryFormErrors {
    pub name: Option<String>,
    pub age: Option<String>,
    pub email: Option<String>,
}

impl InquiryFormErrors {
    fn from_validation(errors: &ValidationErrors) -> Self {
        InquiryFormErrors {
            name: first_message(errors, "name"),
            age: first_message(errors, "age"),
            email: first_message(errors, "email"),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "coming_soon.html")]
pub struct ComingSoonTemplate {
    pub instruments: &'static [Instrument],
    pub values: InquiryFormInput,
    pub errors: InquiryFormErrors,
    pub banner: Option<Banner>,
}

impl Default for ComingSoonTemplate {
    fn default() -> Self {
        Self {
            instruments: Instrument::VARIANTS,
            values: InquiryFormInput::default(),
            errors: InquiryFormErrors::default(),
            banner: None,
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ComingSoonTemplate::default())
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<InquiryFormInput>,
) -> impl IntoResponse {
    match screen(&input, &input.website) {
        Ok(()) => {}
        Err(Error::Validate(errors)) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                template.render(ComingSoonTemplate {
                    errors: InquiryFormErrors::from_validation(&errors),
                    values: input,
                    ..Default::default()
                }),
            )
                .into_response();
        }
        Err(err) => {
            tracing::info!(error = %err, "inquiry submission rejected");
            return template
                .render(ComingSoonTemplate {
                    values: input,
                    banner: Some(Banner::error(FAILURE_MESSAGE)),
                    ..Default::default()
                })
                .into_response();
        }
    }

    match forward(&app, input.clone().into_submission()).await {
        Ok(()) => template
            .render(ComingSoonTemplate {
                banner: Some(Banner::success(SUCCESS_MESSAGE)),
                ..Default::default()
            })
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "inquiry dispatch failed");
            template
                .render(ComingSoonTemplate {
                    values: input,
                    banner: Some(Banner::error(FAILURE_MESSAGE)),
                    ..Default::default()
                })
                .into_response()
        }
    }
}
