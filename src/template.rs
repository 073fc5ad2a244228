use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

use crate::season::Season;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Status box rendered under a form after a submit attempt.
pub struct Banner {
    pub class: &'static str,
    pub text: &'static str,
}

impl Banner {
    pub fn success(text: &'static str) -> Self {
        Banner {
            class: "success-message",
            text,
        }
    }

    pub fn error(text: &'static str) -> Self {
        Banner {
            class: "error-message",
            text,
        }
    }
}

/// Per-request rendering context. The season picks the hero artwork.
pub struct Template {
    pub season: Season,
}

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "template rendering failed");
                let body = askama::Template::render(&ServerErrorTemplate::default())
                    .unwrap_or_else(|_| SERVER_ERROR_MESSAGE.to_owned());
                (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
            }
        }
    }
}

impl<S> FromRequestParts<S> for Template
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template {
            season: Season::today(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub current_path: &'static str,
}

impl Default for NotFoundTemplate {
    fn default() -> Self {
        Self { current_path: "" }
    }
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerErrorTemplate {
    pub current_path: &'static str,
}

impl Default for ServerErrorTemplate {
    fn default() -> Self {
        Self { current_path: "" }
    }
}
