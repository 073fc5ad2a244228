use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use cedarheights_dispatch::DispatchClient;
use cedarheights_enrollment::Schedule;
use cedarheights_shared::{Error, Result, contact::ContactSubmission};
use validator::Validate;

use crate::template::{NotFoundTemplate, Template};

mod about;
mod assets;
mod coming_soon;
mod contact;
mod enroll;
mod health;
mod index;
mod pricing;
mod privacy;
mod terms;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// `None` when no email credentials are configured; submissions then
    /// fail with the generic error instead of reaching the provider.
    pub dispatch: Option<DispatchClient>,
    pub schedule: Schedule,
}

impl AppState {
    pub fn from_config(config: crate::config::Config) -> anyhow::Result<Self> {
        let schedule = config.build_schedule()?;

        let dispatch = match &config.email {
            Some(email) => {
                tracing::info!(sender = %email.from_email, "email dispatch enabled");
                Some(DispatchClient::new(email.to_dispatch_config())?)
            }
            None => {
                tracing::warn!("no [email] configuration, dispatch is disabled");
                None
            }
        };

        Ok(AppState {
            config,
            dispatch,
            schedule,
        })
    }
}

/// Gate every form submission: honeypot first, field validation second.
fn screen<T: Validate>(input: &T, honeypot: &str) -> Result<()> {
    if !honeypot.trim().is_empty() {
        return Err(Error::Spam);
    }
    input.validate()?;
    Ok(())
}

/// Hand a screened submission to the dispatch client. Missing dispatch
/// configuration and provider failures both come back as errors; the
/// handlers render the same generic banner for either.
async fn forward(app: &AppState, submission: ContactSubmission) -> Result<()> {
    let Some(dispatch) = app.dispatch.as_ref() else {
        return Err(Error::DispatchDisabled);
    };

    let outcome = dispatch.send_notifications(&submission).await;
    if outcome.success {
        Ok(())
    } else {
        Err(Error::Server(outcome.errors.join("; ")))
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate::default()),
    )
}

pub fn router(app_state: AppState) -> Router {
    if app_state.config.site.maintenance {
        return maintenance_router(app_state);
    }

    Router::new()
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/pricing", get(pricing::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/enroll", get(enroll::page).post(enroll::submit))
        .route("/enroll/instrument", post(enroll::select_instrument))
        .route("/enroll/slot", post(enroll::select_slot))
        .route("/enroll/back", post(enroll::back))
        .route("/privacy", get(privacy::page))
        .route("/terms", get(terms::page))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .fallback(fallback)
        .nest_service("/static", assets::AssetsService::new())
        .with_state(app_state)
}

/// Maintenance mode swaps every page for the coming-soon placeholder.
/// Probes and embedded assets stay mounted.
fn maintenance_router(app_state: AppState) -> Router {
    Router::new()
        .route("/inquiry", post(coming_soon::action))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .fallback(coming_soon::page)
        .nest_service("/static", assets::AssetsService::new())
        .with_state(app_state)
}
