//! The enrollment wizard as a server-driven flow.
//!
//! Each step is one full-page render; selections travel in hidden form
//! fields and are re-validated against the published schedule on every
//! POST. Tampered or stale fields drop the visitor back to the earliest
//! incomplete step instead of erroring.

use std::str::FromStr;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use strum::VariantArray;
use validator::ValidationErrors;

use cedarheights_enrollment::{
    EnrollmentSelection, Instrument, Relation, SkillLevel, StudentInfo, TimeSlot, WizardState,
};
use cedarheights_shared::Error;
use cedarheights_shared::validate::first_message;

use crate::routes::{AppState, forward, screen};
use crate::template::{Banner, Template};

const SUCCESS_MESSAGE: &str =
    "\u{2705} Thank you! Your enrollment request has been sent. We'll get back to you within 24 hours.";
const FAILURE_MESSAGE: &str =
    "\u{274C} Sorry, there was an error sending your message. Please try again or contact us directly.";

#[derive(askama::Template)]
#[template(path = "enroll/instrument.html")]
pub struct InstrumentStepTemplate {
    pub current_path: &'static str,
    pub step: u8,
    pub progress: u8,
    pub instruments: &'static [Instrument],
}

impl Default for InstrumentStepTemplate {
    fn default() -> Self {
        let state = WizardState::start();
        Self {
            current_path: "enroll",
            step: state.step(),
            progress: state.progress_percent(),
            instruments: Instrument::VARIANTS,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "enroll/slot.html")]
pub struct SlotStepTemplate {
    pub current_path: &'static str,
    pub step: u8,
    pub progress: u8,
    pub instrument: Instrument,
    pub slots: Vec<TimeSlot>,
}

#[derive(askama::Template)]
#[template(path = "enroll/review.html")]
pub struct ReviewStepTemplate {
    pub current_path: &'static str,
    pub step: u8,
    pub progress: u8,
    pub instrument: Instrument,
    pub slot: TimeSlot,
    pub skill_levels: &'static [SkillLevel],
    pub relations: &'static [Relation],
    pub values: StudentInfo,
    pub errors: StudentFormErrors,
    pub banner: Option<Banner>,
}

impl ReviewStepTemplate {
    fn new(instrument: Instrument, slot: TimeSlot) -> Self {
        let state = WizardState::Review { instrument, slot };
        Self {
            current_path: "enroll",
            step: state.step(),
            progress: state.progress_percent(),
            instrument,
            slot,
            skill_levels: SkillLevel::VARIANTS,
            relations: Relation::VARIANTS,
            values: StudentInfo::default(),
            errors: StudentFormErrors::default(),
            banner: None,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "enroll/confirmed.html")]
pub struct ConfirmedTemplate {
    pub current_path: &'static str,
    pub instrument: Instrument,
    pub slot: TimeSlot,
    pub banner: Option<Banner>,
}

/// One message per field for the error spans under each input.
#[derive(Default)]
pub struct StudentFormErrors {
    pub name: Option<String>,
    pub age: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
}

impl StudentFormErrors {
    fn from_validation(errors: &ValidationErrors) -> Self {
        StudentFormErrors {
            name: first_message(errors, "name"),
            age: first_message(errors, "age"),
            contact_name: first_message(errors, "contact_name"),
            email: first_message(errors, "email"),
        }
    }
}

#[derive(Deserialize)]
pub struct InstrumentInput {
    #[serde(default)]
    pub instrument: String,
}

#[derive(Deserialize)]
pub struct StepInput {
    #[serde(default)]
    pub instrument: String,
    #[serde(default)]
    pub slot: String,
}

#[derive(Deserialize)]
pub struct SubmitInput {
    #[serde(default)]
    pub instrument: String,
    #[serde(default)]
    pub slot: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub skill_level: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub relation: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
}

fn reconstruct(app: &AppState, instrument: &str, slot: &str) -> WizardState {
    WizardState::reconstruct(Instrument::from_str(instrument).ok(), app.schedule.find(slot))
}

fn render_step(template: &Template, app: &AppState, state: WizardState) -> Response {
    match state {
        WizardState::Instrument => template.render(InstrumentStepTemplate::default()),
        WizardState::TimeSlot { instrument } => template.render(SlotStepTemplate {
            current_path: "enroll",
            step: state.step(),
            progress: state.progress_percent(),
            instrument,
            slots: app.schedule.slots().to_vec(),
        }),
        WizardState::Review { instrument, slot } => {
            template.render(ReviewStepTemplate::new(instrument, slot))
        }
    }
}

/// GET /enroll always opens a fresh wizard at step one.
pub async fn page(template: Template) -> impl IntoResponse {
    template.render(InstrumentStepTemplate::default())
}

pub async fn select_instrument(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<InstrumentInput>,
) -> Response {
    let state = match Instrument::from_str(&input.instrument) {
        Ok(instrument) => WizardState::start().select_instrument(instrument),
        // Not one of the taught instruments: stay on step one
        Err(_) => WizardState::start(),
    };

    render_step(&template, &app, state)
}

pub async fn select_slot(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<StepInput>,
) -> Response {
    let state = reconstruct(&app, &input.instrument, "");

    let state = match app.schedule.find(&input.slot) {
        Some(slot) => state.select_slot(slot),
        // Stale or tampered slot id: stay where we are
        None => state,
    };

    render_step(&template, &app, state)
}

pub async fn back(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<StepInput>,
) -> Response {
    let state = reconstruct(&app, &input.instrument, &input.slot);
    render_step(&template, &app, state.back())
}

pub async fn submit(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<SubmitInput>,
) -> Response {
    let state = reconstruct(&app, &input.instrument, &input.slot);
    let WizardState::Review { instrument, slot } = state else {
        return render_step(&template, &app, state);
    };

    let student = StudentInfo {
        name: input.name,
        age: input.age,
        skill_level: SkillLevel::from_str(&input.skill_level).unwrap_or_default(),
        contact_name: input.contact_name,
        relation: Relation::from_str(&input.relation).unwrap_or_default(),
        email: input.email,
        phone: input.phone,
    };

    match screen(&student, &input.website) {
        Ok(()) => {}
        Err(Error::Validate(errors)) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                template.render(ReviewStepTemplate {
                    errors: StudentFormErrors::from_validation(&errors),
                    values: student,
                    ..ReviewStepTemplate::new(instrument, slot)
                }),
            )
                .into_response();
        }
        Err(err) => {
            tracing::info!(error = %err, "enrollment submission rejected");
            return template.render(ReviewStepTemplate {
                values: student,
                banner: Some(Banner::error(FAILURE_MESSAGE)),
                ..ReviewStepTemplate::new(instrument, slot)
            });
        }
    }

    let selection = EnrollmentSelection {
        instrument,
        slot,
        student: student.clone(),
    };

    match forward(&app, selection.into_submission()).await {
        Ok(()) => template.render(ConfirmedTemplate {
            current_path: "enroll",
            instrument,
            slot,
            banner: Some(Banner::success(SUCCESS_MESSAGE)),
        }),
        Err(err) => {
            tracing::error!(error = %err, "enrollment dispatch failed");
            template.render(ReviewStepTemplate {
                values: student,
                banner: Some(Banner::error(FAILURE_MESSAGE)),
                ..ReviewStepTemplate::new(instrument, slot)
            })
        }
    }
}
