use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

use crate::enrollment::Instrument;
use crate::validate::{
    consent_given, email_address, message_required, name_required, student_age,
    student_name_required,
};

#[derive(
    EnumString, Display, VariantArray, Default, Clone, Copy, Debug, PartialEq, Deserialize, AsRefStr,
)]
pub enum Subject {
    #[default]
    #[serde(rename = "General Inquiry")]
    #[strum(serialize = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Lesson Information")]
    #[strum(serialize = "Lesson Information")]
    LessonInformation,
    Scheduling,
    Other,
}

/// Payload handed to the dispatch client. Built once from a validated
/// form and immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

fn none_if_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Contact page form. `website` is the honeypot: humans never see it,
/// bots fill it in.
#[derive(Validate, Deserialize, Default, Clone, Debug)]
pub struct ContactFormInput {
    #[validate(custom(function = "name_required"))]
    pub name: String,
    #[validate(custom(function = "email_address"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: Subject,
    #[validate(custom(function = "message_required"))]
    pub message: String,
    #[serde(default)]
    #[validate(custom(function = "consent_given"))]
    pub consent: bool,
    #[serde(default)]
    pub website: String,
}

impl ContactFormInput {
    pub fn is_spam(&self) -> bool {
        !self.website.trim().is_empty()
    }

    pub fn into_submission(self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: none_if_blank(self.phone),
            subject: self.subject.to_string(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// Maintenance-mode inquiry form.
#[derive(Validate, Deserialize, Default, Clone, Debug)]
pub struct InquiryFormInput {
    #[validate(custom(function = "student_name_required"))]
    pub name: String,
    #[validate(custom(function = "student_age"))]
    pub age: String,
    #[serde(default)]
    pub instrument: Instrument,
    #[validate(custom(function = "email_address"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub website: String,
}

impl InquiryFormInput {
    pub fn is_spam(&self) -> bool {
        !self.website.trim().is_empty()
    }

    pub fn into_submission(self) -> ContactSubmission {
        let subject = format!(
            "Music Lesson Inquiry - {} (Age: {})",
            self.instrument,
            self.age.trim()
        );
        let message = format!(
            "Name: {name}\nAge: {age}\nInstrument: {instrument}\nEmail: {email}\nPhone: {phone}\n\nMessage:\n{message}\n\nThis inquiry was submitted through the maintenance mode form.",
            name = self.name.trim(),
            age = self.age.trim(),
            instrument = self.instrument,
            email = self.email.trim(),
            phone = self.phone.trim(),
            message = self.message.trim(),
        );

        ContactSubmission {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: none_if_blank(self.phone),
            subject,
            message,
        }
    }
}
