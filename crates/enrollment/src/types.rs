use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::macros::format_description;
use validator::Validate;

use cedarheights_shared::contact::ContactSubmission;
use cedarheights_shared::enrollment::Instrument;
use cedarheights_shared::validate::{
    contact_name_required, email_address, student_age, student_name_required,
};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    AsRefStr,
)]
pub enum SkillLevel {
    #[default]
    #[serde(rename = "beginner")]
    #[strum(serialize = "beginner")]
    Beginner,
    #[serde(rename = "some-experience")]
    #[strum(serialize = "some-experience")]
    SomeExperience,
    #[serde(rename = "intermediate")]
    #[strum(serialize = "intermediate")]
    Intermediate,
    #[serde(rename = "advanced")]
    #[strum(serialize = "advanced")]
    Advanced,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::SomeExperience => "Some experience",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

/// Who the contact person is to the student.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    AsRefStr,
)]
pub enum Relation {
    #[default]
    #[serde(rename = "parent")]
    #[strum(serialize = "parent")]
    Parent,
    #[serde(rename = "guardian")]
    #[strum(serialize = "guardian")]
    Guardian,
    #[serde(rename = "self")]
    #[strum(serialize = "self")]
    Myself,
    #[serde(rename = "other")]
    #[strum(serialize = "other")]
    Other,
}

impl Relation {
    pub fn label(&self) -> &'static str {
        match self {
            Relation::Parent => "Parent",
            Relation::Guardian => "Guardian",
            Relation::Myself => "Myself",
            Relation::Other => "Other",
        }
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    AsRefStr,
)]
pub enum Weekday {
    #[serde(rename = "monday")]
    #[strum(serialize = "monday")]
    Monday,
    #[serde(rename = "tuesday")]
    #[strum(serialize = "tuesday")]
    Tuesday,
    #[serde(rename = "wednesday")]
    #[strum(serialize = "wednesday")]
    Wednesday,
    #[serde(rename = "thursday")]
    #[strum(serialize = "thursday")]
    Thursday,
    #[serde(rename = "friday")]
    #[strum(serialize = "friday")]
    Friday,
    #[serde(rename = "saturday")]
    #[strum(serialize = "saturday")]
    Saturday,
    #[serde(rename = "sunday")]
    #[strum(serialize = "sunday")]
    Sunday,
}

impl Weekday {
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// One bookable half-hour on the weekly schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSlot {
    pub day: Weekday,
    pub start: time::Time,
    pub end: time::Time,
}

impl TimeSlot {
    /// Stable identifier carried through hidden form fields,
    /// e.g. `monday-2130`.
    pub fn id(&self) -> String {
        format!("{}-{:02}{:02}", self.day, self.start.hour(), self.start.minute())
    }

    pub fn start_label(&self) -> String {
        clock_label(self.start)
    }

    pub fn end_label(&self) -> String {
        clock_label(self.end)
    }

    /// "Monday 9:30 PM to 10:00 PM", used for accessible labels.
    pub fn aria_label(&self) -> String {
        format!(
            "{} {} to {}",
            self.day.label(),
            self.start_label(),
            self.end_label()
        )
    }
}

fn clock_label(value: time::Time) -> String {
    value
        .format(format_description!(
            "[hour repr:12 padding:none]:[minute] [period]"
        ))
        .unwrap_or_else(|_| "".to_owned())
}

/// Step three of the wizard. Ages arrive as free text from a number
/// input, so they stay strings until validated.
#[derive(Validate, Deserialize, Default, Clone, Debug)]
pub struct StudentInfo {
    #[validate(custom(function = "student_name_required"))]
    pub name: String,
    #[validate(custom(function = "student_age"))]
    pub age: String,
    #[serde(default)]
    pub skill_level: SkillLevel,
    #[validate(custom(function = "contact_name_required"))]
    pub contact_name: String,
    #[serde(default)]
    pub relation: Relation,
    #[validate(custom(function = "email_address"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Everything the wizard has gathered by the terminal submit.
#[derive(Clone, Debug)]
pub struct EnrollmentSelection {
    pub instrument: Instrument,
    pub slot: TimeSlot,
    pub student: StudentInfo,
}

impl EnrollmentSelection {
    /// The business-notification payload. The reply-to contact is the
    /// adult who filled the form in, not necessarily the student.
    pub fn into_submission(self) -> ContactSubmission {
        let phone = self.student.phone.trim();
        let message = format!(
            "Student: {student}\nAge: {age}\nSkill level: {skill}\nInstrument: {instrument}\nPreferred time: {slot}\nContact: {contact} ({relation})\nEmail: {email}\nPhone: {phone}",
            student = self.student.name.trim(),
            age = self.student.age.trim(),
            skill = self.student.skill_level.label(),
            instrument = self.instrument.label(),
            slot = self.slot.aria_label(),
            contact = self.student.contact_name.trim(),
            relation = self.student.relation.label(),
            email = self.student.email.trim(),
            phone = if phone.is_empty() { "not provided" } else { phone },
        );

        ContactSubmission {
            name: self.student.contact_name.trim().to_owned(),
            email: self.student.email.trim().to_owned(),
            phone: if phone.is_empty() {
                None
            } else {
                Some(phone.to_owned())
            },
            subject: format!("New Enrollment - {}", self.instrument.label()),
            message,
        }
    }
}
