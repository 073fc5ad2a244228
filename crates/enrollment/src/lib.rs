//! Enrollment domain: the instruments the studio teaches, the weekly
//! availability slate, and the three-step wizard that walks a visitor
//! from instrument to booked inquiry.

pub mod schedule;
pub mod types;
pub mod wizard;

pub use cedarheights_shared::enrollment::Instrument;
pub use schedule::{Schedule, ScheduleError, SlotEntry};
pub use types::{EnrollmentSelection, Relation, SkillLevel, StudentInfo, TimeSlot, Weekday};
pub use wizard::{TOTAL_STEPS, WizardState};
