use serde::Deserialize;
use std::str::FromStr;
use time::macros::{format_description, time};

use crate::types::{TimeSlot, Weekday};

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("unknown weekday '{0}'")]
    UnknownWeekday(String),
    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("slot '{0}' ends before it starts")]
    EndsBeforeStart(String),
    #[error("duplicate slot '{0}'")]
    Duplicate(String),
}

/// One `[[schedule.slots]]` table from the configuration file.
#[derive(Deserialize, Clone, Debug)]
pub struct SlotEntry {
    pub day: String,
    pub start: String,
    pub end: String,
}

/// The published weekly availability, in display order.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    slots: Vec<TimeSlot>,
}

impl Schedule {
    /// The slate shown when `data_source` is `mock`.
    pub fn demo() -> Self {
        Schedule {
            slots: vec![
                TimeSlot { day: Weekday::Monday, start: time!(21:30), end: time!(22:00) },
                TimeSlot { day: Weekday::Wednesday, start: time!(17:30), end: time!(18:00) },
                TimeSlot { day: Weekday::Thursday, start: time!(18:00), end: time!(18:30) },
                TimeSlot { day: Weekday::Friday, start: time!(16:00), end: time!(16:30) },
                TimeSlot { day: Weekday::Saturday, start: time!(10:00), end: time!(10:30) },
                TimeSlot { day: Weekday::Saturday, start: time!(14:00), end: time!(14:30) },
            ],
        }
    }

    pub fn from_entries(entries: &[SlotEntry]) -> Result<Self, ScheduleError> {
        let mut slots = Vec::with_capacity(entries.len());
        for entry in entries {
            let day = Weekday::from_str(entry.day.trim().to_lowercase().as_str())
                .map_err(|_| ScheduleError::UnknownWeekday(entry.day.clone()))?;
            let slot = TimeSlot {
                day,
                start: parse_clock(&entry.start)?,
                end: parse_clock(&entry.end)?,
            };
            if slot.end <= slot.start {
                return Err(ScheduleError::EndsBeforeStart(slot.id()));
            }
            if slots.iter().any(|existing: &TimeSlot| existing.id() == slot.id()) {
                return Err(ScheduleError::Duplicate(slot.id()));
            }
            slots.push(slot);
        }
        Ok(Schedule { slots })
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Resolve a hidden-field id back to a published slot. Unknown ids
    /// mean a stale or tampered form and yield `None`.
    pub fn find(&self, id: &str) -> Option<TimeSlot> {
        self.slots.iter().find(|slot| slot.id() == id).copied()
    }
}

fn parse_clock(value: &str) -> Result<time::Time, ScheduleError> {
    time::Time::parse(value.trim(), format_description!("[hour]:[minute]"))
        .map_err(|_| ScheduleError::InvalidTime(value.to_owned()))
}
