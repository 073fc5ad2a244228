//! The enrollment flow as a single tagged state.
//!
//! Each variant carries exactly the selections that are legal at that
//! point, so a review screen without a chosen slot cannot exist. Routes
//! rebuild the state from hidden form fields on every request and rely on
//! [`WizardState::reconstruct`] to fall back to the earliest incomplete
//! step when fields are missing or tampered with.

use cedarheights_shared::enrollment::Instrument;

use crate::types::TimeSlot;

pub const TOTAL_STEPS: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WizardState {
    /// Step 1, nothing chosen yet.
    Instrument,
    /// Step 2, instrument locked in.
    TimeSlot { instrument: Instrument },
    /// Step 3, ready for student details and the terminal submit.
    Review {
        instrument: Instrument,
        slot: TimeSlot,
    },
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::Instrument
    }
}

impl WizardState {
    pub fn start() -> Self {
        WizardState::Instrument
    }

    /// Rebuild from whatever hidden fields the request carried. A slot
    /// without an instrument is meaningless and drops to step 1.
    pub fn reconstruct(instrument: Option<Instrument>, slot: Option<TimeSlot>) -> Self {
        match (instrument, slot) {
            (Some(instrument), Some(slot)) => WizardState::Review { instrument, slot },
            (Some(instrument), None) => WizardState::TimeSlot { instrument },
            (None, _) => WizardState::Instrument,
        }
    }

    pub fn step(&self) -> u8 {
        match self {
            WizardState::Instrument => 1,
            WizardState::TimeSlot { .. } => 2,
            WizardState::Review { .. } => 3,
        }
    }

    /// Progress bar width: `(step - 1) / (total - 1)`, in percent.
    pub fn progress_percent(&self) -> u8 {
        (u16::from(self.step() - 1) * 100 / u16::from(TOTAL_STEPS - 1)) as u8
    }

    /// Step 1 accepts an instrument; selections out of turn are ignored
    /// rather than letting a stray POST skip ahead.
    pub fn select_instrument(self, instrument: Instrument) -> Self {
        match self {
            WizardState::Instrument => WizardState::TimeSlot { instrument },
            other => other,
        }
    }

    /// Step 2 accepts a slot from the published schedule.
    pub fn select_slot(self, slot: TimeSlot) -> Self {
        match self {
            WizardState::TimeSlot { instrument } => WizardState::Review { instrument, slot },
            other => other,
        }
    }

    /// Back never leaves the flow; step 1 stays put.
    pub fn back(self) -> Self {
        match self {
            WizardState::Instrument => WizardState::Instrument,
            WizardState::TimeSlot { .. } => WizardState::Instrument,
            WizardState::Review { instrument, .. } => WizardState::TimeSlot { instrument },
        }
    }

    pub fn instrument(&self) -> Option<Instrument> {
        match self {
            WizardState::Instrument => None,
            WizardState::TimeSlot { instrument } | WizardState::Review { instrument, .. } => {
                Some(*instrument)
            }
        }
    }

    pub fn slot(&self) -> Option<&TimeSlot> {
        match self {
            WizardState::Review { slot, .. } => Some(slot),
            _ => None,
        }
    }
}
