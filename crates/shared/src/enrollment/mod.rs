use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Instruments the studio teaches. Wire form is the lowercase name used
/// in form values and hidden fields.
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
pub enum Instrument {
    #[default]
    #[serde(rename = "piano")]
    #[strum(serialize = "piano")]
    Piano,
    #[serde(rename = "guitar")]
    #[strum(serialize = "guitar")]
    Guitar,
    #[serde(rename = "bass")]
    #[strum(serialize = "bass")]
    Bass,
}

impl Instrument {
    pub fn label(&self) -> &'static str {
        match self {
            Instrument::Piano => "Piano",
            Instrument::Guitar => "Guitar",
            Instrument::Bass => "Bass",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Instrument::Piano => "\u{1F3B9}",
            Instrument::Guitar => "\u{1F3B8}",
            Instrument::Bass => "\u{1F3B8}",
        }
    }
}
