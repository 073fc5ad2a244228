//! Transactional-email dispatch for form submissions.
//!
//! One submission fans out into two independent sends through the
//! provider's HTTP API: a notification to the studio inbox and a
//! confirmation back to the submitter.

mod client;
pub mod message;

pub use client::{DispatchClient, DispatchOutcome, SendError};

pub const DEFAULT_ENDPOINT: &str = "https://api.brevo.com/v3/smtp/email";

/// Everything the client needs, assembled and validated at startup.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    pub api_key: String,
    pub from_name: String,
    pub from_email: String,
    /// The studio inbox notifications land in.
    pub to_email: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}
