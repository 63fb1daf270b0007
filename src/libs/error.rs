//! Error taxonomy for tempi.
//!
//! Every failure that can abort a run maps onto one of four domain categories:
//!
//! - **Config**: a required setting is missing or a configuration file is unreadable
//! - **Validation**: the local declaration is malformed; raised while parsing,
//!   before any remote call is made
//! - **Remote**: the Tempo server answered with a non-success status
//! - **ApprovedPeriod**: the server refused a mutation because the date lies in
//!   an approved (locked) timesheet period
//!
//! I/O, JSON and transport errors are wrapped transparently so that `?` works
//! across module boundaries.

use chrono::NaiveDate;
use thiserror::Error;

/// Result alias used by the library modules.
pub type Result<T> = std::result::Result<T, TempiError>;

#[derive(Debug, Error)]
pub enum TempiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid entry on {date}: {reason} (line: \"{line}\")")]
    Validation { date: String, line: String, reason: String },

    #[error("Tempo request failed with status {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Tempo rejected the change{}: the period is approved and locked for editing ({body})", .date.map(|d| format!(" for {}", d)).unwrap_or_default())]
    ApprovedPeriod { date: Option<NaiveDate>, body: String },

    #[error("Unexpected Tempo response: {0}")]
    UnexpectedResponse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl TempiError {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }

    pub fn validation(date: impl ToString, line: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            date: date.to_string(),
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    /// True for any failure reported by the Tempo server, including approved-period rejections.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. } | Self::ApprovedPeriod { .. })
    }

    pub fn is_approved_period(&self) -> bool {
        matches!(self, Self::ApprovedPeriod { .. })
    }

    /// Fills in the rejected date of an approved-period error that lacks one.
    pub fn with_date(self, day: NaiveDate) -> Self {
        match self {
            Self::ApprovedPeriod { date: None, body } => Self::ApprovedPeriod { date: Some(day), body },
            other => other,
        }
    }
}
