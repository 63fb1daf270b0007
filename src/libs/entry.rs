use super::error::{Result, TempiError};
use chrono::NaiveDate;
use std::fmt;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Logged duration, kept in whole seconds so that equality is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hours(u32);

impl Hours {
    pub fn from_seconds(seconds: u32) -> Self {
        Self(seconds)
    }

    /// Parses a decimal hour value such as `8`, `1.5` or `0.25`.
    ///
    /// The value must be finite and strictly positive.
    pub fn parse(text: &str) -> std::result::Result<Self, String> {
        let hours: f64 = text.parse().map_err(|_| format!("'{}' is not a decimal number of hours", text))?;
        if !hours.is_finite() || hours <= 0.0 {
            return Err(format!("hours must be a positive number, got '{}'", text));
        }
        let seconds = (hours * SECONDS_PER_HOUR).round();
        if seconds < 1.0 || seconds > u32::MAX as f64 {
            return Err(format!("'{}' is out of range", text));
        }
        Ok(Self(seconds as u32))
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / SECONDS_PER_HOUR
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.2}", self.as_f64());
        let text = text.trim_end_matches('0');
        let text = if text.ends_with('.') { format!("{}0", text) } else { text.to_string() };
        write!(f, "{}", text)
    }
}

/// Identifier assigned to a worklog by Tempo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RemoteId(pub u64);

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single unit of recorded work.
///
/// Two entries describe the same logical record when date, issue, activity,
/// hours, summary and comment agree. `remote_id` never takes part in the
/// comparison: entries parsed from the declaration file do not carry one.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub issue: String,
    pub activity: String,
    pub hours: Hours,
    pub summary: String,
    pub comment: String,
    pub remote_id: Option<RemoteId>,
}

impl LogEntry {
    pub fn new(date: NaiveDate, issue: &str, activity: &str, hours: Hours, summary: &str, comment: &str) -> Self {
        Self {
            date,
            issue: issue.to_string(),
            activity: activity.to_string(),
            hours,
            summary: summary.to_string(),
            comment: comment.to_string(),
            remote_id: None,
        }
    }

    pub fn with_remote_id(mut self, remote_id: RemoteId) -> Self {
        self.remote_id = Some(remote_id);
        self
    }

    fn key(&self) -> (&NaiveDate, &str, &str, &Hours, &str, &str) {
        (&self.date, &self.issue, &self.activity, &self.hours, &self.summary, &self.comment)
    }

    /// Text stored in the worklog comment field: the summary, followed by the
    /// comment on its own line when one is present.
    pub fn description(&self) -> String {
        if self.comment.is_empty() {
            self.summary.clone()
        } else {
            format!("{}\n{}", self.summary, self.comment)
        }
    }

    /// Splits a worklog comment field back into summary and comment.
    pub fn split_description(text: &str) -> (String, String) {
        match text.split_once('\n') {
            Some((summary, comment)) => (summary.trim_end_matches('\r').to_string(), comment.to_string()),
            None => (text.to_string(), String::new()),
        }
    }

    /// Request-shape checks shared by every remote mutation.
    pub fn validate_for_remote(&self) -> Result<()> {
        if self.issue.trim().is_empty() {
            return Err(TempiError::validation(self.date, &self.description(), "issue is empty"));
        }
        if self.hours.seconds() == 0 {
            return Err(TempiError::validation(self.date, &self.description(), "hours must be positive"));
        }
        Ok(())
    }
}

impl PartialEq for LogEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for LogEntry {}
