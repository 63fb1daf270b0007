//! Declaration file parsing.
//!
//! The declaration is a JSON object keyed by `YYYY-MM-DD`; each value is a list
//! of lines shaped like `<hours> <issue-or-shorthand> [text...]`:
//!
//! ```json
//! {
//!   "2023-02-20": ["# Monday", "8.0 pto"],
//!   "2023-02-21": ["1.0 meeting stupid dumb meeting", "5.0 foo implementing feature"]
//! }
//! ```
//!
//! Lines starting with `#` are day markers left by the template generator and
//! are skipped, as are blank lines. Every line is validated before anything is
//! returned, so a partially valid file never reaches the remote side.

use super::entry::{Hours, LogEntry};
use super::error::{Result, TempiError};
use super::shorthand::AliasTable;
use super::tempo_data::TempoData;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const MARKER_PREFIX: char = '#';

/// Raw declaration as read from disk: date key to optional list of lines.
pub type Declaration = BTreeMap<String, Option<Vec<String>>>;

pub struct LogParser<'a> {
    aliases: &'a AliasTable,
}

impl<'a> LogParser<'a> {
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self { aliases }
    }

    pub fn parse_file(&self, path: &Path) -> Result<TempoData> {
        let text = fs::read_to_string(path)?;
        let declaration: Declaration =
            serde_json::from_str(&text).map_err(|e| TempiError::validation(path.display(), "", format!("not a valid declaration file: {}", e)))?;
        self.parse(&declaration)
    }

    pub fn parse(&self, declaration: &Declaration) -> Result<TempoData> {
        let mut data = TempoData::new();
        for (key, lines) in declaration {
            let date = NaiveDate::parse_from_str(key, DATE_FORMAT)
                .map_err(|_| TempiError::validation(key, "", "date keys must be formatted as YYYY-MM-DD"))?;
            data.touch(date);
            for line in lines.iter().flatten() {
                if let Some(entry) = self.parse_line(date, line)? {
                    data.push(entry);
                }
            }
        }
        Ok(data)
    }

    /// Parses a single line; `None` for blank lines and day markers.
    pub fn parse_line(&self, date: NaiveDate, line: &str) -> Result<Option<LogEntry>> {
        if line.contains(['\n', '\r']) {
            return Err(TempiError::validation(date, line, "an entry must fit on a single line"));
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(MARKER_PREFIX) {
            return Ok(None);
        }

        let (hours, rest) = split_field(trimmed);
        let hours = Hours::parse(hours).map_err(|reason| TempiError::validation(date, line, reason))?;
        let (token, rest) = split_field(rest);
        if token.is_empty() {
            return Err(TempiError::validation(date, line, "missing issue or shorthand after the hours"));
        }

        let resolved = self.aliases.resolve(token);
        let activity = resolved
            .activity
            .or_else(|| self.aliases.infer_activity(rest))
            .unwrap_or_default();
        let (summary, comment) = match resolved.summary {
            Some(summary) => (summary, rest.to_string()),
            None => (rest.to_string(), String::new()),
        };

        Ok(Some(LogEntry {
            date,
            issue: resolved.issue,
            activity,
            hours,
            summary,
            comment,
            remote_id: None,
        }))
    }
}

fn split_field(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((field, rest)) => (field, rest.trim()),
        None => (text, ""),
    }
}
