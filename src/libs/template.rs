//! Blank weekly declaration files.
//!
//! A template covers Monday to Friday of one week. Each day holds a single
//! `# <Weekday>` marker line, which the parser skips, so an untouched template
//! declares the week without any entries.

use super::error::Result;
use super::parser::{Declaration, DATE_FORMAT, MARKER_PREFIX};
use chrono::{Datelike, Duration, NaiveDate};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const WORKDAYS_PER_WEEK: i64 = 5;

pub struct WeekTemplate {
    monday: NaiveDate,
}

impl WeekTemplate {
    /// Template for the week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        Self { monday }
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..WORKDAYS_PER_WEEK).map(|offset| self.monday + Duration::days(offset))
    }

    /// Default file name, e.g. `2023-02-20.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.monday.format(DATE_FORMAT))
    }

    pub fn declaration(&self) -> Declaration {
        self.days()
            .map(|day| {
                let marker = format!("{} {}", MARKER_PREFIX, day.format("%A"));
                (day.format(DATE_FORMAT).to_string(), Some(vec![marker]))
            })
            .collect()
    }

    /// Writes the template to `path` unless a file already exists there.
    ///
    /// Returns `false` when the file existed and was left untouched.
    pub fn write(&self, path: &Path) -> Result<bool> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        serde_json::to_writer_pretty(&file, &self.declaration())?;
        file.write_all(b"\n")?;
        Ok(true)
    }

    pub fn default_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}
