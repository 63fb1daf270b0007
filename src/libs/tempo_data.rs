use super::entry::LogEntry;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Worklog entries grouped by date.
///
/// A `TempoData` is built once, either from the declaration file or from a
/// Tempo query, and is then only read. Dates may be present with an empty
/// list: a declared but empty day still takes part in reconciliation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TempoData {
    entries: BTreeMap<NaiveDate, Vec<LogEntry>>,
}

impl TempoData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a date without adding an entry to it.
    pub fn touch(&mut self, date: NaiveDate) {
        self.entries.entry(date).or_default();
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.entry(entry.date).or_default().push(entry);
    }

    pub fn get(&self, date: &NaiveDate) -> &[LogEntry] {
        self.entries.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<LogEntry>)> {
        self.entries.iter()
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.values().flatten()
    }

    /// True when no date holds an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// First and last date covered, if any.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.entries.keys().next()?;
        let last = self.entries.keys().next_back()?;
        Some((*first, *last))
    }
}

impl FromIterator<LogEntry> for TempoData {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        let mut data = TempoData::new();
        for entry in iter {
            data.push(entry);
        }
        data
    }
}
