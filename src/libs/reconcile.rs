//! Reconciliation of declared entries against Tempo entries.
//!
//! The diff is a per-date multiset difference. Each remote entry is matched
//! against the first still-unmatched equal local entry; remote entries left
//! without a partner are deleted, local entries left without a partner are
//! added. Identical duplicates on one day each need their own partner.
//!
//! Swapping the arguments swaps the roles: `diff(a, b).to_add` equals
//! `diff(b, a).to_delete` and the other way around.

use super::entry::LogEntry;
use super::tempo_data::TempoData;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Changes needed on a single date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateDiff {
    /// Remote entries with no declared counterpart.
    pub to_delete: Vec<LogEntry>,
    /// Declared entries with no remote counterpart.
    pub to_add: Vec<LogEntry>,
}

impl DateDiff {
    pub fn is_empty(&self) -> bool {
        self.to_delete.is_empty() && self.to_add.is_empty()
    }

    pub fn len(&self) -> usize {
        self.to_delete.len() + self.to_add.len()
    }
}

/// Per-date changes; dates without changes are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diff {
    dates: BTreeMap<NaiveDate, DateDiff>,
}

impl Diff {
    pub fn get(&self, date: &NaiveDate) -> Option<&DateDiff> {
        self.dates.get(date)
    }

    /// Dates in ascending order with their changes.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DateDiff)> {
        self.dates.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Number of create and delete operations the diff implies.
    pub fn change_count(&self) -> usize {
        self.dates.values().map(DateDiff::len).sum()
    }

    pub fn additions(&self) -> impl Iterator<Item = &LogEntry> {
        self.dates.values().flat_map(|d| d.to_add.iter())
    }

    pub fn deletions(&self) -> impl Iterator<Item = &LogEntry> {
        self.dates.values().flat_map(|d| d.to_delete.iter())
    }
}

/// Computes the changes turning `remote` into `local`.
pub fn diff(local: &TempoData, remote: &TempoData) -> Diff {
    let dates: BTreeSet<&NaiveDate> = local.dates().chain(remote.dates()).collect();

    let dates = dates
        .into_iter()
        .filter_map(|date| {
            let changes = diff_date(local.get(date), remote.get(date));
            (!changes.is_empty()).then_some((*date, changes))
        })
        .collect();

    Diff { dates }
}

fn diff_date(local: &[LogEntry], remote: &[LogEntry]) -> DateDiff {
    let mut matched = vec![false; local.len()];
    let mut to_delete = Vec::new();

    for entry in remote {
        let partner = (0..local.len()).find(|&i| !matched[i] && local[i] == *entry);
        match partner {
            Some(i) => matched[i] = true,
            None => to_delete.push(entry.clone()),
        }
    }

    let to_add = local
        .iter()
        .zip(matched)
        .filter(|(_, matched)| !matched)
        .map(|(entry, _)| entry.clone())
        .collect();

    DateDiff { to_delete, to_add }
}
