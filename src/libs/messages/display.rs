//! Display implementation for tempi messages.
//!
//! All user-facing text lives here so wording stays consistent between
//! commands and the sync executor.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SYNC MESSAGES ===
            Message::WorklogCreated {
                date,
                issue,
                hours,
                remote_id,
            } => format!("+ {} {} {}h logged (worklog {})", date, issue, hours, remote_id),
            Message::WorklogDeleted {
                date,
                issue,
                hours,
                remote_id,
            } => format!("- {} {} {}h removed (worklog {})", date, issue, hours, remote_id),
            Message::WorklogWouldCreate { date, issue, hours } => format!("+ {} {} {}h would be logged", date, issue, hours),
            Message::WorklogWouldDelete {
                date,
                issue,
                hours,
                remote_id,
            } => format!("- {} {} {}h would be removed (worklog {})", date, issue, hours, remote_id),
            Message::NoChangesNeeded => "No changes needed, Tempo already matches the declaration.".to_string(),
            Message::ChangesApplied(count) => format!("{} change(s) applied to Tempo.", count),
            Message::ChangesPreviewed(count) => format!("{} change(s) validated, nothing was sent to Tempo.", count),
            Message::PendingChangesHeader => "Pending changes:".to_string(),
            Message::ConfirmCommit(count) => format!("Apply {} change(s) to Tempo?", count),
            Message::CommitCancelled => "Nothing was changed.".to_string(),
            Message::ApprovedPeriodHint => {
                "The timesheet for this period has been approved. Ask your reviewer to reopen it before logging changes.".to_string()
            }

            // === FETCH MESSAGES ===
            Message::FetchingWorklogs { worker, from, to } => format!("Fetching worklogs of {} from {} to {}", worker, from, to),
            Message::WorklogsHeader(from, to) => format!("Worklogs from {} to {}", from, to),
            Message::NoWorklogsFound => "No worklogs found.".to_string(),
            Message::NoEntriesDeclared(path) => format!("No dates declared in {}.", path),

            // === TEMPLATE MESSAGES ===
            Message::TemplateCreated(path) => format!("Weekly template created: {}", path),
            Message::TemplateAlreadyExists(path) => format!("{} already exists, leaving it untouched.", path),

            // === CONFIGURATION MESSAGES ===
            Message::DefaultFileSet(path) => format!("Default file set to {}", path),
            Message::DefaultFile(path) => format!("Default file: {}", path),
            Message::DefaultFileNotSet => "No default file configured.".to_string(),
            Message::AliasTablesLoaded(dir) => format!("Alias tables loaded from {}", dir),

            // === EDITOR MESSAGES ===
            Message::EditorFailed(reason) => format!("Editor failed: {}", reason),
        };
        write!(f, "{}", text)
    }
}
