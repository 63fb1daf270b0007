//! Applying a reconciliation result to Tempo.
//!
//! The same [`Diff`] drives two executors: a preview that asks the adapter to
//! validate every request without sending it, and a commit that performs the
//! mutations. Per date, deletes always go out before creates, and dates are
//! processed in ascending order.
//!
//! The first failing call aborts the run. Changes already applied stay applied;
//! there is no rollback across calls.

use super::entry::LogEntry;
use super::error::{Result, TempiError};
use super::messages::Message;
use super::reconcile::Diff;
use crate::api::Tempo;
use crate::msg_print;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Validate requests against the adapter without mutating anything.
    Preview,
    /// Send the mutations.
    Commit,
}

impl SyncMode {
    fn dry_run(self) -> bool {
        self == SyncMode::Preview
    }
}

pub struct SyncExecutor<'a, T: Tempo> {
    tempo: &'a T,
    worker: &'a str,
    mode: SyncMode,
}

impl<'a, T: Tempo> SyncExecutor<'a, T> {
    pub fn new(tempo: &'a T, worker: &'a str, mode: SyncMode) -> Self {
        Self { tempo, worker, mode }
    }

    pub fn preview(tempo: &'a T, worker: &'a str) -> Self {
        Self::new(tempo, worker, SyncMode::Preview)
    }

    pub fn commit(tempo: &'a T, worker: &'a str) -> Self {
        Self::new(tempo, worker, SyncMode::Commit)
    }

    /// Walks the diff and returns the number of create and delete operations performed.
    pub async fn apply(&self, diff: &Diff) -> Result<usize> {
        let mut changes = 0;
        for (date, changes_for_date) in diff.iter() {
            debug!(%date, delete = changes_for_date.to_delete.len(), add = changes_for_date.to_add.len(), mode = ?self.mode, "applying");
            for entry in &changes_for_date.to_delete {
                self.delete(entry).await?;
                changes += 1;
            }
            for entry in &changes_for_date.to_add {
                self.create(entry).await?;
                changes += 1;
            }
        }
        Ok(changes)
    }

    async fn delete(&self, entry: &LogEntry) -> Result<()> {
        let Some(remote_id) = entry.remote_id else {
            return Err(TempiError::validation(
                entry.date,
                &entry.description(),
                "cannot delete an entry that has no Tempo id",
            ));
        };
        self.tempo
            .delete(remote_id, self.mode.dry_run())
            .await
            .map_err(|e| e.with_date(entry.date))?;

        let (date, issue, hours) = describe(entry);
        let remote_id = remote_id.to_string();
        match self.mode {
            SyncMode::Preview => msg_print!(Message::WorklogWouldDelete { date, issue, hours, remote_id }),
            SyncMode::Commit => msg_print!(Message::WorklogDeleted { date, issue, hours, remote_id }),
        }
        Ok(())
    }

    async fn create(&self, entry: &LogEntry) -> Result<()> {
        let remote_id = self
            .tempo
            .create(self.worker, entry, self.mode.dry_run())
            .await
            .map_err(|e| e.with_date(entry.date))?;

        let (date, issue, hours) = describe(entry);
        match self.mode {
            SyncMode::Preview => msg_print!(Message::WorklogWouldCreate { date, issue, hours }),
            SyncMode::Commit => msg_print!(Message::WorklogCreated {
                date,
                issue,
                hours,
                remote_id: remote_id.to_string(),
            }),
        }
        Ok(())
    }
}

fn describe(entry: &LogEntry) -> (String, String, String) {
    (entry.date.to_string(), entry.issue.clone(), entry.hours.to_string())
}
