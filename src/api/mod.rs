//! Remote worklog service integration.
//!
//! [`Tempo`] is the boundary the rest of tempi talks to: fetch the worklogs of
//! a worker for a date range, create one, delete one. [`TempoClient`] implements
//! it against the Tempo Timesheets REST API; tests substitute in-memory fakes.
//!
//! ## Dry runs
//!
//! Mutations accept a `dry_run` flag. A dry run builds and checks the request
//! exactly like a real one but sends nothing, so a preview pass and a
//! committing pass exercise the same code.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tempi::api::{Tempo, TempoClient};
//! use tempi::libs::config::Config;
//! use chrono::NaiveDate;
//!
//! # async fn run() -> tempi::libs::error::Result<()> {
//! let config = Config::from_env();
//! let client = TempoClient::new(&config.jira)?;
//! let from = NaiveDate::from_ymd_opt(2023, 2, 20).unwrap();
//! let to = NaiveDate::from_ymd_opt(2023, 2, 24).unwrap();
//! let worklogs = client.fetch("jdoe", from, to).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::entry::{LogEntry, RemoteId};
use crate::libs::error::Result;
use crate::libs::tempo_data::TempoData;
use chrono::NaiveDate;

pub mod tempo;

pub use tempo::TempoClient;

/// Worklog storage on the remote side.
#[allow(async_fn_in_trait)]
pub trait Tempo {
    /// Fetches all worklogs of `worker` between `from` and `to`, inclusive.
    ///
    /// Every returned entry carries its `remote_id`.
    async fn fetch(&self, worker: &str, from: NaiveDate, to: NaiveDate) -> Result<TempoData>;

    /// Records `entry` for `worker` on `entry.date` and returns the new worklog id.
    ///
    /// # Errors
    ///
    /// `TempiError::ApprovedPeriod` when the date is locked by an approval,
    /// `TempiError::Remote` for any other rejection.
    async fn create(&self, worker: &str, entry: &LogEntry, dry_run: bool) -> Result<RemoteId>;

    /// Deletes the worklog `remote_id`. Fails like [`Tempo::create`].
    async fn delete(&self, remote_id: RemoteId, dry_run: bool) -> Result<()>;
}
