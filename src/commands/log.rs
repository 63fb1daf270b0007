//! Reconcile-and-commit command.
//!
//! Parses the declaration, fetches the declared date range from Tempo, shows
//! the pending changes and runs them through a preview pass. Unless `--dry-run`
//! is given, the same diff is then committed after confirmation.

use super::declaration_path;
use crate::{
    api::{Tempo, TempoClient},
    libs::{
        config::Config,
        messages::Message,
        parser::LogParser,
        reconcile,
        shorthand::AliasTable,
        sync::SyncExecutor,
        view::View,
    },
    msg_debug, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Declaration file; defaults to the configured default file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Validate the changes without sending them to Tempo
    #[arg(long)]
    dry_run: bool,

    /// Apply the changes without asking for confirmation
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: LogArgs, config: &Config) -> Result<()> {
    let work_dir = env::current_dir()?;
    let file = declaration_path(args.file, &work_dir)?;

    // Everything local is validated before the first request goes out.
    let aliases = AliasTable::load(&config.config_dir(), &work_dir)?;
    msg_debug!(Message::AliasTablesLoaded(config.config_dir().display().to_string()));
    let local = LogParser::new(&aliases).parse_file(&file)?;
    let Some((from, to)) = local.date_range() else {
        msg_info!(Message::NoEntriesDeclared(file.display().to_string()));
        return Ok(());
    };
    let worker = config.require_worker()?;
    let client = TempoClient::new(&config.jira)?;

    msg_debug!(Message::FetchingWorklogs {
        worker: worker.to_string(),
        from: from.to_string(),
        to: to.to_string(),
    });
    let remote = client.fetch(worker, from, to).await?;
    let diff = reconcile::diff(&local, &remote);
    if diff.is_empty() {
        msg_success!(Message::NoChangesNeeded);
        return Ok(());
    }

    msg_print!(Message::PendingChangesHeader);
    View::diff(&diff);

    let previewed = SyncExecutor::preview(&client, worker).apply(&diff).await?;
    if args.dry_run {
        msg_info!(Message::ChangesPreviewed(previewed));
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmCommit(previewed).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::CommitCancelled);
            return Ok(());
        }
    }

    let applied = SyncExecutor::commit(&client, worker).apply(&diff).await?;
    if applied == 0 {
        msg_success!(Message::NoChangesNeeded);
    } else {
        msg_success!(Message::ChangesApplied(applied));
    }
    Ok(())
}
