use crate::{
    api::{Tempo, TempoClient},
    libs::{
        config::{Config, LocalSettings},
        messages::Message,
        parser::LogParser,
        shorthand::AliasTable,
        template::WeekTemplate,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct GetArgs {
    /// First date to fetch (YYYY-MM-DD); defaults to Monday of the current week
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last date to fetch (YYYY-MM-DD); defaults to Friday of the current week
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Fetch the date range declared in this file; without --from/--to the default file is used
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    file: Option<PathBuf>,
}

pub async fn cmd(args: GetArgs, config: &Config) -> Result<()> {
    let work_dir = env::current_dir()?;
    let declared = match (&args.file, args.from.or(args.to)) {
        (Some(file), _) => match declared_range(file, config, &work_dir)? {
            Some(range) => Some(range),
            None => {
                msg_info!(Message::NoEntriesDeclared(file.display().to_string()));
                return Ok(());
            }
        },
        (None, None) => match LocalSettings::read(&work_dir)?.default_file {
            Some(file) => declared_range(&file, config, &work_dir)?,
            None => None,
        },
        (None, Some(_)) => None,
    };
    let (from, to) = fetch_range(args.from, args.to, declared, Local::now().date_naive());

    let worker = config.require_worker()?;
    let client = TempoClient::new(&config.jira)?;
    let worklogs = client.fetch(worker, from, to).await?;

    if worklogs.is_empty() {
        msg_info!(Message::NoWorklogsFound);
        return Ok(());
    }
    msg_print!(Message::WorklogsHeader(from.to_string(), to.to_string()), true);
    View::worklogs(&worklogs);
    Ok(())
}

/// Picks the dates to fetch.
///
/// Explicit bounds win. Without them the declared range is used, and failing
/// that Monday to Friday of the week containing `today`.
pub fn fetch_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    declared: Option<(NaiveDate, NaiveDate)>,
    today: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    if let (None, None, Some(range)) = (from, to, declared) {
        return range;
    }
    let week = WeekTemplate::containing(today);
    let from = from.unwrap_or(week.monday());
    let to = to.unwrap_or_else(|| week.days().last().unwrap_or(from)).max(from);
    (from, to)
}

fn declared_range(file: &Path, config: &Config, work_dir: &Path) -> Result<Option<(NaiveDate, NaiveDate)>> {
    let aliases = AliasTable::load(&config.config_dir(), work_dir)?;
    Ok(LogParser::new(&aliases).parse_file(file)?.date_range())
}
