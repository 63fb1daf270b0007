use crate::{
    libs::{config::LocalSettings, messages::Message, template::WeekTemplate},
    msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Any date of the week to create (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Output file; defaults to <monday>.json in the working directory
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: CreateArgs) -> Result<()> {
    let work_dir = env::current_dir()?;
    let template = WeekTemplate::containing(args.date.unwrap_or_else(|| Local::now().date_naive()));
    let path = args.file.unwrap_or_else(|| template.default_path(&work_dir));

    if template.write(&path)? {
        msg_success!(Message::TemplateCreated(path.display().to_string()));
    } else {
        msg_warning!(Message::TemplateAlreadyExists(path.display().to_string()));
    }

    let mut settings = LocalSettings::read(&work_dir)?;
    settings.default_file = Some(path);
    settings.save(&work_dir)?;
    Ok(())
}
