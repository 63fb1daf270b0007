use crate::{
    libs::{config::LocalSettings, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Declaration file to use when none is given on the command line
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    let work_dir = env::current_dir()?;
    let mut settings = LocalSettings::read(&work_dir)?;

    match args.file {
        Some(file) => {
            msg_success!(Message::DefaultFileSet(file.display().to_string()));
            settings.default_file = Some(file);
            settings.save(&work_dir)?;
        }
        None => match &settings.default_file {
            Some(file) => msg_info!(Message::DefaultFile(file.display().to_string())),
            None => msg_info!(Message::DefaultFileNotSet),
        },
    }
    Ok(())
}
