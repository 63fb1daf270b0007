pub mod config;
pub mod create;
pub mod edit;
pub mod get;
pub mod log;

use crate::libs::config::{Config, LocalSettings};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Reconcile the declaration file with Tempo and apply the changes")]
    Log(log::LogArgs),
    #[command(about = "Fetch worklogs from Tempo and display them")]
    Get(get::GetArgs),
    #[command(about = "Create a blank weekly declaration file")]
    Create(create::CreateArgs),
    #[command(about = "Show or set the default declaration file")]
    Config(config::ConfigArgs),
    #[command(about = "Open the declaration file in $EDITOR")]
    Edit(edit::EditArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(self, config: &Config) -> Result<()> {
        match self.command {
            Commands::Log(args) => log::cmd(args, config).await,
            Commands::Get(args) => get::cmd(args, config).await,
            Commands::Create(args) => create::cmd(args),
            Commands::Config(args) => config::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
        }
    }
}

/// Picks the explicit file, or the default file recorded in `work_dir`.
pub fn declaration_path(file: Option<PathBuf>, work_dir: &Path) -> Result<PathBuf> {
    match file {
        Some(file) => Ok(file),
        None => Ok(LocalSettings::read(work_dir)?.require_default_file()?.to_path_buf()),
    }
}
