use super::declaration_path;
use crate::{libs::messages::Message, msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use clap::Args;
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FALLBACK_EDITOR: &str = "vi";

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Declaration file; defaults to the configured default file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let file = declaration_path(args.file, &env::current_dir()?)?;
    let editor = env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| FALLBACK_EDITOR.to_string());

    let status = Command::new(&editor)
        .arg(&file)
        .status()
        .map_err(|e| msg_error_anyhow!(Message::EditorFailed(format!("{}: {}", editor, e))))?;
    if !status.success() {
        msg_bail_anyhow!(Message::EditorFailed(status.to_string()));
    }
    Ok(())
}
