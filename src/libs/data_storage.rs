use std::env::consts::OS;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "lacodda";
pub const APP_NAME: &str = "tempi";

/// Platform application data directory, used as the default tempi home.
#[derive(Clone, Debug, PartialEq)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    /// Resolves the data directory for the current platform from `lookup`.
    ///
    /// Falls back to the working directory when the platform variable is unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = |key: &str| PathBuf::from(lookup(key).unwrap_or_else(|| ".".to_string()));
        let platform_dir = match OS {
            "windows" => root("LOCALAPPDATA"),
            "macos" => root("HOME").join("Library").join("Application Support"),
            _ => root("HOME").join(".local").join("share"),
        };

        Self {
            base_path: platform_dir.join(VENDOR_NAME).join(APP_NAME),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
