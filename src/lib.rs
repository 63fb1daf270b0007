//! # Tempi - Tempo worklog reconciliation
//!
//! Keeps Tempo timesheets in line with a locally declared work log.
//!
//! ## Features
//!
//! - **Declaration Files**: One JSON file per week, one line per worklog
//! - **Shorthands**: Layered alias tables expand short tokens into issue, activity and summary
//! - **Reconciliation**: Multiset diff between declared and recorded worklogs
//! - **Safe Sync**: Preview pass before any change, deletes before creates
//! - **Templates**: Blank weekly files ready to fill in
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tempi::libs::{parser::LogParser, reconcile, shorthand::AliasTable, tempo_data::TempoData};
//!
//! let aliases = AliasTable::default();
//! let local = LogParser::new(&aliases).parse_file(Path::new("2023-02-20.json"))?;
//! let remote = TempoData::new();
//! let diff = reconcile::diff(&local, &remote);
//! println!("{} change(s) pending", diff.change_count());
//! # Ok::<(), tempi::libs::error::TempiError>(())
//! ```

pub mod api;
pub mod commands;
pub mod libs;
