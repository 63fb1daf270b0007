//! Core library modules for tempi.
//!
//! Data flows through these modules in one direction:
//!
//! ```text
//! declaration file ──▶ parser (+ shorthand) ──▶ TempoData (local) ─┐
//!                                                                  ├──▶ reconcile ──▶ sync ──▶ Tempo
//! Tempo ──────────────────────────────────────▶ TempoData (remote) ┘
//! ```

pub mod config;
pub mod data_storage;
pub mod entry;
pub mod error;
pub mod messages;
pub mod parser;
pub mod reconcile;
pub mod shorthand;
pub mod sync;
pub mod template;
pub mod tempo_data;
pub mod view;
