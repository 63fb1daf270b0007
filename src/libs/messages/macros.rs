//! Macros for user-facing output.
//!
//! Each macro prints a [`Message`](super::Message) with a category prefix. When
//! debug mode is on (`TEMPI_DEBUG` or `RUST_LOG` set) the text goes through
//! `tracing` instead, so it interleaves with the structured logs.
//!
//! ```text
//! msg_info!(msg) ──▶ debug mode? ──yes──▶ tracing::info!
//!                         │
//!                         └──no───▶ println!
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tempi::{msg_info, msg_success, msg_error};
//! use tempi::libs::messages::Message;
//!
//! msg_success!(Message::ChangesApplied(2));
//! msg_info!(Message::NoChangesNeeded, true);
//! msg_error!(Message::DefaultFileNotSet);
//! ```

use std::sync::OnceLock;

/// Cached result of the debug mode check.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// True when `TEMPI_DEBUG` or `RUST_LOG` is set.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| ["TEMPI_DEBUG", "RUST_LOG"].iter().any(|key| std::env::var(key).is_ok()))
}

/// Shared body of the output macros: one tracing level, one console sink, one prefix.
#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $sink:ident, $prefix:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}{}", $prefix, $msg);
        } else {
            $sink!("{}{}", $prefix, $msg);
        }
    };
    ($level:ident, $sink:ident, $prefix:literal, $msg:expr, spaced) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("\n{}{}\n", $prefix, $msg);
        } else {
            $sink!("\n{}{}\n", $prefix, $msg);
        }
    };
}

/// Plain message without a prefix. Pass `true` to surround it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "", $msg, spaced)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg, spaced)
    };
}

/// Errors go to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg, spaced)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(warn, println, "⚠️ ", $msg, spaced)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg, spaced)
    };
}

/// Only shown in debug mode, through `tracing`.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message. `main` adds the error prefix when reporting it.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
