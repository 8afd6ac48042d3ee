// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **DISABLED** by **default**. If you don't call
//! [`try_initialize_logging_global`] w/ a value other than
//! [`tracing_core::LevelFilter::OFF`], then it won't matter if you use the
//! [`tracing::info!`], [`tracing::debug!`], etc. macros; nothing gets written.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{CommonResult, ok};

/// File (in the current directory) that receives log output once logging is
/// enabled via the `--enable-logging` CLI flag.
pub const LOG_FILE_NAME: &str = "log.txt";

/// Install the global default tracing subscriber, which once set, can't be
/// unset or changed.
///
/// - This is great for apps. Docs for [global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html).
/// - Output goes to [`LOG_FILE_NAME`], w/ a compact formatter (no timestamps,
///   no target, no ANSI color, since the file is meant to be read in an
///   editor).
///
/// # Errors
///
/// Fails if a global default subscriber is already installed.
pub fn try_initialize_logging_global(level_filter: LevelFilter) -> CommonResult<()> {
    // Early return if the level filter is off.
    if matches!(level_filter, LevelFilter::OFF) {
        return ok!();
    }

    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .with_writer(file_appender);

    tracing_subscriber::registry()
        .with(level_filter)
        .with(fmt_layer)
        .try_init()
        .into_diagnostic()
}
