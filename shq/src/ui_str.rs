// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User-facing strings for the `shq` binary, kept here and out of the control
//! flow that produces them.

/// Diagnostic line written to `stderr` when reading from the input stream
/// fails. The `ERROR: ` prefix is part of the output contract; scripts grep
/// for it.
#[must_use]
pub fn read_failure_msg(report: &miette::Report) -> String {
    format!("ERROR: {report}")
}
