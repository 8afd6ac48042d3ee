// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use std::io::{stdin, stdout};

use clap::Parser;
use r3bl_shq::{CLIArg, CommonResult, encode_stream,
               log_support::try_initialize_logging_global, ok, ui_str};

fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    launch_shq();

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}

/// Run the encoder over `stdin` / `stdout`. A read failure is reported once on
/// `stderr` and then swallowed: everything emitted before the failure is
/// already out, and the process exit code stays 0.
pub fn launch_shq() {
    let res = encode_stream(&mut stdin().lock(), &mut stdout().lock());

    match res {
        Ok(report) => {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Encoded input stream", report = ?report);
        }
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not read the input stream",
                error = ?error
            );
            eprintln!("{}", ui_str::read_failure_msg(&error));
        }
    }
}
