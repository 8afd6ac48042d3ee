// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The line-oriented driving loop for [`encode_line`]. Lines are read as raw
//! bytes and decoded w/ the platform's lossy UTF-8 policy, so malformed byte
//! sequences become `U+FFFD` instead of aborting the stream.

use std::{borrow::Cow,
          io::{BufRead, Write}};

use miette::IntoDiagnostic;

use crate::{CommonResult, encoder::encode_line, ok};

/// Outcome of a completed [`encode_stream`] run, for debug logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EncodeReport {
    /// Number of input lines that were read and written back out.
    pub lines_read: usize,
    /// Number of those lines that contained at least one multi-byte character.
    pub lines_escaped: usize,
}

/// Pump every line of `input` through [`encode_line`] and write the result to
/// `output`, one output line per input line, in input order, each terminated
/// by a single `\n`.
///
/// Lines are split on `\n`. The trailing separator is stripped before
/// encoding, and a `\r` directly in front of it goes w/ it, so `CRLF` input
/// produces `LF` output. A final line w/out any separator is still encoded
/// and emitted w/ a trailing `\n`.
///
/// # Errors
///
/// Returns the first read or write failure. Lines emitted before the failure
/// stay emitted; nothing is retried.
pub fn encode_stream(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> CommonResult<EncodeReport> {
    let mut report = EncodeReport::default();
    let mut line_buffer = Vec::new();

    loop {
        line_buffer.clear();
        if input.read_until(b'\n', &mut line_buffer).into_diagnostic()? == 0 {
            break;
        }
        strip_line_separator(&mut line_buffer);

        let line = String::from_utf8_lossy(&line_buffer);
        let encoded = encode_line(&line);
        if matches!(encoded, Cow::Owned(_)) {
            report.lines_escaped += 1;
        }

        writeln!(output, "{encoded}").into_diagnostic()?;
        report.lines_read += 1;
    }

    output.flush().into_diagnostic()?;

    ok!(report)
}

/// Drop a trailing `\n`, and the `\r` of a `\r\n` pair.
fn strip_line_separator(line_buffer: &mut Vec<u8>) {
    if line_buffer.last() == Some(&b'\n') {
        line_buffer.pop();
        if line_buffer.last() == Some(&b'\r') {
            line_buffer.pop();
        }
    }
}
