// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains the per-line transform that rewrites multi-byte
//! characters as [ANSI-C quoted] escape sequences, eg: `é` becomes
//! `$'\u00E9'`, and `😀` becomes `$'\U1F600'`.
//!
//! [ANSI-C quoted]: https://www.gnu.org/software/bash/manual/html_node/ANSI_002dC-Quoting.html

use std::{borrow::Cow, fmt::Write as _};

/// Encode one line of text into its ASCII-safe form.
///
/// Characters are classified by the number of bytes they occupy in UTF-8 (the
/// encoded width reported by [`char::len_utf8`], which for a `U+FFFD`
/// replacement character is the 3 bytes the decoder assigned it):
///
/// - 1 byte: copied through unchanged.
/// - 2 or 3 bytes: `$'\uHHHH'` w/ exactly 4 uppercase hex digits.
/// - 4 bytes: `$'\UH…'` w/ as many uppercase hex digits as the code point
///   needs.
///
/// A line whose byte length equals its character count contains only
/// single-byte characters, and is returned borrowed w/out being scanned
/// again. This function is total: there is no input it can fail on.
#[must_use]
pub fn encode_line(line: &str) -> Cow<'_, str> {
    if line.len() == line.chars().count() {
        return Cow::Borrowed(line);
    }

    let mut acc = String::with_capacity(line.len() * 2);

    for ch in line.chars() {
        match ch.len_utf8() {
            1 => acc.push(ch),
            2 | 3 => {
                // Infallible for String.
                let _unused = write!(acc, "$'\\u{:04X}'", u32::from(ch));
            }
            _ => {
                let _unused = write!(acc, "$'\\U{:X}'", u32::from(ch));
            }
        }
    }

    Cow::Owned(acc)
}
