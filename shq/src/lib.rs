// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl-shq
//!
//! `shq` reads UTF-8 text from `stdin` line by line and writes each line back
//! to `stdout` with every multi-byte character rewritten as a shell [ANSI-C
//! quoted] escape:
//!
//! - 1-byte characters are copied through unchanged.
//! - 2- and 3-byte characters become `$'\uHHHH'` (exactly 4 uppercase hex
//!   digits).
//! - Wider characters become `$'\UH…'` (uppercase hex, as many digits as the
//!   code point needs).
//!
//! This keeps shell configuration files (prompts, aliases, `zsh` themes)
//! ASCII-only while still rendering the characters you want:
//!
//! ```text
//! $ echo 'naïve café 😀' | shq
//! na$'\u00EF've caf$'\u00E9' $'\U1F600'
//! ```
//!
//! Lines that are already pure ASCII pass through untouched, so running a file
//! through `shq` twice is the same as running it once.
//!
//! The library surface is tiny on purpose: [`encode_line`] is the per-line
//! transform, and [`encode_stream`] drives it over any [`std::io::BufRead`] /
//! [`std::io::Write`] pair. The `shq` binary wires those to `stdin` / `stdout`.
//!
//! [ANSI-C quoted]: https://www.gnu.org/software/bash/manual/html_node/ANSI_002dC-Quoting.html

pub mod clap_config;
pub mod common;
pub mod encoder;
pub mod log_support;
pub mod ui_str;

pub use clap_config::*;
pub use common::*;
pub use encoder::*;
