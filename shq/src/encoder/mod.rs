// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub mod ansi_c_quote;
pub mod encode_stream;

pub use ansi_c_quote::*;
pub use encode_stream::*;
