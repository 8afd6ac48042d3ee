// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Integration tests that drive [`encode_stream`] the way the `shq` binary
//! does: a buffered byte reader in, a byte writer out.

use std::io::{self, BufReader, Cursor, Read};

use pretty_assertions::assert_eq;
use r3bl_shq::{EncodeReport, encode_stream};

fn run(input_bytes: &[u8]) -> (String, EncodeReport) {
    let mut input = Cursor::new(input_bytes.to_vec());
    let mut output = Vec::new();
    let report = encode_stream(&mut input, &mut output).unwrap();
    (String::from_utf8(output).unwrap(), report)
}

#[test]
fn ascii_lines_pass_through_in_order() {
    let (output, report) = run(b"alias ll='ls -la'\nexport EDITOR=vim\n");
    assert_eq!(output, "alias ll='ls -la'\nexport EDITOR=vim\n");
    assert_eq!(
        report,
        EncodeReport {
            lines_read: 2,
            lines_escaped: 0
        }
    );
}

#[test]
fn multi_byte_lines_are_escaped_and_counted() {
    let (output, report) = run("café\nplain\nnaïve\n".as_bytes());
    assert_eq!(output, "caf$'\\u00E9'\nplain\nna$'\\u00EF've\n");
    assert_eq!(
        report,
        EncodeReport {
            lines_read: 3,
            lines_escaped: 2
        }
    );
}

#[test]
fn four_byte_chars_use_the_long_form() {
    let (output, _) = run("PROMPT='😀 '\n".as_bytes());
    assert_eq!(output, "PROMPT='$'\\U1F600' '\n");
}

#[test]
fn crlf_separators_are_stripped() {
    let (output, report) = run(b"one\r\ntwo\r\n");
    assert_eq!(output, "one\ntwo\n");
    assert_eq!(report.lines_read, 2);
}

#[test]
fn unterminated_final_line_still_gets_a_newline() {
    let (output, report) = run("café".as_bytes());
    assert_eq!(output, "caf$'\\u00E9'\n");
    assert_eq!(report.lines_read, 1);
}

#[test]
fn empty_input_produces_empty_output() {
    let (output, report) = run(b"");
    assert_eq!(output, "");
    assert_eq!(report, EncodeReport::default());
}

#[test]
fn empty_lines_are_preserved() {
    let (output, report) = run(b"\n\n");
    assert_eq!(output, "\n\n");
    assert_eq!(report.lines_read, 2);
}

#[test]
fn malformed_bytes_decode_to_replacement_characters() {
    // 0xFF can't start a UTF-8 sequence; the lossy decoder turns it into
    // U+FFFD, which is 3 bytes in UTF-8 and takes the short form.
    let (output, report) = run(b"a\xFFb\n");
    assert_eq!(output, "a$'\\uFFFD'b\n");
    assert_eq!(report.lines_escaped, 1);
}

/// Yields its payload, then fails every subsequent `read` call.
struct FailAfter {
    payload: Cursor<Vec<u8>>,
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let bytes_read = self.payload.read(buf)?;
        if bytes_read == 0 {
            return Err(io::Error::other("simulated read failure"));
        }
        Ok(bytes_read)
    }
}

#[test]
fn read_failure_keeps_previously_emitted_lines() {
    let mut input = BufReader::new(FailAfter {
        payload: Cursor::new(b"caf\xC3\xA9\n".to_vec()),
    });
    let mut output = Vec::new();

    let result = encode_stream(&mut input, &mut output);

    assert!(result.is_err());
    assert_eq!(String::from_utf8(output).unwrap(), "caf$'\\u00E9'\n");
    assert_eq!(
        result.unwrap_err().to_string(),
        "simulated read failure"
    );
}
