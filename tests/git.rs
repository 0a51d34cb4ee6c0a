// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! Log reading over in-memory byte streams, so no repository is needed.

use noteworthy::domain::LogDate;
use noteworthy::error::Error;
use noteworthy::services::git::{GitLog, LogLine, LogReader};
use noteworthy::services::parser::{DecodeFailure, LogParser};

fn log_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"commit deadbeef\r\nAuthor: Dev <dev@example.com>\nDate: Mon Jan 1\n\n");
    bytes.extend_from_slice(b"    Fix bug\n\n    [Editor] caf\xe9 menu\n");
    bytes.extend_from_slice(b"    [Editor] Fixed rendering glitch\n");
    bytes
}

#[tokio::test]
async fn reader_flags_invalid_utf8_lines() {
    let bytes = log_bytes();
    let mut reader = LogReader::new(bytes.as_slice());

    let mut malformed = Vec::new();
    while let Some(line) = reader.next_line().await.unwrap() {
        if let LogLine::Malformed { raw, error } = line {
            malformed.push((raw, error.valid_up_to()));
        }
    }

    assert_eq!(malformed.len(), 1);
    assert_eq!(malformed[0].0, b"    [Editor] caf\xe9 menu");
    assert_eq!(malformed[0].1, 16);
}

#[tokio::test]
async fn drain_skips_bad_lines_and_keeps_going() {
    let bytes = log_bytes();
    let mut reader = LogReader::new(bytes.as_slice());
    let mut parser = LogParser::default();

    let mut failures: Vec<DecodeFailure> = Vec::new();
    parser
        .drain(&mut reader, |f| failures.push(f.clone()))
        .await
        .unwrap();

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].commit, "deadbeef");
    let message = failures[0].to_string();
    assert!(message.starts_with("Error invalid utf-8"));
    assert!(message.contains(" in deadbeef, could not parse commit message "));

    let report = parser.finish();
    assert_eq!(report.get("Editor").unwrap(), ["Fixed rendering glitch"]);
    assert_eq!(report.get("unknown"), None);
}

#[tokio::test]
async fn crlf_lines_are_trimmed_before_classification() {
    let bytes = b"commit abc\r\nDate: Mon\r\n\r\n    Subject\r\n\r\n    [Core] thing\r\n";
    let mut reader = LogReader::new(&bytes[..]);
    let mut parser = LogParser::default();
    parser.drain(&mut reader, |_| {}).await.unwrap();

    assert_eq!(parser.current_commit(), "abc");
    assert_eq!(parser.finish().get("Core").unwrap(), ["thing"]);
}

#[tokio::test]
async fn missing_binary_is_a_spawn_error() {
    let after = LogDate::parse("2024-01-01").unwrap();
    let before = LogDate::parse("2024-01-31").unwrap();

    let result = GitLog::spawn("noteworthy-no-such-git-binary", &after, &before);
    match result {
        Err(Error::GitSpawn { program, .. }) => {
            assert_eq!(program, "noteworthy-no-such-git-binary");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("spawning a missing binary should fail"),
    }
}
