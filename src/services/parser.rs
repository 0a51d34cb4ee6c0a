// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

//! Line classifier for `git log` output.
//!
//! Each commit in the default log format looks like:
//!
//! ```text
//! commit 1a2b3c...
//! Author: ...
//! Date:   Mon Jan 1 10:00:00 2024 +0100
//!
//!     Fix bug
//!
//!     [Editor] Fixed rendering glitch
//! ```
//!
//! The `Date:` header marks the start of the message region. The first
//! non-empty line after it is the commit subject, kept as a fallback for
//! commits that never carry a `[Tag]` line.

use std::str::Utf8Error;

use thiserror::Error;
use tokio::io::AsyncBufRead;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::{Report, TaggedLine};
use crate::error::Result;
use crate::services::git::{LogLine, LogReader};

const COMMIT_PREFIX: &str = "commit";
const HEADER_BOUNDARY: &str = "date:";

/// Where the classifier is inside the current commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    /// The next non-empty line is the commit subject.
    pub awaiting_message: bool,
    /// Subject of the current commit, empty when none is pending.
    pub pending_message: String,
    /// At least one accepted tag was seen for the current commit.
    pub has_tag: bool,
    /// Commit id, only used in diagnostics.
    pub current_commit: String,
}

/// What a single line contributes to the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketUpdate {
    /// An untagged commit subject, flushed when the next commit starts.
    Untagged(String),
    Tagged { tag: String, text: String },
}

fn is_header_boundary(line: &str) -> bool {
    line.get(..HEADER_BOUNDARY.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(HEADER_BOUNDARY))
}

/// Classify one log line.
///
/// Returns the state to use for the next line and at most one update for the
/// report. `excluded` tags are dropped without counting as a tag.
pub fn classify(
    mut state: ParserState,
    line: &str,
    excluded: &[String],
) -> (ParserState, Option<BucketUpdate>) {
    let line = line.trim();
    let mut update = None;

    // Falls through: a commit line can still be a subject below.
    if let Some(id) = line.strip_prefix(COMMIT_PREFIX) {
        state.current_commit = id.trim().to_string();
    }

    if is_header_boundary(line) {
        let pending = std::mem::take(&mut state.pending_message);
        if !state.has_tag && !pending.is_empty() {
            update = Some(BucketUpdate::Untagged(pending));
        }
        state.awaiting_message = true;
        state.has_tag = false;
    } else if state.awaiting_message && !line.is_empty() {
        state.pending_message = line.to_string();
        state.awaiting_message = false;
    }

    if let Some(tagged) = TaggedLine::parse(line) {
        if !excluded.iter().any(|t| t == tagged.tag) {
            state.has_tag = true;
            update = Some(BucketUpdate::Tagged {
                tag: tagged.tag.to_string(),
                text: tagged.text.to_string(),
            });
        }
    }

    (state, update)
}

/// A log line that could not be decoded, reported and then skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error {error} in {commit}, could not parse commit message {line}")]
pub struct DecodeFailure {
    pub error: Utf8Error,
    pub commit: String,
    pub line: String,
}

/// Drives [`classify`] over a whole log and files the updates into a [`Report`].
#[derive(Debug, Clone)]
pub struct LogParser {
    state: ParserState,
    excluded: Vec<String>,
    unknown_tag: String,
    flush_trailing: bool,
    report: Report,
    lines_seen: usize,
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl LogParser {
    pub fn new(config: &Config) -> Self {
        Self {
            state: ParserState::default(),
            excluded: config.excluded_tags.clone(),
            unknown_tag: config.unknown_tag.clone(),
            flush_trailing: config.flush_trailing,
            report: Report::new(),
            lines_seen: 0,
        }
    }

    pub fn current_commit(&self) -> &str {
        &self.state.current_commit
    }

    pub fn feed(&mut self, line: &str) {
        self.lines_seen += 1;
        let state = std::mem::take(&mut self.state);
        let (next, update) = classify(state, line, &self.excluded);
        self.state = next;

        match update {
            Some(BucketUpdate::Untagged(message)) => {
                self.report.push(&self.unknown_tag, message);
            }
            Some(BucketUpdate::Tagged { tag, text }) => {
                self.report.push(&tag, text);
            }
            None => {}
        }
    }

    /// Feed a decoded line, or describe why it was skipped.
    pub fn consume(&mut self, line: LogLine) -> std::result::Result<(), DecodeFailure> {
        match line {
            LogLine::Text(text) => {
                self.feed(&text);
                Ok(())
            }
            LogLine::Malformed { raw, error } => Err(DecodeFailure {
                error,
                commit: self.state.current_commit.clone(),
                line: String::from_utf8_lossy(&raw).trim().to_string(),
            }),
        }
    }

    /// Consume every line of `lines`.
    ///
    /// Undecodable lines are handed to `on_failure` and do not stop the pass.
    pub async fn drain<R>(
        &mut self,
        lines: &mut LogReader<R>,
        mut on_failure: impl FnMut(&DecodeFailure),
    ) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        while let Some(line) = lines.next_line().await? {
            if let Err(failure) = self.consume(line) {
                warn!(commit = %failure.commit, error = %failure.error, "skipping undecodable log line");
                on_failure(&failure);
            }
        }
        Ok(())
    }

    /// Finish the pass and hand back the report.
    ///
    /// With `flush_trailing` set, a subject still pending for the last commit
    /// is filed as untagged, the same way a following `Date:` line would.
    pub fn finish(mut self) -> Report {
        let pending = std::mem::take(&mut self.state.pending_message);
        if self.flush_trailing && !self.state.has_tag && !pending.is_empty() {
            debug!(commit = %self.state.current_commit, "flushing trailing untagged commit");
            self.report.push(&self.unknown_tag, pending);
        }

        debug!(
            lines = self.lines_seen,
            tags = self.report.len(),
            notes = self.report.note_count(),
            "log parsed"
        );
        self.report
    }
}
