// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::process::{ExitStatus, Stdio};
use std::str::Utf8Error;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStdout, Command};
use tracing::debug;

use crate::domain::LogDate;
use crate::error::{Error, Result};

/// One line of log output, newline removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    Text(String),
    /// Bytes that are not valid UTF-8, kept for diagnostics.
    Malformed { raw: Vec<u8>, error: Utf8Error },
}

/// Splits a byte stream into [`LogLine`]s.
///
/// Lines are decoded one at a time so a bad byte sequence only costs the line
/// it sits on.
pub struct LogReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LogReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
        }
    }

    pub async fn next_line(&mut self) -> Result<Option<LogLine>> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf).await?;
        if n == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }

        let line = match std::str::from_utf8(&self.buf) {
            Ok(text) => LogLine::Text(text.to_string()),
            Err(error) => LogLine::Malformed {
                raw: self.buf.clone(),
                error,
            },
        };
        Ok(Some(line))
    }
}

/// A running `git log` restricted to a date window.
pub struct GitLog {
    child: Child,
    lines: LogReader<BufReader<ChildStdout>>,
}

impl GitLog {
    /// Arguments for the log query, newest commit first.
    pub fn query_args(after: &LogDate, before: &LogDate) -> Vec<String> {
        vec![
            "--no-pager".into(),
            "log".into(),
            "--after".into(),
            after.to_string(),
            "--until".into(),
            before.to_string(),
        ]
    }

    pub fn spawn(program: &str, after: &LogDate, before: &LogDate) -> Result<Self> {
        let args = Self::query_args(after, before);
        debug!(program, ?args, "spawning log query");

        let mut child = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| Error::GitSpawn {
                program: program.to_string(),
                source,
            })?;

        let stdout = child.stdout.take().ok_or(Error::GitStdout)?;

        Ok(Self {
            child,
            lines: LogReader::new(BufReader::new(stdout)),
        })
    }

    pub fn lines(&mut self) -> &mut LogReader<BufReader<ChildStdout>> {
        &mut self.lines
    }

    /// Reap the child once its output is exhausted.
    ///
    /// The exit status is returned for logging only; a failing query simply
    /// yields fewer lines.
    pub async fn wait(mut self) -> Result<ExitStatus> {
        let status = self.child.wait().await?;
        debug!(%status, "log query exited");
        Ok(status)
    }
}
