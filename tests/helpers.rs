// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use noteworthy::domain::Report;
use noteworthy::services::parser::LogParser;

/// Render one commit the way `git log` prints it by default.
#[allow(dead_code)]
pub fn commit_block(id: &str, date: &str, subject: &str, body: &[&str]) -> String {
    let mut out = format!("commit {id}\nAuthor: Dev <dev@example.com>\n{date}\n\n    {subject}\n");
    if !body.is_empty() {
        out.push('\n');
        for line in body {
            out.push_str(&format!("    {line}\n"));
        }
    }
    out.push('\n');
    out
}

/// Feed a whole log through a default parser.
#[allow(dead_code)]
pub fn parse_log(log: &str) -> Report {
    let mut parser = LogParser::default();
    for line in log.lines() {
        parser.feed(line);
    }
    parser.finish()
}
