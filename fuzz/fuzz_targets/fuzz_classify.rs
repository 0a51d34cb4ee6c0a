// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;
use noteworthy::services::parser::LogParser;

fuzz_target!(|data: &str| {
    let mut parser = LogParser::default();
    for line in data.lines() {
        parser.feed(line);
    }
    let report = parser.finish();
    assert!(report.get("main").is_none());
});
