// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;
use noteworthy::domain::TaggedLine;

fuzz_target!(|data: &str| {
    if let Some(t) = TaggedLine::parse(data) {
        assert!(!t.tag.is_empty());
        assert!(t.tag.bytes().all(|b| b.is_ascii_alphabetic()));
        assert!(!t.text.is_empty());
        assert_eq!(t.text, t.text.trim());
    }
});
