// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

/// A commit-body line of the form `[Tag] text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedLine<'a> {
    pub tag: &'a str,
    pub text: &'a str,
}

impl<'a> TaggedLine<'a> {
    /// Tokenize a line as a tagged note.
    ///
    /// The line must open with `[`, followed by one or more ASCII letters and a
    /// closing `]`. Whatever follows the bracket, trimmed, is the note text and
    /// must not be empty. Anything else is not a tag line.
    pub fn parse(line: &'a str) -> Option<Self> {
        let rest = line.strip_prefix('[')?;
        let close = rest.find(|c: char| !c.is_ascii_alphabetic())?;
        if close == 0 {
            return None;
        }

        let (tag, after) = rest.split_at(close);
        let text = after.strip_prefix(']')?.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self { tag, text })
    }
}

/// Title-case a tag for use as a section heading.
///
/// The first letter of every whitespace-separated word is upper-cased and the
/// rest lower-cased, so `EDITOR` and `editor` both become `Editor`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
