// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use indexmap::IndexMap;

/// Tag name to the notes filed under it.
///
/// Tags keep the order they were first seen in, notes keep the order they
/// were recorded in. Tag names are compared case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    buckets: IndexMap<String, Vec<String>>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: &str, message: impl Into<String>) {
        self.buckets
            .entry(tag.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, tag: &str) -> Option<&[String]> {
        self.buckets.get(tag).map(Vec::as_slice)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets
            .iter()
            .map(|(tag, notes)| (tag.as_str(), notes.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Number of notes across all tags.
    pub fn note_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
