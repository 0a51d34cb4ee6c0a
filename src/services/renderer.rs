// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use crate::domain::{Report, title_case};

/// Markdown rendering of a [`Report`].
pub struct ReportRenderer<'a> {
    header: &'a str,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(header: &'a str) -> Self {
        Self { header }
    }

    pub fn title(after: &str, before: &str) -> String {
        format!("New and Noteworthy for {after} to {before}")
    }

    /// Render the title, the header and one `##` section per tag.
    ///
    /// Sections and bullets keep report order; nothing is re-sorted.
    pub fn render(&self, report: &Report, after: &str, before: &str) -> String {
        let mut output = String::new();

        output.push_str(&Self::title(after, before));
        output.push_str("\n\n");
        output.push_str(self.header);
        output.push('\n');

        for (tag, notes) in report.iter() {
            output.push_str(&format!("\n## {}\n\n", title_case(tag)));
            for note in notes {
                output.push_str(&format!("- {note}\n"));
            }
        }

        output
    }
}
