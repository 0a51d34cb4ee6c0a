// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;

use crate::domain::LogDate;

#[derive(Parser, Debug)]
#[command(name = "noteworthy")]
#[command(version)]
#[command(
    about = "Generates a new and noteworthy in markdown from a git tree using two dates (yyyy-MM-dd).",
    long_about = None
)]
pub struct Cli {
    /// Include commits after and including this specific date (yyyy-MM-dd)
    #[arg(short, long, value_parser = LogDate::parse)]
    pub after: LogDate,

    /// Include commits before and including this specific date (yyyy-MM-dd), defaults to today
    #[arg(short, long, value_parser = LogDate::parse)]
    pub before: Option<LogDate>,
}

impl Cli {
    pub fn before_or_today(&self) -> LogDate {
        self.before.clone().unwrap_or_else(LogDate::today)
    }
}
