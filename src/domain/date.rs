// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};

use crate::error::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A `yyyy-MM-dd` date as given on the command line.
///
/// The original text is kept so the report title and the log query see
/// exactly what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDate {
    raw: String,
    date: NaiveDate,
}

impl LogDate {
    pub fn parse(s: &str) -> Result<Self, Error> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(|date| Self {
                raw: s.to_string(),
                date,
            })
            .map_err(|_| Error::InvalidDate(s.to_string()))
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        let date = Local::now().date_naive();
        Self {
            raw: date.format(DATE_FORMAT).to_string(),
            date,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl FromStr for LogDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LogDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
