// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("not a valid date: '{0}'")]
    #[diagnostic(
        code(noteworthy::cli::invalid_date),
        help("Dates use the yyyy-MM-dd format, e.g. 2024-03-15")
    )]
    InvalidDate(String),

    #[error("Failed to launch '{program}'")]
    #[diagnostic(
        code(noteworthy::git::spawn),
        help("Make sure git is installed and on PATH, or set git_binary in .noteworthy.toml")
    )]
    GitSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Log query produced no readable output stream")]
    #[diagnostic(code(noteworthy::git::stdout))]
    GitStdout,

    #[error("Configuration error: {0}")]
    #[diagnostic(code(noteworthy::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
