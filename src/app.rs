// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use tracing::debug;

use crate::cli::Cli;
use crate::config::Config;
use crate::domain::{LogDate, Report};
use crate::error::Result;
use crate::services::{
    git::GitLog,
    parser::{DecodeFailure, LogParser},
    renderer::ReportRenderer,
};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(cli, config))
    }

    pub fn with_config(cli: Cli, config: Config) -> Self {
        debug!(
            git = %config.git_binary,
            excluded = ?config.excluded_tags,
            flush_trailing = config.flush_trailing,
            "config loaded"
        );
        Self { cli, config }
    }

    pub async fn run(&self) -> Result<()> {
        let after = &self.cli.after;
        let before = self.cli.before_or_today();

        let report = self.collect(after, &before).await?;
        let renderer = ReportRenderer::new(&self.config.header);
        print!("{}", renderer.render(&report, after.as_str(), before.as_str()));

        Ok(())
    }

    /// Run the log query for the window and bucket its notes.
    async fn collect(&self, after: &LogDate, before: &LogDate) -> Result<Report> {
        let mut log = GitLog::spawn(&self.config.git_binary, after, before)?;
        let mut parser = LogParser::new(&self.config);

        parser
            .drain(log.lines(), |failure: &DecodeFailure| println!("{failure}"))
            .await?;
        log.wait().await?;

        Ok(parser.finish())
    }
}
