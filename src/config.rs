// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const PROJECT_CONFIG_FILE: &str = ".noteworthy.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Executable used for the log query (default: git)
    #[serde(default = "default_git_binary")]
    pub git_binary: String,

    /// Tags whose notes are dropped entirely, matched case-sensitively
    #[serde(default = "default_excluded_tags")]
    pub excluded_tags: Vec<String>,

    /// Bucket for commits that never carried an accepted tag
    #[serde(default = "default_unknown_tag")]
    pub unknown_tag: String,

    /// Heading printed under the title line, edited by hand before publishing
    #[serde(default = "default_header")]
    pub header: String,

    /// File the last commit's untagged message under the unknown bucket
    /// once the log is exhausted (default: true)
    #[serde(default = "default_true")]
    pub flush_trailing: bool,
}

fn default_git_binary() -> String {
    "git".into()
}
fn default_excluded_tags() -> Vec<String> {
    vec!["main".into()]
}
fn default_unknown_tag() -> String {
    "unknown".into()
}
fn default_header() -> String {
    "# NewInxx.y".into()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_binary: default_git_binary(),
            excluded_tags: default_excluded_tags(),
            unknown_tag: default_unknown_tag(),
            header: default_header(),
            flush_trailing: default_true(),
        }
    }
}

impl Config {
    /// Load with priority: ENV > user config > project config > defaults
    pub fn load() -> Result<Self> {
        let project_dir = std::env::current_dir().ok();
        Self::load_from(project_dir.as_deref(), Self::config_path().as_deref())
    }

    /// Same layering as [`Config::load`] with explicit file locations.
    pub fn load_from(project_dir: Option<&Path>, user_config: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(dir) = project_dir {
            let project_config = dir.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        if let Some(path) = user_config {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // NOTEWORTHY_GIT_BINARY, NOTEWORTHY_FLUSH_TRAILING, ...
        figment = figment.merge(Env::prefixed("NOTEWORTHY_"));

        let config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "noteworthy").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn is_excluded(&self, tag: &str) -> bool {
        self.excluded_tags.iter().any(|t| t == tag)
    }

    fn validate(&self) -> Result<()> {
        if self.git_binary.trim().is_empty() {
            return Err(Error::Config("git_binary cannot be empty".into()));
        }

        if self.unknown_tag.trim().is_empty() {
            return Err(Error::Config("unknown_tag cannot be empty".into()));
        }

        if self.is_excluded(&self.unknown_tag) {
            return Err(Error::Config(format!(
                "unknown_tag '{}' is also listed in excluded_tags",
                self.unknown_tag
            )));
        }

        Ok(())
    }
}
