// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Configuration layout.
//!
//! Specify the layout of the task configuration file to simplify the process
//! of serialization and deserialization. Every key is optional, so an empty
//! file yields the same configuration as no file at all.
//!
//! # General Layout
//!
//! ```toml
//! [site]
//! site_dir = "./_site/"
//! posts_dir = "./_posts/"
//! drafts_dir = "./_drafts/"
//! post_ext = ".md"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 4000
//!
//! [jekyll]
//! bundle_exec = false
//! force_polling = false
//! incremental = false
//!
//! [notify]
//! sitemap_url = "http://www.example.com/sitemap.xml"
//! ```

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Error as FmtError, Formatter, Result as FmtResult},
    fs::read_to_string,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::{debug, instrument};

/// Task configuration.
///
/// Immutable once loaded. Passed into the task runner at construction so
/// every task reads the same paths, server address, and Jekyll defaults.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfig {
    /// Site directory layout.
    pub site: SiteSettings,

    /// Development server address.
    pub server: ServerSettings,

    /// Default options for Jekyll commands.
    pub jekyll: JekyllSettings,

    /// Sitemap notification settings.
    pub notify: NotifySettings,
}

impl TaskConfig {
    /// Read and parse configuration file at target path.
    ///
    /// # Errors
    ///
    /// - Return [`ConfigError::Read`] if file cannot be read.
    /// - Return [`ConfigError::Deserialize`] if file content is not valid.
    /// - Return [`ConfigError::ShellExpansion`] if a path cannot be expanded.
    #[instrument(skip(path), level = "debug")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        debug!("load configuration: {:?}", path.as_ref().display());
        read_to_string(path.as_ref())
            .map_err(|err| ConfigError::Read {
                source: err,
                path: path.as_ref().to_path_buf(),
            })?
            .parse()
    }
}

impl FromStr for TaskConfig {
    type Err = ConfigError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let mut config: TaskConfig = toml::de::from_str(data).map_err(ConfigError::Deserialize)?;

        // INVARIANT: Perform shell expansion on every site path.
        config.site.site_dir = config.site.site_dir.expand()?;
        config.site.posts_dir = config.site.posts_dir.expand()?;
        config.site.drafts_dir = config.site.drafts_dir.expand()?;

        Ok(config)
    }
}

impl Display for TaskConfig {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(
            toml::ser::to_string_pretty(self)
                .map_err(ConfigError::Serialize)?
                .as_str(),
        )
    }
}

/// Site directory layout.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Directory Jekyll generates the site into.
    pub site_dir: SitePath,

    /// Directory holding published posts.
    pub posts_dir: SitePath,

    /// Directory holding drafts.
    pub drafts_dir: SitePath,

    /// Extension given to new post files, leading dot included.
    pub post_ext: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_dir: SitePath::new("./_site/"),
            posts_dir: SitePath::new("./_posts/"),
            drafts_dir: SitePath::new("./_drafts/"),
            post_ext: ".md".into(),
        }
    }
}

/// Address the development server listens on.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 4000,
        }
    }
}

/// Defaults for options shared by Jekyll commands.
///
/// A command line flag can switch any of these on, but never off.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct JekyllSettings {
    /// Run Jekyll through Bundler.
    pub bundle_exec: bool,

    /// Force watch to use polling.
    pub force_polling: bool,

    /// Enable incremental build (Jekyll 3 and higher).
    pub incremental: bool,
}

/// Sitemap notification settings.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotifySettings {
    /// Location of the site's sitemap.
    pub sitemap_url: String,
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            sitemap_url: "http://www.example.com/sitemap.xml".into(),
        }
    }
}

/// Path to a directory of the site.
///
/// Displayed exactly as written in the configuration, so trailing slashes and
/// leading `./` survive into composed commands and status lines.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct SitePath(PathBuf);

impl SitePath {
    /// Construct new site path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Treat site path as [`Path`] slice.
    pub fn as_path(&self) -> &Path {
        self.0.as_path()
    }

    /// Join file name onto site path.
    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.0.join(name)
    }

    fn expand(&self) -> Result<Self> {
        Ok(Self::new(
            shellexpand::full(self.to_string().as_str())
                .map_err(ConfigError::ShellExpansion)?
                .into_owned(),
        ))
    }
}

impl Display for SitePath {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.as_path().to_string_lossy().as_ref())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file cannot be read.
    #[error("failed to read configuration file at {:?}", path.display())]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to deserialize configuration.
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),

    /// Failed to serialize configuration.
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    /// Failed to perform shell expansion on configuration.
    #[error(transparent)]
    ShellExpansion(#[from] shellexpand::LookupError<std::env::VarError>),
}

impl From<ConfigError> for FmtError {
    fn from(_: ConfigError) -> Self {
        FmtError
    }
}

/// Friendly result alias :3
type Result<T, E = ConfigError> = std::result::Result<T, E>;
