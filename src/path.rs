// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Path resolution utilities.
//!
//! Determine where the task configuration file lives, if anywhere.

use std::path::{Path, PathBuf};

/// Name of configuration file looked up in the current working directory.
///
/// Jekyll skips underscore-prefixed files, so the file never ends up in the
/// generated site.
pub const LOCAL_CONFIG_FILE: &str = "_tasks.toml";

/// Determine default absolute path to user configuration file.
///
/// Uses XDG Base Directory path `$XDG_CONFIG_HOME/jekyll-tasks/config.toml`.
/// Does not check if the path returned actually exists.
///
/// # Errors
///
/// - Return [`NoWayHome`] if configuration directory cannot be determined.
///
/// # See Also
///
/// - [XDG Base Directory](https://wiki.archlinux.org/title/XDG_Base_Directory)
pub fn default_config_file() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|path| path.join("jekyll-tasks").join("config.toml"))
        .ok_or(NoWayHome)
}

/// Locate configuration file to load.
///
/// An explicit path always wins, even if it does not exist, so the caller
/// gets a proper read error for it. Otherwise the local file is preferred
/// over the user file. Returns `None` when no file exists, meaning built-in
/// defaults apply.
pub fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    default_config_file().ok().filter(|path| path.is_file())
}

/// No way to determine user's configuration directory.
///
/// # See Also
///
/// - [`dirs::config_dir`](https://docs.rs/dirs/latest/dirs/fn.config_dir.html)
#[derive(Clone, Debug, thiserror::Error)]
#[error("cannot determine absolute path to user's configuration directory")]
pub struct NoWayHome;

/// Friendly result alias :3
pub type Result<T, E = NoWayHome> = std::result::Result<T, E>;
