// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Direct filesystem operations on the site.
//!
//! Cleaning the generated site, listing posts and drafts, and creating new
//! posts. These call filesystem APIs directly rather than shelling out to
//! `rm` or `ls`.
//!
//! # Post Files
//!
//! Jekyll expects post files to be named `YEAR-MONTH-DAY-title.EXT`. The
//! title part is produced by [`sanitize`], and every new post starts with a
//! fixed front matter block:
//!
//! ```text
//! ---
//! layout: post
//! title: <title>
//! ---
//! ```

use crate::{
    config::SitePath,
    failure::{Classify, FailureKind},
};

use chrono::{Local, NaiveDate};
use std::{
    fs::{read_dir, remove_dir_all, OpenOptions},
    io::Write,
    path::PathBuf,
};
use tracing::{debug, instrument};

/// Recursively delete generated site.
///
/// # Errors
///
/// - Return [`SiteError::Clean`] if directory cannot be removed, including
///   when it does not exist.
#[instrument(skip(site_dir), level = "debug")]
pub fn clean(site_dir: &SitePath) -> Result<()> {
    debug!("remove {:?}", site_dir.as_path().display());
    remove_dir_all(site_dir.as_path()).map_err(|err| SiteError::Clean {
        source: err,
        path: site_dir.as_path().to_path_buf(),
    })
}

/// List entry names of target directory.
///
/// Includes hidden entries. Names are sorted.
///
/// # Errors
///
/// - Return [`SiteError::List`] if directory or any of its entries cannot be
///   read.
#[instrument(skip(dir), level = "debug")]
pub fn list_entries(dir: &SitePath) -> Result<Vec<String>> {
    let to_error = |err| SiteError::List {
        source: err,
        path: dir.as_path().to_path_buf(),
    };

    let mut names = read_dir(dir.as_path())
        .map_err(to_error)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(to_error)?;
    names.sort();
    debug!("found {} entries in {:?}", names.len(), dir.as_path().display());

    Ok(names)
}

/// Source of today's date for new posts.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock reading the local date of the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A fixed date is its own clock.
impl Clock for NaiveDate {
    fn today(&self) -> NaiveDate {
        *self
    }
}

/// Align post title to Jekyll post name requirements.
///
/// Lowercases the title and turns spaces into hyphens. Nothing else is
/// touched.
pub fn sanitize(title: impl AsRef<str>) -> String {
    title.as_ref().to_lowercase().replace(' ', "-")
}

/// New post file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFile {
    title: String,
    name: String,
}

impl PostFile {
    /// Construct new post file for title on target date.
    pub fn new(title: impl Into<String>, date: NaiveDate, ext: impl AsRef<str>) -> Self {
        let title = title.into();
        let name = format!(
            "{}-{}{}",
            date.format("%Y-%m-%d"),
            sanitize(&title),
            ext.as_ref()
        );

        Self { title, name }
    }

    /// File name of post.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Front matter written into post, without trailing newline.
    pub fn front_matter(&self) -> String {
        ["---", "layout: post", format!("title: {}", self.title).as_str(), "---"].join("\n")
    }

    /// Write post into target directory.
    ///
    /// Existing post with same name is overwritten. The directory itself is
    /// never created.
    ///
    /// # Errors
    ///
    /// - Return [`SiteError::Post`] if file cannot be created or written.
    #[instrument(skip(self, dir), level = "debug")]
    pub fn write_into(&self, dir: &SitePath) -> Result<PathBuf> {
        let path = dir.join(self.name());
        debug!("write post {:?}", path.display());
        let to_error = |err| SiteError::Post {
            source: err,
            path: path.clone(),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(to_error)?;
        file.write_all(self.front_matter().as_bytes())
            .map_err(to_error)?;

        Ok(path)
    }
}

/// Site operation error types.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Generated site cannot be removed.
    #[error("failed to clean site at {:?}", path.display())]
    Clean {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Directory cannot be listed.
    #[error("failed to list directory {:?}", path.display())]
    List {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Post file cannot be created.
    #[error("failed to create post at {:?}", path.display())]
    Post {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

impl Classify for SiteError {
    fn kind(&self) -> FailureKind {
        match self {
            Self::Clean { source, .. } | Self::List { source, .. } | Self::Post { source, .. } => {
                source.kind().into()
            }
        }
    }
}

/// Friendly result alias :3
pub type Result<T, E = SiteError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use sealed_test::prelude::*;
    use simple_test_case::test_case;
    use std::{fs, path::Path};

    fn new_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test_case("My First Post", "my-first-post"; "spaces and case")]
    #[test_case("already-clean", "already-clean"; "untouched")]
    #[test_case("C++ & Rust: Why?", "c++-&-rust:-why?"; "punctuation kept")]
    #[test_case("Two  Spaces", "two--spaces"; "each space becomes hyphen")]
    #[test]
    fn sanitize_title(title: &str, expect: &str) {
        pretty_assertions::assert_eq!(sanitize(title), expect);
        pretty_assertions::assert_eq!(sanitize(sanitize(title)), sanitize(title));
    }

    #[test]
    fn post_file_layout() {
        let post = PostFile::new("Hello World", new_year(), ".md");
        pretty_assertions::assert_eq!(post.name(), "2024-01-01-hello-world.md");

        let expect = indoc! {r#"
            ---
            layout: post
            title: Hello World
            ---"#};
        pretty_assertions::assert_eq!(post.front_matter(), expect);
    }

    #[sealed_test]
    fn write_post_into_existing_dir() -> anyhow::Result<()> {
        fs::create_dir("_posts")?;
        let post = PostFile::new("Hello World", new_year(), ".md");
        let path = post.write_into(&SitePath::new("./_posts/"))?;

        pretty_assertions::assert_eq!(path, Path::new("./_posts/2024-01-01-hello-world.md"));
        pretty_assertions::assert_eq!(fs::read_to_string(path)?, post.front_matter());

        Ok(())
    }

    #[sealed_test]
    fn write_post_overwrites_same_name() -> anyhow::Result<()> {
        fs::create_dir("_posts")?;
        fs::write("_posts/2024-01-01-hello-world.md", "stale content that is much longer")?;
        let post = PostFile::new("Hello World", new_year(), ".md");
        let path = post.write_into(&SitePath::new("_posts"))?;

        pretty_assertions::assert_eq!(fs::read_to_string(path)?, post.front_matter());

        Ok(())
    }

    #[sealed_test]
    fn write_post_into_missing_dir_creates_nothing() {
        let post = PostFile::new("Hello World", new_year(), ".md");
        let result = post.write_into(&SitePath::new("./_drafts/"));

        assert!(matches!(&result, Err(SiteError::Post { .. })));
        pretty_assertions::assert_eq!(result.unwrap_err().kind(), FailureKind::NotFound);
        assert!(!Path::new("_drafts").exists());
    }

    #[sealed_test]
    fn clean_removes_site_tree() -> anyhow::Result<()> {
        fs::create_dir_all("_site/assets/css")?;
        fs::write("_site/index.html", "<html></html>")?;
        fs::write("_site/assets/css/main.css", "body {}")?;

        clean(&SitePath::new("./_site/"))?;
        assert!(!Path::new("_site").exists());

        Ok(())
    }

    #[sealed_test]
    fn clean_missing_site_is_not_found() {
        let result = clean(&SitePath::new("./_site/"));
        pretty_assertions::assert_eq!(result.unwrap_err().kind(), FailureKind::NotFound);
    }

    #[sealed_test]
    fn list_entries_sorted_with_hidden() -> anyhow::Result<()> {
        fs::create_dir("_posts")?;
        fs::write("_posts/2024-02-01-b.md", "")?;
        fs::write("_posts/2024-01-01-a.md", "")?;
        fs::write("_posts/.hidden", "")?;

        let result = list_entries(&SitePath::new("./_posts/"))?;
        let expect = vec![".hidden", "2024-01-01-a.md", "2024-02-01-b.md"];
        pretty_assertions::assert_eq!(result, expect);

        Ok(())
    }

    #[sealed_test]
    fn list_missing_dir_is_not_found() {
        let result = list_entries(&SitePath::new("./_posts/"));
        assert!(matches!(&result, Err(SiteError::List { .. })));
        pretty_assertions::assert_eq!(result.unwrap_err().kind(), FailureKind::NotFound);
    }
}
