// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use crate::{output, tasks_with, FakePinger, SiteFixture};

use anyhow::Result;
use indoc::indoc;
use jekyll_tasks::failure::FailureKind;
use pretty_assertions::assert_eq;
use sealed_test::prelude::*;
use std::{fs, path::Path};

#[sealed_test]
fn list_posts_only() -> Result<()> {
    SiteFixture::new(&["2024-01-02-b.md", "2024-01-01-a.md"], &["secret.md"])?;
    let mut tasks = tasks_with(FakePinger::new());
    let report = tasks.list(false)?;
    assert!(report.is_clean());

    let expect = indoc! {r#"

        Listing posts

        2024-01-01-a.md
        2024-01-02-b.md
    "#};
    assert_eq!(output(tasks), expect);

    Ok(())
}

#[sealed_test]
fn list_posts_and_drafts() -> Result<()> {
    SiteFixture::new(&["2024-01-01-a.md"], &["secret.md"])?;
    let mut tasks = tasks_with(FakePinger::new());
    tasks.list(true)?;

    let expect = indoc! {r#"

        Listing posts

        * Including drafts...

        ./_posts/:
        2024-01-01-a.md

        ./_drafts/:
        secret.md
    "#};
    assert_eq!(output(tasks), expect);

    Ok(())
}

#[sealed_test]
fn list_continues_past_missing_posts_dir() -> Result<()> {
    fs::create_dir("_drafts")?;
    fs::write("_drafts/secret.md", "")?;
    let mut tasks = tasks_with(FakePinger::new());
    let report = tasks.list(true)?;

    assert_eq!(report.failures().len(), 1);
    assert_eq!(report.failures()[0].kind, FailureKind::NotFound);

    let result = output(tasks);
    assert!(result.contains("* [Error] occurred: failed to list directory \"./_posts/\""));
    assert!(result.ends_with("./_drafts/:\nsecret.md\n"));

    Ok(())
}

#[sealed_test]
fn post_creates_dated_file() -> Result<()> {
    SiteFixture::new(&[], &[])?;
    let mut tasks = tasks_with(FakePinger::new());
    let report = tasks.post("Hello World", false)?;
    assert!(report.is_clean());

    let content = fs::read_to_string("_posts/2024-01-01-hello-world.md")?;
    let expect = indoc! {r#"
        ---
        layout: post
        title: Hello World
        ---"#};
    assert_eq!(content, expect);

    let expect = indoc! {r#"

        Creating new post '2024-01-01-hello-world.md' in ./_posts/

        * Done.
    "#};
    assert_eq!(output(tasks), expect);

    Ok(())
}

#[sealed_test]
fn post_as_draft() -> Result<()> {
    SiteFixture::new(&[], &[])?;
    let mut tasks = tasks_with(FakePinger::new());
    tasks.post("My First Post", true)?;

    assert!(Path::new("_drafts/2024-01-01-my-first-post.md").is_file());
    assert!(!Path::new("_posts/2024-01-01-my-first-post.md").exists());

    Ok(())
}

#[sealed_test]
fn post_into_missing_dir_reports_error() -> Result<()> {
    let mut tasks = tasks_with(FakePinger::new());
    let report = tasks.post("Hello World", false)?;

    assert_eq!(report.failures().len(), 1);
    assert_eq!(report.failures()[0].kind, FailureKind::NotFound);
    assert!(!Path::new("_posts").exists());
    assert!(output(tasks).contains("* [Error] occurred: failed to create post at"));

    Ok(())
}

#[sealed_test]
fn clean_removes_generated_site() -> Result<()> {
    SiteFixture::new(&[], &[])?.with_generated_site()?;
    let mut tasks = tasks_with(FakePinger::new());
    let report = tasks.clean()?;

    assert!(report.is_clean());
    assert!(!Path::new("_site").exists());
    assert!(Path::new("_posts").exists());

    let expect = indoc! {r#"

        Cleaning the site from ./_site/

        * Done.
    "#};
    assert_eq!(output(tasks), expect);

    Ok(())
}

#[sealed_test]
fn clean_without_site_reports_error() -> Result<()> {
    let mut tasks = tasks_with(FakePinger::new());
    let report = tasks.clean()?;

    assert_eq!(report.failures()[0].kind, FailureKind::NotFound);
    assert!(output(tasks).contains("* [Error] occurred: failed to clean site at \"./_site/\""));

    Ok(())
}

#[test]
fn notify_without_services_sends_nothing() -> Result<()> {
    let pinger = FakePinger::new();
    let mut tasks = tasks_with(pinger.clone());
    let report = tasks.notify(false, false)?;

    assert!(report.is_clean());
    assert!(pinger.requested().is_empty());

    let expect = indoc! {r#"

        * Specify service(s) to ping.
        * type: 'jekyll-tasks notify --help'
        * for the list of available options.

    "#};
    assert_eq!(output(tasks), expect);

    Ok(())
}

#[test]
fn notify_pings_google_then_bing() -> Result<()> {
    let pinger = FakePinger::new();
    let mut tasks = tasks_with(pinger.clone());
    let report = tasks.notify(true, true)?;
    assert!(report.is_clean());

    let expect = vec![
        "http://www.google.com/webmasters/sitemaps/ping?sitemap=http%3A%2F%2Fwww.example.com%2Fsitemap.xml",
        "http://www.bing.com/webmaster/ping.aspx?siteMap=http%3A%2F%2Fwww.example.com%2Fsitemap.xml",
    ];
    assert_eq!(pinger.requested(), expect);

    let expect = indoc! {r#"

        Submitting sitemap to http://www.google.com/webmasters/sitemaps/ping

        * Done.

        Submitting sitemap to http://www.bing.com/webmaster/ping.aspx

        * Done.
    "#};
    assert_eq!(output(tasks), expect);

    Ok(())
}

#[test]
fn notify_failure_does_not_stop_next_service() -> Result<()> {
    let pinger = FakePinger::failing_for("www.google.com");
    let mut tasks = tasks_with(pinger.clone());
    let report = tasks.notify(true, true)?;

    assert_eq!(report.failures().len(), 1);
    assert_eq!(report.failures()[0].kind, FailureKind::NetworkFailure);
    assert_eq!(pinger.requested().len(), 2);

    let result = output(tasks);
    assert!(result.contains("* [Error] occurred: ping to http://www.google.com/"));
    assert!(result.ends_with("ping.aspx\n\n* Done.\n"));

    Ok(())
}

#[test]
fn notify_bing_only() -> Result<()> {
    let pinger = FakePinger::new();
    let mut tasks = tasks_with(pinger.clone());
    tasks.notify(false, true)?;

    let requested = pinger.requested();
    assert_eq!(requested.len(), 1);
    assert!(requested[0].starts_with("http://www.bing.com/"));

    Ok(())
}
