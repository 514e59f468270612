// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Task runner.
//!
//! Ties composition, site operations, and notification together. Every task
//! prints its trace to a [`Console`], and never fails on filesystem, network,
//! or process errors: each one is reported as a single `[Error]` line,
//! collected into the returned [`Report`], and the task carries on. Only a
//! failure to write to the console itself is returned as an error.

use crate::{
    compose::{self, BuildOptions, DoctorOptions, ServeOptions},
    config::{SitePath, TaskConfig},
    exec::{DryRun, Executor},
    failure::{Classify, Failure},
    invocation::Invocation,
    notify::{self, HttpPinger, Pinger, Service},
    report::{Console, Report},
    site::{self, Clock, LocalClock, PostFile},
};

use std::io::{Result, Write};
use tracing::{debug, instrument};

/// Run tasks against a fixed configuration.
pub struct Tasks<W: Write> {
    config: TaskConfig,
    console: Console<W>,
    executor: Box<dyn Executor>,
    pinger: Option<Box<dyn Pinger>>,
    clock: Box<dyn Clock>,
}

impl<W: Write> Tasks<W> {
    /// Construct new task runner printing into target sink.
    ///
    /// Composed commands are only shown, not executed. Pings go over HTTP, and
    /// new posts are dated with the host's local date.
    pub fn new(config: TaskConfig, out: W) -> Self {
        Self {
            config,
            console: Console::new(out),
            executor: Box::new(DryRun),
            pinger: None,
            clock: Box::new(LocalClock),
        }
    }

    /// Use target executor for composed commands.
    pub fn with_executor(mut self, executor: impl Executor + 'static) -> Self {
        self.executor = Box::new(executor);
        self
    }

    /// Use target pinger for sitemap notification.
    pub fn with_pinger(mut self, pinger: impl Pinger + 'static) -> Self {
        self.pinger = Some(Box::new(pinger));
        self
    }

    /// Use target clock to date new posts.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Give back the console's sink.
    pub fn into_output(self) -> W {
        self.console.into_inner()
    }

    /// Build the site.
    ///
    /// `jekyll build [options]`
    pub fn build(&mut self, opts: BuildOptions) -> Result<Report> {
        let invocation = compose::build(&self.config, opts);
        self.run(&invocation)
    }

    /// Serve the site locally.
    ///
    /// `jekyll serve [options]`
    pub fn serve(&mut self, opts: ServeOptions) -> Result<Report> {
        let invocation = compose::serve(&self.config, opts);
        self.run(&invocation)
    }

    /// Search site and print specific deprecation warnings.
    ///
    /// `jekyll doctor [options]`
    pub fn doctor(&mut self, opts: DoctorOptions) -> Result<Report> {
        let invocation = compose::doctor(&self.config, opts);
        self.run(&invocation)
    }

    /// Remove generated site.
    pub fn clean(&mut self) -> Result<Report> {
        let mut report = Report::default();
        let site_dir = self.config.site.site_dir.clone();

        self.console
            .heading(format!("Cleaning the site from {site_dir}"))?;
        match site::clean(&site_dir) {
            Ok(()) => self.console.done()?,
            Err(error) => self.fail(&mut report, &error)?,
        }

        Ok(report)
    }

    /// List all posts, and optionally all drafts.
    ///
    /// When both directories are listed, each listing is preceded by the
    /// directory name.
    pub fn list(&mut self, drafts: bool) -> Result<Report> {
        let mut report = Report::default();

        self.console.heading("Listing posts")?;
        let mut dirs = vec![self.config.site.posts_dir.clone()];
        if drafts {
            self.console.item("Including drafts...")?;
            self.console.line("")?;
            dirs.push(self.config.site.drafts_dir.clone());
        }

        let labeled = dirs.len() > 1;
        for (index, dir) in dirs.iter().enumerate() {
            if index > 0 {
                self.console.line("")?;
            }
            if labeled {
                self.console.line(format!("{dir}:"))?;
            }

            match site::list_entries(dir) {
                Ok(names) => {
                    for name in names {
                        self.console.line(name)?;
                    }
                }
                Err(error) => self.fail(&mut report, &error)?,
            }
        }

        Ok(report)
    }

    /// Create a new post, or draft, dated today.
    ///
    /// The target directory must already exist.
    pub fn post(&mut self, title: impl Into<String>, drafts: bool) -> Result<Report> {
        let mut report = Report::default();
        let dir: SitePath = if drafts {
            self.config.site.drafts_dir.clone()
        } else {
            self.config.site.posts_dir.clone()
        };
        let post = PostFile::new(title, self.clock.today(), &self.config.site.post_ext);

        self.console
            .heading(format!("Creating new post '{}' in {dir}", post.name()))?;
        match post.write_into(&dir) {
            Ok(path) => {
                debug!("created {:?}", path.display());
                self.console.done()?;
            }
            Err(error) => self.fail(&mut report, &error)?,
        }

        Ok(report)
    }

    /// Notify services about sitemap update.
    ///
    /// Services are pinged in a fixed order, Google first. A failed ping does
    /// not stop the next one. With no service selected, prints guidance and
    /// sends nothing.
    pub fn notify(&mut self, google: bool, bing: bool) -> Result<Report> {
        let mut report = Report::default();
        let services = [(google, Service::Google), (bing, Service::Bing)]
            .into_iter()
            .filter_map(|(enabled, service)| enabled.then_some(service))
            .collect::<Vec<_>>();

        if services.is_empty() {
            self.console.line("")?;
            self.console.item("Specify service(s) to ping.")?;
            self.console.item("type: 'jekyll-tasks notify --help'")?;
            self.console.item("for the list of available options.")?;
            self.console.line("")?;
            return Ok(report);
        }

        for service in services {
            self.console
                .heading(format!("Submitting sitemap to {}", service.endpoint()))?;
            match self.ping(service) {
                Ok(()) => self.console.done()?,
                Err(error) => self.fail(&mut report, &error)?,
            }
        }

        Ok(report)
    }

    #[instrument(skip(self), level = "debug")]
    fn ping(&mut self, service: Service) -> notify::Result<()> {
        // INVARIANT: Only build the HTTP client once something needs pinging.
        let pinger: Box<dyn Pinger> = match self.pinger.take() {
            Some(pinger) => pinger,
            None => Box::new(HttpPinger::new()?),
        };

        let result = service
            .ping_url(&self.config.notify.sitemap_url)
            .and_then(|url| pinger.ping(&url));
        self.pinger = Some(pinger);

        result
    }

    fn run(&mut self, invocation: &Invocation) -> Result<Report> {
        let mut report = Report::default();

        for status in invocation.status() {
            self.console.status(&status)?;
        }
        self.console.command(invocation)?;

        if let Err(error) = self.executor.execute(invocation) {
            self.fail(&mut report, &error)?;
        }

        Ok(report)
    }

    fn fail(&mut self, report: &mut Report, error: &impl Classify) -> Result<()> {
        let failure = Failure::capture(error);
        debug!("{:?} failure: {error:?}", failure.kind);
        self.console.failure(&failure)?;
        report.push(failure);

        Ok(())
    }
}
