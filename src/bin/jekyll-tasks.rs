// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use jekyll_tasks::{
    compose::{BuildOptions, DoctorOptions, ServeOptions},
    exec::Process,
    path::locate_config_file,
    report::Report,
    TaskConfig, Tasks,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::{
    io::{stdout, Stdout},
    path::PathBuf,
    process::exit,
};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Parser)]
#[command(
    about,
    override_usage = "jekyll-tasks [options] <command>",
    subcommand_help_heading = "Commands",
    version
)]
struct Cli {
    /// Path to task configuration file.
    #[arg(short, long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Run composed Jekyll commands instead of only showing them.
    #[arg(short = 'r', long = "run", global = true)]
    pub execute: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    fn run(self) -> Result<Report> {
        let config = load_config(self.config)?;
        let mut tasks = Tasks::new(config, stdout());
        if self.execute {
            tasks = tasks.with_executor(Process);
        }

        Ok(match self.command {
            Command::Build(opts) => run_build(&mut tasks, opts),
            Command::Serve(opts) => run_serve(&mut tasks, opts),
            Command::Clean => tasks.clean(),
            Command::Doctor(opts) => run_doctor(&mut tasks, opts),
            Command::List(opts) => tasks.list(opts.drafts),
            Command::Post(opts) => tasks.post(opts.title, opts.drafts),
            Command::Notify(opts) => tasks.notify(opts.google, opts.bing),
        }?)
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Build the site.
    #[command(override_usage = "jekyll-tasks build [options]")]
    Build(BuildArgs),

    /// Serve the site locally.
    #[command(override_usage = "jekyll-tasks serve [options]")]
    Serve(ServeArgs),

    /// Remove generated site without building.
    Clean,

    /// Search site and print specific deprecation warnings.
    #[command(override_usage = "jekyll-tasks doctor [options]")]
    Doctor(DoctorArgs),

    /// List all posts.
    #[command(override_usage = "jekyll-tasks list [options]")]
    List(ListArgs),

    /// Create a new post.
    #[command(override_usage = "jekyll-tasks post [options] <title>")]
    Post(PostArgs),

    /// Notify various services about sitemap update.
    #[command(override_usage = "jekyll-tasks notify [options]")]
    Notify(NotifyArgs),
}

#[derive(Args, Clone, Debug)]
struct BuildArgs {
    /// Include drafts.
    #[arg(short, long)]
    pub drafts: bool,

    /// Run Jekyll through Bundler.
    #[arg(short, long)]
    pub bundle_exec: bool,

    /// Enable incremental build (Jekyll 3 and higher).
    #[arg(short, long)]
    pub incremental: bool,
}

#[derive(Args, Clone, Debug)]
struct ServeArgs {
    /// Include drafts.
    #[arg(short, long)]
    pub drafts: bool,

    /// Run Jekyll through Bundler.
    #[arg(short, long)]
    pub bundle_exec: bool,

    /// Force watch to use polling.
    #[arg(short, long)]
    pub force_polling: bool,

    /// Enable incremental build (Jekyll 3 and higher).
    #[arg(short, long)]
    pub incremental: bool,
}

#[derive(Args, Clone, Debug)]
struct DoctorArgs {
    /// Run Jekyll through Bundler.
    #[arg(short, long)]
    pub bundle_exec: bool,
}

#[derive(Args, Clone, Debug)]
struct ListArgs {
    /// Also list drafts.
    #[arg(short, long)]
    pub drafts: bool,
}

#[derive(Args, Clone, Debug)]
struct PostArgs {
    /// Title of new post.
    #[arg(required = true, value_name = "title")]
    pub title: String,

    /// Create post as a draft.
    #[arg(short, long)]
    pub drafts: bool,
}

#[derive(Args, Clone, Debug)]
struct NotifyArgs {
    /// Ping Google.
    #[arg(short, long)]
    pub google: bool,

    /// Ping Bing.
    #[arg(long)]
    pub bing: bool,
}

fn main() {
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .without_time();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();

    // INVARIANT: Reported task failures still exit successfully.
    match run() {
        Ok(report) => debug!("task finished with {} failure(s)", report.failures().len()),
        Err(error) => {
            error!("{error:?}");
            exit(1);
        }
    }

    exit(0)
}

fn run() -> Result<Report> {
    Cli::parse().run()
}

fn load_config(explicit: Option<PathBuf>) -> Result<TaskConfig> {
    match locate_config_file(explicit.as_deref()) {
        Some(path) => TaskConfig::load(&path)
            .with_context(|| format!("cannot load configuration from {:?}", path.display())),
        None => {
            debug!("no configuration file found, using defaults");
            Ok(TaskConfig::default())
        }
    }
}

fn run_build(tasks: &mut Tasks<Stdout>, opts: BuildArgs) -> std::io::Result<Report> {
    tasks.build(BuildOptions {
        drafts: opts.drafts,
        bundle_exec: opts.bundle_exec,
        incremental: opts.incremental,
    })
}

fn run_serve(tasks: &mut Tasks<Stdout>, opts: ServeArgs) -> std::io::Result<Report> {
    tasks.serve(ServeOptions {
        drafts: opts.drafts,
        bundle_exec: opts.bundle_exec,
        force_polling: opts.force_polling,
        incremental: opts.incremental,
    })
}

fn run_doctor(tasks: &mut Tasks<Stdout>, opts: DoctorArgs) -> std::io::Result<Report> {
    tasks.doctor(DoctorOptions {
        bundle_exec: opts.bundle_exec,
    })
}
