// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Task runner for Jekyll sites.
//!
//! Composes and prints the Jekyll commands used to build, serve, and check a
//! site, cleans the generated site, lists and creates posts, and pings search
//! engines about sitemap updates.
//!
//! # Composition and Execution
//!
//! Composing a command never runs it. Every [`Invocation`] is handed to an
//! [`Executor`](exec::Executor), which by default only shows what would run.
//!
//! # Failures
//!
//! Tasks treat filesystem, network, and process errors as non-fatal. Each one
//! is printed as a single `[Error]` line, classified by
//! [`FailureKind`](failure::FailureKind), and collected into the task's
//! [`Report`](report::Report).

pub mod compose;
pub mod config;
pub mod exec;
pub mod failure;
pub mod invocation;
pub mod notify;
pub mod path;
pub mod report;
pub mod site;
pub mod tasks;

pub use config::TaskConfig;
pub use invocation::Invocation;
pub use tasks::Tasks;
