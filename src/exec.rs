// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Execution of composed invocations.
//!
//! Composition and execution are kept apart. The task runner hands every
//! composed [`Invocation`] to an [`Executor`], which either does nothing
//! ([`DryRun`]), or actually runs Jekyll ([`Process`]).

use crate::{
    failure::{Classify, FailureKind},
    invocation::Invocation,
};

use std::process::Command;
use tracing::{debug, instrument};

/// Run a composed invocation.
pub trait Executor {
    /// Execute target invocation to completion.
    ///
    /// # Errors
    ///
    /// - Return [`ExecError`] if invocation could not be run successfully.
    fn execute(&self, invocation: &Invocation) -> Result<()>;
}

/// Executor that only shows what would run.
///
/// The printed command is the whole result. This is the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRun;

impl Executor for DryRun {
    fn execute(&self, invocation: &Invocation) -> Result<()> {
        debug!("dry run, not executing {invocation}");
        Ok(())
    }
}

/// Executor that spawns invocation as a child process.
///
/// The child inherits stdin, stdout, and stderr. Blocks until it exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct Process;

impl Executor for Process {
    #[instrument(skip(self, invocation), level = "debug")]
    fn execute(&self, invocation: &Invocation) -> Result<()> {
        let (program, args) = invocation.argv();
        debug!("spawn {program:?} with {args:?}");

        let status = Command::new(&program)
            .args(&args)
            .spawn()
            .and_then(|mut child| child.wait())
            .map_err(|err| ExecError::Spawn {
                source: err,
                command: invocation.to_string(),
            })?;

        if !status.success() {
            return Err(ExecError::Status {
                command: invocation.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Execution error types.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// Process could not be spawned or waited on.
    #[error("failed to run {command:?}")]
    Spawn {
        #[source]
        source: std::io::Error,
        command: String,
    },

    /// Process exited unsuccessfully.
    #[error("command {command:?} failed with exit code {}", code.map_or("none".into(), |c| c.to_string()))]
    Status { command: String, code: Option<i32> },
}

impl Classify for ExecError {
    fn kind(&self) -> FailureKind {
        match self {
            Self::Spawn { source, .. } => source.kind().into(),
            Self::Status { .. } => FailureKind::Unknown,
        }
    }
}

/// Friendly result alias :3
pub type Result<T, E = ExecError> = std::result::Result<T, E>;
