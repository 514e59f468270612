// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Non-fatal task failures.
//!
//! Tasks never abort on filesystem, network, or process errors. Instead each
//! error is classified into a [`FailureKind`], reported, and collected into
//! the task's [`Report`](crate::report::Report).

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io,
};

/// Broad class of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    PermissionDenied,
    NetworkFailure,
    Unknown,
}

impl From<io::ErrorKind> for FailureKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Unknown,
        }
    }
}

/// Classify error into a failure kind.
pub trait Classify: std::error::Error {
    fn kind(&self) -> FailureKind;
}

/// Failure caught while running a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    /// Capture classified error as failure.
    ///
    /// The message joins the error with its chain of sources.
    pub fn capture(error: &impl Classify) -> Self {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(format!(": {cause}").as_str());
            source = cause.source();
        }

        Self {
            kind: error.kind(),
            message,
        }
    }
}

impl Display for Failure {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.message.as_str())
    }
}
