// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Human-readable task output.
//!
//! Status lines are meant for the person running a task, so they go to a
//! plain [`Write`] sink rather than through the log. Nothing printed here has
//! any effect on what a task does.

use crate::{
    failure::Failure,
    invocation::{Invocation, Status},
};

use std::{
    fmt::Display,
    io::{Result, Write},
};

/// Status line printer.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    /// Construct new console printing into target sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print heading surrounded by blank lines.
    pub fn heading(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.out, "\n{message}\n")
    }

    /// Print bullet item.
    pub fn item(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.out, "* {message}")
    }

    /// Print line as is.
    pub fn line(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.out, "{message}")
    }

    pub fn status(&mut self, status: &Status) -> Result<()> {
        match status {
            Status::Heading(message) => self.heading(message),
            Status::Item(message) => self.item(message),
        }
    }

    /// Print composed command.
    pub fn command(&mut self, invocation: &Invocation) -> Result<()> {
        writeln!(self.out, "\n>>> {invocation}\n")
    }

    pub fn done(&mut self) -> Result<()> {
        self.item("Done.")
    }

    /// Print one-line failure notice.
    pub fn failure(&mut self, failure: &Failure) -> Result<()> {
        self.item(format!("[Error] occurred: {failure}"))
    }

    /// Give back the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Outcome of one task.
///
/// Lists every failure caught while the task ran. A task with failures still
/// completed; the failures were reported and skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    failures: Vec<Failure>,
}

impl Report {
    pub fn push(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Task ran without any failure.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{failure::FailureKind, invocation::Verb};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn console_layout() -> anyhow::Result<()> {
        let mut console = Console::new(Vec::new());
        let invocation = Invocation::new(Verb::Doctor);
        for status in invocation.status() {
            console.status(&status)?;
        }
        console.item("Running via Bundler...")?;
        console.command(&invocation)?;
        console.failure(&Failure {
            kind: FailureKind::NotFound,
            message: "failed to run \"jekyll doctor\"".into(),
        })?;
        console.done()?;

        let result = String::from_utf8(console.into_inner())?;
        let expect = indoc! {r#"

            Checking site for compatibility problems and URL conflicts...

            * Running via Bundler...

            >>> jekyll doctor

            * [Error] occurred: failed to run "jekyll doctor"
            * Done.
        "#};
        assert_eq!(result, expect);

        Ok(())
    }

    #[test]
    fn report_collects_failures() {
        let mut report = Report::default();
        assert!(report.is_clean());

        report.push(Failure {
            kind: FailureKind::Unknown,
            message: "blah".into(),
        });
        assert!(!report.is_clean());
        assert_eq!(report.failures().len(), 1);
    }
}
