// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Composed Jekyll command representation.
//!
//! An __invocation__ is the ordered token sequence of one Jekyll command,
//! e.g., `bundle exec jekyll serve -d ./_site/ --host 127.0.0.1 --port 4000`.
//! It is built by the [`compose`](crate::compose) functions, printed, handed to
//! an [`Executor`](crate::exec::Executor), and discarded.
//!
//! # Token Order
//!
//! Tokens always appear in the order of [`Token`]'s variants: wrapper, verb,
//! destination, host, port, then boolean flags. Each token appears at most
//! once.

use crate::config::SitePath;

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Core Jekyll verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Build,
    Serve,
    Doctor,
}

impl Verb {
    /// Name of subcommand passed to Jekyll.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Serve => "serve",
            Self::Doctor => "doctor",
        }
    }
}

/// Single token of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Run Jekyll through Bundler.
    Wrapper,
    Verb(Verb),
    /// Site output directory.
    Destination(SitePath),
    Host(String),
    Port(u16),
    Incremental,
    Drafts,
    ForcePolling,
}

impl Token {
    /// Split token into command line words.
    pub fn words(&self) -> Vec<String> {
        match self {
            Self::Wrapper => vec!["bundle".into(), "exec".into()],
            Self::Verb(verb) => vec!["jekyll".into(), verb.as_str().into()],
            Self::Destination(path) => vec!["-d".into(), path.to_string()],
            Self::Host(host) => vec!["--host".into(), host.clone()],
            Self::Port(port) => vec!["--port".into(), port.to_string()],
            Self::Incremental => vec!["-I".into()],
            Self::Drafts => vec!["--drafts".into()],
            Self::ForcePolling => vec!["--force_polling".into()],
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Wrapper => 0,
            Self::Verb(_) => 1,
            Self::Destination(_) => 2,
            Self::Host(_) => 3,
            Self::Port(_) => 4,
            Self::Incremental => 5,
            Self::Drafts => 6,
            Self::ForcePolling => 7,
        }
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.words().join(" ").as_str())
    }
}

/// Descriptive line printed for a token present in an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Describes the verb, printed first.
    Heading(String),

    /// Describes an option.
    Item(String),
}

/// Ordered token sequence of one Jekyll command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    tokens: Vec<Token>,
}

impl Invocation {
    /// Construct new invocation holding only a verb.
    pub fn new(verb: Verb) -> Self {
        Self {
            tokens: vec![Token::Verb(verb)],
        }
    }

    /// Add token to invocation.
    ///
    /// Places the token at its fixed position. Adding a token kind that is
    /// already present replaces it.
    pub fn with(mut self, token: Token) -> Self {
        let rank = token.rank();
        match self.tokens.iter().position(|t| t.rank() >= rank) {
            Some(index) if self.tokens[index].rank() == rank => self.tokens[index] = token,
            Some(index) => self.tokens.insert(index, token),
            None => self.tokens.push(token),
        }

        self
    }

    /// Add token to invocation if condition holds.
    pub fn with_if(self, condition: bool, token: Token) -> Self {
        if condition {
            self.with(token)
        } else {
            self
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.tokens.contains(token)
    }

    pub fn verb(&self) -> Verb {
        self.tokens
            .iter()
            .find_map(|token| match token {
                Token::Verb(verb) => Some(*verb),
                _ => None,
            })
            .unwrap_or(Verb::Build)
    }

    pub fn destination(&self) -> Option<&SitePath> {
        self.tokens.iter().find_map(|token| match token {
            Token::Destination(path) => Some(path),
            _ => None,
        })
    }

    pub fn host(&self) -> Option<&str> {
        self.tokens.iter().find_map(|token| match token {
            Token::Host(host) => Some(host.as_str()),
            _ => None,
        })
    }

    pub fn port(&self) -> Option<u16> {
        self.tokens.iter().find_map(|token| match token {
            Token::Port(port) => Some(*port),
            _ => None,
        })
    }

    /// Flatten invocation into program name and its arguments.
    pub fn argv(&self) -> (String, Vec<String>) {
        let mut words = self.tokens.iter().flat_map(Token::words);
        let program = words.next().unwrap_or_default();
        (program, words.collect())
    }

    /// Describe every token present, one line each.
    ///
    /// The heading for the verb comes first, followed by the server address,
    /// then each flag in declaration order.
    pub fn status(&self) -> Vec<Status> {
        let mut lines = Vec::new();

        let site = self
            .destination()
            .map(ToString::to_string)
            .unwrap_or_default();
        lines.push(Status::Heading(match self.verb() {
            Verb::Build => format!("Building the site in {site}"),
            Verb::Serve => format!("Serving the site in {site}"),
            Verb::Doctor => "Checking site for compatibility problems and URL conflicts...".into(),
        }));

        if let Some(host) = self.host() {
            let port = self.port().map(|port| format!(":{port}")).unwrap_or_default();
            lines.push(Status::Item(format!(
                "Starting Jekyll development server at {host}{port}"
            )));
        }

        let flags = [
            (Token::Wrapper, "Running via Bundler..."),
            (
                Token::Incremental,
                "Enabling incremental build (Jekyll 3 and higher only)...",
            ),
            (Token::Drafts, "Including drafts..."),
            (Token::ForcePolling, "Forcing watch to use polling..."),
        ];
        for (flag, line) in flags {
            if self.contains(&flag) {
                lines.push(Status::Item(line.into()));
            }
        }

        lines
    }
}

impl Display for Invocation {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        let rendered = self
            .tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        fmt.write_str(rendered.as_str())
    }
}
