// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Compose Jekyll invocations from task options.
//!
//! Composition is pure: nothing here touches the filesystem or spawns a
//! process. Options left unset fall back to the `[jekyll]` defaults of the
//! [`TaskConfig`].

use crate::{
    config::TaskConfig,
    invocation::{Invocation, Token, Verb},
};

/// Options of the build task.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub drafts: bool,
    pub bundle_exec: bool,
    pub incremental: bool,
}

/// Options of the serve task.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeOptions {
    pub drafts: bool,
    pub bundle_exec: bool,
    pub force_polling: bool,
    pub incremental: bool,
}

/// Options of the doctor task.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DoctorOptions {
    pub bundle_exec: bool,
}

/// Compose `jekyll build -d <site_dir>` with its optional flags.
pub fn build(config: &TaskConfig, opts: BuildOptions) -> Invocation {
    Invocation::new(Verb::Build)
        .with(Token::Destination(config.site.site_dir.clone()))
        .with_if(opts.bundle_exec || config.jekyll.bundle_exec, Token::Wrapper)
        .with_if(opts.incremental || config.jekyll.incremental, Token::Incremental)
        .with_if(opts.drafts, Token::Drafts)
}

/// Compose `jekyll serve -d <site_dir> --host <host> --port <port>` with its
/// optional flags.
pub fn serve(config: &TaskConfig, opts: ServeOptions) -> Invocation {
    Invocation::new(Verb::Serve)
        .with(Token::Destination(config.site.site_dir.clone()))
        .with(Token::Host(config.server.host.clone()))
        .with(Token::Port(config.server.port))
        .with_if(opts.bundle_exec || config.jekyll.bundle_exec, Token::Wrapper)
        .with_if(opts.incremental || config.jekyll.incremental, Token::Incremental)
        .with_if(opts.drafts, Token::Drafts)
        .with_if(
            opts.force_polling || config.jekyll.force_polling,
            Token::ForcePolling,
        )
}

/// Compose `jekyll doctor`.
pub fn doctor(config: &TaskConfig, opts: DoctorOptions) -> Invocation {
    Invocation::new(Verb::Doctor)
        .with_if(opts.bundle_exec || config.jekyll.bundle_exec, Token::Wrapper)
}
