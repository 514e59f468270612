// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Sitemap update notification.
//!
//! Search engines used to expose ping endpoints that accept the location of
//! a sitemap as a query parameter. A ping is a plain GET request whose
//! response body is ignored, only success or failure matters.

use crate::failure::{Classify, FailureKind};

use reqwest::{blocking::Client, StatusCode, Url};
use std::{str::FromStr, time::Duration};
use tracing::{debug, instrument};

/// Service that can be notified about a sitemap update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Google,
    Bing,
}

impl Service {
    /// Ping endpoint of service.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Google => "http://www.google.com/webmasters/sitemaps/ping",
            Self::Bing => "http://www.bing.com/webmaster/ping.aspx",
        }
    }

    /// Name of query parameter carrying the sitemap location.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::Google => "sitemap",
            Self::Bing => "siteMap",
        }
    }

    /// Full ping URL for target sitemap location.
    ///
    /// # Errors
    ///
    /// - Return [`NotifyError::Url`] if endpoint cannot be parsed.
    pub fn ping_url(&self, sitemap_url: impl AsRef<str>) -> Result<Url> {
        Url::parse_with_params(self.endpoint(), [(self.parameter(), sitemap_url.as_ref())])
            .map_err(|err| NotifyError::Url {
                source: err,
                endpoint: self.endpoint(),
            })
    }
}

/// Issue ping request.
pub trait Pinger {
    /// Send GET request to target URL.
    ///
    /// # Errors
    ///
    /// - Return [`NotifyError`] if request fails or is answered with a
    ///   non-success status.
    fn ping(&self, url: &Url) -> Result<()>;
}

/// Pinger backed by a blocking HTTP client.
#[derive(Debug, Clone)]
pub struct HttpPinger {
    client: Client,
}

impl HttpPinger {
    /// Construct new HTTP pinger.
    ///
    /// # Errors
    ///
    /// - Return [`NotifyError::Client`] if HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("jekyll-tasks/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(NotifyError::Client)?;

        Ok(Self { client })
    }
}

impl Pinger for HttpPinger {
    #[instrument(skip(self, url), level = "debug")]
    fn ping(&self, url: &Url) -> Result<()> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|err| NotifyError::Request {
                source: err,
                url: url.to_string(),
            })?;
        debug!("{url} answered {}", response.status());

        if !response.status().is_success() {
            return Err(NotifyError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(())
    }
}

/// Notification error types.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// HTTP client cannot be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// Ping URL cannot be formed.
    #[error("invalid ping endpoint {endpoint:?}")]
    Url {
        #[source]
        source: <Url as FromStr>::Err,
        endpoint: &'static str,
    },

    /// Request could not be sent, or no response arrived.
    #[error("failed to ping {url}")]
    Request {
        #[source]
        source: reqwest::Error,
        url: String,
    },

    /// Request was answered with a non-success status.
    #[error("ping to {url} answered with {status}")]
    Status { url: String, status: StatusCode },
}

impl Classify for NotifyError {
    fn kind(&self) -> FailureKind {
        match self {
            Self::Client(_) | Self::Url { .. } => FailureKind::Unknown,
            Self::Request { .. } | Self::Status { .. } => FailureKind::NetworkFailure,
        }
    }
}

/// Friendly result alias :3
pub type Result<T, E = NotifyError> = std::result::Result<T, E>;
