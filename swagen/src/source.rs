//! Input acquisition: local files or documents served over HTTP.

use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};

use eyre::{Context, Result};
use reqwest::header::ACCEPT;

/// How long a remote fetch may take before giving up.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const ACCEPT_DOCUMENT: &str = "application/json, application/yaml;q=0.9, */*;q=0.8";

/// Where the API description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Local(PathBuf),
    Remote(String),
}

impl Source {
    /// Classify an input string; `http://` and `https://` are fetched, anything
    /// else is a path.
    pub fn new(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Self::Remote(input.to_string())
        } else {
            Self::Local(PathBuf::from(input))
        }
    }

    /// Read the document text.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Local(path) => read_local(path),
            Self::Remote(url) => fetch(url),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{}", url),
        }
    }
}

fn read_local(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "reading document");
    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn fetch(url: &str) -> Result<String> {
    tracing::info!(url, "fetching document");

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .wrap_err("failed to build HTTP client")?;

    let body = client
        .get(url)
        .header(ACCEPT, ACCEPT_DOCUMENT)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .wrap_err_with(|| format!("failed to fetch {}", url))?;

    tracing::debug!(url, bytes = body.len(), "fetched document");
    Ok(body)
}
