//! Package index client.
//!
//! Speaks the JSON API of a PyPI-compatible index (`<base>/<name>/json`).
//! Every URL is fetched at most once per client; later requests are served
//! from the in-memory cache, which lives as long as the client does.

use std::collections::HashMap;

use anyhow::{Context, Result};
use url::Url;

use crate::core::errors::MatrixError;
use crate::core::release::IndexDocument;

/// Retrieves the body of a URL.
pub trait Fetch {
    fn fetch(&mut self, url: &Url) -> Result<String, MatrixError>;
}

/// Fetcher for `http(s)://` and `file://` URLs.
pub struct UrlFetcher {
    client: reqwest::blocking::Client,
}

impl UrlFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("pymatrix/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to create HTTP client")?;
        Ok(UrlFetcher { client })
    }

    fn fetch_file(&self, url: &Url) -> Result<String, MatrixError> {
        let path = url.to_file_path().map_err(|()| MatrixError::Fetch {
            url: url.to_string(),
            message: "not a local file path".to_string(),
        })?;

        std::fs::read_to_string(&path).map_err(|e| MatrixError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn fetch_http(&self, url: &Url) -> Result<String, MatrixError> {
        let fetch_error = |message: String| MatrixError::Fetch {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| fetch_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_error(format!("HTTP {}", response.status())));
        }

        response.text().map_err(|e| fetch_error(e.to_string()))
    }
}

impl Fetch for UrlFetcher {
    fn fetch(&mut self, url: &Url) -> Result<String, MatrixError> {
        match url.scheme() {
            "file" => self.fetch_file(url),
            "http" | "https" => self.fetch_http(url),
            scheme => Err(MatrixError::Fetch {
                url: url.to_string(),
                message: format!("unsupported URL scheme `{scheme}`"),
            }),
        }
    }
}

/// Memoizing client for one package index.
pub struct IndexClient<F: Fetch = UrlFetcher> {
    base: Url,
    fetcher: F,
    cache: HashMap<Url, serde_json::Value>,
}

impl IndexClient<UrlFetcher> {
    /// Create a client for the index at `index_url` using the network.
    pub fn new(index_url: &str) -> Result<Self> {
        IndexClient::with_fetcher(index_url, UrlFetcher::new()?)
    }
}

impl<F: Fetch> IndexClient<F> {
    pub fn with_fetcher(index_url: &str, fetcher: F) -> Result<Self> {
        let mut base =
            Url::parse(index_url).with_context(|| format!("invalid index URL: {index_url}"))?;

        // Url::join replaces the last segment unless the base ends in `/`
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(IndexClient {
            base,
            fetcher,
            cache: HashMap::new(),
        })
    }

    /// JSON API URL for a project.
    pub fn project_url(&self, name: &str) -> Result<Url> {
        self.base
            .join(&format!("{name}/json"))
            .with_context(|| format!("invalid project name for index URL: {name}"))
    }

    /// Fetch and parse a JSON document, at most once per URL.
    pub fn fetch_json(&mut self, url: &Url) -> Result<&serde_json::Value> {
        if !self.cache.contains_key(url) {
            tracing::info!("Fetching {}", url);
            let body = self.fetcher.fetch(url)?;
            let value: serde_json::Value = serde_json::from_str(&body)
                .with_context(|| format!("invalid JSON from {url}"))?;
            self.cache.insert(url.clone(), value);
        } else {
            tracing::debug!("Using cached response for {}", url);
        }

        Ok(&self.cache[url])
    }

    /// Fetch the index document for a project.
    pub fn project(&mut self, name: &str) -> Result<IndexDocument> {
        let url = self.project_url(name)?;
        let value = self.fetch_json(&url)?;
        IndexDocument::from_value(value).with_context(|| format!("failed to read index data for `{name}`"))
    }

    /// Number of distinct URLs fetched so far.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
