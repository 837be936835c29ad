//! Static resource fetching (layout fragments, locale dictionaries)

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::path::{Component, Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Fetch a named site resource and return its body
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn fetch(&self, path: &str) -> AppResult<String>;
}

/// Reads resources from a site directory on disk
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(AppError::fetch(path, "path escapes the site root"));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ResourceFetcher for FsFetcher {
    async fn fetch(&self, path: &str) -> AppResult<String> {
        let full = self.resolve(path)?;
        tracing::debug!("Reading {}", full.display());
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|e| AppError::fetch(path, e))
    }
}

/// Fetches resources from a running site over HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: &str) -> AppResult<Self> {
        let mut base = Url::parse(base).map_err(|e| AppError::fetch(base, e))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> AppResult<String> {
        let url = self
            .base
            .join(path.trim_start_matches('/'))
            .map_err(|e| AppError::fetch(path, e))?;

        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fetch(path, e))?;

        if !response.status().is_success() {
            return Err(AppError::fetch(path, response.status()));
        }

        response.text().await.map_err(|e| AppError::fetch(path, e))
    }
}
