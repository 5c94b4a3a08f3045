//! Settings for the viewer binary, from environment variables.

use std::sync::Arc;

use anyhow::{Result, bail};

use crate::{cache::CachePolicy,
            source::{ContentSource, DirSource, HttpSource},
            util::{getenv, getenv_flag, getenv_or}};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Directory holding `content/*.json` (`SITEDIR`)
    pub sitedir: String,
    /// If set, documents are fetched from this base URL instead of
    /// `sitedir` (`CONTENT_URL`)
    pub content_url: Option<String>,
    /// `LISTEN_HTTP`
    pub listen_addr: String,
    /// `IS_DEV` turns on cache bypass
    pub cache_policy: CachePolicy,
    /// `SITE_TITLE`, shown in the browser's title bar
    pub site_title: String,
}

impl ViewerConfig {
    pub fn from_env() -> Result<Self> {
        let content_url = getenv("CONTENT_URL")?;
        if let Some(url) = &content_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!("CONTENT_URL must be an http or https URL, got {url:?}")
            }
        }
        Ok(ViewerConfig {
            sitedir: getenv_or("SITEDIR", ".")?,
            content_url,
            listen_addr: getenv_or("LISTEN_HTTP", "127.0.0.1:3000")?,
            cache_policy: CachePolicy { bypass: getenv_flag("IS_DEV")? },
            site_title: getenv_or("SITE_TITLE", "Portfolio")?,
        })
    }

    /// Shared by the workbenches of all sessions.
    pub fn content_source(&self) -> Arc<dyn ContentSource> {
        if let Some(url) = &self.content_url {
            Arc::new(HttpSource::new(url.as_str()))
        } else {
            Arc::new(DirSource::new(&self.sitedir))
        }
    }
}
