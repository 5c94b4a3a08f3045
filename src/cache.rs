//! Loading content documents, with a per-session cache.

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use kstring::KString;

use crate::{document::PageDocument,
            error::LoadError,
            page::PageName,
            source::ContentSource};

/// How the loader uses its cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachePolicy {
    /// Always fetch, and add a cache-busting query parameter to the
    /// request (for editing content while viewing it). Successful
    /// fetches are still stored.
    pub bypass: bool,
}

/// Documents by page name. Entries are never evicted.
#[derive(Debug, Default)]
pub struct ContentCache {
    entries: HashMap<PageName, Arc<PageDocument>>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self, name: &PageName) -> Option<Arc<PageDocument>> {
        self.entries.get(name).cloned()
    }
    pub fn contains(&self, name: &PageName) -> bool {
        self.entries.contains_key(name)
    }
    pub fn insert(&mut self, name: PageName, doc: Arc<PageDocument>) {
        self.entries.insert(name, doc);
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct ContentLoader {
    source: Box<dyn ContentSource>,
    policy: CachePolicy,
    cache: ContentCache,
}

impl ContentLoader {
    pub fn new(source: Box<dyn ContentSource>, policy: CachePolicy) -> Self {
        ContentLoader {
            source,
            policy,
            cache: ContentCache::new(),
        }
    }

    pub fn cache(&self) -> &ContentCache { &self.cache }
    pub fn source(&self) -> &dyn ContentSource { &*self.source }

    /// The path requested from the source for `name`.
    pub fn request_path(&self, name: &PageName) -> String {
        if self.policy.bypass {
            format!("{}?t={}", name.resource_path(), Utc::now().timestamp_millis())
        } else {
            name.resource_path()
        }
    }

    /// Get the document for `name`, from the cache if the policy
    /// allows and it's there, otherwise from the source. On failure
    /// the cache is left as it was. Names that aren't plain file stems
    /// are refused without asking the source.
    pub fn load(&mut self, name: &PageName) -> Result<Arc<PageDocument>, LoadError> {
        if !name.is_file_stem() {
            return Err(LoadError::InvalidPath(name.resource_path()))
        }
        if !self.policy.bypass {
            if let Some(doc) = self.cache.get(name) {
                return Ok(doc)
            }
        }
        let path = self.request_path(name);
        let bytes = self.source.fetch(&path)?;
        let doc = Arc::new(PageDocument::from_slice(name, &bytes).map_err(
            |source| LoadError::Parse { name: KString::from_ref(name.as_str()), source })?);
        self.cache.insert(name.clone(), doc.clone());
        Ok(doc)
    }
}
