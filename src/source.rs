//! Where content documents come from.

use std::{collections::HashMap,
          fs,
          io::ErrorKind,
          path::PathBuf,
          sync::Mutex};

use reqwest::blocking::Client;

use crate::error::LoadError;

pub trait ContentSource: Send + Sync {
    /// Retrieve the resource at `path`, which is relative
    /// (e.g. `content/home.json`) and may carry a query string.
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError>;

    /// For log messages.
    fn describe(&self) -> String;
}

fn strip_query(path: &str) -> &str {
    match path.find('?') {
        Some(i) => &path[..i],
        None => path
    }
}

/// Split a relative path into segments, resolving `.` and empty
/// segments; returns None if `..` would leave the base directory or
/// the path is absolute.
fn canonicalize_path(path: &str) -> Option<Vec<&str>> {
    if path.starts_with('/') {
        return None
    }
    let mut out = Vec::new();
    for segment in path.split('/') {
        match segment {
            "." | "" => (),
            ".." =>
                if out.pop().is_none() {
                    return None
                },
            _ => out.push(segment)
        }
    }
    Some(out)
}

// ------------------------------------------------------------------
/// Read documents from the local file system
#[derive(Debug)]
pub struct DirSource {
    /// Directory that holds the `content/` directory.
    basepath: PathBuf,
}

impl DirSource {
    pub fn new(basepath: impl Into<PathBuf>) -> DirSource {
        DirSource {
            basepath: basepath.into()
        }
    }
}

impl ContentSource for DirSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let relpath = strip_query(path);
        let segments = canonicalize_path(relpath)
            .filter(|segments| !segments.is_empty())
            .ok_or_else(|| LoadError::InvalidPath(path.into()))?;
        let mut fspath = self.basepath.clone();
        fspath.extend(segments);
        match fs::read(&fspath) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(LoadError::not_found(relpath)),
            Err(source) => Err(LoadError::Io {
                path: fspath.to_string_lossy().into_owned(),
                source
            })
        }
    }

    fn describe(&self) -> String {
        format!("directory {:?}", self.basepath.to_string_lossy())
    }
}

// ------------------------------------------------------------------
/// Fetch documents from a web server
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> HttpSource {
        HttpSource {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

impl ContentSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let url = self.url_for(path);
        let http_err = |e: reqwest::Error| LoadError::Http {
            url: url.clone(),
            message: e.to_string()
        };
        let response = self.client.get(&url).send().map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                path: strip_query(path).into(),
                status: status.as_u16()
            })
        }
        Ok(response.bytes().map_err(http_err)?.to_vec())
    }

    fn describe(&self) -> String {
        format!("web server {}", self.base_url)
    }
}

// ------------------------------------------------------------------
/// Documents held in memory; records every path requested.
#[derive(Debug, Default)]
pub struct StaticSource {
    files: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// All paths passed to `fetch` so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("never poisoned").clone()
    }
}

impl ContentSource for StaticSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        self.requests.lock().expect("never poisoned").push(path.into());
        let relpath = strip_query(path);
        self.files.get(relpath).cloned().ok_or_else(|| LoadError::not_found(relpath))
    }

    fn describe(&self) -> String {
        format!("{} in-memory documents", self.files.len())
    }
}

// A shared source can be handed to a loader while the caller keeps
// looking at it (e.g. `StaticSource::requests`).
impl<S: ContentSource + ?Sized> ContentSource for std::sync::Arc<S> {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        (**self).fetch(path)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
