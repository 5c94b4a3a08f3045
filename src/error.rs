use kstring::KString;

/// Failure of a single content load. The variants are only kept apart
/// for logging; the user sees one "Error loading content" message
/// for all of them.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Failed to load content: reading {path:?}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to load content: fetching {url}: {message}")]
    Http {
        url: String,
        message: String,
    },
    #[error("Failed to load content (status {status} for {path})")]
    Status {
        path: String,
        status: u16,
    },
    #[error("invalid content path {0:?}")]
    InvalidPath(String),
    #[error("malformed JSON in {name}.json: {source}")]
    Parse {
        name: KString,
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn not_found(path: &str) -> Self {
        LoadError::Status { path: path.into(), status: 404 }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            LoadError::Status { status, .. } => *status == 404,
            LoadError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false
        }
    }
}
