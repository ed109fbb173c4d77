use crate::error::{Error, Result};
use crate::storage::constants::DIRECTORY_CONTENT_TYPE;
use crate::storage::utils::path::ensure_trailing_slash;
use opendal::{EntryMode, Metadata, Operator};

/// Object metadata captured by a single `stat` round trip.
///
/// - `path`: The object path found, with a trailing slash when a bare name
///   resolved to a directory marker
/// - `size`: Content length in bytes, zero for directories
/// - `last_modified`: Backend timestamp rendered as a string, if available
/// - `content_type`: MIME type if available, `application/directory` for markers
#[derive(Debug, Clone)]
pub struct ObjectMeta {
    pub path: String,
    pub size: u64,
    pub last_modified: Option<String>,
    pub content_type: Option<String>,
}

/// Trait for fetching object metadata from storage.
pub trait Stater {
    /// Fetch metadata for a single object or directory.
    ///
    /// # Arguments
    /// * `path` - Object path to query.
    ///
    /// # Returns
    /// * `Result<ObjectMeta>` - Collected metadata, or `FileNotFound` when neither
    ///   `path` nor the directory marker `path/` exists
    async fn stat(&self, path: &str) -> Result<ObjectMeta>;

    /// Check whether anything lives at `path`, either an object or the
    /// directory marker `path/`.
    async fn exists(&self, path: &str) -> Result<bool>;
}

/// Implementation of `Stater` for OpenDAL `Operator`.
#[derive(Clone)]
pub struct OpenDalStater {
    operator: Operator,
}

impl OpenDalStater {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl OpenDalStater {
    /// The directory marker a bare name may stand for, if it can stand for one.
    fn marker_path(path: &str) -> Option<String> {
        if path.is_empty() || path.ends_with('/') {
            None
        } else {
            Some(ensure_trailing_slash(path))
        }
    }

    /// `stat` that maps NotFound to `None`.
    async fn try_stat(&self, path: &str) -> Result<Option<Metadata>> {
        match self.operator.stat(path).await {
            Ok(meta) => Ok(Some(meta)),
            Err(e) if e.kind() == opendal::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl Stater for OpenDalStater {
    async fn stat(&self, path: &str) -> Result<ObjectMeta> {
        let found = match self.try_stat(path).await? {
            Some(meta) => Some((path.to_string(), meta)),
            None => match Self::marker_path(path) {
                Some(marker) => self.try_stat(&marker).await?.map(|meta| (marker, meta)),
                None => None,
            },
        };

        let Some((resolved, meta)) = found else {
            return Err(Error::FileNotFound {
                path: path.to_string(),
            });
        };

        let (size, content_type) = match meta.mode() {
            EntryMode::DIR => (0, Some(DIRECTORY_CONTENT_TYPE.to_string())),
            _ => (
                meta.content_length(),
                meta.content_type().map(|s| s.to_string()),
            ),
        };

        Ok(ObjectMeta {
            path: resolved,
            size,
            last_modified: meta.last_modified().map(|t| t.to_string()),
            content_type,
        })
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        if self.operator.exists(path).await? {
            return Ok(true);
        }
        match Self::marker_path(path) {
            Some(marker) => Ok(self.operator.exists(&marker).await?),
            None => Ok(false),
        }
    }
}
