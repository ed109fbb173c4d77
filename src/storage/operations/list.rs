use crate::error::Result;
use crate::storage::constants::{DEFAULT_CONTENT_TYPE, DIRECTORY_CONTENT_TYPE};
use crate::storage::remote::FileRecord;
use futures::stream::TryStreamExt;
use opendal::{Metadata, Operator};

/// Trait for listing objects under a prefix in object storage.
pub trait Lister {
    /// List every object below `prefix`.
    ///
    /// # Arguments
    /// * `prefix` - Name prefix (a directory path or the empty root)
    ///
    /// # Returns
    /// * `Result<Vec<FileRecord>>` - Raw records in listing order
    async fn list(&self, prefix: &str) -> Result<Vec<FileRecord>>;
}

/// Implementation of Lister for OpenDAL Operator.
pub struct OpenDalLister {
    operator: Operator,
}

impl OpenDalLister {
    /// Create a new lister with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }

    /// Whether a listed file carries the attributes a record needs. Backends
    /// that report object details in listings (Swift among them) always fill in
    /// `last_modified` together with the length. Others only hand out the mode,
    /// and those files need a `stat` round trip.
    fn has_full_metadata(meta: &Metadata) -> bool {
        meta.is_dir() || meta.last_modified().is_some()
    }

    /// Convert one OpenDAL entry and its metadata into a container listing record.
    fn record_from_meta(path: &str, meta: &Metadata) -> FileRecord {
        let is_dir = meta.mode().is_dir();
        let content_type = if is_dir {
            DIRECTORY_CONTENT_TYPE.to_string()
        } else {
            meta.content_type().unwrap_or(DEFAULT_CONTENT_TYPE).to_string()
        };

        FileRecord {
            name: path.trim_end_matches('/').to_string(),
            content_type,
            bytes: if is_dir { 0 } else { meta.content_length() },
            last_modified: meta
                .last_modified()
                .map(|t| t.to_string())
                .unwrap_or_default(),
        }
    }
}

impl Lister for OpenDalLister {
    async fn list(&self, prefix: &str) -> Result<Vec<FileRecord>> {
        let listed_root = prefix.trim_matches('/');
        let mut lister = self.operator.lister_with(prefix).recursive(true).await?;

        let mut records = Vec::new();
        while let Some(entry) = lister.try_next().await? {
            let is_dir = entry.metadata().mode().is_dir();
            // Listings of a directory include the directory itself.
            if is_dir && entry.path().trim_matches('/') == listed_root {
                continue;
            }

            let record = if Self::has_full_metadata(entry.metadata()) {
                Self::record_from_meta(entry.path(), entry.metadata())
            } else {
                match self.operator.stat(entry.path()).await {
                    Ok(meta) => Self::record_from_meta(entry.path(), &meta),
                    Err(e) if e.kind() == opendal::ErrorKind::NotFound => {
                        log::debug!("{} vanished while listing", entry.path());
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                }
            };
            records.push(record);
        }

        log::debug!("listed {} record(s) under prefix={prefix}", records.len());
        Ok(records)
    }
}
