//! The filesystem contract consumers program against.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::storage::remote::{ByteSource, ReadStream};

/// Pass-through options for write-like operations.
///
/// The adapter never interprets these; they are handed to the container as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    options: BTreeMap<String, String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Config {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            options: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
}

/// A listing entry in the consumer-facing shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEntry {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub path: String,
    pub size: u64,
    /// Last modification, unix epoch seconds.
    pub timestamp: i64,
    pub mimetype: String,
}

impl NormalizedEntry {
    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Dir
    }
}

/// Single-attribute answer of a metadata call. Only the requested field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileAttributes {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl FileAttributes {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_file_size(mut self, size: u64) -> Self {
        self.file_size = Some(size);
        self
    }

    pub fn with_last_modified(mut self, timestamp: i64) -> Self {
        self.last_modified = Some(timestamp);
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Generic filesystem operations every storage driver provides.
///
/// Paths are container-relative strings. Each failing call yields exactly one
/// typed error naming the attempted operation and path(s), with the backend's
/// error attached as its source.
#[async_trait]
pub trait FilesystemAdapter: Send + Sync {
    async fn file_exists(&self, path: &str) -> Result<bool>;

    async fn directory_exists(&self, path: &str) -> Result<bool>;

    async fn write(&self, path: &str, contents: Vec<u8>, config: &Config) -> Result<()>;

    async fn write_stream(&self, path: &str, contents: ByteSource, config: &Config)
    -> Result<()>;

    async fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// Open the file as a stream positioned at its first byte. The caller owns
    /// the stream.
    async fn read_stream(&self, path: &str) -> Result<ReadStream>;

    async fn delete(&self, path: &str) -> Result<()>;

    async fn delete_directory(&self, path: &str) -> Result<()>;

    async fn create_directory(&self, path: &str, config: &Config) -> Result<()>;

    async fn set_visibility(&self, path: &str, visibility: &str) -> Result<()>;

    async fn visibility(&self, path: &str) -> Result<FileAttributes>;

    async fn mime_type(&self, path: &str) -> Result<FileAttributes>;

    async fn last_modified(&self, path: &str) -> Result<FileAttributes>;

    async fn file_size(&self, path: &str) -> Result<FileAttributes>;

    async fn list_contents(&self, path: &str, deep: bool) -> Result<Vec<NormalizedEntry>>;

    async fn move_file(&self, source: &str, destination: &str, config: &Config) -> Result<()>;

    async fn copy(&self, source: &str, destination: &str, config: &Config) -> Result<()>;

    /// Public URL of `path`.
    fn get_url(&self, path: &str) -> String;
}
