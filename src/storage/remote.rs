//! What the adapter needs from a cloud storage container.

use async_trait::async_trait;
use futures::io::{AsyncRead, AsyncSeek};
use std::pin::Pin;

use crate::error::Result;
use crate::storage::contract::Config;

/// Readable and seekable byte stream.
pub trait SeekableRead: AsyncRead + AsyncSeek + Send {}

impl<T: AsyncRead + AsyncSeek + Send + ?Sized> SeekableRead for T {}

/// Stream handed out by reads.
pub type ReadStream = Pin<Box<dyn SeekableRead>>;

/// Caller-provided content for streamed uploads.
pub type ByteSource = Box<dyn AsyncRead + Send + Unpin>;

/// A raw object as reported by the container listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub content_type: String,
    pub bytes: u64,
    pub last_modified: String,
}

/// Upload payload, chosen explicitly by the caller.
pub enum Upload {
    Bytes(Vec<u8>),
    Stream(ByteSource),
}

impl Upload {
    pub fn kind(&self) -> &'static str {
        match self {
            Upload::Bytes(_) => "bytes",
            Upload::Stream(_) => "stream",
        }
    }
}

/// Handle to one object. Attribute getters report what was fetched when the
/// handle was looked up.
#[async_trait]
pub trait RemoteFile: Send + Sync {
    fn path(&self) -> &str;

    fn content_type(&self) -> &str;

    fn size(&self) -> u64;

    fn last_modified(&self) -> &str;

    async fn read(&self) -> Result<Vec<u8>>;

    async fn read_stream(&self) -> Result<ReadStream>;

    /// Copy to `destination`, returning the destination path.
    async fn copy_to(&self, destination: &str) -> Result<String>;

    async fn delete(&self) -> Result<()>;
}

/// A storage container: a flat namespace of objects plus directory markers.
#[async_trait]
pub trait RemoteContainer: Send + Sync {
    type File: RemoteFile;

    /// Every object whose name starts with `prefix`, as the backend lists them.
    async fn files_with_prefix(&self, prefix: &str) -> Result<Vec<FileRecord>>;

    /// Look up one object. Fails with `FileNotFound` when absent.
    async fn find(&self, path: &str) -> Result<Self::File>;

    async fn exists(&self, path: &str) -> Result<bool>;

    /// Upload failures are reported as `UploadFailed`.
    async fn upload_from_bytes(&self, path: &str, contents: Vec<u8>, config: &Config)
    -> Result<()>;

    /// Upload failures are reported as `UploadFailed`.
    async fn upload_from_stream(
        &self,
        path: &str,
        contents: ByteSource,
        config: &Config,
    ) -> Result<()>;

    async fn delete_dir(&self, path: &str) -> Result<()>;

    async fn create_dir(&self, path: &str) -> Result<()>;

    fn url(&self, path: &str) -> String;
}
