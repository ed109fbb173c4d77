use async_trait::async_trait;
use opendal::Operator;

use crate::error::Result;
use crate::storage::constants::DEFAULT_CONTENT_TYPE;
use crate::storage::contract::Config;
use crate::storage::operations::cat::OpenDalFileReader;
use crate::storage::operations::copy::OpenDalCopier;
use crate::storage::operations::delete::OpenDalDeleter;
use crate::storage::operations::list::OpenDalLister;
use crate::storage::operations::mkdir::OpenDalMkdirer;
use crate::storage::operations::stat::{ObjectMeta, OpenDalStater};
use crate::storage::operations::upload::OpenDalUploader;
use crate::storage::operations::{
    Copier, Deleter, FileReader, Lister, Mkdirer, Stater, Uploader,
};
use crate::storage::remote::{ByteSource, FileRecord, ReadStream, RemoteContainer, RemoteFile};
use crate::storage::utils::path::join_url;

/// A storage container reached through an OpenDAL operator.
#[derive(Clone)]
pub struct OpenDalContainer {
    operator: Operator,
    base_url: String,
}

impl OpenDalContainer {
    /// Wrap an operator whose root is the container, publishing files under `base_url`.
    pub fn new(operator: Operator, base_url: impl Into<String>) -> Self {
        Self {
            operator,
            base_url: base_url.into(),
        }
    }

    /// Build a container on the Swift API that Selectel cloud storage exposes.
    #[cfg(feature = "swift")]
    pub fn swift(storage_url: &str, container: &str, token: &str) -> Result<Self> {
        let builder = opendal::services::Swift::default()
            .endpoint(storage_url)
            .container(container)
            .token(token);
        let operator = Operator::new(builder)?.finish();
        Ok(Self::new(operator, join_url(storage_url, container)))
    }

    /// Override the public base url (a CDN or custom domain, for example).
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.base_url = url.into();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }
}

#[async_trait]
impl RemoteContainer for OpenDalContainer {
    type File = OpenDalFile;

    async fn files_with_prefix(&self, prefix: &str) -> Result<Vec<FileRecord>> {
        OpenDalLister::new(self.operator.clone()).list(prefix).await
    }

    async fn find(&self, path: &str) -> Result<OpenDalFile> {
        let meta = OpenDalStater::new(self.operator.clone()).stat(path).await?;
        Ok(OpenDalFile {
            operator: self.operator.clone(),
            meta,
        })
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        OpenDalStater::new(self.operator.clone()).exists(path).await
    }

    async fn upload_from_bytes(
        &self,
        path: &str,
        contents: Vec<u8>,
        config: &Config,
    ) -> Result<()> {
        OpenDalUploader::new(self.operator.clone())
            .upload_bytes(path, contents, config)
            .await
    }

    async fn upload_from_stream(
        &self,
        path: &str,
        contents: ByteSource,
        config: &Config,
    ) -> Result<()> {
        OpenDalUploader::new(self.operator.clone())
            .upload_stream(path, contents, config)
            .await
    }

    async fn delete_dir(&self, path: &str) -> Result<()> {
        OpenDalDeleter::new(self.operator.clone())
            .delete_dir(path)
            .await
    }

    async fn create_dir(&self, path: &str) -> Result<()> {
        OpenDalMkdirer::new(self.operator.clone()).mkdir(path).await
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

/// Handle to one object, holding the metadata fetched when it was found.
pub struct OpenDalFile {
    operator: Operator,
    meta: ObjectMeta,
}

#[async_trait]
impl RemoteFile for OpenDalFile {
    fn path(&self) -> &str {
        &self.meta.path
    }

    fn content_type(&self) -> &str {
        self.meta
            .content_type
            .as_deref()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    fn size(&self) -> u64 {
        self.meta.size
    }

    fn last_modified(&self) -> &str {
        self.meta.last_modified.as_deref().unwrap_or_default()
    }

    async fn read(&self) -> Result<Vec<u8>> {
        OpenDalFileReader::new(self.operator.clone())
            .read(&self.meta.path)
            .await
    }

    async fn read_stream(&self) -> Result<ReadStream> {
        OpenDalFileReader::new(self.operator.clone())
            .read_stream(&self.meta.path, self.meta.size)
            .await
    }

    async fn copy_to(&self, destination: &str) -> Result<String> {
        OpenDalCopier::new(self.operator.clone())
            .copy(&self.meta.path, destination)
            .await?;
        Ok(destination.to_string())
    }

    async fn delete(&self) -> Result<()> {
        OpenDalDeleter::new(self.operator.clone())
            .delete_file(&self.meta.path)
            .await
    }
}
