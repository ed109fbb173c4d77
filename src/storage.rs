use async_trait::async_trait;
use futures::io::{AsyncSeekExt, SeekFrom};

use crate::error::{Error, MetadataKind, MoveStage, Result};
use crate::wrap_err;

pub mod auth;
pub mod constants;
pub mod container;
pub mod contract;
mod operations;
pub mod remote;
pub(crate) mod utils;

use self::constants::DIRECTORY_CONTENT_TYPE;
use self::container::OpenDalContainer;
use self::contract::{Config, EntryType, FileAttributes, FilesystemAdapter, NormalizedEntry};
use self::remote::{ByteSource, FileRecord, ReadStream, RemoteContainer, RemoteFile, Upload};
use self::utils::time::timestamp_or_default;

pub use self::utils::size::format_size;

/// The adapter over a Selectel container reached through OpenDAL.
pub type SelectelFs = SelectelAdapter<OpenDalContainer>;

/// What a write does when the upload itself fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadFailurePolicy {
    /// Report the failure as `WriteFailed`.
    #[default]
    Propagate,
    /// Log the upload failure and report success anyway. Only upload-layer
    /// failures are swallowed; anything else still fails the write.
    BestEffort,
}

/// Filesystem adapter over a remote storage container.
///
/// Every operation is one call (two for moves) against the container, with the
/// container's errors wrapped into an operation-specific error.
#[derive(Clone)]
pub struct SelectelAdapter<C> {
    container: C,
    upload_policy: UploadFailurePolicy,
}

impl<C: RemoteContainer> SelectelAdapter<C> {
    pub fn new(container: C) -> Self {
        Self {
            container,
            upload_policy: UploadFailurePolicy::default(),
        }
    }

    pub fn with_upload_policy(mut self, policy: UploadFailurePolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn upload_policy(&self) -> UploadFailurePolicy {
        self.upload_policy
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// First entry of the listing at `path`, if any.
    pub async fn get_metadata(&self, path: &str) -> Result<Option<NormalizedEntry>> {
        let entries = self.list_contents(path, false).await?;
        Ok(entries.into_iter().next())
    }

    async fn get_file(&self, path: &str) -> Result<C::File> {
        self.container.find(path).await
    }

    async fn write_to_container(&self, path: &str, payload: Upload, config: &Config) -> Result<()> {
        log::debug!("write path={} payload={}", path, payload.kind());
        let uploaded = match payload {
            Upload::Bytes(contents) => {
                self.container
                    .upload_from_bytes(path, contents, config)
                    .await
            }
            Upload::Stream(contents) => {
                self.container
                    .upload_from_stream(path, contents, config)
                    .await
            }
        };

        match uploaded {
            Ok(()) => {}
            Err(e @ Error::UploadFailed { .. })
                if self.upload_policy == UploadFailurePolicy::BestEffort =>
            {
                log::warn!("ignoring failed upload to {path}: {e}");
            }
            Err(e) => return Err(e),
        }

        match self.get_metadata(path).await {
            Ok(Some(entry)) => log::debug!(
                "post-write metadata path={} size={} mimetype={}",
                entry.path,
                entry.size,
                entry.mimetype
            ),
            Ok(None) => log::debug!("post-write metadata path={path} not listed yet"),
            Err(e) => log::warn!("post-write metadata lookup for {path} failed: {e}"),
        }
        Ok(())
    }

    async fn existence_check(&self, path: &str) -> Result<bool> {
        wrap_err!(
            self.container.exists(path).await,
            ExistenceCheckFailed {
                path: path.to_string()
            }
        )
    }
}

/// Shape one raw listing record for consumers.
pub fn normalize_record(record: FileRecord) -> NormalizedEntry {
    let entry_type = if record.content_type == DIRECTORY_CONTENT_TYPE {
        EntryType::Dir
    } else {
        EntryType::File
    };

    NormalizedEntry {
        entry_type,
        timestamp: timestamp_or_default(&record.last_modified),
        path: record.name,
        size: record.bytes,
        mimetype: record.content_type,
    }
}

#[async_trait]
impl<C: RemoteContainer> FilesystemAdapter for SelectelAdapter<C> {
    async fn file_exists(&self, path: &str) -> Result<bool> {
        log::debug!("file_exists path={path}");
        self.existence_check(path).await
    }

    /// Same check as `file_exists`; the container has no separate directory check.
    async fn directory_exists(&self, path: &str) -> Result<bool> {
        log::debug!("directory_exists path={path}");
        self.existence_check(path).await
    }

    async fn write(&self, path: &str, contents: Vec<u8>, config: &Config) -> Result<()> {
        wrap_err!(
            self.write_to_container(path, Upload::Bytes(contents), config)
                .await,
            WriteFailed {
                path: path.to_string()
            }
        )
    }

    async fn write_stream(
        &self,
        path: &str,
        contents: ByteSource,
        config: &Config,
    ) -> Result<()> {
        wrap_err!(
            self.write_to_container(path, Upload::Stream(contents), config)
                .await,
            WriteFailed {
                path: path.to_string()
            }
        )
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        log::debug!("read path={path}");
        let read = async { self.get_file(path).await?.read().await };
        wrap_err!(
            read.await,
            ReadFailed {
                path: path.to_string()
            }
        )
    }

    async fn read_stream(&self, path: &str) -> Result<ReadStream> {
        log::debug!("read_stream path={path}");
        let open = async {
            let mut stream = self.get_file(path).await?.read_stream().await?;
            stream.seek(SeekFrom::Start(0)).await?;
            Ok::<_, Error>(stream)
        };
        wrap_err!(
            open.await,
            ReadFailed {
                path: path.to_string()
            }
        )
    }

    async fn delete(&self, path: &str) -> Result<()> {
        log::debug!("delete path={path}");
        let delete = async { self.get_file(path).await?.delete().await };
        wrap_err!(
            delete.await,
            DeleteFailed {
                path: path.to_string()
            }
        )
    }

    async fn delete_directory(&self, path: &str) -> Result<()> {
        log::debug!("delete_directory path={path}");
        wrap_err!(
            self.container.delete_dir(path).await,
            DeleteDirectoryFailed {
                path: path.to_string()
            }
        )
    }

    async fn create_directory(&self, path: &str, config: &Config) -> Result<()> {
        log::debug!(
            "create_directory path={} options={}",
            path,
            !config.is_empty()
        );
        wrap_err!(
            self.container.create_dir(path).await,
            DirectoryCreationFailed {
                path: path.to_string()
            }
        )
    }

    async fn set_visibility(&self, path: &str, visibility: &str) -> Result<()> {
        Err(Error::SetVisibilityFailed {
            path: path.to_string(),
            visibility: visibility.to_string(),
            source: Box::new(Error::Unsupported {
                feature: "visibility".to_string(),
            }),
        })
    }

    async fn visibility(&self, path: &str) -> Result<FileAttributes> {
        Err(Error::MetadataRetrievalFailed {
            path: path.to_string(),
            kind: MetadataKind::Visibility,
            source: Box::new(Error::Unsupported {
                feature: "visibility".to_string(),
            }),
        })
    }

    async fn mime_type(&self, path: &str) -> Result<FileAttributes> {
        log::debug!("mime_type path={path}");
        let file = wrap_err!(
            self.get_file(path).await,
            MetadataRetrievalFailed {
                path: path.to_string(),
                kind: MetadataKind::MimeType
            }
        )?;
        Ok(FileAttributes::new(path).with_mime_type(file.content_type()))
    }

    async fn last_modified(&self, path: &str) -> Result<FileAttributes> {
        log::debug!("last_modified path={path}");
        let file = wrap_err!(
            self.get_file(path).await,
            MetadataRetrievalFailed {
                path: path.to_string(),
                kind: MetadataKind::LastModified
            }
        )?;
        let timestamp = timestamp_or_default(file.last_modified());
        Ok(FileAttributes::new(path).with_last_modified(timestamp))
    }

    async fn file_size(&self, path: &str) -> Result<FileAttributes> {
        log::debug!("file_size path={path}");
        let file = wrap_err!(
            self.get_file(path).await,
            MetadataRetrievalFailed {
                path: path.to_string(),
                kind: MetadataKind::FileSize
            }
        )?;
        Ok(FileAttributes::new(path).with_file_size(file.size()))
    }

    /// `deep` is accepted for the contract but the container always answers
    /// with its own listing depth.
    async fn list_contents(&self, path: &str, deep: bool) -> Result<Vec<NormalizedEntry>> {
        log::debug!("list_contents path={path} deep={deep}");
        let records = self.container.files_with_prefix(path).await?;

        Ok(records
            .into_iter()
            .filter(|record| {
                if record.name.is_empty() {
                    log::debug!("skipping listing record without a name");
                }
                !record.name.is_empty()
            })
            .map(normalize_record)
            .collect())
    }

    /// Copy, then delete the source. Not atomic: when the delete step fails the
    /// error reports [`MoveStage::Delete`] and both paths exist.
    async fn move_file(&self, source: &str, destination: &str, config: &Config) -> Result<()> {
        log::debug!("move_file source={source} destination={destination}");
        wrap_err!(
            self.copy(source, destination, config).await,
            MoveFailed {
                src_path: source.to_string(),
                dest_path: destination.to_string(),
                stage: MoveStage::Copy
            }
        )?;
        wrap_err!(
            self.delete(source).await,
            MoveFailed {
                src_path: source.to_string(),
                dest_path: destination.to_string(),
                stage: MoveStage::Delete
            }
        )
    }

    async fn copy(&self, source: &str, destination: &str, _config: &Config) -> Result<()> {
        log::debug!("copy source={source} destination={destination}");
        let copy = async {
            self.get_file(source)
                .await?
                .copy_to(destination)
                .await
        };
        wrap_err!(
            copy.await,
            CopyFailed {
                src_path: source.to_string(),
                dest_path: destination.to_string()
            }
        )?;
        Ok(())
    }

    fn get_url(&self, path: &str) -> String {
        self.container.url(path)
    }
}
