use crate::error::Result;
use crate::storage::constants::{CONTENT_TYPE_OPTION, DEFAULT_BUFFER_SIZE};
use crate::storage::contract::Config;
use crate::storage::remote::ByteSource;
use crate::wrap_err;
use futures::io::AsyncReadExt;
use opendal::Operator;

/// Trait for uploading content to storage.
pub trait Uploader {
    /// Upload an in-memory payload to `remote_path`.
    ///
    /// # Arguments
    /// * `remote_path` - Destination path in storage
    /// * `contents` - Full object body
    /// * `config` - Write options; `content_type` is honored when supported
    ///
    /// # Returns
    /// * `Result<()>` - Success, or `UploadFailed` wrapping the backend error
    async fn upload_bytes(&self, remote_path: &str, contents: Vec<u8>, config: &Config)
    -> Result<()>;

    /// Upload a byte stream to `remote_path`, chunk by chunk.
    async fn upload_stream(
        &self,
        remote_path: &str,
        contents: ByteSource,
        config: &Config,
    ) -> Result<()>;
}

/// Implementation of Uploader for OpenDAL Operator.
pub struct OpenDalUploader {
    operator: Operator,
}

impl OpenDalUploader {
    /// Create a new uploader with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }

    /// Content type to send along, if the caller set one and the backend takes it.
    fn content_type<'a>(&self, config: &'a Config) -> Option<&'a str> {
        let requested = config.get(CONTENT_TYPE_OPTION)?;
        if self
            .operator
            .info()
            .full_capability()
            .write_with_content_type
        {
            Some(requested)
        } else {
            log::debug!("backend ignores content_type, dropping {requested}");
            None
        }
    }

    async fn write_all(&self, remote_path: &str, contents: Vec<u8>, config: &Config) -> Result<()> {
        match self.content_type(config) {
            Some(content_type) => {
                self.operator
                    .write_with(remote_path, contents)
                    .content_type(content_type)
                    .await?;
            }
            None => {
                self.operator.write(remote_path, contents).await?;
            }
        }
        Ok(())
    }

    /// Upload a stream with a fixed-size buffer.
    async fn write_streaming(
        &self,
        remote_path: &str,
        mut contents: ByteSource,
        config: &Config,
    ) -> Result<()> {
        let mut writer = match self.content_type(config) {
            Some(content_type) => {
                self.operator
                    .writer_with(remote_path)
                    .content_type(content_type)
                    .await?
            }
            None => self.operator.writer(remote_path).await?,
        };

        let mut buffer = vec![0u8; DEFAULT_BUFFER_SIZE];
        let mut total_bytes = 0u64;
        loop {
            let bytes_read = contents.read(&mut buffer).await?;
            if bytes_read == 0 {
                break;
            }
            writer.write(buffer[..bytes_read].to_vec()).await?;
            total_bytes += bytes_read as u64;
        }
        writer.close().await?;

        log::debug!("streamed {total_bytes} bytes to {remote_path}");
        Ok(())
    }
}

impl Uploader for OpenDalUploader {
    async fn upload_bytes(
        &self,
        remote_path: &str,
        contents: Vec<u8>,
        config: &Config,
    ) -> Result<()> {
        wrap_err!(
            self.write_all(remote_path, contents, config).await,
            UploadFailed {
                path: remote_path.to_string()
            }
        )
    }

    async fn upload_stream(
        &self,
        remote_path: &str,
        contents: ByteSource,
        config: &Config,
    ) -> Result<()> {
        wrap_err!(
            self.write_streaming(remote_path, contents, config).await,
            UploadFailed {
                path: remote_path.to_string()
            }
        )
    }
}
