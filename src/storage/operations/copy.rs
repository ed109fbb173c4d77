use crate::error::Result;
use crate::storage::constants::DEFAULT_CHUNK_SIZE;
use opendal::Operator;

/// Trait for copying a single object within storage.
pub trait Copier {
    /// Copy one object to another location in the same container.
    ///
    /// # Arguments
    /// * `src_path` - Source object path
    /// * `dest_path` - Destination object path (overwritten if present)
    ///
    /// # Returns
    /// * `Result<()>` - Success or detailed error information
    async fn copy(&self, src_path: &str, dest_path: &str) -> Result<()>;
}

/// Implementation of Copier for OpenDAL Operator.
pub struct OpenDalCopier {
    operator: Operator,
}

impl OpenDalCopier {
    /// Create a new copier with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }

    /// Stream copy a single file in ranged chunks, for backends without server-side copy.
    async fn stream_copy(&self, src_path: &str, dest_path: &str) -> opendal::Result<u64> {
        let metadata = self.operator.stat(src_path).await?;
        let file_size = metadata.content_length();

        let mut writer = self.operator.writer(dest_path).await?;
        let mut total_bytes = 0u64;
        let mut offset = 0u64;

        loop {
            if offset >= file_size {
                break;
            }

            let chunk_size = std::cmp::min(DEFAULT_CHUNK_SIZE as u64, file_size - offset);

            let data = self
                .operator
                .read_with(src_path)
                .range(offset..offset + chunk_size)
                .await?;
            let data_len = data.len();
            if data_len == 0 {
                break;
            }

            writer.write(data).await?;
            total_bytes += data_len as u64;
            offset += data_len as u64;
        }

        writer.close().await?;
        Ok(total_bytes)
    }
}

impl Copier for OpenDalCopier {
    async fn copy(&self, src_path: &str, dest_path: &str) -> Result<()> {
        if self.operator.info().full_capability().copy {
            self.operator.copy(src_path, dest_path).await?;
            log::debug!("server-side copy {src_path} -> {dest_path}");
        } else {
            let total_bytes = self.stream_copy(src_path, dest_path).await?;
            log::debug!("stream copy {src_path} -> {dest_path} ({total_bytes} bytes)");
        }
        Ok(())
    }
}
