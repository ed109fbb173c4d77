use crate::error::Result;
use crate::storage::remote::ReadStream;
use opendal::Operator;

/// Trait for reading object content.
pub trait FileReader {
    /// Read the whole object into memory.
    async fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// Open the object as a seekable stream over its first `size` bytes.
    async fn read_stream(&self, path: &str, size: u64) -> Result<ReadStream>;
}

/// OpenDAL implementation of file reading
pub struct OpenDalFileReader {
    operator: Operator,
}

impl OpenDalFileReader {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl FileReader for OpenDalFileReader {
    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        let content = self.operator.read(path).await?;
        Ok(content.to_vec())
    }

    async fn read_stream(&self, path: &str, size: u64) -> Result<ReadStream> {
        let reader = self.operator.reader(path).await?;
        let stream = reader.into_futures_async_read(0..size).await?;
        Ok(Box::pin(stream))
    }
}
