// Delete operation trait and implementation
use crate::error::Result;
use crate::storage::utils::path::ensure_trailing_slash;
use opendal::Operator;

/// Trait for deleting objects and directory trees from storage.
pub trait Deleter {
    /// Delete a single object.
    async fn delete_file(&self, path: &str) -> Result<()>;

    /// Delete a directory marker together with everything below it.
    async fn delete_dir(&self, path: &str) -> Result<()>;
}

/// Implementation of Deleter for OpenDAL Operator.
pub struct OpenDalDeleter {
    operator: Operator,
}

impl OpenDalDeleter {
    /// Create a new deleter with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Deleter for OpenDalDeleter {
    async fn delete_file(&self, path: &str) -> Result<()> {
        self.operator.delete(path).await?;
        log::debug!("deleted {path}");
        Ok(())
    }

    async fn delete_dir(&self, path: &str) -> Result<()> {
        let dir = ensure_trailing_slash(path.trim_start_matches('/'));
        self.operator.remove_all(&dir).await?;
        log::debug!("deleted directory tree {dir}");
        Ok(())
    }
}
