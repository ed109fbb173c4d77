// Directory creation operation trait and implementation
use crate::error::Result;
use crate::storage::utils::path::normalize_directory_path;
use opendal::Operator;

/// Trait for creating directories in storage.
pub trait Mkdirer {
    /// Create a directory marker at `path`. Existing directories are left alone.
    async fn mkdir(&self, path: &str) -> Result<()>;
}

/// Implementation of Mkdirer for OpenDAL Operator.
pub struct OpenDalMkdirer {
    operator: Operator,
}

impl OpenDalMkdirer {
    /// Create a new mkdirer with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Mkdirer for OpenDalMkdirer {
    async fn mkdir(&self, path: &str) -> Result<()> {
        let normalized_path = normalize_directory_path(path);
        if normalized_path.is_empty() {
            log::debug!("container root always exists, nothing to create");
            return Ok(());
        }

        match self.operator.create_dir(&normalized_path).await {
            Ok(_) => {
                log::debug!("created directory {normalized_path}");
                Ok(())
            }
            // Handle common cases where directory might already exist
            Err(e) if e.to_string().contains("already exists") => {
                log::debug!("directory already exists: {normalized_path}");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
