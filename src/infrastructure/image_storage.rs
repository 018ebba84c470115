use std::fs;
use std::path::PathBuf;

use log::error;

use crate::domain::errors::DomainError;
use crate::domain::ports::ImageStorage;

/// Keeps uploads in a local directory that a static file host serves under
/// `public_base`.
pub struct FsImageStorage {
    root: PathBuf,
    public_base: String,
}

impl FsImageStorage {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into(),
        }
    }
}

impl ImageStorage for FsImageStorage {
    fn store(&self, object_name: &str, bytes: &[u8]) -> Result<String, DomainError> {
        if object_name.is_empty()
            || object_name.contains(['/', '\\'])
            || object_name.starts_with('.')
        {
            return Err(DomainError::InvalidInput(format!(
                "invalid object name '{object_name}'"
            )));
        }

        let path = self.root.join(object_name);
        fs::create_dir_all(&self.root)
            .and_then(|_| fs::write(&path, bytes))
            .map_err(|e| {
                error!("Failed to write upload {}: {e}", path.display());
                DomainError::Internal(e.to_string())
            })?;

        Ok(format!(
            "{}/{object_name}",
            self.public_base.trim_end_matches('/')
        ))
    }
}
