use chrono::Utc;
use log::info;

use crate::domain::errors::DomainError;
use crate::domain::ports::ImageStorage;
use crate::domain::upload::UploadKind;

pub struct UploadService<S> {
    storage: S,
}

impl<S: ImageStorage> UploadService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stores an uploaded image and returns the URL to save on the record.
    pub fn upload(
        &self,
        kind: UploadKind,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, DomainError> {
        if bytes.is_empty() {
            return Err(DomainError::InvalidInput("image file is empty".into()));
        }
        let object_name = kind.object_name(file_name, Utc::now().timestamp_millis());
        let url = self.storage.store(&object_name, bytes)?;
        info!("Stored upload {object_name} ({} bytes)", bytes.len());
        Ok(url)
    }
}
