use std::path::Path;

/// What an uploaded image is for. Decides the stored object's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    MenuItem,
    HeaderImage { position: i32 },
}

impl UploadKind {
    /// `menu-<millis>.<ext>` or `header-<position>-<millis>.<ext>`.
    pub fn object_name(self, file_name: &str, millis: i64) -> String {
        let ext = extension(file_name);
        match self {
            UploadKind::MenuItem => format!("menu-{millis}.{ext}"),
            UploadKind::HeaderImage { position } => format!("header-{position}-{millis}.{ext}"),
        }
    }
}

fn extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "bin".to_string())
}
