use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive header stored alongside the blueprint payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Design title, mirrored from the blueprint at save time.
    pub title: String,
    /// Version of the application that wrote the file.
    pub app_version: String,
    /// When the design file was first created.
    pub created: DateTime<Utc>,
    /// When the design file was last written.
    pub modified: DateTime<Utc>,
}

impl FileMetadata {
    /// Fresh metadata with the given title and the current timestamp.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        FileMetadata {
            title: title.into(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            created: now,
            modified: now,
        }
    }

    /// Refresh the modified stamp, keeping the creation time.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}
