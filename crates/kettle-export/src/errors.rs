/// Errors while reading a saved blueprint file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse file: {0}")]
    Parse(String),

    #[error("unknown file format: {0}")]
    WrongFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    UnsupportedVersion {
        file_version: u32,
        supported_version: u32,
    },

    #[error("migration failed from version {from} to {to}: {reason}")]
    MigrationFailed { from: u32, to: u32, reason: String },

    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },
}

/// Errors while writing a blueprint file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveError {
    #[error("failed to write {path}: {reason}")]
    Io { path: String, reason: String },
}
