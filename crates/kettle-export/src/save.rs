use std::path::Path;

use serde::Serialize;

use kettle_types::Blueprint;

use crate::errors::SaveError;
use crate::metadata::FileMetadata;

/// Current file format version.
pub const FORMAT_VERSION: u32 = 1;

/// Format identifier written into every file.
pub const FORMAT_NAME: &str = "kettlewright";

/// The top-level file structure.
#[derive(Debug, Clone, Serialize)]
pub struct SaveFile {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// File metadata.
    pub metadata: FileMetadata,
    /// The complete blueprint.
    pub blueprint: Blueprint,
}

/// Serialize a blueprint file to a pretty-printed JSON string.
pub fn save_blueprint(blueprint: &Blueprint, metadata: &FileMetadata) -> String {
    let file = SaveFile {
        format: FORMAT_NAME.to_string(),
        version: FORMAT_VERSION,
        metadata: metadata.clone(),
        blueprint: blueprint.clone(),
    };
    serde_json::to_string_pretty(&file).expect("Blueprint serialization should never fail")
}

/// Bare pretty-printed dump of the blueprint alone, without the file
/// envelope. This is the exchange format the JSON export button emits.
pub fn export_json(blueprint: &Blueprint) -> String {
    serde_json::to_string_pretty(blueprint).expect("Blueprint serialization should never fail")
}

/// Write a blueprint file to disk.
pub fn save_blueprint_to_path(
    path: impl AsRef<Path>,
    blueprint: &Blueprint,
    metadata: &FileMetadata,
) -> Result<(), SaveError> {
    let path = path.as_ref();
    std::fs::write(path, save_blueprint(blueprint, metadata)).map_err(|e| SaveError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
