use std::path::Path;

use serde::Deserialize;

use kettle_engine::rebuild_blueprint;
use kettle_types::Blueprint;

use crate::errors::LoadError;
use crate::metadata::FileMetadata;
use crate::save::{FORMAT_NAME, FORMAT_VERSION};

/// The top-level file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveFileRaw {
    pub format: String,
    pub version: u32,
    pub metadata: FileMetadata,
    pub blueprint: Blueprint,
}

/// Deserialize a blueprint file from a JSON string.
///
/// Validates the format identifier and version, migrates older files,
/// then runs a full recompute so derived fields saved by older or
/// foreign writers can never leak stale values into a session.
pub fn load_blueprint(json: &str) -> Result<(Blueprint, FileMetadata), LoadError> {
    let raw: SaveFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::Parse(e.to_string()))?;

    if raw.format != FORMAT_NAME {
        return Err(LoadError::WrongFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(LoadError::UnsupportedVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    let mut blueprint = if raw.version < FORMAT_VERSION {
        crate::migrate::migrate(raw.blueprint, raw.version, FORMAT_VERSION)?
    } else {
        raw.blueprint
    };

    rebuild_blueprint(&mut blueprint);
    Ok((blueprint, raw.metadata))
}

/// Read and parse a blueprint file from disk.
pub fn load_blueprint_from_path(
    path: impl AsRef<Path>,
) -> Result<(Blueprint, FileMetadata), LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    load_blueprint(&json)
}
