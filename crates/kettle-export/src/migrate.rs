use kettle_types::Blueprint;

use crate::errors::LoadError;

/// Apply format migrations from `from_version` to `to_version`.
///
/// Migrations run sequentially: v1→v2, v2→v3, and so on. Version 1 is
/// the only version today, so every migration request is an error.
pub fn migrate(
    blueprint: Blueprint,
    from_version: u32,
    to_version: u32,
) -> Result<Blueprint, LoadError> {
    // As the format evolves, add match arms: 1 => migrate_v1_to_v2(blueprint)?
    if from_version != to_version {
        return Err(LoadError::MigrationFailed {
            from: from_version,
            to: to_version,
            reason: format!(
                "no migration path from v{} to v{}",
                from_version, to_version
            ),
        });
    }
    Ok(blueprint)
}
