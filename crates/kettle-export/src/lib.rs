pub mod dxf;
pub mod errors;
pub mod load;
pub mod metadata;
pub mod migrate;
pub mod obj;
pub mod save;

pub use dxf::export_dxf;
pub use errors::{LoadError, SaveError};
pub use load::{load_blueprint, load_blueprint_from_path};
pub use metadata::FileMetadata;
pub use obj::export_obj;
pub use save::{export_json, save_blueprint, save_blueprint_to_path, SaveFile, FORMAT_VERSION};
