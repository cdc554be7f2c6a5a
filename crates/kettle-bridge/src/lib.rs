//! Browser-facing shim over the kettle engine.
//!
//! The UI runs on the JavaScript main thread and talks to this crate in
//! a web worker through JSON messages; mesh buffers cross as zero-copy
//! typed-array views. Rapid edit and slider streams are coalesced by
//! two independent debounce channels before they reach the engine.

pub mod dispatch;
pub mod engine_state;
pub mod messages;
pub mod scheduler;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{dispatch, tick};
pub use engine_state::{BridgeError, BridgeState, ViewControls};
pub use messages::{EngineToUi, ExportFormat, UiToEngine};
pub use scheduler::{Channel, Coalescer, MORPH_DEBOUNCE_MS, RECOMPUTE_DEBOUNCE_MS};
