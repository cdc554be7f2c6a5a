//! WASM entry points for the web worker.
//!
//! Only compiled for the `wasm32` target. The worker calls `init()`
//! once, then feeds `process_message` JSON-serialized `UiToEngine`
//! messages and polls `tick` when a queued deadline comes due. Mesh
//! buffers are read through the typed-array views rather than JSON.

use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::engine_state::BridgeState;
use crate::messages::{EngineToUi, UiToEngine};

// Single-threaded in the web worker.
thread_local! {
    static BRIDGE: std::cell::RefCell<Option<BridgeState>> = std::cell::RefCell::new(None);
}

/// Initialize the bridge. Must be called once before anything else.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();

    BRIDGE.with(|cell| {
        *cell.borrow_mut() = Some(BridgeState::new());
    });
}

/// Process a JSON message from the UI and return a JSON response.
///
/// `now_ms` is the host's monotonic clock (`performance.now()`); the
/// debounce channels are armed against it.
#[wasm_bindgen]
pub fn process_message(json_input: &str, now_ms: f64) -> String {
    let response = BRIDGE.with(|cell| {
        let mut bridge = cell.borrow_mut();
        let state = bridge
            .as_mut()
            .expect("Bridge not initialized. Call init() first.");

        let msg: UiToEngine = match serde_json::from_str(json_input) {
            Ok(msg) => msg,
            Err(e) => {
                return EngineToUi::Error {
                    message: format!("Failed to parse message: {}", e),
                };
            }
        };

        dispatch::dispatch(state, msg, now_ms.max(0.0) as u64)
    });

    to_json(&response)
}

/// Fire due debounce channels. Returns a JSON array of `EngineToUi`
/// responses, one per fired channel (usually zero or one).
#[wasm_bindgen]
pub fn tick(now_ms: f64) -> String {
    BRIDGE.with(|cell| {
        let mut bridge = cell.borrow_mut();
        let state = bridge
            .as_mut()
            .expect("Bridge not initialized. Call init() first.");

        let responses = dispatch::tick(state, now_ms.max(0.0) as u64);
        serde_json::to_string(&responses).unwrap_or_else(|_| "[]".to_string())
    })
}

/// Earliest pending debounce deadline in host milliseconds, or -1 when
/// both channels are idle.
#[wasm_bindgen]
pub fn next_due() -> f64 {
    BRIDGE.with(|cell| {
        let bridge = cell.borrow();
        bridge
            .as_ref()
            .and_then(|state| state.scheduler.next_due())
            .map(|due| due as f64)
            .unwrap_or(-1.0)
    })
}

/// The current blueprint as JSON, for UIs that want to poll instead of
/// tracking responses.
#[wasm_bindgen]
pub fn get_blueprint() -> String {
    BRIDGE.with(|cell| {
        let bridge = cell.borrow();
        let state = bridge.as_ref().expect("Bridge not initialized.");
        to_json(state.session.blueprint())
    })
}

/// Mesh vertex positions as a Float32Array view into WASM memory:
/// [x0, y0, z0, x1, y1, z1, ...].
///
/// IMPORTANT: the view is invalidated by any WASM memory growth. Copy
/// or transfer the data immediately after calling.
#[wasm_bindgen]
pub fn get_mesh_vertices() -> js_sys::Float32Array {
    BRIDGE.with(|cell| {
        let bridge = cell.borrow();
        match bridge.as_ref() {
            Some(state) => unsafe { js_sys::Float32Array::view(&state.mesh().vertices) },
            None => js_sys::Float32Array::new_with_length(0),
        }
    })
}

/// Mesh triangle indices as a Uint32Array view into WASM memory. Same
/// lifetime caveat as `get_mesh_vertices`.
#[wasm_bindgen]
pub fn get_mesh_indices() -> js_sys::Uint32Array {
    BRIDGE.with(|cell| {
        let bridge = cell.borrow();
        match bridge.as_ref() {
            Some(state) => unsafe { js_sys::Uint32Array::view(&state.mesh().indices) },
            None => js_sys::Uint32Array::new_with_length(0),
        }
    })
}

/// Exploded-view offsets for the four detachable parts as JSON:
/// `[[x, y, z]; 4]` in bottom, flare, gasket, strainer order.
#[wasm_bindgen]
pub fn get_part_offsets() -> String {
    BRIDGE.with(|cell| {
        let bridge = cell.borrow();
        let state = bridge.as_ref().expect("Bridge not initialized.");
        to_json(&state.part_offsets())
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        format!(r#"{{"type":"Error","message":"Serialization failed: {}"}}"#, e)
    })
}
