//! The JSON message contract between the UI main thread and the engine
//! worker. Both enums are internally tagged so the JavaScript side can
//! switch on `msg.type`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kettle_engine::QuickShape;
use kettle_geom::AssemblyPart;
use kettle_types::{AnalysisReport, Blueprint, ShapeSliders};

use crate::engine_state::ViewControls;
use crate::scheduler::Channel;

/// Geometry export formats the bridge can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Dxf,
    Obj,
    Json,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Dxf => "kettle-drawing.dxf",
            ExportFormat::Obj => "kettle-model.obj",
            ExportFormat::Json => "kettle-blueprint.json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Dxf => "application/dxf",
            ExportFormat::Obj => "model/obj",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Messages from the UI (JavaScript main thread) to the engine worker.
/// Serialized as JSON for postMessage transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEngine {
    // -- Blueprint lifecycle --
    /// Replace the session with a fresh default design for a cup count.
    NewDesign { cups: f64 },
    /// Run a full recompute right now, skipping the debounce.
    Recompute,
    /// Edit a single dimension field. Non-immediate edits coalesce
    /// behind the recompute channel.
    EditDimension {
        key: String,
        value: f64,
        #[serde(default)]
        immediate: bool,
    },

    // -- Playground --
    /// Slider drag: apply an unlocked preview and arm the morph channel.
    MorphSliders { sliders: ShapeSliders },
    /// Commit the staged sliders now (slider release).
    CommitMorph,
    SetCapacityLock { enabled: bool },
    /// Adopt the current shape as the new morph baseline.
    SetBaseline,
    /// Restore the baseline shape and zero the sliders.
    ResetMorph,
    /// One-tap shape action.
    ApplyQuickShape { shape: QuickShape },

    // -- View controls --
    SetHeadFlare { pct: f64 },
    SetHeadCurvature { pct: f64 },
    SetExplodeDistance { pct: f64 },
    SetDetached { part: AssemblyPart, detached: bool },
    SetPalette { key: String },

    // -- Materials & analysis --
    SelectMaterial { part_key: String, material: String },
    /// Ask for the stored analysis report (the mock oracle).
    RequestAnalysis,
    /// Merge the stored analysis suggestions into the materials.
    ApplyAnalysis,

    // -- File operations --
    SaveProject,
    LoadProject { data: String },
    Export { format: ExportFormat },

    // -- Rendering --
    /// Rebuild the revolution mesh; the data itself is fetched through
    /// the typed-array accessors.
    RequestMesh,
}

/// Messages from the engine worker back to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToUi {
    /// The blueprint (and playground echo) after a completed mutation.
    BlueprintUpdated {
        blueprint: Blueprint,
        sliders: ShapeSliders,
        lock_capacity: bool,
    },

    /// A mutation was staged; the named channel will fire at `due_ms`.
    /// The host should call `tick` at or after that time.
    Queued { channel: Channel, due_ms: u64 },

    /// A view control changed; no blueprint mutation happened.
    ViewUpdated { view: ViewControls },

    /// The stored analysis report.
    AnalysisReady { report: AnalysisReport },

    /// Save file contents, ready to download.
    SaveReady { json_data: String },

    /// A project file was loaded and adopted.
    ProjectLoaded {
        blueprint: Blueprint,
        title: String,
    },

    /// An export payload, base64 so it survives the JSON envelope.
    ExportReady {
        format: ExportFormat,
        file_name: String,
        mime_type: String,
        payload_base64: String,
    },

    /// The cached mesh was rebuilt.
    MeshReady {
        revision: Uuid,
        vertex_count: usize,
        triangle_count: usize,
    },

    /// A boundary failure. The blueprint is unchanged.
    Error { message: String },
}
