//! The browser-facing state wrapper: one session, the view controls
//! the renderer needs, the debounce channels, and the staged inputs
//! waiting for a channel to fire.

use serde::{Deserialize, Serialize};

use kettle_engine::Session;
use kettle_export::FileMetadata;
use kettle_geom::{
    outer_profile, part_offset_mm, revolve_profile, AssemblyPart, DetachState, ProfileOptions,
    SurfaceMesh, BODY_SAMPLES, HEAD_SAMPLES, REVOLVE_SEGMENTS,
};
use kettle_types::ShapeSliders;

use crate::scheduler::{Channel, Coalescer};

/// Renderer-side controls that never touch the blueprint: head flare
/// and curvature percentages, exploded-view state, palette choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewControls {
    /// Last committed head-flare slider position, percent.
    pub flare_pct: f64,
    /// Head curvature slider position, percent; maps to the profile
    /// warp exponent.
    pub curvature_pct: f64,
    pub detach: DetachState,
    /// Key into the palette preset table.
    pub palette_key: String,
}

impl Default for ViewControls {
    fn default() -> Self {
        ViewControls {
            flare_pct: 100.0,
            curvature_pct: 100.0,
            detach: DetachState::default(),
            palette_key: "stainless-brushed".to_string(),
        }
    }
}

/// Everything the wasm worker owns between messages.
pub struct BridgeState {
    pub session: Session,
    pub view: ViewControls,
    pub scheduler: Coalescer,
    pub metadata: FileMetadata,
    /// Edits staged behind the recompute channel, applied in arrival
    /// order when it fires.
    pending_edits: Vec<(String, f64)>,
    /// Latest slider positions staged behind the morph channel.
    pending_sliders: Option<ShapeSliders>,
    /// Mesh cache backing the typed-array accessors.
    mesh: SurfaceMesh,
}

impl BridgeState {
    pub fn new() -> Self {
        BridgeState {
            session: Session::new(),
            view: ViewControls::default(),
            scheduler: Coalescer::new(),
            metadata: FileMetadata::new("Kettle blueprint"),
            pending_edits: Vec::new(),
            pending_sliders: None,
            mesh: SurfaceMesh::default(),
        }
    }

    /// Drop everything and start over at the given cup count. Pending
    /// work belongs to the old design, so both channels are disarmed.
    pub fn load_default(&mut self, cups: f64) {
        self.session.load_default(cups);
        self.view = ViewControls::default();
        self.scheduler.cancel(Channel::Recompute);
        self.scheduler.cancel(Channel::Morph);
        self.pending_edits.clear();
        self.pending_sliders = None;
    }

    /// Stage one edit behind the recompute channel.
    pub fn stage_edit(&mut self, key: String, value: f64, now_ms: u64) -> u64 {
        self.pending_edits.push((key, value));
        self.scheduler.schedule(Channel::Recompute, now_ms)
    }

    /// Stage slider positions behind the morph channel. The caller has
    /// already applied them as an unlocked preview.
    pub fn stage_sliders(&mut self, sliders: ShapeSliders, now_ms: u64) -> u64 {
        self.pending_sliders = Some(sliders);
        self.scheduler.schedule(Channel::Morph, now_ms)
    }

    /// Arm the recompute channel with nothing staged (flare previews).
    pub fn stage_recompute(&mut self, now_ms: u64) -> u64 {
        self.scheduler.schedule(Channel::Recompute, now_ms)
    }

    /// Run the work a fired channel stands for.
    pub fn run_channel(&mut self, channel: Channel) {
        match channel {
            Channel::Recompute => {
                if self.pending_edits.is_empty() {
                    self.session.recompute();
                } else {
                    for (key, value) in std::mem::take(&mut self.pending_edits) {
                        self.session.edit_dimension(&key, value);
                    }
                }
            }
            Channel::Morph => {
                if let Some(sliders) = self.pending_sliders.take() {
                    self.session.apply_morph(sliders, true);
                }
            }
        }
    }

    /// Rebuild the cached revolution mesh from the current silhouette
    /// and curvature control.
    pub fn rebuild_mesh(&mut self) -> &SurfaceMesh {
        let options = ProfileOptions {
            curvature_scale: kettle_engine::curvature_scale_from_pct(self.view.curvature_pct),
        };
        let profile = outer_profile(
            &self.session.blueprint().dimensions,
            BODY_SAMPLES,
            HEAD_SAMPLES,
            &options,
        );
        self.mesh = revolve_profile(&profile, REVOLVE_SEGMENTS);
        &self.mesh
    }

    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    /// Scene offsets for the four detachable parts under the current
    /// explode state, in bottom/flare/gasket/strainer order.
    pub fn part_offsets(&self) -> [[f64; 3]; 4] {
        let dim = &self.session.blueprint().dimensions;
        [
            AssemblyPart::Bottom,
            AssemblyPart::Flare,
            AssemblyPart::Gasket,
            AssemblyPart::Strainer,
        ]
        .map(|part| part_offset_mm(dim, &self.view.detach, part))
    }

    /// Profile options matching the current curvature control.
    pub fn profile_options(&self) -> ProfileOptions {
        ProfileOptions {
            curvature_scale: kettle_engine::curvature_scale_from_pct(self.view.curvature_pct),
        }
    }
}

impl Default for BridgeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from the bridge layer. The core never fails; these cover the
/// parse and persistence boundaries plus malformed requests.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("failed to load project: {0}")]
    Load(#[from] kettle_export::LoadError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
