//! DesignScript — fluent API for scripting design sessions in tests.
//!
//! Wraps `kettle_bridge::dispatch()` so suites exercise the real
//! dispatch path, not a simulation. Time is a counter the script owns;
//! `advance` moves it and fires whatever debounce deadlines it crosses.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use kettle_bridge::{dispatch, tick, BridgeState, EngineToUi, ExportFormat, UiToEngine};
use kettle_engine::QuickShape;
use kettle_types::{Blueprint, ShapeSliders};

use crate::helpers::HarnessError;
use crate::report::BlueprintReport;

/// A fluent driver for one bridge session.
pub struct DesignScript {
    pub state: BridgeState,
    now_ms: u64,
    history: Vec<String>,
}

impl DesignScript {
    /// A script over the canonical 4-cup design.
    pub fn new() -> Self {
        DesignScript {
            state: BridgeState::new(),
            now_ms: 0,
            history: Vec::new(),
        }
    }

    /// A script starting from a default design for a cup count.
    pub fn with_cups(cups: f64) -> Result<Self, HarnessError> {
        let mut script = DesignScript::new();
        script.send(UiToEngine::NewDesign { cups })?;
        Ok(script)
    }

    /// Send one message through the real dispatch path. `Error`
    /// responses become `Err`; everything else is handed back.
    pub fn send(&mut self, msg: UiToEngine) -> Result<EngineToUi, HarnessError> {
        let action = format!("{:?}", msg);
        let response = dispatch(&mut self.state, msg, self.now_ms);
        match &response {
            EngineToUi::Error { message } => {
                self.history.push(format!("{} -> ERROR: {}", action, message));
                Err(HarnessError::DispatchError {
                    message: message.clone(),
                })
            }
            other => {
                self.history.push(format!("{} -> {}", action, response_name(other)));
                Ok(response)
            }
        }
    }

    /// Move the clock forward and fire any debounce deadlines crossed.
    pub fn advance(&mut self, ms: u64) -> Vec<EngineToUi> {
        self.now_ms += ms;
        let fired = tick(&mut self.state, self.now_ms);
        if !fired.is_empty() {
            self.history
                .push(format!("tick(+{}ms) -> {} update(s)", ms, fired.len()));
        }
        fired
    }

    // ── Shortcuts ───────────────────────────────────────────────────────

    /// Immediate dimension edit.
    pub fn edit(&mut self, key: &str, value: f64) -> Result<&mut Self, HarnessError> {
        self.send(UiToEngine::EditDimension {
            key: key.to_string(),
            value,
            immediate: true,
        })?;
        Ok(self)
    }

    /// Debounced dimension edit (stays pending until `advance`).
    pub fn queue_edit(&mut self, key: &str, value: f64) -> Result<&mut Self, HarnessError> {
        self.send(UiToEngine::EditDimension {
            key: key.to_string(),
            value,
            immediate: false,
        })?;
        Ok(self)
    }

    /// Slider drag preview.
    pub fn morph(&mut self, sliders: ShapeSliders) -> Result<&mut Self, HarnessError> {
        self.send(UiToEngine::MorphSliders { sliders })?;
        Ok(self)
    }

    /// Commit the staged morph immediately (slider release).
    pub fn commit_morph(&mut self) -> Result<&mut Self, HarnessError> {
        self.send(UiToEngine::CommitMorph)?;
        Ok(self)
    }

    pub fn capacity_lock(&mut self, enabled: bool) -> Result<&mut Self, HarnessError> {
        self.send(UiToEngine::SetCapacityLock { enabled })?;
        Ok(self)
    }

    pub fn quick_shape(&mut self, shape: QuickShape) -> Result<&mut Self, HarnessError> {
        self.send(UiToEngine::ApplyQuickShape { shape })?;
        Ok(self)
    }

    /// Save the project, returning the file contents.
    pub fn save(&mut self) -> Result<String, HarnessError> {
        match self.send(UiToEngine::SaveProject)? {
            EngineToUi::SaveReady { json_data } => Ok(json_data),
            other => Err(unexpected("SaveProject", &other)),
        }
    }

    /// Load a project file into this session.
    pub fn load(&mut self, data: String) -> Result<Blueprint, HarnessError> {
        match self.send(UiToEngine::LoadProject { data })? {
            EngineToUi::ProjectLoaded { blueprint, .. } => Ok(blueprint),
            other => Err(unexpected("LoadProject", &other)),
        }
    }

    /// Export and decode the payload back to text.
    pub fn export(&mut self, format: ExportFormat) -> Result<String, HarnessError> {
        match self.send(UiToEngine::Export { format })? {
            EngineToUi::ExportReady { payload_base64, .. } => {
                let bytes = BASE64.decode(payload_base64).map_err(|e| HarnessError::Payload {
                    reason: e.to_string(),
                })?;
                String::from_utf8(bytes).map_err(|e| HarnessError::Payload {
                    reason: e.to_string(),
                })
            }
            other => Err(unexpected("Export", &other)),
        }
    }

    // ── Inspection ──────────────────────────────────────────────────────

    pub fn blueprint(&self) -> &Blueprint {
        self.state.session.blueprint()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Report over the current blueprint, standard oracles included.
    pub fn report(&self) -> BlueprintReport {
        BlueprintReport::from_blueprint(self.blueprint())
    }

    /// Fail with an oracle-style error if any standard check fails.
    pub fn verify(&self) -> Result<(), HarnessError> {
        for verdict in self.report().oracle_results {
            if !verdict.passed {
                return Err(HarnessError::OracleFailure {
                    oracle: verdict.oracle_name,
                    detail: verdict.detail,
                });
            }
        }
        Ok(())
    }
}

impl Default for DesignScript {
    fn default() -> Self {
        Self::new()
    }
}

fn response_name(response: &EngineToUi) -> &'static str {
    match response {
        EngineToUi::BlueprintUpdated { .. } => "BlueprintUpdated",
        EngineToUi::Queued { .. } => "Queued",
        EngineToUi::ViewUpdated { .. } => "ViewUpdated",
        EngineToUi::AnalysisReady { .. } => "AnalysisReady",
        EngineToUi::SaveReady { .. } => "SaveReady",
        EngineToUi::ProjectLoaded { .. } => "ProjectLoaded",
        EngineToUi::ExportReady { .. } => "ExportReady",
        EngineToUi::MeshReady { .. } => "MeshReady",
        EngineToUi::Error { .. } => "Error",
    }
}

fn unexpected(action: &str, response: &EngineToUi) -> HarnessError {
    HarnessError::UnexpectedResponse {
        action: action.to_string(),
        response: response_name(response).to_string(),
    }
}
