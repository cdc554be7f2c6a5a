//! Message dispatch: maps each UI request onto the session and wraps
//! boundary failures as error responses. The host supplies monotonic
//! milliseconds so the debounce channels never read a clock.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use kettle_export::{export_dxf, export_json, export_obj, load_blueprint, save_blueprint};
use kettle_types::preset_by_key;

use crate::engine_state::{BridgeError, BridgeState};
use crate::messages::{EngineToUi, ExportFormat, UiToEngine};
use crate::scheduler::Channel;

/// Process one UI message and produce the response to post back.
pub fn dispatch(state: &mut BridgeState, msg: UiToEngine, now_ms: u64) -> EngineToUi {
    match handle_message(state, msg, now_ms) {
        Ok(response) => response,
        Err(e) => EngineToUi::Error {
            message: e.to_string(),
        },
    }
}

/// Fire every debounce channel whose deadline has passed and return the
/// resulting updates, in deadline order.
pub fn tick(state: &mut BridgeState, now_ms: u64) -> Vec<EngineToUi> {
    state
        .scheduler
        .fire_due(now_ms)
        .into_iter()
        .map(|channel| {
            state.run_channel(channel);
            blueprint_response(state)
        })
        .collect()
}

fn handle_message(
    state: &mut BridgeState,
    msg: UiToEngine,
    now_ms: u64,
) -> Result<EngineToUi, BridgeError> {
    match msg {
        // -- Blueprint lifecycle --
        UiToEngine::NewDesign { cups } => {
            state.load_default(cups);
            Ok(blueprint_response(state))
        }

        UiToEngine::Recompute => {
            state.scheduler.cancel(Channel::Recompute);
            state.run_channel(Channel::Recompute);
            Ok(blueprint_response(state))
        }

        UiToEngine::EditDimension {
            key,
            value,
            immediate,
        } => {
            if immediate {
                state.session.edit_dimension(&key, value);
                // a rejected edit still answers with the authoritative
                // state so the UI can repaint the field
                Ok(blueprint_response(state))
            } else {
                let due_ms = state.stage_edit(key, value, now_ms);
                Ok(EngineToUi::Queued {
                    channel: Channel::Recompute,
                    due_ms,
                })
            }
        }

        // -- Playground --
        UiToEngine::MorphSliders { sliders } => {
            state.session.apply_morph(sliders, false);
            state.stage_sliders(sliders, now_ms);
            Ok(blueprint_response(state))
        }

        UiToEngine::CommitMorph => {
            state.scheduler.cancel(Channel::Morph);
            state.run_channel(Channel::Morph);
            Ok(blueprint_response(state))
        }

        UiToEngine::SetCapacityLock { enabled } => {
            state.session.set_capacity_lock(enabled);
            Ok(blueprint_response(state))
        }

        UiToEngine::SetBaseline => {
            state.session.rebase_playground();
            Ok(blueprint_response(state))
        }

        UiToEngine::ResetMorph => {
            state.scheduler.cancel(Channel::Morph);
            state.session.reset_morph();
            Ok(blueprint_response(state))
        }

        UiToEngine::ApplyQuickShape { shape } => {
            state.session.quick_shape(shape);
            Ok(blueprint_response(state))
        }

        // -- View controls --
        UiToEngine::SetHeadFlare { pct } => {
            if pct.is_finite() && pct > 0.0 && state.view.flare_pct > 0.0 {
                let ratio = pct / state.view.flare_pct;
                state.session.apply_flare_ratio(ratio);
                state.view.flare_pct = pct;
                state.stage_recompute(now_ms);
            }
            Ok(blueprint_response(state))
        }

        UiToEngine::SetHeadCurvature { pct } => {
            if pct.is_finite() && pct > 0.0 {
                state.view.curvature_pct = pct;
            }
            Ok(EngineToUi::ViewUpdated {
                view: state.view.clone(),
            })
        }

        UiToEngine::SetExplodeDistance { pct } => {
            if pct.is_finite() {
                state.view.detach.distance_pct = pct.clamp(0.0, 100.0);
            }
            Ok(EngineToUi::ViewUpdated {
                view: state.view.clone(),
            })
        }

        UiToEngine::SetDetached { part, detached } => {
            state.view.detach.set_detached(part, detached);
            Ok(EngineToUi::ViewUpdated {
                view: state.view.clone(),
            })
        }

        UiToEngine::SetPalette { key } => {
            // unknown keys resolve to the table's first preset
            state.view.palette_key = preset_by_key(&key).key.to_string();
            Ok(EngineToUi::ViewUpdated {
                view: state.view.clone(),
            })
        }

        // -- Materials & analysis --
        UiToEngine::SelectMaterial { part_key, material } => {
            state.session.select_material(&part_key, &material);
            Ok(blueprint_response(state))
        }

        UiToEngine::RequestAnalysis => match state.session.analysis() {
            Some(report) => Ok(EngineToUi::AnalysisReady {
                report: report.clone(),
            }),
            None => Ok(EngineToUi::Error {
                message: "no analysis report available".to_string(),
            }),
        },

        UiToEngine::ApplyAnalysis => {
            state.session.apply_analysis();
            Ok(blueprint_response(state))
        }

        // -- File operations --
        UiToEngine::SaveProject => {
            state.metadata.touch();
            let json_data = save_blueprint(state.session.blueprint(), &state.metadata);
            Ok(EngineToUi::SaveReady { json_data })
        }

        UiToEngine::LoadProject { data } => {
            let (blueprint, metadata) = load_blueprint(&data)?;
            state.session.adopt_blueprint(blueprint);
            state.metadata = metadata;
            Ok(EngineToUi::ProjectLoaded {
                blueprint: state.session.blueprint().clone(),
                title: state.metadata.title.clone(),
            })
        }

        UiToEngine::Export { format } => {
            let options = state.profile_options();
            let blueprint = state.session.blueprint();
            let payload = match format {
                ExportFormat::Dxf => export_dxf(blueprint, &options),
                ExportFormat::Obj => export_obj(blueprint, &options),
                ExportFormat::Json => export_json(blueprint),
            };
            Ok(EngineToUi::ExportReady {
                format,
                file_name: format.file_name().to_string(),
                mime_type: format.mime_type().to_string(),
                payload_base64: BASE64.encode(payload.as_bytes()),
            })
        }

        // -- Rendering --
        UiToEngine::RequestMesh => {
            let revision = state.session.blueprint().revision;
            let mesh = state.rebuild_mesh();
            Ok(EngineToUi::MeshReady {
                revision,
                vertex_count: mesh.vertex_count(),
                triangle_count: mesh.triangle_count(),
            })
        }
    }
}

/// The standard post-mutation response: the whole blueprint plus the
/// playground echo the sliders bind to.
fn blueprint_response(state: &BridgeState) -> EngineToUi {
    let playground = state.session.playground();
    EngineToUi::BlueprintUpdated {
        blueprint: state.session.blueprint().clone(),
        sliders: playground.sliders,
        lock_capacity: playground.lock_capacity,
    }
}
