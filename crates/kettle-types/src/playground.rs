use serde::{Deserialize, Serialize};

use crate::dimensions::DimensionSet;

/// The six shape axes, each a percentage in [-100, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSliders {
    pub body_curve: f64,
    pub head_flare: f64,
    pub height: f64,
    pub neck: f64,
    pub handle: f64,
    pub base: f64,
}

impl Default for ShapeSliders {
    fn default() -> Self {
        ShapeSliders {
            body_curve: 0.0,
            head_flare: 0.0,
            height: 0.0,
            neck: 0.0,
            handle: 0.0,
            base: 0.0,
        }
    }
}

impl ShapeSliders {
    pub fn is_zero(&self) -> bool {
        self.body_curve == 0.0
            && self.head_flare == 0.0
            && self.height == 0.0
            && self.neck == 0.0
            && self.handle == 0.0
            && self.base == 0.0
    }
}

/// Shape-playground state: the snapshot the sliders morph against.
///
/// The baseline is distinct from the live dimensions. Sliders always
/// apply to the baseline, so dragging the same slider twice does not
/// compound; "set new baseline" is the only way morphs accumulate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundState {
    pub baseline: DimensionSet,
    pub sliders: ShapeSliders,
    /// When on, a morph ends with one uniform rescale toward
    /// `capacity_target_ml`.
    pub lock_capacity: bool,
}

impl PlaygroundState {
    /// Capture a fresh baseline with sliders zeroed and the lock on.
    pub fn from_baseline(baseline: DimensionSet) -> Self {
        PlaygroundState {
            baseline,
            sliders: ShapeSliders::default(),
            lock_capacity: true,
        }
    }

    /// Re-capture: adopt `current` as the new baseline, zero the
    /// sliders, and switch the lock back on. Identical to a fresh
    /// capture; accumulated morphs are folded into the baseline.
    pub fn rebase(&mut self, current: DimensionSet) {
        *self = PlaygroundState::from_baseline(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_zero_sliders_and_lock_on() {
        let state = PlaygroundState::from_baseline(DimensionSet::default());
        assert!(state.sliders.is_zero());
        assert!(state.lock_capacity);
    }

    #[test]
    fn rebase_zeroes_sliders_and_restores_the_lock() {
        let mut state = PlaygroundState::from_baseline(DimensionSet::default());
        state.lock_capacity = false;
        state.sliders.neck = 40.0;
        let mut moved = DimensionSet::default();
        moved.body_height_mm = 150.0;
        state.rebase(moved.clone());
        assert_eq!(state.baseline, moved);
        assert!(state.sliders.is_zero());
        assert!(state.lock_capacity);
    }
}
