// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{FeasibilityEnvelope, HeatmapField, LaunchState, TrajectorySample};

/// Single owner of the launch state and the cached service responses.
///
/// The caches are always consistent with *some* prior launch state but may
/// lag the current one while a recompute is in flight; `shotplan_sync`
/// guarantees they only ever move forward (stale responses are discarded
/// before reaching these setters).
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    state: LaunchState,
    heatmap: Option<HeatmapField>,
    trajectory: Option<TrajectorySample>,
    envelope: Option<FeasibilityEnvelope>,
}

impl SessionState {
    /// Creates a session around an initial launch state with empty caches.
    #[must_use]
    pub fn new(state: LaunchState) -> Self {
        Self {
            state,
            heatmap: None,
            trajectory: None,
            envelope: None,
        }
    }

    /// Returns the current launch state.
    #[must_use]
    pub fn state(&self) -> LaunchState {
        self.state
    }

    /// Replaces the launch state. Only the drag layer writes here.
    pub fn set_state(&mut self, state: LaunchState) {
        self.state = state;
    }

    /// Returns the heatmap field, if the startup fetch has completed.
    #[must_use]
    pub fn heatmap(&self) -> Option<&HeatmapField> {
        self.heatmap.as_ref()
    }

    /// Stores the startup heatmap field.
    pub fn set_heatmap(&mut self, field: HeatmapField) {
        self.heatmap = Some(field);
    }

    /// Returns the latest applied trajectory sample, if any.
    #[must_use]
    pub fn trajectory(&self) -> Option<&TrajectorySample> {
        self.trajectory.as_ref()
    }

    /// Replaces the trajectory cache wholesale.
    pub fn set_trajectory(&mut self, sample: TrajectorySample) {
        self.trajectory = Some(sample);
    }

    /// Returns the latest applied feasibility envelope, if any.
    #[must_use]
    pub fn envelope(&self) -> Option<&FeasibilityEnvelope> {
        self.envelope.as_ref()
    }

    /// Replaces the envelope cache wholesale.
    pub fn set_envelope(&mut self, envelope: FeasibilityEnvelope) {
        self.envelope = Some(envelope);
    }
}

impl Default for SessionState {
    /// Starts from the reference launch pose used by the planner at startup.
    fn default() -> Self {
        Self::new(LaunchState::new(-2.8, 0.4, 2.5, 8.0))
    }
}
