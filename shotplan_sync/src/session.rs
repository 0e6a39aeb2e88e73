// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use shotplan_input::{DragController, PointerEvent, RecomputeKind};
use shotplan_model::{
    FeasibilityEnvelope, HeatmapField, InfoReadout, SessionState, TrajectorySample,
};
use shotplan_scene::Scene;
use shotplan_view2d::ViewTransform;

use crate::orchestrator::{Orchestrator, OutboundRequest, Redraw, SyncError};

/// The full planner pipeline behind both canvases.
///
/// Owns the session state, the drag state machine, and the orchestrator,
/// and wires them per the control flow: drag mutates state, the
/// orchestrator issues the matching recomputes, and the scene builders
/// redraw from state plus caches. Pixel sizes are passed per call, so the
/// shell may resize canvases freely between events.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    drag: DragController,
    orchestrator: Orchestrator,
}

impl Session {
    /// Creates the session and issues its startup requests: the one-shot
    /// heatmap fetch plus a full recompute for the initial launch state.
    #[must_use]
    pub fn start() -> (Self, Vec<OutboundRequest>) {
        let mut session = Self::default();
        let heatmap = session.orchestrator.begin_heatmap_fetch();
        let [trajectory, envelope] = session.orchestrator.begin_full_update(session.state.state());
        (session, vec![heatmap, trajectory, envelope])
    }

    /// Read access to the shared state and caches.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Feeds one pointer event through the drag machine and returns the
    /// recompute requests it triggered (possibly none).
    ///
    /// Rejected drag steps (outside the launch envelope) change nothing
    /// and issue nothing.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        trajectory_size: Size,
        angle_speed_size: Size,
    ) -> Vec<OutboundRequest> {
        let trajectory = ViewTransform::trajectory(trajectory_size);
        let angle_speed = ViewTransform::angle_speed(angle_speed_size);
        let Some(update) = self
            .drag
            .handle(event, self.state.state(), &trajectory, &angle_speed)
        else {
            return Vec::new();
        };

        self.state.set_state(update.state);
        match update.recompute {
            RecomputeKind::Full => self.orchestrator.begin_full_update(update.state).to_vec(),
            RecomputeKind::TrajectoryOnly => {
                vec![self.orchestrator.begin_velocity_update(update.state)]
            }
        }
    }

    /// Applies a trajectory response for the given sequence tag.
    pub fn apply_trajectory(
        &mut self,
        seq: u64,
        result: Result<TrajectorySample, SyncError>,
    ) -> Redraw {
        self.orchestrator.apply_trajectory(&mut self.state, seq, result)
    }

    /// Applies an envelope response for the given sequence tag.
    pub fn apply_envelope(
        &mut self,
        seq: u64,
        result: Result<FeasibilityEnvelope, SyncError>,
    ) -> Redraw {
        self.orchestrator.apply_envelope(&mut self.state, seq, result)
    }

    /// Applies the startup heatmap response.
    pub fn apply_heatmap(&mut self, seq: u64, result: Result<HeatmapField, SyncError>) -> Redraw {
        self.orchestrator.apply_heatmap(&mut self.state, seq, result)
    }

    /// Builds the trajectory-view display list for the given surface size.
    #[must_use]
    pub fn trajectory_scene(&self, size: Size) -> Scene {
        shotplan_scene::trajectory_scene(&self.state, &ViewTransform::trajectory(size))
    }

    /// Builds the angle/speed-view display list for the given surface size.
    #[must_use]
    pub fn angle_speed_scene(&self, size: Size) -> Scene {
        shotplan_scene::angle_speed_scene(&self.state, &ViewTransform::angle_speed(size))
    }

    /// Builds the info-panel readout from the current state and caches.
    #[must_use]
    pub fn info(&self) -> InfoReadout {
        InfoReadout::from_session(&self.state)
    }
}
