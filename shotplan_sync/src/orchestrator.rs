// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;
use thiserror::Error;

use shotplan_model::{FeasibilityEnvelope, HeatmapField, LaunchState, SessionState, TrajectorySample};
use shotplan_protocol::{EnvelopeRequest, ProtocolError, TrajectoryRequest};

/// A recompute attempt that produced no usable data.
///
/// Both arms are handled identically: log, leave the state and caches
/// untouched, keep showing the last good visualization. No failure here is
/// fatal and nothing retries; the next drag step refetches implicitly.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The request never produced a response body.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response body did not decode into the expected shape.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

bitflags! {
    /// What must be redrawn after a response is applied.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Redraw: u8 {
        /// Redraw the trajectory canvas.
        const TRAJECTORY_VIEW = 1;
        /// Redraw the angle/speed canvas.
        const ANGLE_SPEED_VIEW = 1 << 1;
        /// Refresh the info panel.
        const INFO_PANEL = 1 << 2;
    }
}

/// A sequence-tagged request for the shell to put on the wire.
///
/// The payload is built from the launch-state snapshot current at issue
/// time; the tag must come back with the response so the orchestrator can
/// tell whether it is still the latest of its kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutboundRequest {
    /// `GET` the startup heatmap field.
    Heatmap {
        /// Sequence tag to return with the response.
        seq: u64,
    },
    /// `POST` a trajectory recompute for the full launch state.
    Trajectory {
        /// Sequence tag to return with the response.
        seq: u64,
        /// Snapshot payload.
        payload: TrajectoryRequest,
    },
    /// `POST` an envelope recompute for the position only.
    Envelope {
        /// Sequence tag to return with the response.
        seq: u64,
        /// Snapshot payload.
        payload: EnvelopeRequest,
    },
}

/// Gate for a full update: both halves must resolve before the linked
/// redraw fires.
#[derive(Copy, Clone, Debug)]
struct FullGate {
    trajectory_seq: u64,
    envelope_seq: u64,
    trajectory_done: bool,
    envelope_done: bool,
}

/// Issues sequence-tagged recompute requests and applies their responses in
/// a stale-safe order.
///
/// One counter exists per request kind. Issuing a request bumps its
/// counter; applying a response whose tag no longer matches the counter is
/// a no-op beyond a debug log. A *full* update (position changed) tags a
/// trajectory and an envelope request together and holds the redraw until
/// both resolve; a *velocity* update reissues only the trajectory and
/// redraws as soon as it lands.
#[derive(Debug, Default)]
pub struct Orchestrator {
    heatmap_seq: u64,
    trajectory_seq: u64,
    envelope_seq: u64,
    full: Option<FullGate>,
}

impl Orchestrator {
    /// Creates an orchestrator with no requests issued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the one-shot startup heatmap fetch.
    pub fn begin_heatmap_fetch(&mut self) -> OutboundRequest {
        self.heatmap_seq += 1;
        OutboundRequest::Heatmap {
            seq: self.heatmap_seq,
        }
    }

    /// Issues a full recompute: trajectory and envelope concurrently, for
    /// the same snapshot. Used at startup and after accepted position
    /// drags.
    pub fn begin_full_update(&mut self, state: LaunchState) -> [OutboundRequest; 2] {
        self.trajectory_seq += 1;
        self.envelope_seq += 1;
        self.full = Some(FullGate {
            trajectory_seq: self.trajectory_seq,
            envelope_seq: self.envelope_seq,
            trajectory_done: false,
            envelope_done: false,
        });
        [
            OutboundRequest::Trajectory {
                seq: self.trajectory_seq,
                payload: state.into(),
            },
            OutboundRequest::Envelope {
                seq: self.envelope_seq,
                payload: state.into(),
            },
        ]
    }

    /// Issues a trajectory-only recompute after a velocity drag. The
    /// envelope depends only on position and is not refetched.
    pub fn begin_velocity_update(&mut self, state: LaunchState) -> OutboundRequest {
        self.trajectory_seq += 1;
        // A newer trajectory supersedes the trajectory half of any pending
        // full update; its envelope half still applies on arrival.
        if let Some(full) = &mut self.full {
            full.trajectory_done = true;
            if full.envelope_done {
                self.full = None;
            }
        }
        OutboundRequest::Trajectory {
            seq: self.trajectory_seq,
            payload: state.into(),
        }
    }

    /// Applies a trajectory response, discarding it if superseded.
    pub fn apply_trajectory(
        &mut self,
        session: &mut SessionState,
        seq: u64,
        result: Result<TrajectorySample, SyncError>,
    ) -> Redraw {
        if seq != self.trajectory_seq {
            log::debug!("discarding stale trajectory response ({seq} < {})", self.trajectory_seq);
            return Redraw::empty();
        }
        match result {
            Ok(sample) => session.set_trajectory(sample),
            Err(err) => log::warn!("trajectory recompute failed: {err}"),
        }
        if let Some(full) = &mut self.full {
            if full.trajectory_seq == seq {
                full.trajectory_done = true;
                if full.envelope_done {
                    self.full = None;
                    return Redraw::all();
                }
                return Redraw::empty();
            }
        }
        Redraw::all()
    }

    /// Applies an envelope response, discarding it if superseded.
    pub fn apply_envelope(
        &mut self,
        session: &mut SessionState,
        seq: u64,
        result: Result<FeasibilityEnvelope, SyncError>,
    ) -> Redraw {
        if seq != self.envelope_seq {
            log::debug!("discarding stale envelope response ({seq} < {})", self.envelope_seq);
            return Redraw::empty();
        }
        match result {
            Ok(envelope) => session.set_envelope(envelope),
            Err(err) => log::warn!("envelope recompute failed: {err}"),
        }
        if let Some(full) = &mut self.full {
            if full.envelope_seq == seq {
                full.envelope_done = true;
                if full.trajectory_done {
                    self.full = None;
                    return Redraw::all();
                }
                return Redraw::empty();
            }
        }
        Redraw::ANGLE_SPEED_VIEW | Redraw::INFO_PANEL
    }

    /// Applies the startup heatmap response.
    pub fn apply_heatmap(
        &mut self,
        session: &mut SessionState,
        seq: u64,
        result: Result<HeatmapField, SyncError>,
    ) -> Redraw {
        if seq != self.heatmap_seq {
            log::debug!("discarding stale heatmap response ({seq} < {})", self.heatmap_seq);
            return Redraw::empty();
        }
        match result {
            Ok(field) => {
                session.set_heatmap(field);
                Redraw::TRAJECTORY_VIEW
            }
            Err(err) => {
                log::warn!("heatmap fetch failed: {err}");
                Redraw::empty()
            }
        }
    }
}
