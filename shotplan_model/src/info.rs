// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{SessionState, ShotOutcome};

/// Snapshot of the values shown in the info panel: position, velocity, the
/// derived angle/speed projection, and the latest shot outcome.
///
/// The panel itself is an external presentation surface; this type is the
/// data it renders from, rebuilt whenever the sync layer requests an info
/// refresh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InfoReadout {
    /// Launch x position, meters.
    pub x: f64,
    /// Launch y position, meters.
    pub y: f64,
    /// Horizontal velocity, m/s.
    pub vx: f64,
    /// Vertical velocity, m/s.
    pub vy: f64,
    /// Derived launch angle, degrees.
    pub angle_deg: f64,
    /// Derived launch speed, m/s.
    pub speed: f64,
    /// Integrated feasible-region area for the current position, if the
    /// envelope cache is populated.
    pub feasible_area: Option<f64>,
    /// Latest trajectory outcome, if a recompute has completed.
    pub outcome: Option<ShotOutcome>,
}

impl InfoReadout {
    /// Builds the readout from the current session state and caches.
    #[must_use]
    pub fn from_session(session: &SessionState) -> Self {
        let state = session.state();
        Self {
            x: state.x,
            y: state.y,
            vx: state.vx,
            vy: state.vy,
            angle_deg: state.angle_deg(),
            speed: state.speed(),
            feasible_area: session.envelope().map(|e| e.area),
            outcome: session.trajectory().map(|t| t.outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InfoReadout;
    use crate::{FeasibilityEnvelope, SessionState, ShotOutcome, TrajectorySample};

    #[test]
    fn readout_derives_angle_and_speed_from_state() {
        let session = SessionState::default();
        let info = InfoReadout::from_session(&session);
        assert_eq!(info.x, -2.8);
        assert!((info.angle_deg - 72.6459).abs() < 1e-3);
        assert!((info.speed - 8.3815).abs() < 1e-3);
        assert!(info.outcome.is_none());
        assert!(info.feasible_area.is_none());
    }

    #[test]
    fn readout_reflects_populated_caches() {
        let mut session = SessionState::default();
        session.set_trajectory(TrajectorySample {
            x: vec![],
            y: vec![],
            outcome: ShotOutcome::Overshoot,
        });
        session.set_envelope(FeasibilityEnvelope {
            angles: vec![],
            lower_bound: vec![],
            upper_bound: vec![],
            area: 2.25,
        });
        let info = InfoReadout::from_session(&session);
        assert_eq!(info.outcome, Some(ShotOutcome::Overshoot));
        assert_eq!(info.feasible_area, Some(2.25));
    }
}
