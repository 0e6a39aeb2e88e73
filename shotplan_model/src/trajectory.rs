// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Outcome of a simulated shot, decoded from the service's integer code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The shot enters the goal (`result == 0`).
    Success,
    /// The shot lands short of the rim (`result == -1`).
    Undershoot,
    /// Any other nonzero code: the shot carries past the rim.
    Overshoot,
}

impl ShotOutcome {
    /// Decodes the wire code: `0` success, `-1` undershoot, anything else
    /// overshoot.
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Success,
            -1 => Self::Undershoot,
            _ => Self::Overshoot,
        }
    }

    /// Returns `true` for [`ShotOutcome::Success`].
    #[must_use]
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

/// One computed flight path for a prior launch state.
///
/// Replaced wholesale on each recompute; during an in-flight recompute the
/// cached sample may lag the current launch state.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectorySample {
    /// Sampled x positions along the flight, in meters.
    pub x: Vec<f64>,
    /// Sampled y positions along the flight, in meters.
    pub y: Vec<f64>,
    /// Whether the flight reached the goal.
    pub outcome: ShotOutcome,
}

impl TrajectorySample {
    /// Iterates the sampled flight path as world-space points, in flight
    /// order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Point::new(x, y))
    }
}
