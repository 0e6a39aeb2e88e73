// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Launch state: world-space position (meters) and velocity (m/s) of the
/// launch point.
///
/// Exactly one instance is live at a time, owned by
/// [`SessionState`](crate::SessionState). The drag layer derives new values
/// with [`LaunchState::with_position`] / [`LaunchState::with_angle_speed`]
/// and writes them back through the session; everything else reads.
///
/// The angle/speed projection shown in the second view is derived, not
/// stored: `angle = atan2(vy, vx)` in degrees and `speed = hypot(vx, vy)`.
///
/// ```
/// use shotplan_model::LaunchState;
///
/// let state = LaunchState::new(-2.8, 0.4, 2.5, 8.0);
/// assert!((state.angle_deg() - 72.645).abs() < 1e-3);
/// assert!((state.speed() - 8.3815).abs() < 1e-3);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaunchState {
    /// Horizontal position in meters.
    pub x: f64,
    /// Vertical position in meters.
    pub y: f64,
    /// Horizontal velocity in m/s.
    pub vx: f64,
    /// Vertical velocity in m/s.
    pub vy: f64,
}

impl LaunchState {
    /// Creates a launch state from position and velocity components.
    #[must_use]
    pub const fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self { x, y, vx, vy }
    }

    /// Returns the launch position as a world-space point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the launch direction in degrees above horizontal.
    #[must_use]
    pub fn angle_deg(&self) -> f64 {
        self.vy.atan2(self.vx).to_degrees()
    }

    /// Returns the launch speed in m/s.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    /// Returns a copy with the position replaced and the velocity kept.
    #[must_use]
    pub fn with_position(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// Returns a copy with the velocity replaced by the given angle/speed
    /// projection, keeping the position.
    ///
    /// `vx = speed · cos(angle)`, `vy = speed · sin(angle)` with the angle
    /// given in degrees.
    #[must_use]
    pub fn with_angle_speed(self, angle_deg: f64, speed: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self {
            vx: speed * rad.cos(),
            vy: speed * rad.sin(),
            ..self
        }
    }
}
