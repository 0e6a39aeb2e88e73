// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed world-space domains, fixtures, and grid intervals.
//!
//! All geometry here is expressed in world units (meters, degrees, m/s);
//! nothing in this module knows about pixels. The two view rectangles are
//! the full extents the canvases show, while [`LAUNCH_ENVELOPE`] is the
//! sub-region of the trajectory view inside which the mechanism may legally
//! launch (and therefore inside which position drags are accepted).

use kurbo::Rect;

/// World extents of the trajectory view: x in meters, y in meters.
pub const TRAJECTORY_WORLD: Rect = Rect {
    x0: -6.2,
    y0: -0.1,
    x1: 1.0,
    y1: 4.0,
};

/// World extents of the angle/speed view: x in degrees, y in m/s.
pub const ANGLE_SPEED_WORLD: Rect = Rect {
    x0: 20.0,
    y0: 5.0,
    x1: 85.0,
    y1: 15.0,
};

/// Legal launch positions for the mechanism.
///
/// Trajectory-view drag steps resolving outside this rect are rejected
/// without touching the launch state.
pub const LAUNCH_ENVELOPE: Rect = Rect {
    x0: -6.0,
    y0: 0.2,
    x1: -1.0,
    y1: 1.25,
};

/// Width of the goal rim opening, in meters (42 in).
pub const RIM_WIDTH: f64 = 1.04;

/// Height of the goal rim plane above the ground, in meters (72 in).
pub const RIM_HEIGHT: f64 = 1.83;

/// Grid line interval along the trajectory view's x axis, in meters.
pub const TRAJECTORY_GRID_X: f64 = 1.0;

/// Grid line interval along the trajectory view's y axis, in meters.
pub const TRAJECTORY_GRID_Y: f64 = 0.5;

/// Grid line interval along the angle axis, in degrees.
pub const ANGLE_GRID: f64 = 10.0;

/// Grid line interval along the speed axis, in m/s.
pub const SPEED_GRID: f64 = 2.0;

/// Returns the goal structure outline: the rim opening straddles x = 0 and
/// the structure rises from the ground to the rim plane.
#[must_use]
pub fn goal_rect() -> Rect {
    Rect::new(-RIM_WIDTH / 2.0, 0.0, RIM_WIDTH / 2.0, RIM_HEIGHT)
}

/// Returns the ground plane: everything below y = 0 within the trajectory
/// view.
#[must_use]
pub fn ground_rect() -> Rect {
    Rect::new(TRAJECTORY_WORLD.x0, TRAJECTORY_WORLD.y0, TRAJECTORY_WORLD.x1, 0.0)
}

/// Returns `true` if `(x, y)` is a legal launch position.
#[must_use]
pub fn launch_envelope_contains(x: f64, y: f64) -> bool {
    x >= LAUNCH_ENVELOPE.x0 && x <= LAUNCH_ENVELOPE.x1 && y >= LAUNCH_ENVELOPE.y0 && y <= LAUNCH_ENVELOPE.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_envelope_accepts_interior_and_edges() {
        assert!(launch_envelope_contains(-2.8, 0.4));
        assert!(launch_envelope_contains(-6.0, 0.2));
        assert!(launch_envelope_contains(-1.0, 1.25));
    }

    #[test]
    fn launch_envelope_rejects_outside_points() {
        assert!(!launch_envelope_contains(-7.0, 0.5));
        assert!(!launch_envelope_contains(-0.5, 0.5));
        assert!(!launch_envelope_contains(-3.0, 0.1));
        assert!(!launch_envelope_contains(-3.0, 1.3));
    }

    #[test]
    fn fixtures_sit_inside_the_trajectory_view() {
        let view = TRAJECTORY_WORLD;
        let goal = goal_rect();
        assert!(goal.x0 >= view.x0 && goal.x1 <= view.x1);
        assert!(goal.y1 <= view.y1, "rim plane must be visible");
        assert!(ground_rect().y1 == 0.0, "ground plane tops out at y = 0");
    }
}
