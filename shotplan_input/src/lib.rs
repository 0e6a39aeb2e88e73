// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shotplan Input: the pointer-drag state machine shared by both views.
//!
//! Dragging is modeled as an explicit finite state machine rather than
//! ambient listeners mutating shared flags, so every transition is unit
//! testable without any canvas substrate. The machine has three phases:
//!
//! - [`DragPhase::Idle`]
//! - [`DragPhase::DraggingTrajectory`]: position drags, clamped to the
//!   mechanism's legal launch envelope.
//! - [`DragPhase::DraggingAngleSpeed`]: velocity drags, unclamped.
//!
//! Pointer-down on a view enters that view's phase *and* processes one drag
//! step immediately; pointer-move processes a step while dragging;
//! pointer-up returns to idle from any phase. Each accepted step yields a
//! [`DragUpdate`]: the new launch state plus which recompute the sync layer
//! must issue (position changes invalidate trajectory *and* envelope,
//! velocity changes only the trajectory).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use shotplan_input::{DragController, PointerEvent, RecomputeKind, ViewId};
//! use shotplan_model::LaunchState;
//! use shotplan_view2d::ViewTransform;
//!
//! let size = Size::new(720.0, 410.0);
//! let trajectory = ViewTransform::trajectory(size);
//! let angle_speed = ViewTransform::angle_speed(size);
//! let state = LaunchState::new(-2.8, 0.4, 2.5, 8.0);
//!
//! let mut drag = DragController::default();
//! let pos = trajectory.to_pixel(Point::new(-3.0, 0.8));
//! let update = drag
//!     .handle(
//!         PointerEvent::Down { view: ViewId::Trajectory, pos },
//!         state,
//!         &trajectory,
//!         &angle_speed,
//!     )
//!     .unwrap();
//! assert_eq!(update.recompute, RecomputeKind::Full);
//! assert!((update.state.x - -3.0).abs() < 1e-9);
//! ```

use kurbo::Point;

use shotplan_model::{LaunchState, domain};
use shotplan_view2d::ViewTransform;

/// Which canvas a pointer event landed on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewId {
    /// The world-space trajectory view (position drags).
    Trajectory,
    /// The angle/speed view (velocity drags).
    AngleSpeed,
}

/// Pointer event in pixel coordinates of the originating view.
///
/// `Move` and `Up` carry no view: once a drag is active all movement is
/// interpreted by the phase that started it, and releases end the drag
/// wherever they happen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed on a view.
    Down {
        /// View under the pointer.
        view: ViewId,
        /// Pointer position in that view's pixel space.
        pos: Point,
    },
    /// Pointer moved.
    Move {
        /// Pointer position in the dragging view's pixel space.
        pos: Point,
    },
    /// Primary button released, anywhere.
    Up,
}

/// Current phase of the drag state machine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// Dragging the launch position on the trajectory view.
    DraggingTrajectory,
    /// Dragging the velocity projection on the angle/speed view.
    DraggingAngleSpeed,
}

/// Which derived data an accepted drag step invalidates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RecomputeKind {
    /// Position changed: recompute trajectory and feasibility envelope.
    Full,
    /// Velocity changed: recompute the trajectory only.
    TrajectoryOnly,
}

/// Result of an accepted drag step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragUpdate {
    /// The launch state to write into the session.
    pub state: LaunchState,
    /// The recompute the sync layer must issue for it.
    pub recompute: RecomputeKind,
}

/// Pointer-drag state machine over both views.
///
/// The controller holds only its phase; the launch state and the per-view
/// transforms are passed in per event, so the same controller works across
/// canvas resizes without invalidation.
#[derive(Copy, Clone, Debug, Default)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Feeds one pointer event through the state machine.
    ///
    /// Returns an update when the event is an accepted drag step; rejected
    /// steps (outside the launch envelope) and non-drag events return
    /// `None` and leave the launch state untouched.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        current: LaunchState,
        trajectory: &ViewTransform,
        angle_speed: &ViewTransform,
    ) -> Option<DragUpdate> {
        match event {
            PointerEvent::Down { view, pos } => {
                self.phase = match view {
                    ViewId::Trajectory => DragPhase::DraggingTrajectory,
                    ViewId::AngleSpeed => DragPhase::DraggingAngleSpeed,
                };
                self.step(pos, current, trajectory, angle_speed)
            }
            PointerEvent::Move { pos } => self.step(pos, current, trajectory, angle_speed),
            PointerEvent::Up => {
                self.phase = DragPhase::Idle;
                None
            }
        }
    }

    fn step(
        &self,
        pos: Point,
        current: LaunchState,
        trajectory: &ViewTransform,
        angle_speed: &ViewTransform,
    ) -> Option<DragUpdate> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::DraggingTrajectory => {
                let world = trajectory.to_world(pos);
                if !domain::launch_envelope_contains(world.x, world.y) {
                    return None;
                }
                Some(DragUpdate {
                    state: current.with_position(world.x, world.y),
                    recompute: RecomputeKind::Full,
                })
            }
            DragPhase::DraggingAngleSpeed => {
                // No world-space clamp here; the pixel surface already
                // bounds what the pointer can reach.
                let world = angle_speed.to_world(pos);
                Some(DragUpdate {
                    state: current.with_angle_speed(world.x, world.y),
                    recompute: RecomputeKind::TrajectoryOnly,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use shotplan_model::LaunchState;
    use shotplan_view2d::ViewTransform;

    use super::{DragController, DragPhase, PointerEvent, RecomputeKind, ViewId};

    const SIZE: Size = Size::new(720.0, 410.0);

    fn setup() -> (DragController, LaunchState, ViewTransform, ViewTransform) {
        (
            DragController::default(),
            LaunchState::new(-2.8, 0.4, 2.5, 8.0),
            ViewTransform::trajectory(SIZE),
            ViewTransform::angle_speed(SIZE),
        )
    }

    fn down_at(view: ViewId, transform: &ViewTransform, world: Point) -> PointerEvent {
        PointerEvent::Down {
            view,
            pos: transform.to_pixel(world),
        }
    }

    #[test]
    fn down_enters_phase_and_processes_a_step() {
        let (mut drag, state, traj, angv) = setup();
        let update = drag
            .handle(down_at(ViewId::Trajectory, &traj, Point::new(-3.0, 0.8)), state, &traj, &angv)
            .unwrap();
        assert_eq!(drag.phase(), DragPhase::DraggingTrajectory);
        assert_eq!(update.recompute, RecomputeKind::Full);
        assert!((update.state.x - -3.0).abs() < 1e-9);
        assert!((update.state.y - 0.8).abs() < 1e-9);
        // Velocity is untouched by a position drag.
        assert_eq!(update.state.vx, state.vx);
        assert_eq!(update.state.vy, state.vy);
    }

    #[test]
    fn trajectory_steps_outside_envelope_are_rejected() {
        let (mut drag, state, traj, angv) = setup();
        // Pointer-down translating to (-7, 0.5): outside the x domain.
        let update = drag.handle(
            down_at(ViewId::Trajectory, &traj, Point::new(-7.0, 0.5)),
            state,
            &traj,
            &angv,
        );
        assert!(update.is_none(), "no state change and no recompute");
        // The machine is still dragging; a later in-bounds move is accepted.
        assert_eq!(drag.phase(), DragPhase::DraggingTrajectory);
        let update = drag.handle(
            PointerEvent::Move {
                pos: traj.to_pixel(Point::new(-5.5, 1.0)),
            },
            state,
            &traj,
            &angv,
        );
        assert!(update.is_some());
    }

    #[test]
    fn envelope_edges_are_legal() {
        let (mut drag, state, traj, angv) = setup();
        // Nudged inward by well under a pixel so the pixel round trip
        // cannot push them outside the envelope.
        for world in [Point::new(-5.999999, 0.200001), Point::new(-1.000001, 1.249999)] {
            let mut drag2 = drag;
            let update = drag2.handle(down_at(ViewId::Trajectory, &traj, world), state, &traj, &angv);
            assert!(update.is_some(), "edge point {world:?} must be accepted");
        }
        for world in [Point::new(-6.01, 0.5), Point::new(-3.0, 0.19), Point::new(-3.0, 1.26)] {
            let update = drag.handle(down_at(ViewId::Trajectory, &traj, world), state, &traj, &angv);
            assert!(update.is_none(), "outside point {world:?} must be rejected");
        }
    }

    #[test]
    fn angle_speed_drag_writes_velocity_only() {
        let (mut drag, state, traj, angv) = setup();
        let update = drag
            .handle(down_at(ViewId::AngleSpeed, &angv, Point::new(60.0, 10.0)), state, &traj, &angv)
            .unwrap();
        assert_eq!(update.recompute, RecomputeKind::TrajectoryOnly);
        assert_eq!(update.state.x, state.x);
        assert_eq!(update.state.y, state.y);
        assert!((update.state.angle_deg() - 60.0).abs() < 1e-9);
        assert!((update.state.speed() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let (mut drag, state, traj, angv) = setup();
        let update = drag.handle(
            PointerEvent::Move {
                pos: Point::new(100.0, 100.0),
            },
            state,
            &traj,
            &angv,
        );
        assert!(update.is_none());
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn up_returns_to_idle_from_any_phase() {
        let (mut drag, state, traj, angv) = setup();
        drag.handle(down_at(ViewId::AngleSpeed, &angv, Point::new(45.0, 8.0)), state, &traj, &angv);
        assert_eq!(drag.phase(), DragPhase::DraggingAngleSpeed);
        assert!(drag.handle(PointerEvent::Up, state, &traj, &angv).is_none());
        assert_eq!(drag.phase(), DragPhase::Idle);
        // A move after release does nothing.
        let update = drag.handle(
            PointerEvent::Move {
                pos: Point::new(10.0, 10.0),
            },
            state,
            &traj,
            &angv,
        );
        assert!(update.is_none());
    }
}
