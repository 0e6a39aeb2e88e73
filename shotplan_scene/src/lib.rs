// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shotplan Scene: pure display-list builders for the two planner canvases.
//!
//! A [`Scene`] is an ordered list of [`SceneOp`]s in pixel coordinates,
//! ready for any rasterizer; backends and surfaces are out of scope here.
//! The builders are pure functions of the session state, the cached service
//! responses, and a per-call [`ViewTransform`](shotplan_view2d::ViewTransform);
//! they never mutate the model and never suspend, so a redraw is one
//! synchronous call per canvas.
//!
//! Each builder redraws its canvas fully, back to front:
//!
//! 1. Clear.
//! 2. Heatmap field overlay (trajectory view only).
//! 3. Reference grid lines and tick labels at fixed world intervals.
//! 4. Axis titles.
//! 5. Static fixtures: ground plane, goal outline, launch envelope outline
//!    (trajectory view only).
//! 6. Feasibility band polygon (angle/speed view only).
//! 7. Trajectory polyline (trajectory view only).
//! 8. Current-state marker.
//!
//! Layers whose data has not arrived yet (startup, failed fetch) are simply
//! skipped; the rest of the scene still draws.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use shotplan_model::SessionState;
//! use shotplan_scene::{SceneOp, trajectory_scene};
//! use shotplan_view2d::ViewTransform;
//!
//! let session = SessionState::default();
//! let view = ViewTransform::trajectory(Size::new(720.0, 410.0));
//! let scene = trajectory_scene(&session, &view);
//! assert!(matches!(scene.ops()[0], SceneOp::Clear { .. }));
//! // The marker is always the topmost op.
//! assert!(matches!(scene.ops().last(), Some(SceneOp::FillCircle { .. })));
//! ```

mod angle_speed;
mod color;
mod grid;
mod ops;
mod trajectory;

pub use angle_speed::angle_speed_scene;
pub use color::area_color;
pub use ops::{Scene, SceneOp, TextAlign};
pub use trajectory::trajectory_scene;
