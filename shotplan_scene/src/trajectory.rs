// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use shotplan_model::{SessionState, domain};
use shotplan_view2d::ViewTransform;

use crate::color;
use crate::grid;
use crate::ops::Scene;

const TRAJECTORY_WIDTH: f64 = 2.5;
const FIXTURE_WIDTH: f64 = 2.0;
const MARKER_RADIUS: f64 = 6.0;

/// Builds the full trajectory-view scene for one redraw.
///
/// Layers, back to front: clear, heatmap field, grid and labels, axis
/// titles, fixtures (ground, goal, launch envelope), trajectory polyline,
/// launch-point marker. The heatmap and polyline layers are skipped while
/// their caches are empty.
#[must_use]
pub fn trajectory_scene(session: &SessionState, view: &ViewTransform) -> Scene {
    let mut scene = Scene::new();
    let world = domain::TRAJECTORY_WORLD;

    scene.clear(color::BACKGROUND);

    if let Some(field) = session.heatmap() {
        push_heatmap(&mut scene, view, field);
    }

    grid::push_grid(
        &mut scene,
        view,
        world,
        domain::TRAJECTORY_GRID_X,
        domain::TRAJECTORY_GRID_Y,
        0,
        1,
    );
    grid::push_axis_titles(&mut scene, view, world, "x (m)", "y (m)");

    scene.fill_rect(view.to_pixel_rect(domain::ground_rect()), color::GROUND);
    scene.stroke_rect(view.to_pixel_rect(domain::goal_rect()), FIXTURE_WIDTH, color::GOAL);
    scene.stroke_rect(
        view.to_pixel_rect(domain::LAUNCH_ENVELOPE),
        FIXTURE_WIDTH,
        color::ENVELOPE_OUTLINE,
    );

    if let Some(sample) = session.trajectory() {
        let points: Vec<Point> = sample.points().map(|p| view.to_pixel(p)).collect();
        if points.len() >= 2 {
            let stroke = if sample.outcome.is_success() {
                color::SHOT_SUCCESS
            } else {
                color::SHOT_FAILURE
            };
            scene.stroke_polyline(points, TRAJECTORY_WIDTH, stroke);
        }
    }

    scene.fill_circle(
        view.to_pixel(session.state().position()),
        MARKER_RADIUS,
        color::MARKER,
    );

    scene
}

/// Fills one rect per heatmap cell.
///
/// The cell footprint comes from the field's own coordinate spacing mapped
/// through the transform, so differing grid resolutions and canvas sizes
/// stay correct without assuming any pixel geometry.
fn push_heatmap(scene: &mut Scene, view: &ViewTransform, field: &shotplan_model::HeatmapField) {
    let max = field.max_value();
    let dx = field.x_spacing();
    let dy = field.y_spacing();
    for (xi, &x) in field.x_range.iter().enumerate() {
        for (yi, &y) in field.y_range.iter().enumerate() {
            let value = field.area_grid[xi][yi];
            let cell = Rect::new(x, y, x + dx, y + dy);
            scene.fill_rect(view.to_pixel_rect(cell), color::area_color(value, max));
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use shotplan_model::{HeatmapField, SessionState, ShotOutcome, TrajectorySample};
    use shotplan_view2d::ViewTransform;

    use super::trajectory_scene;
    use crate::ops::SceneOp;

    const SIZE: Size = Size::new(720.0, 410.0);

    fn view() -> ViewTransform {
        ViewTransform::trajectory(SIZE)
    }

    fn heatmap() -> HeatmapField {
        HeatmapField {
            x_range: vec![-6.0, -5.8],
            y_range: vec![0.2, 0.4, 0.6],
            area_grid: vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]],
        }
    }

    #[test]
    fn empty_caches_still_draw_background_and_marker() {
        let scene = trajectory_scene(&SessionState::default(), &view());
        assert!(matches!(scene.ops()[0], SceneOp::Clear { .. }));
        assert!(matches!(scene.ops().last(), Some(SceneOp::FillCircle { .. })));
        // No polyline without a trajectory cache.
        assert!(
            !scene
                .ops()
                .iter()
                .any(|op| matches!(op, SceneOp::StrokePolyline { width, .. } if *width > 2.0)),
            "trajectory layer must be skipped"
        );
    }

    #[test]
    fn heatmap_layer_emits_one_cell_per_grid_entry() {
        let mut session = SessionState::default();
        session.set_heatmap(heatmap());
        let without: usize = trajectory_scene(&SessionState::default(), &view()).len();
        let with = trajectory_scene(&session, &view()).len();
        assert_eq!(with - without, 6, "2x3 grid adds six cell fills");
    }

    #[test]
    fn heatmap_cells_sit_between_grid_and_clear() {
        let mut session = SessionState::default();
        session.set_heatmap(heatmap());
        let scene = trajectory_scene(&session, &view());
        // Op 0 is the clear; ops 1..=6 are the heatmap cells.
        for op in &scene.ops()[1..=6] {
            assert!(matches!(op, SceneOp::FillRect { .. }), "expected a cell fill, got {op:?}");
        }
    }

    #[test]
    fn trajectory_polyline_color_tracks_outcome() {
        let sample = |outcome| TrajectorySample {
            x: vec![-2.8, -2.0, -1.0],
            y: vec![0.4, 1.9, 2.5],
            outcome,
        };
        let mut session = SessionState::default();
        session.set_trajectory(sample(ShotOutcome::Success));
        let success_color = polyline_color(&trajectory_scene(&session, &view()));
        session.set_trajectory(sample(ShotOutcome::Undershoot));
        let failure_color = polyline_color(&trajectory_scene(&session, &view()));
        assert_ne!(success_color, failure_color);
    }

    fn polyline_color(scene: &crate::Scene) -> peniko::Color {
        scene
            .ops()
            .iter()
            .find_map(|op| match op {
                SceneOp::StrokePolyline { width, color, .. } if *width > 2.0 => Some(*color),
                _ => None,
            })
            .expect("trajectory polyline present")
    }

    #[test]
    fn marker_sits_at_the_launch_position() {
        let session = SessionState::default();
        let scene = trajectory_scene(&session, &view());
        let expected = view().to_pixel(session.state().position());
        match scene.ops().last() {
            Some(SceneOp::FillCircle { center, .. }) => {
                assert!((center.x - expected.x).abs() < 1e-9);
                assert!((center.y - expected.y).abs() < 1e-9);
            }
            other => panic!("expected marker on top, got {other:?}"),
        }
    }
}
