// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use shotplan_model::{FeasibilityEnvelope, SessionState, domain};
use shotplan_view2d::ViewTransform;

use crate::color;
use crate::grid;
use crate::ops::Scene;

const BAND_STROKE_WIDTH: f64 = 1.5;
const BAND_FILL_ALPHA: f32 = 0.25;
const MARKER_RADIUS: f64 = 6.0;

/// Builds the full angle/speed-view scene for one redraw.
///
/// Layers, back to front: clear, grid and labels, axis titles, feasibility
/// band, current angle/speed marker. The band layer is skipped while the
/// envelope cache is empty.
#[must_use]
pub fn angle_speed_scene(session: &SessionState, view: &ViewTransform) -> Scene {
    let mut scene = Scene::new();
    let world = domain::ANGLE_SPEED_WORLD;

    scene.clear(color::BACKGROUND);

    grid::push_grid(&mut scene, view, world, domain::ANGLE_GRID, domain::SPEED_GRID, 0, 0);
    grid::push_axis_titles(&mut scene, view, world, "angle (deg)", "speed (m/s)");

    if let Some(envelope) = session.envelope() {
        push_band(&mut scene, view, envelope);
    }

    let state = session.state();
    scene.fill_circle(
        view.to_pixel(Point::new(state.angle_deg(), state.speed())),
        MARKER_RADIUS,
        color::MARKER,
    );

    scene
}

/// Closed feasibility band: lower bound walked forward, upper bound walked
/// backward, filled translucent and stroked solid.
fn push_band(scene: &mut Scene, view: &ViewTransform, envelope: &FeasibilityEnvelope) {
    if envelope.is_empty() {
        return;
    }
    let mut points: Vec<Point> = Vec::with_capacity(envelope.len() * 2 + 1);
    for (&angle, &speed) in envelope.angles.iter().zip(envelope.lower_bound.iter()) {
        points.push(view.to_pixel(Point::new(angle, speed)));
    }
    for (&angle, &speed) in envelope.angles.iter().zip(envelope.upper_bound.iter()).rev() {
        points.push(view.to_pixel(Point::new(angle, speed)));
    }

    scene.fill_polygon(points.clone(), color::BAND.with_alpha(BAND_FILL_ALPHA));
    // Close the outline back to the first vertex.
    let first = points[0];
    points.push(first);
    scene.stroke_polyline(points, BAND_STROKE_WIDTH, color::BAND);
}
