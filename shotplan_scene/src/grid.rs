// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared grid, tick-label, and axis-title layers.

use kurbo::{Point, Rect};

use shotplan_view2d::ViewTransform;

use crate::color;
use crate::ops::{Scene, TextAlign};

const GRID_WIDTH: f64 = 1.0;
const TICK_SIZE: f64 = 11.0;
const TITLE_SIZE: f64 = 13.0;
const EDGE_PAD: f64 = 4.0;

/// World coordinates of grid lines: multiples of `step` inside `start..end`.
fn ticks(start: f64, end: f64, step: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut t = (start / step).ceil() * step;
    // Tolerate float error at the domain edges.
    let eps = step * 1e-9;
    while t <= end + eps {
        out.push(t);
        t += step;
    }
    out
}

/// Pushes grid lines and tick labels for the given world domain.
///
/// Vertical lines every `step_x` world units labeled along the bottom edge,
/// horizontal lines every `step_y` labeled along the left edge. Label
/// precision is in decimal places per axis.
pub(crate) fn push_grid(
    scene: &mut Scene,
    view: &ViewTransform,
    world: Rect,
    step_x: f64,
    step_y: f64,
    x_decimals: usize,
    y_decimals: usize,
) {
    let top_left = view.to_pixel(Point::new(world.x0, world.y1));
    let bottom_right = view.to_pixel(Point::new(world.x1, world.y0));

    for wx in ticks(world.x0, world.x1, step_x) {
        let px = view.x_axis().to_pixel(wx);
        scene.stroke_polyline(
            vec![Point::new(px, top_left.y), Point::new(px, bottom_right.y)],
            GRID_WIDTH,
            color::GRID,
        );
        scene.text(
            Point::new(px, bottom_right.y - EDGE_PAD),
            format!("{wx:.x_decimals$}"),
            TICK_SIZE,
            TextAlign::Center,
            color::TEXT,
        );
    }

    for wy in ticks(world.y0, world.y1, step_y) {
        let py = view.y_axis().to_pixel(wy);
        scene.stroke_polyline(
            vec![Point::new(top_left.x, py), Point::new(bottom_right.x, py)],
            GRID_WIDTH,
            color::GRID,
        );
        scene.text(
            Point::new(top_left.x + EDGE_PAD, py - EDGE_PAD),
            format!("{wy:.y_decimals$}"),
            TICK_SIZE,
            TextAlign::Start,
            color::TEXT,
        );
    }
}

/// Pushes the two axis titles: x centered along the bottom, y at the top
/// left corner.
pub(crate) fn push_axis_titles(
    scene: &mut Scene,
    view: &ViewTransform,
    world: Rect,
    x_title: &str,
    y_title: &str,
) {
    let top_left = view.to_pixel(Point::new(world.x0, world.y1));
    let bottom_right = view.to_pixel(Point::new(world.x1, world.y0));
    let center_x = (top_left.x + bottom_right.x) / 2.0;
    scene.text(
        Point::new(center_x, bottom_right.y - TICK_SIZE - 2.0 * EDGE_PAD),
        x_title.to_owned(),
        TITLE_SIZE,
        TextAlign::Center,
        color::TEXT,
    );
    scene.text(
        Point::new(top_left.x + EDGE_PAD, top_left.y + TITLE_SIZE + EDGE_PAD),
        y_title.to_owned(),
        TITLE_SIZE,
        TextAlign::Start,
        color::TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::ticks;

    #[test]
    fn ticks_cover_multiples_inside_the_range() {
        assert_eq!(ticks(-6.2, 1.0, 1.0), vec![-6.0, -5.0, -4.0, -3.0, -2.0, -1.0, 0.0, 1.0]);
        assert_eq!(ticks(20.0, 85.0, 10.0).len(), 7); // 20, 30, ..., 80
        assert_eq!(ticks(5.0, 15.0, 2.0), vec![6.0, 8.0, 10.0, 12.0, 14.0]);
    }

    #[test]
    fn ticks_include_an_edge_that_is_a_multiple() {
        let t = ticks(-0.1, 4.0, 0.5);
        assert_eq!(t.first().copied(), Some(0.0));
        assert_eq!(t.last().copied(), Some(4.0));
        assert_eq!(t.len(), 9);
    }
}
