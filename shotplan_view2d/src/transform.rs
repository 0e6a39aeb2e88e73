// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use shotplan_model::domain;

use crate::AxisMap;

/// Bidirectional world↔pixel transform for one canvas.
///
/// A `ViewTransform` is a value, not a property of any drawing surface: it
/// is constructed per draw call from the view's fixed world bounds and the
/// surface's current pixel size, then passed explicitly to whichever layer
/// needs it (scene building, drag handling). The x and y axes are mapped
/// independently, with y flipped so world "up" is pixel "up".
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewTransform {
    x: AxisMap,
    y: AxisMap,
}

impl ViewTransform {
    /// Builds a transform stretching `world` over a `size` pixel surface,
    /// with the vertical axis flipped.
    #[must_use]
    pub fn new(world: Rect, size: Size) -> Self {
        Self {
            x: AxisMap::new(world.x0..world.x1, 0.0..size.width),
            y: AxisMap::new_flipped(world.y0..world.y1, 0.0..size.height),
        }
    }

    /// Transform for the trajectory view: x ∈ [-6.2, 1.0] m, y ∈ [-0.1, 4.0] m.
    #[must_use]
    pub fn trajectory(size: Size) -> Self {
        Self::new(domain::TRAJECTORY_WORLD, size)
    }

    /// Transform for the angle/speed view: angle ∈ [20, 85] degrees on x,
    /// speed ∈ [5, 15] m/s on y.
    #[must_use]
    pub fn angle_speed(size: Size) -> Self {
        Self::new(domain::ANGLE_SPEED_WORLD, size)
    }

    /// Converts a world-space point into pixel coordinates.
    #[must_use]
    pub fn to_pixel(&self, world: Point) -> Point {
        Point::new(self.x.to_pixel(world.x), self.y.to_pixel(world.y))
    }

    /// Converts a pixel-space point back into world coordinates.
    #[must_use]
    pub fn to_world(&self, pixel: Point) -> Point {
        Point::new(self.x.to_world(pixel.x), self.y.to_world(pixel.y))
    }

    /// Converts a world-space rectangle into a normalized pixel rectangle.
    ///
    /// The vertical flip swaps which world corner lands at the pixel
    /// minimum, so the corners are reordered into a well-formed `Rect`.
    #[must_use]
    pub fn to_pixel_rect(&self, world: Rect) -> Rect {
        let a = self.to_pixel(Point::new(world.x0, world.y0));
        let b = self.to_pixel(Point::new(world.x1, world.y1));
        Rect::from_points(a, b)
    }

    /// The horizontal axis map.
    #[must_use]
    pub fn x_axis(&self) -> AxisMap {
        self.x
    }

    /// The vertical axis map.
    #[must_use]
    pub fn y_axis(&self) -> AxisMap {
        self.y
    }
}
