// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Linear map from a world-space range onto a pixel span along one axis.
///
/// The map is affine: `pixel = pixel_origin + (world - world_origin) ·
/// scale`, and [`AxisMap::to_world`] is its exact algebraic inverse. A
/// flipped map anchors the world origin at the *far* end of the pixel span
/// with a negative scale, which is how the vertical axes keep world "up"
/// pointing towards pixel row zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisMap {
    world_origin: f64,
    pixel_origin: f64,
    scale: f64,
}

impl AxisMap {
    /// Maps `world.start..world.end` onto `pixels.start..pixels.end` with
    /// increasing world values moving towards `pixels.end`.
    #[must_use]
    pub fn new(world: Range<f64>, pixels: Range<f64>) -> Self {
        Self {
            world_origin: world.start,
            pixel_origin: pixels.start,
            scale: (pixels.end - pixels.start) / (world.end - world.start),
        }
    }

    /// Maps `world.start..world.end` onto `pixels.end..pixels.start`, so
    /// increasing world values move towards `pixels.start`.
    #[must_use]
    pub fn new_flipped(world: Range<f64>, pixels: Range<f64>) -> Self {
        Self {
            world_origin: world.start,
            pixel_origin: pixels.end,
            scale: -(pixels.end - pixels.start) / (world.end - world.start),
        }
    }

    /// Converts a world coordinate into a pixel coordinate.
    #[must_use]
    pub fn to_pixel(&self, world: f64) -> f64 {
        self.pixel_origin + (world - self.world_origin) * self.scale
    }

    /// Converts a pixel coordinate back into a world coordinate.
    #[must_use]
    pub fn to_world(&self, pixel: f64) -> f64 {
        self.world_origin + (pixel - self.pixel_origin) / self.scale
    }

    /// Pixels per world unit; negative for flipped maps.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}
