// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use peniko::Color;

/// Horizontal anchoring for a text op, relative to its position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// Position marks the left edge of the text.
    Start,
    /// Position marks the center of the text.
    Center,
    /// Position marks the right edge of the text.
    End,
}

/// One drawing operation, in pixel coordinates.
///
/// The set is intentionally small: exactly what the two canvases need. All
/// geometry arrives fully transformed; a backend only rasterizes.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneOp {
    /// Fill the whole surface.
    Clear {
        /// Background color.
        color: Color,
    },
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle in pixel coordinates.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Stroke an axis-aligned rectangle outline.
    StrokeRect {
        /// Rectangle in pixel coordinates.
        rect: Rect,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Fill a closed polygon.
    FillPolygon {
        /// Vertices in order; the polygon closes implicitly.
        points: Vec<Point>,
        /// Fill color.
        color: Color,
    },
    /// Stroke an open polyline through the given points in order.
    StrokePolyline {
        /// Vertices in order.
        points: Vec<Point>,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Fill a circle.
    FillCircle {
        /// Center in pixel coordinates.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// Draw a single line of text.
    Text {
        /// Anchor position in pixel coordinates (baseline).
        pos: Point,
        /// Text content.
        text: String,
        /// Font size in pixels.
        size: f64,
        /// Horizontal anchoring relative to `pos`.
        align: TextAlign,
        /// Text color.
        color: Color,
    },
}

/// Ordered display list for one canvas redraw.
///
/// Ops are applied front to back in push order; later ops draw over earlier
/// ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    ops: Vec<SceneOp>,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded ops in draw order.
    #[must_use]
    pub fn ops(&self) -> &[SceneOp] {
        &self.ops
    }

    /// Number of recorded ops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Records a clear of the whole surface.
    pub fn clear(&mut self, color: Color) {
        self.ops.push(SceneOp::Clear { color });
    }

    /// Records a filled rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(SceneOp::FillRect { rect, color });
    }

    /// Records a stroked rectangle outline.
    pub fn stroke_rect(&mut self, rect: Rect, width: f64, color: Color) {
        self.ops.push(SceneOp::StrokeRect { rect, width, color });
    }

    /// Records a filled polygon.
    pub fn fill_polygon(&mut self, points: Vec<Point>, color: Color) {
        self.ops.push(SceneOp::FillPolygon { points, color });
    }

    /// Records a stroked polyline.
    pub fn stroke_polyline(&mut self, points: Vec<Point>, width: f64, color: Color) {
        self.ops.push(SceneOp::StrokePolyline { points, width, color });
    }

    /// Records a filled circle.
    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ops.push(SceneOp::FillCircle { center, radius, color });
    }

    /// Records a text line.
    pub fn text(&mut self, pos: Point, text: String, size: f64, align: TextAlign, color: Color) {
        self.ops.push(SceneOp::Text {
            pos,
            text,
            size,
            align,
            color,
        });
    }
}
