// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Palette and the heatmap color ramp.

use peniko::Color;
use peniko::color::{AlphaColor, Hsl};

/// Canvas background.
pub(crate) const BACKGROUND: Color = Color::WHITE;

/// Reference grid lines.
pub(crate) const GRID: Color = Color::from_rgb8(0xd6, 0xd6, 0xd6);

/// Tick labels and axis titles.
pub(crate) const TEXT: Color = Color::from_rgb8(0x33, 0x33, 0x33);

/// Ground plane fill.
pub(crate) const GROUND: Color = Color::from_rgb8(0x9a, 0x8a, 0x78);

/// Goal structure outline.
pub(crate) const GOAL: Color = Color::from_rgb8(0xe6, 0x7e, 0x22);

/// Legal launch envelope outline.
pub(crate) const ENVELOPE_OUTLINE: Color = Color::from_rgb8(0x34, 0x98, 0xdb);

/// Feasibility band stroke; the fill is the same color at low alpha.
pub(crate) const BAND: Color = Color::from_rgb8(0x27, 0xae, 0x60);

/// Trajectory stroke for a successful shot.
pub(crate) const SHOT_SUCCESS: Color = Color::from_rgb8(0x27, 0xae, 0x60);

/// Trajectory stroke for an undershoot or overshoot.
pub(crate) const SHOT_FAILURE: Color = Color::from_rgb8(0xe7, 0x4c, 0x3c);

/// Current-state marker.
pub(crate) const MARKER: Color = Color::from_rgb8(0x29, 0x80, 0xb9);

/// Maps a heatmap cell value onto the red→green hue ramp.
///
/// The value is normalized by the field's maximum and mapped linearly onto
/// hue 0 (red) through hue 120 (green) at fixed saturation and lightness,
/// so the mapping is monotonic in the value. A non-positive `max` (empty or
/// all-zero field) pins everything to red.
#[must_use]
pub fn area_color(value: f64, max: f64) -> Color {
    let t = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    #[allow(
        clippy::cast_possible_truncation,
        reason = "hue is in [0, 120], well inside f32 range"
    )]
    let hue = (120.0 * t) as f32;
    AlphaColor::<Hsl>::new([hue, 80.0, 55.0, 1.0]).convert::<peniko::color::Srgb>()
}
