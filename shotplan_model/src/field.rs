// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Static scalar field over launch positions, drawn as the trajectory view's
/// background heatmap.
///
/// Fetched once at startup and immutable afterwards. `area_grid` holds one
/// row per `x_range` entry and one column per `y_range` entry; the shape
/// invariant is checked at the wire boundary in `shotplan_protocol`, so
/// consumers of this type may index freely.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapField {
    /// Sample x coordinates, in meters, uniformly spaced ascending.
    pub x_range: Vec<f64>,
    /// Sample y coordinates, in meters, uniformly spaced ascending.
    pub y_range: Vec<f64>,
    /// Scalar value per `(x, y)` sample, indexed `[x][y]`.
    pub area_grid: Vec<Vec<f64>>,
}

impl HeatmapField {
    /// Returns the largest value in the grid, or `0.0` for an empty grid.
    ///
    /// Used to normalize cell values before color mapping.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.area_grid
            .iter()
            .flatten()
            .copied()
            .fold(0.0_f64, f64::max)
    }

    /// Returns the x spacing between samples, derived from the coordinate
    /// sequence itself (never assumed from canvas geometry).
    #[must_use]
    pub fn x_spacing(&self) -> f64 {
        spacing(&self.x_range)
    }

    /// Returns the y spacing between samples, derived from the coordinate
    /// sequence itself.
    #[must_use]
    pub fn y_spacing(&self) -> f64 {
        spacing(&self.y_range)
    }
}

fn spacing(range: &[f64]) -> f64 {
    match range {
        [a, b, ..] => b - a,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::HeatmapField;

    fn field() -> HeatmapField {
        HeatmapField {
            x_range: vec![-6.0, -5.8, -5.6],
            y_range: vec![0.2, 0.4],
            area_grid: vec![vec![1.0, 2.0], vec![0.5, 4.0], vec![3.0, 0.0]],
        }
    }

    #[test]
    fn max_value_scans_the_whole_grid() {
        assert_eq!(field().max_value(), 4.0);
    }

    #[test]
    fn spacing_comes_from_the_coordinate_sequences() {
        let f = field();
        assert!((f.x_spacing() - 0.2).abs() < 1e-12);
        assert!((f.y_spacing() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn degenerate_field_has_zero_spacing_and_max() {
        let f = HeatmapField {
            x_range: vec![-6.0],
            y_range: vec![],
            area_grid: vec![vec![]],
        };
        assert_eq!(f.x_spacing(), 0.0);
        assert_eq!(f.y_spacing(), 0.0);
        assert_eq!(f.max_value(), 0.0);
    }
}
