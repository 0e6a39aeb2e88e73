// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Feasibility envelope for the current launch position: the band of speeds,
/// per angle, that would reach the goal.
///
/// Depends only on position, so velocity-only drags never refetch it. The
/// three arrays are equal length (checked at the wire boundary); the band is
/// drawn as a closed polygon walking `lower_bound` forward and `upper_bound`
/// backward.
#[derive(Clone, Debug, PartialEq)]
pub struct FeasibilityEnvelope {
    /// Sampled launch angles, in degrees, ascending.
    pub angles: Vec<f64>,
    /// Minimum feasible speed per angle, in m/s.
    pub lower_bound: Vec<f64>,
    /// Maximum feasible speed per angle, in m/s.
    pub upper_bound: Vec<f64>,
    /// Integrated area of the feasible region, the scalar the heatmap field
    /// is built from.
    pub area: f64,
}

impl FeasibilityEnvelope {
    /// Number of angle samples in the band.
    #[must_use]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Returns `true` if the band has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::FeasibilityEnvelope;

    #[test]
    fn len_tracks_angle_samples() {
        let envelope = FeasibilityEnvelope {
            angles: vec![50.0, 60.0, 70.0],
            lower_bound: vec![6.0, 6.5, 7.2],
            upper_bound: vec![7.0, 7.8, 9.0],
            area: 1.4,
        };
        assert_eq!(envelope.len(), 3);
        assert!(!envelope.is_empty());
    }
}
