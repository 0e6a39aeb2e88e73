// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shotplan Protocol: wire contracts with the external physics service.
//!
//! Three request/response pairs exist, with field names fixed by the
//! service:
//!
//! - `GET` heatmap → [`HeatmapResponse`] (`x_range`, `y_range`,
//!   `area_grid`), fetched once at startup.
//! - `POST` trajectory with [`TrajectoryRequest`] (the full launch state) →
//!   [`TrajectoryResponse`] (`x`, `y`, `result`).
//! - `POST` envelope with [`EnvelopeRequest`] (position only) →
//!   [`EnvelopeResponse`] (`angles`, `lower_bound`, `upper_bound`, `area`).
//!
//! Decoding into the `shotplan_model` cache types goes through `TryFrom`
//! impls that check only the basic shape invariants (equal array lengths,
//! grid dimensions). A violation is a [`ProtocolError`] and is handled like
//! any transport failure: logged upstream, previous caches left untouched.
//!
//! ```
//! use shotplan_model::{ShotOutcome, TrajectorySample};
//! use shotplan_protocol::decode_trajectory;
//!
//! let sample: TrajectorySample =
//!     decode_trajectory(r#"{"x": [0.0, 0.4], "y": [0.4, 1.1], "result": -1}"#).unwrap();
//! assert_eq!(sample.outcome, ShotOutcome::Undershoot);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shotplan_model::{FeasibilityEnvelope, HeatmapField, LaunchState, ShotOutcome, TrajectorySample};

/// Failure to decode a service response into a model type.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The response body was not valid JSON for the expected shape.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Two arrays that must run in lockstep have different lengths.
    #[error("mismatched array lengths in {context}: {left} vs {right}")]
    LengthMismatch {
        /// Which response carried the mismatch.
        context: &'static str,
        /// Length of the first array.
        left: usize,
        /// Length of the second array.
        right: usize,
    },
    /// The heatmap grid does not match its coordinate ranges.
    #[error("heatmap grid shape {rows}x{cols} does not match ranges {x_len}x{y_len}")]
    GridShape {
        /// Rows present in `area_grid`.
        rows: usize,
        /// Columns present in the offending row.
        cols: usize,
        /// Expected rows, from `x_range`.
        x_len: usize,
        /// Expected columns, from `y_range`.
        y_len: usize,
    },
}

/// Payload for the trajectory recompute: the full launch state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRequest {
    /// Launch x position, meters.
    pub x: f64,
    /// Launch y position, meters.
    pub y: f64,
    /// Horizontal velocity, m/s.
    pub vx: f64,
    /// Vertical velocity, m/s.
    pub vy: f64,
}

impl From<LaunchState> for TrajectoryRequest {
    fn from(state: LaunchState) -> Self {
        Self {
            x: state.x,
            y: state.y,
            vx: state.vx,
            vy: state.vy,
        }
    }
}

/// Payload for the envelope recompute: position only, since the envelope is
/// independent of velocity.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeRequest {
    /// Launch x position, meters.
    pub x: f64,
    /// Launch y position, meters.
    pub y: f64,
}

impl From<LaunchState> for EnvelopeRequest {
    fn from(state: LaunchState) -> Self {
        Self {
            x: state.x,
            y: state.y,
        }
    }
}

/// Trajectory recompute response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrajectoryResponse {
    /// Sampled x positions along the flight.
    pub x: Vec<f64>,
    /// Sampled y positions along the flight.
    pub y: Vec<f64>,
    /// Outcome code: `0` success, `-1` undershoot, other overshoot.
    pub result: i64,
}

impl TryFrom<TrajectoryResponse> for TrajectorySample {
    type Error = ProtocolError;

    fn try_from(resp: TrajectoryResponse) -> Result<Self, Self::Error> {
        if resp.x.len() != resp.y.len() {
            return Err(ProtocolError::LengthMismatch {
                context: "trajectory",
                left: resp.x.len(),
                right: resp.y.len(),
            });
        }
        Ok(Self {
            x: resp.x,
            y: resp.y,
            outcome: ShotOutcome::from_code(resp.result),
        })
    }
}

/// Envelope recompute response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnvelopeResponse {
    /// Sampled launch angles, degrees.
    pub angles: Vec<f64>,
    /// Minimum feasible speed per angle.
    pub lower_bound: Vec<f64>,
    /// Maximum feasible speed per angle.
    pub upper_bound: Vec<f64>,
    /// Integrated feasible-region area. Older service builds omit it.
    #[serde(default)]
    pub area: f64,
}

impl TryFrom<EnvelopeResponse> for FeasibilityEnvelope {
    type Error = ProtocolError;

    fn try_from(resp: EnvelopeResponse) -> Result<Self, Self::Error> {
        for len in [resp.lower_bound.len(), resp.upper_bound.len()] {
            if len != resp.angles.len() {
                return Err(ProtocolError::LengthMismatch {
                    context: "envelope",
                    left: resp.angles.len(),
                    right: len,
                });
            }
        }
        Ok(Self {
            angles: resp.angles,
            lower_bound: resp.lower_bound,
            upper_bound: resp.upper_bound,
            area: resp.area,
        })
    }
}

/// Startup heatmap response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeatmapResponse {
    /// Sample x coordinates.
    pub x_range: Vec<f64>,
    /// Sample y coordinates.
    pub y_range: Vec<f64>,
    /// Scalar grid, one row per x sample, one column per y sample.
    pub area_grid: Vec<Vec<f64>>,
}

impl TryFrom<HeatmapResponse> for HeatmapField {
    type Error = ProtocolError;

    fn try_from(resp: HeatmapResponse) -> Result<Self, Self::Error> {
        let (x_len, y_len) = (resp.x_range.len(), resp.y_range.len());
        if resp.area_grid.len() != x_len {
            return Err(ProtocolError::GridShape {
                rows: resp.area_grid.len(),
                cols: resp.area_grid.first().map_or(0, Vec::len),
                x_len,
                y_len,
            });
        }
        if let Some(row) = resp.area_grid.iter().find(|row| row.len() != y_len) {
            return Err(ProtocolError::GridShape {
                rows: resp.area_grid.len(),
                cols: row.len(),
                x_len,
                y_len,
            });
        }
        Ok(Self {
            x_range: resp.x_range,
            y_range: resp.y_range,
            area_grid: resp.area_grid,
        })
    }
}

/// Decodes a trajectory response body into a validated sample.
pub fn decode_trajectory(body: &str) -> Result<TrajectorySample, ProtocolError> {
    serde_json::from_str::<TrajectoryResponse>(body)?.try_into()
}

/// Decodes an envelope response body into a validated envelope.
pub fn decode_envelope(body: &str) -> Result<FeasibilityEnvelope, ProtocolError> {
    serde_json::from_str::<EnvelopeResponse>(body)?.try_into()
}

/// Decodes a heatmap response body into a validated field.
pub fn decode_heatmap(body: &str) -> Result<HeatmapField, ProtocolError> {
    serde_json::from_str::<HeatmapResponse>(body)?.try_into()
}

#[cfg(test)]
mod tests {
    use shotplan_model::{LaunchState, ShotOutcome};

    use super::*;

    #[test]
    fn trajectory_request_preserves_field_names() {
        let req = TrajectoryRequest::from(LaunchState::new(-2.8, 0.4, 2.5, 8.0));
        let body = serde_json::to_string(&req).unwrap();
        assert_eq!(body, r#"{"x":-2.8,"y":0.4,"vx":2.5,"vy":8.0}"#);
    }

    #[test]
    fn envelope_request_carries_position_only() {
        let req = EnvelopeRequest::from(LaunchState::new(-2.8, 0.4, 2.5, 8.0));
        let body = serde_json::to_string(&req).unwrap();
        assert_eq!(body, r#"{"x":-2.8,"y":0.4}"#);
    }

    #[test]
    fn trajectory_decodes_and_classifies_result() {
        let sample = decode_trajectory(r#"{"x":[0.0,0.5],"y":[0.4,1.0],"result":0}"#).unwrap();
        assert_eq!(sample.outcome, ShotOutcome::Success);
        let sample = decode_trajectory(r#"{"x":[],"y":[],"result":3}"#).unwrap();
        assert_eq!(sample.outcome, ShotOutcome::Overshoot);
    }

    #[test]
    fn trajectory_length_mismatch_is_rejected() {
        let err = decode_trajectory(r#"{"x":[0.0,0.5],"y":[0.4],"result":0}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::LengthMismatch { context: "trajectory", .. }));
    }

    #[test]
    fn envelope_decodes_with_and_without_area() {
        let env = decode_envelope(
            r#"{"angles":[50.0,60.0],"lower_bound":[6.0,6.5],"upper_bound":[7.0,7.8],"area":1.2}"#,
        )
        .unwrap();
        assert_eq!(env.area, 1.2);
        let env = decode_envelope(
            r#"{"angles":[50.0],"lower_bound":[6.0],"upper_bound":[7.0]}"#,
        )
        .unwrap();
        assert_eq!(env.area, 0.0);
    }

    #[test]
    fn envelope_bound_length_mismatch_is_rejected() {
        let err = decode_envelope(
            r#"{"angles":[50.0,60.0],"lower_bound":[6.0],"upper_bound":[7.0,7.8]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProtocolError::LengthMismatch { context: "envelope", .. }));
    }

    #[test]
    fn heatmap_grid_shape_is_checked_both_ways() {
        let ok = decode_heatmap(
            r#"{"x_range":[-6.0,-5.8],"y_range":[0.2],"area_grid":[[1.0],[2.0]]}"#,
        );
        assert!(ok.is_ok());

        let err = decode_heatmap(
            r#"{"x_range":[-6.0,-5.8],"y_range":[0.2],"area_grid":[[1.0]]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProtocolError::GridShape { rows: 1, x_len: 2, .. }));

        let err = decode_heatmap(
            r#"{"x_range":[-6.0],"y_range":[0.2,0.4],"area_grid":[[1.0]]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProtocolError::GridShape { cols: 1, y_len: 2, .. }));
    }

    #[test]
    fn garbage_body_is_malformed() {
        assert!(matches!(
            decode_trajectory("not json").unwrap_err(),
            ProtocolError::Malformed(_)
        ));
    }
}
