// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shotplan Model: the shared launch state and its derived caches.
//!
//! This crate holds the headless data model behind both Shotplan canvases:
//!
//! - [`LaunchState`]: the single position + velocity vector the user
//!   manipulates by dragging, with angle/speed derivations.
//! - [`HeatmapField`], [`TrajectorySample`], [`FeasibilityEnvelope`]: the
//!   cached results of the external physics service, replaced wholesale on
//!   each recompute and never partially mutated.
//! - [`SessionState`]: the single owner of the launch state and the caches,
//!   exposing read/write accessors to the drag, sync, and scene layers.
//! - [`domain`]: fixed world-space bounds, fixtures, and grid intervals
//!   shared by the views.
//!
//! Everything here is plain data. Coordinate mapping lives in
//! `shotplan_view2d`, drawing in `shotplan_scene`, and request sequencing in
//! `shotplan_sync`; none of them mutate these types except through
//! [`SessionState`]'s accessors.
//!
//! ## Minimal example
//!
//! ```
//! use shotplan_model::{LaunchState, SessionState};
//!
//! let mut session = SessionState::default();
//! assert!(session.trajectory().is_none());
//!
//! // The drag layer writes a new state; the caches lag until the next
//! // recompute response is applied.
//! let dragged = session.state().with_position(-3.0, 0.8);
//! session.set_state(dragged);
//! assert_eq!(session.state().x, -3.0);
//! ```

mod envelope;
mod field;
mod info;
mod session;
mod state;
mod trajectory;

pub mod domain;

pub use envelope::FeasibilityEnvelope;
pub use field::HeatmapField;
pub use info::InfoReadout;
pub use session::SessionState;
pub use state::LaunchState;
pub use trajectory::{ShotOutcome, TrajectorySample};
