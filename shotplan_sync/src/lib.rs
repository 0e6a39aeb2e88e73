// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shotplan Sync: sequenced recomputation against the physics service.
//!
//! Pointer-move events fire far faster than network round-trips complete,
//! so several recompute requests can be in flight for the same drag
//! gesture, and a late response for an *early* snapshot must never
//! overwrite newer data. The [`Orchestrator`] enforces that discipline:
//! every outbound request carries a per-kind monotonically increasing
//! sequence number, and a response is applied only while its number is
//! still the latest issued for its kind. Superseded responses are
//! discarded on arrival (there is no cancellation and no timeout).
//!
//! The crate is sans-IO: the orchestrator emits [`OutboundRequest`] values
//! and consumes results the shell obtained however it likes. That keeps the
//! ordering rules synchronous and directly unit-testable; the event loop,
//! HTTP client, and canvases all live outside this workspace.
//!
//! [`Session`] glues the full pipeline together: drag events mutate the
//! shared launch state, the orchestrator issues the matching recomputes,
//! and scene building turns the state plus caches into display lists.
//!
//! ## Minimal example
//!
//! ```
//! use shotplan_model::{ShotOutcome, TrajectorySample};
//! use shotplan_sync::{OutboundRequest, Redraw, Session};
//!
//! let (mut session, startup) = Session::start();
//! // Startup issues the heatmap fetch plus a full recompute.
//! assert_eq!(startup.len(), 3);
//!
//! // Deliver the trajectory half of the full update ...
//! let seq = match startup[1] {
//!     OutboundRequest::Trajectory { seq, .. } => seq,
//!     _ => unreachable!(),
//! };
//! let sample = TrajectorySample { x: vec![], y: vec![], outcome: ShotOutcome::Success };
//! let redraw = session.apply_trajectory(seq, Ok(sample));
//! // ... but nothing redraws until the envelope half lands too.
//! assert_eq!(redraw, Redraw::empty());
//! ```

mod orchestrator;
mod session;

pub use orchestrator::{Orchestrator, OutboundRequest, Redraw, SyncError};
pub use session::Session;
