// Copyright 2026 the Shotplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shotplan View 2D: world↔pixel transforms for the two planner views.
//!
//! Each canvas shows a fixed world-space domain stretched over whatever
//! pixel surface it currently has. A [`ViewTransform`] is a pair of
//! independent [`AxisMap`]s (no aspect-ratio coupling) built per draw call
//! from the domain and the current surface size, so resizing needs no
//! retained state. The vertical axis is flipped: increasing world y
//! decreases the pixel row, keeping world "up" pointing up on screen.
//!
//! Both direction functions are exact algebraic inverses, so round trips
//! hold to floating-point tolerance for any in-domain point.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use shotplan_view2d::ViewTransform;
//!
//! let view = ViewTransform::trajectory(Size::new(720.0, 410.0));
//! let world = Point::new(-2.8, 0.4);
//! let pixel = view.to_pixel(world);
//! let back = view.to_world(pixel);
//! assert!((back.x - world.x).abs() < 1e-9);
//! assert!((back.y - world.y).abs() < 1e-9);
//! ```

mod axis;
mod transform;

pub use axis::AxisMap;
pub use transform::ViewTransform;
