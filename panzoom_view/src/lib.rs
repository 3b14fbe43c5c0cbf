// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom View: a headless pan/zoom state machine over a 2D affine transform.
//!
//! This crate is the toolkit-independent core of a pan/zoom widget. It owns an
//! accumulated scale + translate matrix and interprets normalized input events
//! (pointer drag, wheel, pinch, double-tap) against configurable zoom and
//! offset bounds. It does **not** render, hit-test, or animate. Hosts are
//! expected to:
//! - Deliver input events in the content element's local coordinate space.
//! - Implement [`ZoomHost`] to apply committed matrices to a rendered element
//!   and observe [`ZoomChanged`] notifications.
//! - Re-run [`ZoomView::auto_fit`] on layout passes when an
//!   [`AutoFitMode`] other than `None` is active.
//!
//! ## Minimal example
//!
//! ```rust
//! use panzoom_view::{ZoomConfig, ZoomView};
//!
//! let mut view = ZoomView::new(ZoomConfig::default());
//!
//! // One wheel detent zooming in about (100, 50) in content coordinates.
//! // `()` is the null host; real hosts implement `ZoomHost`.
//! view.wheel(1.0, 100.0, 50.0, &mut ());
//! assert!(view.zoom_x() > 1.0);
//!
//! // Drag from (10, 10) to (20, 20).
//! view.pointer_down(10.0, 10.0);
//! view.pointer_move(20.0, 20.0, &mut ());
//! view.pointer_up(20.0, 20.0);
//! ```
//!
//! ## Constraints
//!
//! Zoom and offset bounds are per-axis inclusive ranges, unbounded by
//! default. An inverted pair (`min > max`) is a configuration error surfaced
//! eagerly as [`InvalidBounds`]. Everything else (a wheel delta pushing past
//! a bound, a tap outside the content) is a silent no-op or a clamp, never
//! an error.
//!
//! ```rust
//! use panzoom_view::{ZoomConfig, ZoomView};
//!
//! let mut config = ZoomConfig::default();
//! config.set_zoom_x_bounds(0.5, 4.0).unwrap();
//! config.set_zoom_y_bounds(0.5, 4.0).unwrap();
//! assert!(config.set_offset_x_bounds(10.0, -10.0).is_err());
//!
//! let mut view = ZoomView::new(config);
//! view.zoom_to(100.0, 0.0, 0.0, false, &mut ());
//! // The over-range zoom is accepted and pulled back inside range.
//! assert_eq!(view.zoom_x(), 4.0);
//! ```
//!
//! ## Re-entrancy
//!
//! All gesture callbacks run on one logical thread; the only hazard is a
//! [`ZoomHost::zoom_changed`] handler calling back into a mutating operation
//! while the triggering update is still in flight. Such calls are dropped
//! silently rather than queued, under an internal guard held for the whole
//! commit, including both host callbacks.
//!
//! This crate is `no_std` (one of the `std` or `libm` features is required).

#![no_std]

mod bounds;
mod config;
mod fit;
mod math;
mod view;

pub use bounds::{AxisBounds, Constraints, InvalidBounds, clamp};
pub use config::ZoomConfig;
pub use fit::{AutoFitMode, extent, fill};
pub use view::{ZoomChanged, ZoomHost, ZoomView};
