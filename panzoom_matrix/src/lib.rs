// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Matrix: 2D affine helpers for pan/zoom transforms.
//!
//! This crate provides thin constructors and prepend-composition helpers over
//! [`kurbo::Affine`], specialized for the scale + translate transforms used
//! by pan/zoom views. Rotation and skew never appear in this domain, so a
//! matrix is effectively the 4-tuple (zoom x, zoom y, offset x, offset y);
//! the [`zoom_x`]/[`zoom_y`]/[`offset_x`]/[`offset_y`] accessors read those
//! components back out.
//!
//! "Prepend" follows the usual convention for render transforms: the prepended
//! operation acts in the content's local coordinate space, before the existing
//! matrix. With kurbo's column-vector composition this is plain
//! right-multiplication (`a * b` applies `b` first), so the helpers here are
//! small and allocation-free.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point};
//! use panzoom_matrix::{scale_at_prepend, zoom_x};
//!
//! // Zoom in 2x about (100, 50) in content coordinates.
//! let m = scale_at_prepend(Affine::IDENTITY, 2.0, 2.0, 100.0, 50.0);
//! assert_eq!(zoom_x(m), 2.0);
//!
//! // The anchor point maps to the same place it did before the zoom.
//! assert_eq!(m * Point::new(100.0, 50.0), Point::new(100.0, 50.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Affine;

/// Creates a matrix scaling by `(sx, sy)` about the fixed point `(cx, cy)`.
///
/// The offset works out to `(cx, cy) - (cx * sx, cy * sy)`, so `(cx, cy)`
/// maps to itself under the result.
#[must_use]
pub fn scale_at(sx: f64, sy: f64, cx: f64, cy: f64) -> Affine {
    Affine::new([sx, 0.0, 0.0, sy, cx - cx * sx, cy - cy * sy])
}

/// Creates a matrix scaling by `(sx, sy)` with an explicit absolute offset.
///
/// Unlike [`scale_at`] the offset is taken verbatim; this is the constructor
/// used when rebuilding a matrix from already-clamped components.
#[must_use]
pub fn scale_and_translate(sx: f64, sy: f64, ox: f64, oy: f64) -> Affine {
    Affine::new([sx, 0.0, 0.0, sy, ox, oy])
}

/// Composes a scale about `(cx, cy)` before `matrix`.
///
/// The anchor is a point in the content's local space; its mapped position
/// under the result is the same as under `matrix`, which is what keeps the
/// pixel under the cursor still while zooming.
#[must_use]
pub fn scale_at_prepend(matrix: Affine, sx: f64, sy: f64, cx: f64, cy: f64) -> Affine {
    matrix * scale_at(sx, sy, cx, cy)
}

/// Composes a translation by `(dx, dy)` before `matrix`.
///
/// The shift is expressed in the content's local space, so the resulting
/// offset moves by the current zoom times `(dx, dy)`.
#[must_use]
pub fn translate_prepend(matrix: Affine, dx: f64, dy: f64) -> Affine {
    matrix * Affine::translate((dx, dy))
}

/// Returns the x-axis zoom component of `matrix`.
#[must_use]
pub fn zoom_x(matrix: Affine) -> f64 {
    matrix.as_coeffs()[0]
}

/// Returns the y-axis zoom component of `matrix`.
#[must_use]
pub fn zoom_y(matrix: Affine) -> f64 {
    matrix.as_coeffs()[3]
}

/// Returns the x-axis offset component of `matrix`.
#[must_use]
pub fn offset_x(matrix: Affine) -> f64 {
    matrix.as_coeffs()[4]
}

/// Returns the y-axis offset component of `matrix`.
#[must_use]
pub fn offset_y(matrix: Affine) -> f64 {
    matrix.as_coeffs()[5]
}
