// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom and offset constraints.
//!
//! Bounds are inclusive per-axis ranges, unbounded by default (infinities are
//! ordinary values here and clamp like any other). Validation is eager: an
//! inverted pair can never be stored in an [`AxisBounds`], so applying
//! [`Constraints`] to a matrix is infallible.

use core::fmt;

use kurbo::Affine;
use panzoom_matrix::scale_and_translate;

/// Error returned when a bounds pair is configured with `min > max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidBounds {
    /// The offending minimum.
    pub min: f64,
    /// The offending maximum.
    pub max: f64,
}

impl fmt::Display for InvalidBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bounds minimum {} is greater than maximum {}",
            self.min, self.max
        )
    }
}

impl core::error::Error for InvalidBounds {}

/// Clamps `value` into the inclusive range `[min, max]`.
///
/// Returns [`InvalidBounds`] when `min > max`; this is a configuration error
/// on the caller's side, not a data error, and is reported immediately.
pub fn clamp(value: f64, min: f64, max: f64) -> Result<f64, InvalidBounds> {
    if min > max {
        return Err(InvalidBounds { min, max });
    }
    Ok(value.clamp(min, max))
}

/// An inclusive range for one constrained matrix component.
///
/// Constructed through [`AxisBounds::new`], which rejects inverted pairs, so
/// a stored range always satisfies `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    min: f64,
    max: f64,
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl AxisBounds {
    /// The full range `(-inf, +inf)`; clamping against it is the identity.
    pub const UNBOUNDED: Self = Self {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Creates a validated bounds pair.
    pub fn new(min: f64, max: f64) -> Result<Self, InvalidBounds> {
        if min > max {
            return Err(InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `value` into this range.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Per-axis zoom and offset bounds applied to a transform matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Constraints {
    /// Bounds on the x-axis zoom component.
    pub zoom_x: AxisBounds,
    /// Bounds on the y-axis zoom component.
    pub zoom_y: AxisBounds,
    /// Bounds on the x-axis offset component.
    pub offset_x: AxisBounds,
    /// Bounds on the y-axis offset component.
    pub offset_y: AxisBounds,
}

impl Constraints {
    /// Clamps the zoom and offset components of `matrix` independently.
    ///
    /// This is a correction, not a rejection: an over-range component is
    /// pulled back inside its range and the rest of the matrix is kept.
    /// Skew components are dropped; they are zero throughout this domain.
    #[must_use]
    pub fn constrain(&self, matrix: Affine) -> Affine {
        let [zx, _, _, zy, ox, oy] = matrix.as_coeffs();
        scale_and_translate(
            self.zoom_x.clamp(zx),
            self.zoom_y.clamp(zy),
            self.offset_x.clamp(ox),
            self.offset_y.clamp(oy),
        )
    }
}
