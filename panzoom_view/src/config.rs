// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for pan/zoom behavior.

use crate::bounds::{AxisBounds, Constraints, InvalidBounds};
use crate::fit::AutoFitMode;

/// Tunable behavior for a [`ZoomView`](crate::ZoomView).
///
/// All options are independently settable; the flags and scalar fields are
/// plain data, while bounds pairs go through the validating setters so an
/// inverted pair is rejected at assignment time rather than when a gesture
/// lands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Base of the exponential zoom-ratio curve. Default 1.2.
    pub zoom_speed: f64,
    /// Exponent applied to the raw wheel/pinch delta magnitude. Default 1.0.
    pub power_factor: f64,
    /// Below this effective delta magnitude, host transitions are skipped.
    /// Default 0.5.
    pub transition_threshold: f64,
    /// Whether [`Self::constraints`] is applied on commit. Default true.
    pub enable_constraints: bool,
    /// Zoom and offset bounds, unbounded by default.
    pub constraints: Constraints,
    /// Whether pan input events are processed. Default true.
    pub enable_pan: bool,
    /// Whether zoom input events are processed. Default true.
    pub enable_zoom: bool,
    /// Zoom delta magnitude applied by a double-tap. Default 3.0.
    pub zoom_in_ratio: f64,
    /// Sensitivity multiplier for pinch scale deltas. Default 5.0.
    pub gesture_pinch_speed: f64,
    /// Auto-fit mode recomputed by the host on layout passes. Default `None`.
    pub auto_fit_mode: AutoFitMode,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_speed: 1.2,
            power_factor: 1.0,
            transition_threshold: 0.5,
            enable_constraints: true,
            constraints: Constraints::default(),
            enable_pan: true,
            enable_zoom: true,
            zoom_in_ratio: 3.0,
            gesture_pinch_speed: 5.0,
            auto_fit_mode: AutoFitMode::None,
        }
    }
}

impl ZoomConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the x-axis zoom bounds, rejecting `min > max`.
    pub fn set_zoom_x_bounds(&mut self, min: f64, max: f64) -> Result<(), InvalidBounds> {
        self.constraints.zoom_x = AxisBounds::new(min, max)?;
        Ok(())
    }

    /// Sets the y-axis zoom bounds, rejecting `min > max`.
    pub fn set_zoom_y_bounds(&mut self, min: f64, max: f64) -> Result<(), InvalidBounds> {
        self.constraints.zoom_y = AxisBounds::new(min, max)?;
        Ok(())
    }

    /// Sets the x-axis offset bounds, rejecting `min > max`.
    pub fn set_offset_x_bounds(&mut self, min: f64, max: f64) -> Result<(), InvalidBounds> {
        self.constraints.offset_x = AxisBounds::new(min, max)?;
        Ok(())
    }

    /// Sets the y-axis offset bounds, rejecting `min > max`.
    pub fn set_offset_y_bounds(&mut self, min: f64, max: f64) -> Result<(), InvalidBounds> {
        self.constraints.offset_y = AxisBounds::new(min, max)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomConfig;
    use crate::fit::AutoFitMode;

    #[test]
    fn defaults_match_documented_values() {
        let config = ZoomConfig::default();
        assert_eq!(config.zoom_speed, 1.2);
        assert_eq!(config.power_factor, 1.0);
        assert_eq!(config.transition_threshold, 0.5);
        assert!(config.enable_constraints);
        assert!(config.enable_pan);
        assert!(config.enable_zoom);
        assert_eq!(config.zoom_in_ratio, 3.0);
        assert_eq!(config.gesture_pinch_speed, 5.0);
        assert_eq!(config.auto_fit_mode, AutoFitMode::None);
        assert_eq!(config.constraints.zoom_x.min(), f64::NEG_INFINITY);
        assert_eq!(config.constraints.offset_y.max(), f64::INFINITY);
    }

    #[test]
    fn bounds_setters_validate_eagerly() {
        let mut config = ZoomConfig::default();
        assert!(config.set_zoom_x_bounds(0.5, 2.0).is_ok());
        assert!(config.set_zoom_y_bounds(2.0, 0.5).is_err());
        // The failed setter leaves the previous bounds in place.
        assert_eq!(config.constraints.zoom_y.max(), f64::INFINITY);
        assert_eq!(config.constraints.zoom_x.max(), 2.0);
    }
}
