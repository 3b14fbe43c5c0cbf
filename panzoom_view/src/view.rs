// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan/zoom transform state and gesture handling.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use panzoom_matrix::{offset_x, offset_y, scale_at_prepend, translate_prepend, zoom_x, zoom_y};

use crate::config::ZoomConfig;
use crate::fit;
use crate::math;

/// Payload of a committed pan/zoom change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomChanged {
    /// New x-axis zoom component.
    pub zoom_x: f64,
    /// New y-axis zoom component.
    pub zoom_y: f64,
    /// New x-axis offset component.
    pub offset_x: f64,
    /// New y-axis offset component.
    pub offset_y: f64,
}

/// Host-side integration for a [`ZoomView`].
///
/// Both callbacks run while the view's update guard is held, so any mutating
/// call made from inside them is dropped silently. [`Self::invalidate`] gets
/// a shared reference because rendering only reads; [`Self::zoom_changed`]
/// gets the view back mutably so hosts can chain follow-up operations once
/// the guard is released (and so the dropped-call rule is enforceable).
pub trait ZoomHost {
    /// Applies the committed matrix to the rendered element.
    ///
    /// When `skip_transitions` is true the host should suppress its animated
    /// interpolation for this one update (continuous dragging and tiny wheel
    /// steps must not animate).
    fn invalidate(&mut self, view: &ZoomView, skip_transitions: bool);

    /// Raised after every committed mutation, never for a dropped one.
    fn zoom_changed(&mut self, view: &mut ZoomView, event: ZoomChanged) {
        let _ = (view, event);
    }
}

/// The null host: applies nothing, observes nothing.
impl ZoomHost for () {
    fn invalidate(&mut self, _view: &ZoomView, _skip_transitions: bool) {}
}

/// Pan/zoom state machine over an accumulated scale + translate matrix.
///
/// A `ZoomView` interprets normalized input events (pointer drag, wheel,
/// pinch, double-tap) delivered in the content element's local coordinate
/// space, and funnels every resulting matrix through one commit path that
/// applies [`Constraints`](crate::Constraints) and notifies the host.
///
/// At most one of {panning, pinching} is active at a time; a pinch update
/// cancels any pan capture. All operations are synchronous and bounded.
#[derive(Clone, Debug)]
pub struct ZoomView {
    config: ZoomConfig,
    matrix: Affine,
    content_bounds: Option<Rect>,
    /// Accumulated pan since `begin_pan`, in content coordinates.
    pan: Vec2,
    /// Last observed pointer position during a pan.
    previous: Point,
    /// Matrix captured at `begin_pan`; the pan accumulator is prepended onto
    /// this, not onto the already-panned matrix.
    pan_base: Affine,
    captured: bool,
    panning: bool,
    /// Last observed pinch scale factor, 1.0 at rest.
    pinch_scale: f64,
    /// Direction of the next double-tap zoom.
    zoom_out: bool,
    /// Re-entrancy guard: set while a commit (including host callbacks) is in
    /// flight; mutating calls observed while set are dropped.
    updating: bool,
}

impl Default for ZoomView {
    fn default() -> Self {
        Self::new(ZoomConfig::default())
    }
}

/// Clears the update flag when the commit scope ends, unwinding included.
struct CommitGuard<'a> {
    view: &'a mut ZoomView,
}

impl Drop for CommitGuard<'_> {
    fn drop(&mut self) {
        self.view.updating = false;
    }
}

impl ZoomView {
    /// Creates a view with the identity transform.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            matrix: Affine::IDENTITY,
            content_bounds: None,
            pan: Vec2::ZERO,
            previous: Point::ZERO,
            pan_base: Affine::IDENTITY,
            captured: false,
            panning: false,
            pinch_scale: 1.0,
            zoom_out: false,
            updating: false,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Returns the configuration for modification.
    pub fn config_mut(&mut self) -> &mut ZoomConfig {
        &mut self.config
    }

    /// Returns the current transform matrix.
    #[must_use]
    pub fn matrix(&self) -> Affine {
        self.matrix
    }

    /// Returns the x-axis zoom component of the current matrix.
    #[must_use]
    pub fn zoom_x(&self) -> f64 {
        zoom_x(self.matrix)
    }

    /// Returns the y-axis zoom component of the current matrix.
    #[must_use]
    pub fn zoom_y(&self) -> f64 {
        zoom_y(self.matrix)
    }

    /// Returns the x-axis offset component of the current matrix.
    #[must_use]
    pub fn offset_x(&self) -> f64 {
        offset_x(self.matrix)
    }

    /// Returns the y-axis offset component of the current matrix.
    #[must_use]
    pub fn offset_y(&self) -> f64 {
        offset_y(self.matrix)
    }

    /// Returns `true` while a pointer drag is panning the view.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Sets the content element's bounds, used by the double-tap hit check.
    ///
    /// Hosts should update this on layout. Without bounds the core cannot
    /// hit-test and double-taps are accepted anywhere.
    pub fn set_content_bounds(&mut self, bounds: Option<Rect>) {
        self.content_bounds = bounds;
    }

    /// Returns the content bounds, if the host has supplied them.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Rect> {
        self.content_bounds
    }

    fn changed(&self) -> ZoomChanged {
        ZoomChanged {
            zoom_x: self.zoom_x(),
            zoom_y: self.zoom_y(),
            offset_x: self.offset_x(),
            offset_y: self.offset_y(),
        }
    }

    /// The single mutation funnel: guard, assign, constrain, notify.
    ///
    /// The guard is released on every exit path, a panicking host callback
    /// included, so a caught unwind cannot leave the view latched.
    fn commit<H: ZoomHost>(&mut self, matrix: Affine, skip_transitions: bool, host: &mut H) -> bool {
        if self.updating {
            return false;
        }
        self.updating = true;
        let mut guard = CommitGuard { view: self };

        guard.view.matrix = matrix;
        if guard.view.config.enable_constraints {
            guard.view.matrix = guard.view.config.constraints.constrain(guard.view.matrix);
        }
        let event = guard.view.changed();
        host.invalidate(&*guard.view, skip_transitions);
        host.zoom_changed(&mut *guard.view, event);
        true
    }

    /// Sets the transform matrix directly.
    ///
    /// Returns whether the update was committed; a re-entrant call is dropped
    /// and returns `false`.
    pub fn set_matrix<H: ZoomHost>(
        &mut self,
        matrix: Affine,
        skip_transitions: bool,
        host: &mut H,
    ) -> bool {
        self.commit(matrix, skip_transitions, host)
    }

    /// Resets the transform to the identity matrix.
    pub fn reset_matrix<H: ZoomHost>(&mut self, host: &mut H) -> bool {
        self.set_matrix(Affine::IDENTITY, false, host)
    }

    /// Whether a zoom by `ratio` is already pinned at a configured bound.
    ///
    /// Zooming further in once either axis sits at its max (or further out at
    /// its min) would only churn the matrix and be clamped right back, so it
    /// is rejected up front. A zoom in the opposite direction still succeeds.
    fn at_zoom_limit(&self, ratio: f64) -> bool {
        let c = &self.config.constraints;
        (ratio > 1.0 && (self.zoom_x() >= c.zoom_x.max() || self.zoom_y() >= c.zoom_y.max()))
            || (ratio < 1.0 && (self.zoom_x() <= c.zoom_x.min() || self.zoom_y() <= c.zoom_y.min()))
    }

    /// Zooms by `ratio` about the point `(x, y)` in content coordinates.
    pub fn zoom_to<H: ZoomHost>(
        &mut self,
        ratio: f64,
        x: f64,
        y: f64,
        skip_transitions: bool,
        host: &mut H,
    ) -> bool {
        if self.updating || self.at_zoom_limit(ratio) {
            return false;
        }
        self.commit(
            scale_at_prepend(self.matrix, ratio, ratio, x, y),
            skip_transitions,
            host,
        )
    }

    /// Zooms by a delta on the configured speed curve, about `(x, y)`.
    ///
    /// The effective delta is `sign(delta) * |delta| ^ power_factor` and the
    /// applied ratio is `zoom_speed ^ effective_delta`. Transitions are
    /// skipped when the caller asks or the effective delta magnitude is at or
    /// below the configured threshold.
    pub fn zoom_delta_to<H: ZoomHost>(
        &mut self,
        delta: f64,
        x: f64,
        y: f64,
        skip_transitions: bool,
        host: &mut H,
    ) -> bool {
        let real_delta = math::sign(delta) * math::powf(math::abs(delta), self.config.power_factor);
        let ratio = math::powf(self.config.zoom_speed, real_delta);
        self.zoom_to(
            ratio,
            x,
            y,
            skip_transitions || math::abs(real_delta) <= self.config.transition_threshold,
            host,
        )
    }

    /// Starts a pan at `(x, y)`: resets the accumulator and records the
    /// current matrix as the pan base.
    pub fn begin_pan(&mut self, x: f64, y: f64) {
        if self.updating {
            return;
        }
        self.pan = Vec2::ZERO;
        self.previous = Point::new(x, y);
        self.pan_base = self.matrix;
    }

    /// Continues a pan to `(x, y)`.
    ///
    /// The delta from the previous position is accumulated and the total is
    /// prepended onto the matrix captured at [`Self::begin_pan`], so the
    /// cumulative translation equals the summed deltas.
    pub fn continue_pan<H: ZoomHost>(
        &mut self,
        x: f64,
        y: f64,
        skip_transitions: bool,
        host: &mut H,
    ) -> bool {
        if self.updating {
            return false;
        }
        let current = Point::new(x, y);
        let delta = current - self.previous;
        self.previous = current;
        self.pan += delta;
        self.commit(
            translate_prepend(self.pan_base, self.pan.x, self.pan.y),
            skip_transitions,
            host,
        )
    }

    /// Pointer pressed at `(x, y)`: starts panning unless pan input is
    /// disabled or another gesture holds the capture.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if !self.config.enable_pan {
            return;
        }
        if self.updating || self.captured || self.panning {
            return;
        }
        self.begin_pan(x, y);
        self.captured = true;
        self.panning = true;
    }

    /// Pointer moved to `(x, y)`: continues an active pan.
    ///
    /// Continuous dragging always skips transitions.
    pub fn pointer_move<H: ZoomHost>(&mut self, x: f64, y: f64, host: &mut H) -> bool {
        if !self.config.enable_pan {
            return false;
        }
        if !self.captured || !self.panning {
            return false;
        }
        self.continue_pan(x, y, true, host)
    }

    /// Pointer released at `(x, y)`: ends an active pan. The matrix is left
    /// as the last move put it.
    pub fn pointer_up(&mut self, x: f64, y: f64) {
        let _ = (x, y);
        if !self.config.enable_pan {
            return;
        }
        if self.updating || !self.captured || !self.panning {
            return;
        }
        self.captured = false;
        self.panning = false;
    }

    /// Wheel turned by `delta_y` detents with the pointer at `(x, y)`.
    ///
    /// Ignored while a pan holds the capture or zoom input is disabled.
    pub fn wheel<H: ZoomHost>(&mut self, delta_y: f64, x: f64, y: f64, host: &mut H) -> bool {
        if !self.config.enable_zoom || self.captured {
            return false;
        }
        self.zoom_delta_to(delta_y, x, y, false, host)
    }

    /// Double-tap at `(x, y)`: zooms in by `zoom_in_ratio`, or back out on
    /// the next tap.
    ///
    /// When content bounds are known, taps outside them are no-ops, as are
    /// taps while a drag holds the capture. The direction toggles on every
    /// accepted tap, even one whose zoom was rejected at a bound.
    pub fn double_tap<H: ZoomHost>(&mut self, x: f64, y: f64, host: &mut H) -> bool {
        if let Some(bounds) = self.content_bounds {
            if !bounds.contains(Point::new(x, y)) {
                return false;
            }
        }
        if self.updating || self.captured || self.panning {
            return false;
        }
        let delta = if self.zoom_out {
            -self.config.zoom_in_ratio
        } else {
            self.config.zoom_in_ratio
        };
        let committed = self.zoom_delta_to(delta, x, y, false, host);
        self.zoom_out = !self.zoom_out;
        committed
    }

    /// Pinch progressed to the absolute scale factor `scale` (1.0 at gesture
    /// start) with its origin at `(x, y)` in content coordinates.
    ///
    /// Cancels any pan capture. Enablement is checked before the last
    /// observed scale is updated, so a disabled view never consumes gesture
    /// progress.
    pub fn pinch_update<H: ZoomHost>(&mut self, scale: f64, x: f64, y: f64, host: &mut H) -> bool {
        if !self.config.enable_zoom {
            return false;
        }
        if self.updating {
            return false;
        }
        self.captured = false;
        self.panning = false;
        let delta = scale - self.pinch_scale;
        let committed =
            self.zoom_delta_to(delta * self.config.gesture_pinch_speed, x, y, false, host);
        self.pinch_scale = scale;
        committed
    }

    /// Pinch ended: resets the last observed scale to 1.0.
    pub fn pinch_end(&mut self) {
        if self.updating {
            return;
        }
        self.pinch_scale = 1.0;
    }

    /// Fits the content into the panel, preserving aspect ratio and centering.
    ///
    /// Empty sizes are a no-op.
    pub fn extent<H: ZoomHost>(&mut self, panel: Size, content: Size, host: &mut H) -> bool {
        match fit::extent(panel, content) {
            Some(matrix) => self.set_matrix(matrix, false, host),
            None => false,
        }
    }

    /// Fills the panel with the content using independent axis scaling.
    ///
    /// Empty sizes are a no-op.
    pub fn fill<H: ZoomHost>(&mut self, panel: Size, content: Size, host: &mut H) -> bool {
        match fit::fill(panel, content) {
            Some(matrix) => self.set_matrix(matrix, false, host),
            None => false,
        }
    }

    /// Applies the configured [`AutoFitMode`](crate::AutoFitMode); hosts call
    /// this on every layout pass while the mode is not `None`.
    pub fn auto_fit<H: ZoomHost>(&mut self, panel: Size, content: Size, host: &mut H) -> bool {
        match self.config.auto_fit_mode {
            crate::AutoFitMode::None => false,
            crate::AutoFitMode::Extent => self.extent(panel, content, host),
            crate::AutoFitMode::Fill => self.fill(panel, content, host),
        }
    }

    /// Advances the auto-fit mode along the `None` → `Extent` → `Fill` cycle.
    pub fn toggle_auto_fit_mode(&mut self) {
        if self.updating {
            return;
        }
        self.config.auto_fit_mode = self.config.auto_fit_mode.next();
    }
}
