// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Encoder: drives a [`ZoomView`] from `ui-events` pointer streams.
//!
//! [`ZoomView`] speaks in normalized gestures (pointer down/move/up, wheel
//! detents, absolute pinch scale). This crate is the ecosystem-native way to
//! produce those calls from a [`ui_events::pointer::PointerEvent`] stream:
//! it normalizes scroll deltas (line, pixel, page) into wheel detents and
//! accumulates pinch scale deltas into the absolute scale factor the view
//! expects.
//!
//! Double-taps are recognized by toolkits, not by raw pointer streams, so
//! hosts forward those to [`ZoomView::double_tap`] directly.
//!
//! ## Minimal example
//!
//! ```rust,no_run
//! use panzoom_encoder::GestureEncoder;
//! use panzoom_view::{ZoomConfig, ZoomView};
//! use ui_events::pointer::PointerEvent;
//!
//! let mut view = ZoomView::new(ZoomConfig::default());
//! let mut encoder = GestureEncoder::new();
//!
//! fn next_event() -> PointerEvent {
//!     unimplemented!("delivered by the windowing layer")
//! }
//!
//! let event = next_event();
//! encoder.encode(&event, &mut view, &mut ());
//! ```
//!
//! Event coordinates are used as-is; hosts that transform the content
//! element are expected to deliver positions in its local space, matching
//! the [`ZoomView`] contract.
//!
//! This crate is `no_std`.

#![no_std]

use panzoom_view::{ZoomHost, ZoomView};
use ui_events::ScrollDelta;
use ui_events::pointer::{PointerEvent, PointerGesture, PointerUpdate};

/// One classic wheel detent, for normalizing pixel-based scroll deltas.
const WHEEL_DETENT_PIXELS: f64 = 120.0;

/// Accumulates `ui-events` pointer events into [`ZoomView`] gesture calls.
///
/// The encoder owns the cross-event gesture bookkeeping the raw stream does
/// not carry: the running pinch scale factor. Everything else is stateless
/// translation.
#[derive(Clone, Debug)]
pub struct GestureEncoder {
    /// Accumulated pinch scale, 1.0 at rest.
    pinch_scale: f64,
}

impl Default for GestureEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureEncoder {
    /// Creates an encoder with no gesture in progress.
    #[must_use]
    pub fn new() -> Self {
        Self { pinch_scale: 1.0 }
    }

    /// Feeds one pointer event into `view`.
    ///
    /// Returns `true` when a transform was committed (and the host notified).
    pub fn encode<H: ZoomHost>(
        &mut self,
        event: &PointerEvent,
        view: &mut ZoomView,
        host: &mut H,
    ) -> bool {
        match event {
            PointerEvent::Down(e) => {
                let p = e.state.logical_point();
                view.pointer_down(p.x, p.y);
                false
            }
            PointerEvent::Move(PointerUpdate { current, .. }) => {
                let p = current.logical_point();
                view.pointer_move(p.x, p.y, host)
            }
            PointerEvent::Up(e) => {
                let p = e.state.logical_point();
                view.pointer_up(p.x, p.y);
                self.pinch_ended(view);
                false
            }
            PointerEvent::Scroll(e) => {
                let detents = wheel_detents(&e.delta, e.state.scale_factor);
                let p = e.state.logical_point();
                view.wheel(detents, p.x, p.y, host)
            }
            PointerEvent::Gesture(e) => match &e.gesture {
                PointerGesture::Pinch(delta) => {
                    self.pinch_scale += f64::from(*delta);
                    let p = e.state.logical_point();
                    view.pinch_update(self.pinch_scale, p.x, p.y, host)
                }
                _ => false,
            },
            PointerEvent::Cancel(_) => {
                self.pinch_ended(view);
                false
            }
            _ => false,
        }
    }

    /// Ends pinch tracking, in the encoder and the view.
    ///
    /// Called automatically on pointer up/cancel; hosts whose toolkit raises
    /// an explicit pinch-ended event call it from there as well.
    pub fn pinch_ended(&mut self, view: &mut ZoomView) {
        self.pinch_scale = 1.0;
        view.pinch_end();
    }
}

/// Normalizes a scroll delta into wheel detents.
///
/// Line and page deltas are already detent-like; pixel deltas are divided by
/// the classic 120-pixel detent so trackpad scrolling follows the same zoom
/// curve as a notched wheel.
fn wheel_detents(delta: &ScrollDelta, scale_factor: f64) -> f64 {
    match delta {
        ScrollDelta::LineDelta(_, y) => f64::from(*y),
        ScrollDelta::PixelDelta(pos) => {
            let logical = pos.to_logical::<f64>(scale_factor);
            logical.y / WHEEL_DETENT_PIXELS
        }
        ScrollDelta::PageDelta(_, y) => f64::from(*y),
    }
}
