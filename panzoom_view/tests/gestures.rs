// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture-level behavior of [`ZoomView`]: constraint clamping, bound
//! rejection, pan accumulation, double-tap alternation, and the re-entrancy
//! guard.

use kurbo::{Affine, Size};
use panzoom_matrix::scale_and_translate;
use panzoom_view::{ZoomChanged, ZoomConfig, ZoomHost, ZoomView, clamp};

/// Records every committed notification.
#[derive(Default)]
struct Recorder {
    events: Vec<ZoomChanged>,
    skips: Vec<bool>,
}

impl ZoomHost for Recorder {
    fn invalidate(&mut self, _view: &ZoomView, skip_transitions: bool) {
        self.skips.push(skip_transitions);
    }

    fn zoom_changed(&mut self, _view: &mut ZoomView, event: ZoomChanged) {
        self.events.push(event);
    }
}

fn bounded_config(min_zoom: f64, max_zoom: f64) -> ZoomConfig {
    let mut config = ZoomConfig::default();
    config.set_zoom_x_bounds(min_zoom, max_zoom).unwrap();
    config.set_zoom_y_bounds(min_zoom, max_zoom).unwrap();
    config
}

#[test]
fn clamp_rejects_inverted_bounds() {
    assert!(clamp(5.0, 10.0, 1.0).is_err());
}

#[test]
fn zoom_stays_inside_bounds_over_any_sequence() {
    let mut view = ZoomView::new(bounded_config(0.5, 2.0));
    for delta in [3.0, -1.0, 8.0, -20.0, 0.3, 5.0, -0.1] {
        view.zoom_delta_to(delta, 40.0, 25.0, false, &mut ());
        assert!(view.zoom_x() >= 0.5 && view.zoom_x() <= 2.0);
        assert!(view.zoom_y() >= 0.5 && view.zoom_y() <= 2.0);
    }
}

#[test]
fn reset_matrix_always_yields_identity() {
    let mut view = ZoomView::new(ZoomConfig::default());
    view.zoom_delta_to(4.0, 10.0, 10.0, false, &mut ());
    view.begin_pan(0.0, 0.0);
    view.continue_pan(33.0, -7.0, false, &mut ());
    assert_ne!(view.matrix(), Affine::IDENTITY);

    assert!(view.reset_matrix(&mut ()));
    assert_eq!(view.matrix(), Affine::IDENTITY);
}

#[test]
fn zero_delta_leaves_matrix_unchanged() {
    let mut view = ZoomView::new(ZoomConfig::default());
    view.zoom_delta_to(2.0, 15.0, 5.0, false, &mut ());
    let before = view.matrix();
    view.zoom_delta_to(0.0, 80.0, 90.0, false, &mut ());
    assert_eq!(view.matrix(), before);
}

/// A host whose change handler immediately tries to mutate the view again.
struct Reentrant {
    attempts: u32,
}

impl ZoomHost for Reentrant {
    fn invalidate(&mut self, _view: &ZoomView, _skip_transitions: bool) {}

    fn zoom_changed(&mut self, view: &mut ZoomView, _event: ZoomChanged) {
        self.attempts += 1;
        // All of these run under the guard and must be dropped.
        assert!(!view.zoom_to(2.0, 0.0, 0.0, false, &mut ()));
        assert!(!view.set_matrix(scale_and_translate(9.0, 9.0, 9.0, 9.0), false, &mut ()));
        assert!(!view.continue_pan(1.0, 1.0, false, &mut ()));
    }
}

#[test]
fn reentrant_mutation_from_change_handler_is_dropped() {
    let mut view = ZoomView::new(ZoomConfig::default());
    let mut host = Reentrant { attempts: 0 };

    assert!(view.zoom_to(2.0, 0.0, 0.0, false, &mut host));
    // The handler ran once; its nested calls did not commit or notify again.
    assert_eq!(host.attempts, 1);
    assert_eq!(view.zoom_x(), 2.0);
    assert_eq!(view.zoom_y(), 2.0);
}

/// A host whose change handler panics, the way a buggy UI callback would.
struct Failing;

impl ZoomHost for Failing {
    fn invalidate(&mut self, _view: &ZoomView, _skip_transitions: bool) {}

    fn zoom_changed(&mut self, _view: &mut ZoomView, _event: ZoomChanged) {
        panic!("host failure");
    }
}

#[test]
fn guard_is_released_when_a_host_callback_panics() {
    let mut view = ZoomView::new(ZoomConfig::default());
    let unwound = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        view.zoom_to(1.5, 0.0, 0.0, false, &mut Failing);
    }));
    assert!(unwound.is_err(), "the failing host should have panicked");

    // The matrix was assigned before the callback ran; the interrupted commit
    // must not latch the view against later ones.
    assert_eq!(view.zoom_x(), 1.5);
    assert!(view.zoom_to(2.0, 0.0, 0.0, false, &mut ()));
    assert_eq!(view.zoom_x(), 3.0);
}

#[test]
fn zoom_in_at_max_is_rejected_but_zoom_out_succeeds() {
    let mut view = ZoomView::new(bounded_config(0.5, 2.0));
    let mut host = Recorder::default();
    view.set_matrix(scale_and_translate(2.0, 2.0, 0.0, 0.0), false, &mut host);
    assert_eq!(host.events.len(), 1);

    // Further zoom-in: rejected before any commit, so no notification.
    assert!(!view.zoom_delta_to(1.0, 10.0, 10.0, false, &mut host));
    assert_eq!(view.zoom_x(), 2.0);
    assert_eq!(host.events.len(), 1);

    // Zoom-out from the bound still succeeds.
    assert!(view.zoom_delta_to(-1.0, 10.0, 10.0, false, &mut host));
    assert!(view.zoom_x() < 2.0);
    assert_eq!(host.events.len(), 2);
}

#[test]
fn pan_accumulates_incremental_deltas() {
    let mut view = ZoomView::new(ZoomConfig::default());
    view.begin_pan(10.0, 10.0);
    view.continue_pan(15.0, 12.0, false, &mut ());
    view.continue_pan(20.0, 20.0, false, &mut ());
    // Deltas (5, 2) and (5, 8) sum to (10, 10) relative to the pan start.
    assert_eq!(view.offset_x(), 10.0);
    assert_eq!(view.offset_y(), 10.0);
    assert_eq!(view.zoom_x(), 1.0);
}

#[test]
fn pan_through_pointer_events_skips_transitions() {
    let mut view = ZoomView::new(ZoomConfig::default());
    let mut host = Recorder::default();
    view.pointer_down(10.0, 10.0);
    assert!(view.is_panning());
    view.pointer_move(15.0, 12.0, &mut host);
    view.pointer_move(20.0, 20.0, &mut host);
    view.pointer_up(20.0, 20.0);
    assert!(!view.is_panning());
    assert_eq!(view.offset_x(), 10.0);
    assert_eq!(view.offset_y(), 10.0);
    assert_eq!(host.skips, vec![true, true]);
}

#[test]
fn double_taps_alternate_and_invert() {
    let mut view = ZoomView::new(ZoomConfig::default());
    view.double_tap(30.0, 40.0, &mut ());
    assert!(view.zoom_x() > 1.0);
    view.double_tap(30.0, 40.0, &mut ());

    // Equal and opposite ratios about the same point cancel out.
    let coeffs = view.matrix().as_coeffs();
    let identity = Affine::IDENTITY.as_coeffs();
    for (got, expected) in coeffs.iter().zip(identity.iter()) {
        assert!(
            (got - expected).abs() < 1e-9,
            "matrix {coeffs:?} is not inverse-consistent with identity"
        );
    }

    // A third tap zooms in again.
    view.double_tap(30.0, 40.0, &mut ());
    assert!(view.zoom_x() > 1.0);
}

#[test]
fn extent_fit_of_wide_panel_is_identity_zoom() {
    let mut view = ZoomView::new(ZoomConfig::default());
    let mut host = Recorder::default();
    assert!(view.extent(Size::new(200.0, 100.0), Size::new(100.0, 100.0), &mut host));
    // min(200/100, 100/100) = 1.0 about the content center (50, 50).
    assert_eq!(view.zoom_x(), 1.0);
    assert_eq!(view.zoom_y(), 1.0);
    assert_eq!(view.offset_x(), 0.0);
    assert_eq!(view.offset_y(), 0.0);
    assert_eq!(
        host.events,
        vec![ZoomChanged {
            zoom_x: 1.0,
            zoom_y: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }]
    );
}

#[test]
fn auto_fit_dispatches_on_mode() {
    let mut view = ZoomView::new(ZoomConfig::default());
    let panel = Size::new(200.0, 100.0);
    let content = Size::new(100.0, 100.0);

    // Mode None: nothing happens.
    assert!(!view.auto_fit(panel, content, &mut ()));

    view.toggle_auto_fit_mode();
    assert!(view.auto_fit(panel, content, &mut ()));
    assert_eq!(view.zoom_x(), 1.0);

    view.toggle_auto_fit_mode();
    assert!(view.auto_fit(panel, content, &mut ()));
    assert_eq!(view.zoom_x(), 2.0);
    assert_eq!(view.zoom_y(), 1.0);
}

#[test]
fn small_wheel_deltas_skip_transitions() {
    let mut view = ZoomView::new(ZoomConfig::default());
    let mut host = Recorder::default();
    // |0.4| is at or below the default 0.5 threshold; |2.0| is above it.
    view.wheel(0.4, 0.0, 0.0, &mut host);
    view.wheel(2.0, 0.0, 0.0, &mut host);
    assert_eq!(host.skips, vec![true, false]);
}

#[test]
fn offset_constraints_clamp_pans() {
    let mut config = ZoomConfig::default();
    config.set_offset_x_bounds(-50.0, 50.0).unwrap();
    config.set_offset_y_bounds(-50.0, 50.0).unwrap();
    let mut view = ZoomView::new(config);

    view.begin_pan(0.0, 0.0);
    view.continue_pan(500.0, -500.0, false, &mut ());
    assert_eq!(view.offset_x(), 50.0);
    assert_eq!(view.offset_y(), -50.0);
}
