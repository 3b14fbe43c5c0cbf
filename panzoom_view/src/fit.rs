// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-fit: matrices that fit or fill content within a panel.

use kurbo::{Affine, Size};
use panzoom_matrix::scale_at;

/// How content is automatically fitted to the panel on layout passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AutoFitMode {
    /// No automatic fitting; the transform is only changed by gestures.
    #[default]
    None,
    /// Fit the whole content into the panel, preserving aspect ratio.
    Extent,
    /// Fill the panel with independent axis scaling; aspect ratio is not
    /// preserved.
    Fill,
}

impl AutoFitMode {
    /// Returns the next mode in the `None` → `Extent` → `Fill` → `None` cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Extent,
            Self::Extent => Self::Fill,
            Self::Fill => Self::None,
        }
    }
}

/// Computes a matrix fitting `content` into `panel`, preserving aspect ratio.
///
/// The zoom is `min(panel.width / content.width, panel.height /
/// content.height)` applied about the content center. Returns `None` when
/// either size is empty.
#[must_use]
pub fn extent(panel: Size, content: Size) -> Option<Affine> {
    if panel.width <= 0.0 || panel.height <= 0.0 || content.width <= 0.0 || content.height <= 0.0 {
        return None;
    }
    let zx = panel.width / content.width;
    let zy = panel.height / content.height;
    let zoom = zx.min(zy);
    Some(scale_at(
        zoom,
        zoom,
        content.width / 2.0,
        content.height / 2.0,
    ))
}

/// Computes a matrix filling `panel` with `content` using independent axis
/// scaling.
///
/// Returns `None` when either size is empty.
#[must_use]
pub fn fill(panel: Size, content: Size) -> Option<Affine> {
    if panel.width <= 0.0 || panel.height <= 0.0 || content.width <= 0.0 || content.height <= 0.0 {
        return None;
    }
    Some(scale_at(
        panel.width / content.width,
        panel.height / content.height,
        content.width / 2.0,
        content.height / 2.0,
    ))
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Size};
    use panzoom_matrix::{zoom_x, zoom_y};

    use super::{AutoFitMode, extent, fill};

    #[test]
    fn mode_cycle() {
        assert_eq!(AutoFitMode::None.next(), AutoFitMode::Extent);
        assert_eq!(AutoFitMode::Extent.next(), AutoFitMode::Fill);
        assert_eq!(AutoFitMode::Fill.next(), AutoFitMode::None);
    }

    #[test]
    fn extent_uses_smaller_axis_ratio() {
        // min(200/100, 100/100) = 1.0, centered at (50, 50): the identity.
        let m = extent(Size::new(200.0, 100.0), Size::new(100.0, 100.0)).unwrap();
        assert_eq!(m, Affine::IDENTITY);

        let m = extent(Size::new(400.0, 100.0), Size::new(100.0, 100.0)).unwrap();
        assert_eq!(zoom_x(m), 1.0);
        assert_eq!(zoom_y(m), 1.0);
    }

    #[test]
    fn extent_centers_on_content() {
        let m = extent(Size::new(200.0, 200.0), Size::new(100.0, 100.0)).unwrap();
        assert_eq!(zoom_x(m), 2.0);
        // (50, 50) is the fixed point of the scale.
        assert_eq!(
            m * kurbo::Point::new(50.0, 50.0),
            kurbo::Point::new(50.0, 50.0)
        );
    }

    #[test]
    fn fill_scales_axes_independently() {
        let m = fill(Size::new(200.0, 100.0), Size::new(100.0, 100.0)).unwrap();
        assert_eq!(zoom_x(m), 2.0);
        assert_eq!(zoom_y(m), 1.0);
    }

    #[test]
    fn empty_sizes_yield_none() {
        assert!(extent(Size::new(0.0, 100.0), Size::new(100.0, 100.0)).is_none());
        assert!(extent(Size::new(100.0, 100.0), Size::new(100.0, 0.0)).is_none());
        assert!(fill(Size::new(-1.0, 100.0), Size::new(100.0, 100.0)).is_none());
    }
}
