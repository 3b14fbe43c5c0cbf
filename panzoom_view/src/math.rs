// Copyright 2026 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float shims so the zoom curve works in both `std` and `libm` builds.

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("panzoom_view requires either the `std` or `libm` feature");

#[cfg(feature = "std")]
#[inline]
pub(crate) fn powf(x: f64, y: f64) -> f64 {
    x.powf(y)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub(crate) fn powf(x: f64, y: f64) -> f64 {
    libm::pow(x, y)
}

/// Sign of `x` as -1, 0, or 1, with zero mapping to zero.
///
/// `f64::signum` maps +0.0 to 1.0, which would turn a zero delta into a
/// zoom-in on curves with a zero power factor; the three-way sign keeps
/// `zoom_delta_to(0.0, ..)` an exact identity.
#[inline]
pub(crate) fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}

#[cfg(test)]
mod tests {
    use super::{abs, powf, sign};

    #[test]
    fn sign_is_three_way() {
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
    }

    #[test]
    fn abs_flips_negatives() {
        assert_eq!(abs(-2.5), 2.5);
        assert_eq!(abs(2.5), 2.5);
        assert_eq!(abs(0.0), 0.0);
    }

    #[test]
    fn powf_matches_std() {
        assert_eq!(powf(1.2, 0.0), 1.0);
        assert!((powf(1.2, 3.0) - 1.728).abs() < 1e-12);
    }
}
