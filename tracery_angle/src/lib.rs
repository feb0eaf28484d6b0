// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Angle: headless angle and ellipse helpers.
//!
//! Small pure functions shared by arc-shaped decorations and their input
//! probing: one-step angle normalization, order-independent range clamping,
//! wrap-around sweep clamping, and the point↔angle conversions on an ellipse
//! inscribed in a rectangle.
//!
//! Angles are degrees unless a function says otherwise. The ellipse
//! conversions are parameterized on the rectangle's half-extents, so they
//! only agree with true geometric angles when the rectangle is square.

#![no_std]

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use kurbo::{Point, Rect};

/// Apply a one-step ±360° correction, mapping into the open range
/// `(-360, 360)` while preserving sign.
///
/// This is the single correction used for draw-angle clamping, not a full
/// modulo reduction: inputs beyond `±720°` need repeated calls.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    if degrees >= 360.0 {
        degrees - 360.0
    } else if degrees <= -360.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Clamp `value` into the range spanned by `a` and `b`, in either order.
#[must_use]
pub fn clamp_to_range(value: f64, a: f64, b: f64) -> f64 {
    value.clamp(a.min(b), a.max(b))
}

/// Clamp a probed angle into the sweep `[start, end]`, handling wrap-around
/// and negative configuration angles.
///
/// Input probing always yields a non-negative angle in `[0, 360)`, while
/// sweep configuration may use negative start/end values. Both the positive
/// representation and its mirrored negative (`positive - 360`) are therefore
/// considered:
///
/// - if the positive representation already lies in the sweep, it wins;
/// - otherwise, if the negative representation lies in the sweep, it wins;
/// - otherwise each representation is clamped independently and the clamp
///   that moved the least from its own representation is returned.
#[must_use]
pub fn clamp_angle_to_sweep(angle: f64, start: f64, end: f64) -> f64 {
    let positive = if angle < 0.0 {
        normalize_degrees(angle) + 360.0
    } else {
        normalize_degrees(angle)
    };
    let negative = positive - 360.0;

    let lo = start.min(end);
    let hi = start.max(end);
    if positive >= lo && positive <= hi {
        return positive;
    }
    if negative >= lo && negative <= hi {
        return negative;
    }

    let positive_clamped = clamp_to_range(positive, start, end);
    let negative_clamped = clamp_to_range(negative, start, end);
    if (positive_clamped - positive).abs() <= (negative_clamped - negative).abs() {
        positive_clamped
    } else {
        negative_clamped
    }
}

/// Point at `degrees` on the ellipse inscribed in `rect`.
///
/// The parameterization uses the rectangle's half-extents independently per
/// axis, so this is a circle only when the rectangle is square.
#[must_use]
pub fn point_on_ellipse(degrees: f64, rect: &Rect) -> Point {
    let radians = degrees.to_radians();
    let center = rect.center();
    Point::new(
        center.x + (rect.width() / 2.0) * radians.cos(),
        center.y + (rect.height() / 2.0) * radians.sin(),
    )
}

/// Ellipse-parameter angle of `(x, y)` relative to `rect`, in degrees.
///
/// The offsets from the center are normalized by the rectangle's extents
/// before the `atan2`, matching [`point_on_ellipse`]'s asymmetric
/// parameterization. The result is in `(-180, 180]`.
#[must_use]
pub fn ellipse_angle_to(x: f64, y: f64, rect: &Rect) -> f64 {
    let center = rect.center();
    let dy = (y - center.y) / rect.height();
    let dx = (x - center.x) / rect.width();
    dy.atan2(dx).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_identity_inside_open_range() {
        for a in [-359.9, -180.0, -0.1, 0.0, 42.0, 359.9] {
            assert_eq!(normalize_degrees(a), a);
        }
    }

    #[test]
    fn normalize_applies_one_step_correction() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(400.0), 40.0);
        assert_eq!(normalize_degrees(-400.0), -40.0);
        // A single step is not a full reduction.
        assert_eq!(normalize_degrees(800.0), 440.0);
    }

    #[test]
    fn clamp_is_order_independent() {
        assert_eq!(clamp_to_range(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp_to_range(5.0, 10.0, 0.0), 5.0);
        assert_eq!(clamp_to_range(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp_to_range(15.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn negative_representation_wins_inside_negative_sweep() {
        // A probe of 350° over a sweep of [-30, 30] resolves to -10°.
        assert_eq!(clamp_angle_to_sweep(350.0, -30.0, 30.0), -10.0);
        assert_eq!(clamp_angle_to_sweep(-10.0, -30.0, 30.0), -10.0);
    }

    #[test]
    fn positive_representation_preferred_when_in_range() {
        assert_eq!(clamp_angle_to_sweep(20.0, 0.0, 90.0), 20.0);
        // Both representations of 0° are candidates; positive wins.
        assert_eq!(clamp_angle_to_sweep(0.0, -90.0, 90.0), 0.0);
    }

    #[test]
    fn out_of_sweep_angle_takes_least_violating_clamp() {
        // 180° vs sweep [-30, 30]: positive clamps by 150, negative by 150;
        // the tie goes to the positive clamp.
        assert_eq!(clamp_angle_to_sweep(180.0, -30.0, 30.0), 30.0);
        // 200° (negative rep -160°): the negative clamp moves less.
        assert_eq!(clamp_angle_to_sweep(200.0, -30.0, 30.0), -30.0);
    }

    #[test]
    fn sweep_clamp_is_idempotent() {
        for angle in [-350.0, -10.0, 0.0, 45.0, 180.0, 359.0] {
            for (start, end) in [(-30.0, 30.0), (0.0, 270.0), (90.0, -90.0)] {
                let once = clamp_angle_to_sweep(angle, start, end);
                let twice = clamp_angle_to_sweep(once, start, end);
                assert!(
                    (once - twice).abs() < 1e-9,
                    "not idempotent for {angle} in [{start}, {end}]"
                );
            }
        }
    }

    #[test]
    fn ellipse_point_roundtrip_on_square_rect() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        for deg in [0.0, 45.0, 90.0, 135.0] {
            let p = point_on_ellipse(deg, &rect);
            let back = ellipse_angle_to(p.x, p.y, &rect);
            assert!((back - deg).abs() < 1e-9, "roundtrip failed at {deg}");
        }
    }

    #[test]
    fn ellipse_point_uses_half_extents() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let p = point_on_ellipse(0.0, &rect);
        assert!((p.x - 200.0).abs() < 1e-9);
        assert!((p.y - 50.0).abs() < 1e-9);
        let p = point_on_ellipse(90.0, &rect);
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 100.0).abs() < 1e-9);
    }
}
