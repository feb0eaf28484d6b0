// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// The result of sampling a measured path at a distance from its start.
///
/// The tangent is the direction of travel at the sampled point, expressed as
/// the angle of the local derivative (`atan2(dy, dx)`, radians).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathSample {
    /// Position of the sample.
    pub point: Point,
    /// Arclength distance from the start of the path (across all contours).
    pub distance: f64,
    /// Direction of travel at the sample, in radians.
    pub tangent_angle: f64,
}

impl PathSample {
    /// Create a sample from a position, global distance, and tangent vector.
    ///
    /// A zero tangent vector yields a tangent angle of `0.0`.
    #[must_use]
    pub fn from_tangent(point: Point, distance: f64, tangent: Vec2) -> Self {
        Self {
            point,
            distance,
            tangent_angle: tangent.atan2(),
        }
    }

    /// Unit vector pointing along the direction of travel.
    #[must_use]
    pub fn tangent(&self) -> Vec2 {
        Vec2::from_angle(self.tangent_angle)
    }

    /// Unit vector perpendicular to the direction of travel.
    ///
    /// This is the tangent rotated by +90°, which points to the right of the
    /// direction of travel in a y-down coordinate system.
    #[must_use]
    pub fn normal(&self) -> Vec2 {
        let t = self.tangent();
        Vec2::new(-t.y, t.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tangent_and_normal_are_perpendicular() {
        let s = PathSample::from_tangent(Point::new(1.0, 2.0), 5.0, Vec2::new(3.0, 4.0));
        let t = s.tangent();
        let n = s.normal();
        assert!(t.dot(n).abs() < 1e-12);
        assert!((t.hypot() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn horizontal_tangent_angle_is_zero() {
        let s = PathSample::from_tangent(Point::ZERO, 0.0, Vec2::new(10.0, 0.0));
        assert_eq!(s.tangent_angle, 0.0);
    }
}
