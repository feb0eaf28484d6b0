// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Measure: multi-contour path measurement primitives.
//!
//! Kurbo measures one curve at a time; a [`kurbo::BezPath`], however, may
//! carry any number of disjoint contours. This crate treats the full set of
//! contours as one continuous curve: total arclength, sampled bounds, global
//! point/tangent lookup by distance, sub-segment extraction by distance
//! range, and nearest-point search all operate on accumulated distances
//! across contour boundaries.
//!
//! - [`ContourMeasure`] is the single-contour measurement table.
//! - [`PathMeasure`] composes the tables over a whole path.
//! - [`PathSample`] is the result of a point query: position, distance from
//!   the path start, and tangent angle.
//!
//! Measurement tables are built once per [`PathMeasure::set_path`] call and
//! are random access afterwards; queries never mutate the measure.

#![no_std]

extern crate alloc;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use alloc::vec::Vec;

use kurbo::{BezPath, PathEl, Point, Rect};

mod contour;
mod sample;

pub use contour::ContourMeasure;
pub use sample::PathSample;

/// Accuracy used for all arclength computation and inversion.
pub const ARCLEN_ACCURACY: f64 = 1e-6;

/// Arclength step used for sampled bounds and nearest-point scans.
pub const SAMPLE_STEP: f64 = 1.0;

/// Measured view over every contour of a path.
///
/// The measure is rebuilt by [`set_path`](Self::set_path); it does not watch
/// the source path for changes. Callers that mutate path geometry in place
/// are expected to re-set the path (the decoration layer does this through
/// its revision counters).
#[derive(Clone, Debug, Default)]
pub struct PathMeasure {
    contours: Vec<ContourMeasure>,
    total_length: f64,
    bounds: Rect,
    force_closed: bool,
}

impl PathMeasure {
    /// Create an empty measure. All queries return `None` until a path is set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a measure over `path`.
    #[must_use]
    pub fn from_path(path: &BezPath, force_closed: bool) -> Self {
        let mut m = Self::new();
        m.set_path(path, force_closed);
        m
    }

    /// Replace the tracked path and rebuild every derived value.
    ///
    /// The path is split into contours at `MoveTo` boundaries; each contour
    /// is measured independently and the results are accumulated into the
    /// total length and the sampled bounds. With `force_closed`, every
    /// contour is treated as if it ended with a close.
    pub fn set_path(&mut self, path: &BezPath, force_closed: bool) {
        self.force_closed = force_closed;
        self.contours.clear();
        for range in contour_ranges(path.elements()) {
            let c = ContourMeasure::new(&path.elements()[range.0..range.1], force_closed);
            if !c.is_empty() {
                self.contours.push(c);
            }
        }
        self.total_length = self.contours.iter().map(ContourMeasure::length).sum();
        self.bounds = self.sampled_bounds();
    }

    /// Sum of the arclengths of all contours.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Number of measured (non-empty) contours.
    #[must_use]
    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    /// Bounds of the path, sampled at [`SAMPLE_STEP`] arclength resolution.
    ///
    /// An empty path has `Rect::ZERO` bounds. Note that these are *sampled*
    /// bounds, not the control-point bounding box: they trace the curve
    /// itself, which is what decoration textures are sized from.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether the measure has no drawable contours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Whether the path is closed: forced closed, or every contour closes.
    ///
    /// An empty path is open.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        if self.contours.is_empty() {
            return false;
        }
        self.force_closed || self.contours.iter().all(ContourMeasure::is_closed)
    }

    /// Position and tangent at `distance` along the whole path.
    ///
    /// Distances accumulate across contours: a query lands in the first
    /// contour whose cumulative end reaches it. Returns `None` when
    /// `distance` is negative or exceeds [`total_length`](Self::total_length).
    #[must_use]
    pub fn point_and_tangent_at(&self, distance: f64) -> Option<PathSample> {
        if distance < 0.0 || distance > self.total_length {
            return None;
        }
        let mut acc = 0.0;
        for c in &self.contours {
            // Allow for accumulated floating-point slack on the last contour.
            if distance <= acc + c.length() + ARCLEN_ACCURACY {
                let local = (distance - acc).clamp(0.0, c.length());
                let (point, tangent) = c.sample(local)?;
                return Some(PathSample::from_tangent(point, distance, tangent));
            }
            acc += c.length();
        }
        None
    }

    /// Append the `[start_distance, end_distance]` range of the path to `dst`.
    ///
    /// Every contour overlapping the range contributes its clamped overlap.
    /// `start_with_move_to` applies to the first appended piece only; pieces
    /// from later contours always open with a `MoveTo`, since disjoint
    /// contours must not be bridged. Returns whether anything was appended;
    /// an inverted range (`start > end`) appends nothing and returns `false`.
    pub fn extract_segment(
        &self,
        start_distance: f64,
        end_distance: f64,
        dst: &mut BezPath,
        start_with_move_to: bool,
    ) -> bool {
        if start_distance > end_distance {
            return false;
        }
        let start = start_distance.max(0.0);
        let end = end_distance.min(self.total_length);

        let mut appended = false;
        let mut acc = 0.0;
        for c in &self.contours {
            let move_to = appended || start_with_move_to;
            if c.extract(start - acc, end - acc, dst, move_to) {
                appended = true;
            }
            acc += c.length();
            if acc >= end {
                break;
            }
        }
        appended
    }

    /// Euclidean-nearest sample to `(x, y)` within a box of half-width
    /// `threshold`.
    ///
    /// The path is scanned at [`SAMPLE_STEP`] arclength resolution across all
    /// contours; a sample qualifies when both of its coordinates fall within
    /// `threshold` of the query. A zero threshold collapses the box to exact
    /// containment. Ties keep the first minimal sample in scan order.
    #[must_use]
    pub fn find_nearest(&self, x: f64, y: f64, threshold: f64) -> Option<PathSample> {
        if threshold < 0.0 {
            return None;
        }
        let mut best: Option<PathSample> = None;
        let mut best_dist_sq = f64::INFINITY;
        let mut acc = 0.0;
        for c in &self.contours {
            let mut d = 0.0;
            loop {
                if let Some((point, tangent)) = c.sample(d) {
                    if (point.x - x).abs() <= threshold && (point.y - y).abs() <= threshold {
                        let dx = point.x - x;
                        let dy = point.y - y;
                        let dist_sq = dx * dx + dy * dy;
                        if dist_sq < best_dist_sq {
                            best_dist_sq = dist_sq;
                            best = Some(PathSample::from_tangent(point, acc + d, tangent));
                        }
                    }
                }
                if d >= c.length() {
                    break;
                }
                // Always land exactly on the contour end.
                d = (d + SAMPLE_STEP).min(c.length());
            }
            acc += c.length();
        }
        best
    }

    /// Point at distance `0`.
    #[must_use]
    pub fn first_point(&self) -> Option<Point> {
        self.point_and_tangent_at(0.0).map(|s| s.point)
    }

    /// Point at distance [`total_length`](Self::total_length).
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.point_and_tangent_at(self.total_length).map(|s| s.point)
    }

    /// Snapshot of the measure's derived state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MeasureDebugInfo {
        MeasureDebugInfo {
            total_length: self.total_length,
            contour_count: self.contours.len(),
            bounds: self.bounds,
            closed: self.is_closed(),
        }
    }

    fn sampled_bounds(&self) -> Rect {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut any = false;
        for c in &self.contours {
            let mut d = 0.0;
            loop {
                if let Some((p, _)) = c.sample(d) {
                    any = true;
                    min_x = min_x.min(p.x);
                    min_y = min_y.min(p.y);
                    max_x = max_x.max(p.x);
                    max_y = max_y.max(p.y);
                }
                if d >= c.length() {
                    break;
                }
                d = (d + SAMPLE_STEP).min(c.length());
            }
        }
        if any {
            Rect::new(min_x, min_y, max_x, max_y)
        } else {
            Rect::ZERO
        }
    }
}

/// Snapshot of a [`PathMeasure`]'s derived state.
#[derive(Copy, Clone, Debug)]
pub struct MeasureDebugInfo {
    /// Sum of all contour arclengths.
    pub total_length: f64,
    /// Number of measured contours.
    pub contour_count: usize,
    /// Sampled bounds of the path.
    pub bounds: Rect,
    /// Whether the path is closed.
    pub closed: bool,
}

/// Element index ranges of each contour in a path-element slice.
fn contour_ranges(elements: &[PathEl]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = None;
    for (ix, el) in elements.iter().enumerate() {
        if matches!(el, PathEl::MoveTo(_)) {
            if let Some(s) = start {
                ranges.push((s, ix));
            }
            start = Some(ix);
        }
    }
    if let Some(s) = start {
        ranges.push((s, elements.len()));
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_contour_path() -> BezPath {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((10.0, 0.0));
        p.move_to((0.0, 20.0));
        p.line_to((30.0, 20.0));
        p
    }

    #[test]
    fn total_length_is_sum_of_contours() {
        let m = PathMeasure::from_path(&two_contour_path(), false);
        assert_eq!(m.contour_count(), 2);
        assert!((m.total_length() - 40.0).abs() < 1e-6);
    }

    #[test]
    fn empty_path_has_no_length_bounds_or_samples() {
        let m = PathMeasure::from_path(&BezPath::new(), false);
        assert_eq!(m.total_length(), 0.0);
        assert_eq!(m.bounds(), Rect::ZERO);
        assert!(m.point_and_tangent_at(0.0).is_none());
        assert!(m.first_point().is_none());
        assert!(m.last_point().is_none());
        assert!(m.find_nearest(0.0, 0.0, 10.0).is_none());
    }

    #[test]
    fn query_crosses_contour_boundary() {
        let m = PathMeasure::from_path(&two_contour_path(), false);
        // Distance 25 lands 15 units into the second contour.
        let s = m.point_and_tangent_at(25.0).unwrap();
        assert!((s.point.x - 15.0).abs() < 1e-6);
        assert!((s.point.y - 20.0).abs() < 1e-6);
        assert_eq!(s.distance, 25.0);
    }

    #[test]
    fn out_of_range_distances_are_none() {
        let m = PathMeasure::from_path(&two_contour_path(), false);
        assert!(m.point_and_tangent_at(-0.001).is_none());
        assert!(m.point_and_tangent_at(40.001).is_none());
        assert!(m.point_and_tangent_at(40.0).is_some());
        assert!(m.point_and_tangent_at(0.0).is_some());
    }

    #[test]
    fn first_and_last_points() {
        let m = PathMeasure::from_path(&two_contour_path(), false);
        assert_eq!(m.first_point().unwrap(), Point::new(0.0, 0.0));
        let last = m.last_point().unwrap();
        assert!((last.x - 30.0).abs() < 1e-6);
        assert!((last.y - 20.0).abs() < 1e-6);
    }

    #[test]
    fn full_range_extraction_round_trips_length() {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.quad_to((50.0, 50.0), (100.0, 0.0));
        let m = PathMeasure::from_path(&p, false);
        let mut dst = BezPath::new();
        assert!(m.extract_segment(0.0, m.total_length(), &mut dst, true));
        let copy = PathMeasure::from_path(&dst, false);
        assert!((copy.total_length() - m.total_length()).abs() < 1e-3);
    }

    #[test]
    fn extraction_spanning_contours_yields_disjoint_pieces() {
        let m = PathMeasure::from_path(&two_contour_path(), false);
        let mut dst = BezPath::new();
        // Last 5 units of the first contour and first 10 of the second.
        assert!(m.extract_segment(5.0, 20.0, &mut dst, true));
        let copy = PathMeasure::from_path(&dst, false);
        assert_eq!(copy.contour_count(), 2);
        assert!((copy.total_length() - 15.0).abs() < 1e-6);
    }

    #[test]
    fn inverted_range_extracts_nothing() {
        let m = PathMeasure::from_path(&two_contour_path(), false);
        let mut dst = BezPath::new();
        assert!(!m.extract_segment(10.0, 5.0, &mut dst, true));
        assert!(dst.elements().is_empty());
    }

    #[test]
    fn nearest_point_on_line() {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((10.0, 0.0));
        let m = PathMeasure::from_path(&p, false);
        let s = m.find_nearest(5.0, 1.0, 2.0).unwrap();
        assert!((s.point.x - 5.0).abs() < 1e-9);
        assert!(s.point.y.abs() < 1e-9);
        assert!((s.distance - 5.0).abs() < 1e-9);
    }

    #[test]
    fn nearest_point_outside_threshold_is_none() {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((10.0, 0.0));
        let m = PathMeasure::from_path(&p, false);
        assert!(m.find_nearest(5.0, 3.0, 2.0).is_none());
    }

    #[test]
    fn zero_threshold_requires_exact_containment() {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((10.0, 0.0));
        let m = PathMeasure::from_path(&p, false);
        assert!(m.find_nearest(5.0, 0.5, 0.0).is_none());
        let s = m.find_nearest(5.0, 0.0, 0.0).unwrap();
        assert!((s.distance - 5.0).abs() < 1e-9);
    }

    #[test]
    fn sampled_bounds_follow_the_curve() {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((100.0, 0.0));
        p.move_to((0.0, 50.0));
        p.line_to((100.0, 50.0));
        let m = PathMeasure::from_path(&p, false);
        let b = m.bounds();
        assert!((b.x0 - 0.0).abs() < 1e-9);
        assert!((b.x1 - 100.0).abs() < 1e-9);
        assert!((b.y0 - 0.0).abs() < 1e-9);
        assert!((b.y1 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn closed_detection() {
        let mut open = BezPath::new();
        open.move_to((0.0, 0.0));
        open.line_to((10.0, 0.0));
        assert!(!PathMeasure::from_path(&open, false).is_closed());
        assert!(PathMeasure::from_path(&open, true).is_closed());

        let mut closed = BezPath::new();
        closed.move_to((0.0, 0.0));
        closed.line_to((10.0, 0.0));
        closed.line_to((10.0, 10.0));
        closed.close_path();
        assert!(PathMeasure::from_path(&closed, false).is_closed());
    }

    #[test]
    fn debug_info_snapshot() {
        let m = PathMeasure::from_path(&two_contour_path(), false);
        let info = m.debug_info();
        assert_eq!(info.contour_count, 2);
        assert!((info.total_length - 40.0).abs() < 1e-6);
        assert!(!info.closed);
    }
}
