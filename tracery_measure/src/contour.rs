// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-contour measurement tables.

use alloc::vec::Vec;

use kurbo::{BezPath, CubicBez, Line, ParamCurve, ParamCurveArclen, ParamCurveDeriv, PathEl, PathSeg, Point, QuadBez, Vec2};

use crate::ARCLEN_ACCURACY;

/// Measurement table for one continuous contour of a path.
///
/// A contour is measured once, when it is built: every segment's arclength is
/// computed and accumulated into a cumulative table, so distance queries are
/// random access afterwards. This is the single-contour building block that
/// [`PathMeasure`](crate::PathMeasure) composes across a whole path.
#[derive(Clone, Debug)]
pub struct ContourMeasure {
    segments: Vec<PathSeg>,
    /// Cumulative arclength through the end of each segment.
    cumulative: Vec<f64>,
    length: f64,
    closed: bool,
}

impl ContourMeasure {
    /// Measure one contour given as a path-element slice.
    ///
    /// The slice is expected to hold a single contour: a leading `MoveTo`
    /// followed by draw commands, with no interior `MoveTo`. When
    /// `force_closed` is set, an open contour gets a synthetic closing line
    /// back to its start and is treated as closed.
    #[must_use]
    pub fn new(elements: &[PathEl], force_closed: bool) -> Self {
        let mut segments = Vec::new();
        let mut start = Point::ZERO;
        let mut last = Point::ZERO;
        let mut closed = false;

        for el in elements {
            match *el {
                PathEl::MoveTo(p) => {
                    start = p;
                    last = p;
                }
                PathEl::LineTo(p) => {
                    segments.push(PathSeg::Line(Line::new(last, p)));
                    last = p;
                }
                PathEl::QuadTo(p1, p2) => {
                    segments.push(PathSeg::Quad(QuadBez::new(last, p1, p2)));
                    last = p2;
                }
                PathEl::CurveTo(p1, p2, p3) => {
                    segments.push(PathSeg::Cubic(CubicBez::new(last, p1, p2, p3)));
                    last = p3;
                }
                PathEl::ClosePath => {
                    if last != start {
                        segments.push(PathSeg::Line(Line::new(last, start)));
                        last = start;
                    }
                    closed = true;
                }
            }
        }

        if force_closed && !closed {
            if last != start {
                segments.push(PathSeg::Line(Line::new(last, start)));
            }
            closed = true;
        }

        let mut cumulative = Vec::with_capacity(segments.len());
        let mut acc = 0.0;
        for seg in &segments {
            acc += seg.arclen(ARCLEN_ACCURACY);
            cumulative.push(acc);
        }

        Self {
            segments,
            cumulative,
            length: acc,
            closed,
        }
    }

    /// Total arclength of the contour.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Whether the contour closes back onto its start point.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether the contour has no drawable segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Position and tangent vector at `distance` along this contour.
    ///
    /// Returns `None` when the contour is empty or `distance` falls outside
    /// `[0, length]`.
    #[must_use]
    pub fn sample(&self, distance: f64) -> Option<(Point, Vec2)> {
        if self.segments.is_empty() || distance < 0.0 || distance > self.length {
            return None;
        }
        let (ix, t) = self.locate(distance);
        let seg = self.segments[ix];
        Some((seg.eval(t), seg_tangent(seg, t)))
    }

    /// Append the `[start, end]` arclength range of this contour to `dst`.
    ///
    /// The range is clamped to the contour's own length. When
    /// `start_with_move_to` is false the first piece continues from `dst`'s
    /// current point without an explicit `MoveTo` (a `MoveTo` is still
    /// emitted when `dst` is empty, since there is no current point to
    /// continue from). Returns whether anything was appended.
    pub fn extract(&self, start: f64, end: f64, dst: &mut BezPath, start_with_move_to: bool) -> bool {
        let start = start.max(0.0);
        let end = end.min(self.length);
        if start >= end {
            return false;
        }

        let mut appended = false;
        let mut seg_start = 0.0;
        for (ix, seg) in self.segments.iter().enumerate() {
            let seg_end = self.cumulative[ix];
            if seg_end <= start {
                seg_start = seg_end;
                continue;
            }
            if seg_start >= end {
                break;
            }
            let seg_len = seg_end - seg_start;
            let t0 = if start > seg_start && seg_len > 0.0 {
                seg.inv_arclen(start - seg_start, ARCLEN_ACCURACY)
            } else {
                0.0
            };
            let t1 = if end < seg_end && seg_len > 0.0 {
                seg.inv_arclen(end - seg_start, ARCLEN_ACCURACY)
            } else {
                1.0
            };
            let sub = seg.subsegment(t0..t1);
            if !appended {
                if start_with_move_to || dst.elements().is_empty() {
                    dst.move_to(sub.eval(0.0));
                }
                appended = true;
            }
            match sub {
                PathSeg::Line(l) => dst.line_to(l.p1),
                PathSeg::Quad(q) => dst.quad_to(q.p1, q.p2),
                PathSeg::Cubic(c) => dst.curve_to(c.p1, c.p2, c.p3),
            }
            seg_start = seg_end;
        }
        appended
    }

    /// First point of the contour, if it has any segments.
    #[must_use]
    pub fn start_point(&self) -> Option<Point> {
        self.segments.first().map(|seg| seg.eval(0.0))
    }

    /// Last point of the contour, if it has any segments.
    #[must_use]
    pub fn end_point(&self) -> Option<Point> {
        self.segments.last().map(|seg| seg.eval(1.0))
    }

    /// Segment index and curve parameter for an in-range arclength distance.
    fn locate(&self, distance: f64) -> (usize, f64) {
        let ix = self
            .cumulative
            .partition_point(|&c| c < distance)
            .min(self.segments.len() - 1);
        let seg_start = if ix == 0 { 0.0 } else { self.cumulative[ix - 1] };
        let seg_len = self.cumulative[ix] - seg_start;
        if seg_len <= 0.0 {
            return (ix, 0.0);
        }
        let local = (distance - seg_start).clamp(0.0, seg_len);
        (ix, self.segments[ix].inv_arclen(local, ARCLEN_ACCURACY))
    }
}

/// Tangent vector of a segment at parameter `t`.
fn seg_tangent(seg: PathSeg, t: f64) -> Vec2 {
    match seg {
        PathSeg::Line(l) => l.p1 - l.p0,
        PathSeg::Quad(q) => q.deriv().eval(t).to_vec2(),
        PathSeg::Cubic(c) => c.deriv().eval(t).to_vec2(),
    }
}
