// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Surface: the backend-agnostic drawing capability decorations
//! render through.
//!
//! Decorations never rasterize anything themselves; they compute geometry
//! and hand primitives — stroked paths, lines, circles, text runs — to a
//! [`DecorationSurface`] together with a [`PaintDesc`]. Concrete surfaces
//! (a vector backend, a canvas binding, the recording surface in
//! `tracery_surface_ref`) implement the trait on whatever technology they
//! like.
//!
//! The trait is deliberately object-safe: decoration draw entry points take
//! `Option<&mut dyn DecorationSurface>`, and `None` is the first-class
//! measure-only mode — all placement computation runs, nothing is emitted.

#![no_std]

use kurbo::{BezPath, Line, Point};
use peniko::Brush;

/// Stroke style used when stroking primitives.
///
/// This is currently a re-export of [`kurbo::Stroke`], which captures width,
/// joins, caps, dashes, and related stroke parameters.
pub type StrokeStyle = kurbo::Stroke;

/// How a primitive is painted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DrawStyle {
    /// Outline only.
    #[default]
    Stroke,
    /// Interior only.
    Fill,
    /// Interior plus outline with the same paint.
    FillAndStroke,
}

/// Paint parameters for a single primitive.
#[derive(Clone, Debug)]
pub struct PaintDesc {
    /// Brush used when rendering (solid color, gradient, image).
    pub brush: Brush,
    /// Stroke parameters, used when `style` strokes.
    pub stroke: StrokeStyle,
    /// Whether the primitive is stroked, filled, or both.
    pub style: DrawStyle,
}

impl PaintDesc {
    /// A stroked paint with the given brush and stroke width.
    #[must_use]
    pub fn stroked(brush: Brush, width: f64) -> Self {
        Self {
            brush,
            stroke: StrokeStyle::new(width),
            style: DrawStyle::Stroke,
        }
    }
}

/// Metrics of a text run at a given size.
///
/// `ascent` and `descent` are positive distances from the baseline.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance of the full run.
    pub advance: f64,
    /// Distance from baseline to the top of the run.
    pub ascent: f64,
    /// Distance from baseline to the bottom of the run.
    pub descent: f64,
}

impl TextMetrics {
    /// Total height of the run.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Abstract drawing capability consumed by decorations.
///
/// Implementations own the mapping onto their rendering technology,
/// including how text is shaped and measured. All coordinates are in the
/// same space as the decorated path.
pub trait DecorationSurface {
    /// Stroke (or fill, per the paint's [`DrawStyle`]) a path.
    fn draw_path(&mut self, path: &BezPath, paint: &PaintDesc);

    /// Draw a line segment.
    fn draw_line(&mut self, line: Line, paint: &PaintDesc);

    /// Draw a circle at `center`.
    fn draw_circle(&mut self, center: Point, radius: f64, paint: &PaintDesc);

    /// Draw a straight text run with its baseline origin at `origin`,
    /// rotated about the origin by `rotation` radians.
    fn draw_text(&mut self, text: &str, origin: Point, rotation: f64, paint: &PaintDesc);

    /// Draw a text run following `path`, offset along the path by
    /// `h_offset` and perpendicular to it by `v_offset`.
    fn draw_text_on_path(
        &mut self,
        text: &str,
        path: &BezPath,
        h_offset: f64,
        v_offset: f64,
        paint: &PaintDesc,
    );

    /// Metrics of `text` at font size `size`.
    fn text_metrics(&self, text: &str, size: f64) -> TextMetrics;
}
