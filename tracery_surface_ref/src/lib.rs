// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Surface Reference: a recording implementation of
//! [`DecorationSurface`] for tests and debugging.
//!
//! This surface is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It does **not** establish "golden" rendering behavior across backends.
//! - It records every draw call as a [`DrawEvent`], with a clone of the
//!   paint used, so tests can assert on what a decoration emitted.
//!
//! Text metrics are synthetic and configurable (a fixed advance per char
//! plus fixed ascent/descent), which keeps label placement tests
//! deterministic without a font stack.

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{BezPath, Line, Point};
use tracery_surface::{DecorationSurface, PaintDesc, TextMetrics};

/// Draw call recorded by [`RefSurface`].
#[derive(Clone, Debug)]
pub enum DrawEvent {
    /// A path was drawn.
    Path {
        /// The path geometry.
        path: BezPath,
        /// Paint used for the call.
        paint: PaintDesc,
    },
    /// A line segment was drawn.
    Line {
        /// The segment.
        line: Line,
        /// Paint used for the call.
        paint: PaintDesc,
    },
    /// A circle was drawn.
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Paint used for the call.
        paint: PaintDesc,
    },
    /// A straight, rotated text run was drawn.
    Text {
        /// The text.
        text: String,
        /// Baseline origin.
        origin: Point,
        /// Rotation about the origin, radians.
        rotation: f64,
        /// Paint used for the call.
        paint: PaintDesc,
    },
    /// A text run following a path was drawn.
    TextOnPath {
        /// The text.
        text: String,
        /// The path followed.
        path: BezPath,
        /// Offset along the path.
        h_offset: f64,
        /// Offset perpendicular to the path.
        v_offset: f64,
        /// Paint used for the call.
        paint: PaintDesc,
    },
}

/// Recording reference surface.
#[derive(Debug)]
pub struct RefSurface {
    events: Vec<DrawEvent>,
    advance_per_char: f64,
    ascent: f64,
    descent: f64,
}

impl Default for RefSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RefSurface {
    /// Create a surface with default synthetic metrics: each character
    /// advances by `0.6 * size`, ascent is `0.8 * size`, descent `0.2 * size`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            advance_per_char: 0.6,
            ascent: 0.8,
            descent: 0.2,
        }
    }

    /// Override the synthetic metric factors (all relative to font size).
    #[must_use]
    pub fn with_text_metrics(advance_per_char: f64, ascent: f64, descent: f64) -> Self {
        Self {
            events: Vec::new(),
            advance_per_char,
            ascent,
            descent,
        }
    }

    /// Recorded draw events, in call order.
    #[must_use]
    pub fn events(&self) -> &[DrawEvent] {
        &self.events
    }

    /// Clears the event log.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl DecorationSurface for RefSurface {
    fn draw_path(&mut self, path: &BezPath, paint: &PaintDesc) {
        self.events.push(DrawEvent::Path {
            path: path.clone(),
            paint: paint.clone(),
        });
    }

    fn draw_line(&mut self, line: Line, paint: &PaintDesc) {
        self.events.push(DrawEvent::Line {
            line,
            paint: paint.clone(),
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f64, paint: &PaintDesc) {
        self.events.push(DrawEvent::Circle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, rotation: f64, paint: &PaintDesc) {
        self.events.push(DrawEvent::Text {
            text: text.to_string(),
            origin,
            rotation,
            paint: paint.clone(),
        });
    }

    fn draw_text_on_path(
        &mut self,
        text: &str,
        path: &BezPath,
        h_offset: f64,
        v_offset: f64,
        paint: &PaintDesc,
    ) {
        self.events.push(DrawEvent::TextOnPath {
            text: text.to_string(),
            path: path.clone(),
            h_offset,
            v_offset,
            paint: paint.clone(),
        });
    }

    fn text_metrics(&self, text: &str, size: f64) -> TextMetrics {
        TextMetrics {
            advance: self.advance_per_char * size * text.chars().count() as f64,
            ascent: self.ascent * size,
            descent: self.descent * size,
        }
    }
}
