// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Cap;
use peniko::Color;
use tracery_surface::{DrawStyle, StrokeStyle};

/// Display density scale applied to widths and offsets.
///
/// Injected at construction by the embedding layer (one logical unit maps to
/// `scale` path units); defaults to `1.0`. Never read from process-wide
/// state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisplayScale(pub f64);

impl Default for DisplayScale {
    fn default() -> Self {
        Self(1.0)
    }
}

impl DisplayScale {
    /// Apply the scale to a logical size.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        value * self.0
    }
}

/// Paint configuration shared by a decoration's elements.
///
/// Every setter bumps the revision counter; the decoration context compares
/// revisions to decide when its cached paint (including any synthesized
/// gradient texture) must be rebuilt.
#[derive(Clone, Debug)]
pub struct DecorationStyle {
    color: Color,
    stroke_width: f64,
    cap: Cap,
    draw_style: DrawStyle,
    font_size: f64,
    scale: DisplayScale,
    revision: u64,
}

impl Default for DecorationStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            stroke_width: 1.0,
            cap: Cap::Butt,
            draw_style: DrawStyle::Stroke,
            font_size: 12.0,
            scale: DisplayScale::default(),
            revision: 0,
        }
    }
}

impl DecorationStyle {
    /// Default style: white, hairline stroke, butt caps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Style with an explicit display scale.
    #[must_use]
    pub fn with_scale(scale: DisplayScale) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Base solid color, used when no multi-stop sequence is active.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the base solid color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.bump();
    }

    /// Stroke width in logical units (unscaled).
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Set the stroke width in logical units.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
        self.bump();
    }

    /// Line cap used for strokes.
    #[must_use]
    pub fn cap(&self) -> Cap {
        self.cap
    }

    /// Set the line cap.
    pub fn set_cap(&mut self, cap: Cap) {
        self.cap = cap;
        self.bump();
    }

    /// How primitives are painted.
    #[must_use]
    pub fn draw_style(&self) -> DrawStyle {
        self.draw_style
    }

    /// Set how primitives are painted.
    pub fn set_draw_style(&mut self, style: DrawStyle) {
        self.draw_style = style;
        self.bump();
    }

    /// Font size for label decorations, in logical units.
    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Set the label font size.
    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
        self.bump();
    }

    /// The injected display scale.
    #[must_use]
    pub fn scale(&self) -> DisplayScale {
        self.scale
    }

    /// Revision counter; bumped by every setter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Stroke parameters with the display scale applied.
    #[must_use]
    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle::new(self.scale.apply(self.stroke_width)).with_caps(self.cap)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_bump_the_revision() {
        let mut style = DecorationStyle::new();
        let mut last = style.revision();
        style.set_color(Color::BLACK);
        assert_ne!(style.revision(), last);
        last = style.revision();
        style.set_stroke_width(4.0);
        assert_ne!(style.revision(), last);
        last = style.revision();
        style.set_cap(Cap::Round);
        assert_ne!(style.revision(), last);
    }

    #[test]
    fn stroke_applies_display_scale() {
        let mut style = DecorationStyle::with_scale(DisplayScale(2.0));
        style.set_stroke_width(3.0);
        let stroke = style.stroke();
        assert_eq!(stroke.width, 6.0);
        assert_eq!(stroke.start_cap, Cap::Butt);
    }
}
