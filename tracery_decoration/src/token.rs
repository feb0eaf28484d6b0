// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text labels along a path.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use peniko::{Brush, Color};
use tracery_angle::normalize_degrees;
use tracery_surface::{DecorationSurface, DrawStyle, TextMetrics};

use crate::EdgePlacement;
use crate::context::{Decoration, DecorationContext};

/// Per-label parameters handed to the draw callback.
///
/// One record is owned by the decoration and reset before each label; the
/// callback may override any field for that label only.
#[derive(Clone, Debug)]
pub struct TokenInfo {
    /// Index of the label, starting at zero.
    pub index: u32,
    /// The text to draw.
    pub text: String,
    /// Distance of the label anchor from the path start.
    pub distance: f64,
    /// Tangent direction at the anchor, in degrees.
    pub angle_degrees: f64,
    /// Anchor point on the path.
    pub point: Point,
    /// Additional offset: `x` along the path, `y` perpendicular to it.
    pub offset: Vec2,
    /// Which side of the path the label sits on.
    pub placement: EdgePlacement,
    /// Draw the label as a straight, tangent-rotated run instead of
    /// following the path's curvature.
    pub unbend: bool,
    /// Override of the decoration's paint color for this label.
    pub color: Option<Color>,
    /// Whether this label draws. ANDed with the visibility window test.
    pub visible: bool,
}

/// Text labels at evenly spaced distances along the decorated path.
///
/// With `last_label_on_end`, the final label anchors exactly at the path end
/// (and is end-aligned) instead of taking the evenly spaced distance; this
/// is how a gauge puts its maximum reading on the tip of the arc.
#[derive(Debug)]
pub struct TextDecoration {
    ctx: DecorationContext,
    labels: Vec<String>,
    placement: EdgePlacement,
    unbend: bool,
    last_label_on_end: bool,
    metric_compensation: bool,
    info: TokenInfo,
}

impl Default for TextDecoration {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDecoration {
    /// A decoration with no labels configured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ctx: DecorationContext::new(),
            labels: Vec::new(),
            placement: EdgePlacement::Outside,
            unbend: false,
            last_label_on_end: false,
            metric_compensation: false,
            info: TokenInfo {
                index: 0,
                text: String::new(),
                distance: 0.0,
                angle_degrees: 0.0,
                point: Point::ZERO,
                offset: Vec2::ZERO,
                placement: EdgePlacement::Outside,
                unbend: false,
                color: None,
                visible: true,
            },
        }
    }

    /// The configured labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Replace the labels.
    pub fn set_labels(&mut self, labels: impl IntoIterator<Item = String>) {
        self.labels = labels.into_iter().collect();
    }

    /// Default label placement.
    #[must_use]
    pub fn placement(&self) -> EdgePlacement {
        self.placement
    }

    /// Set the default label placement.
    pub fn set_placement(&mut self, placement: EdgePlacement) {
        self.placement = placement;
    }

    /// Whether labels draw as straight, tangent-rotated runs.
    #[must_use]
    pub fn unbend(&self) -> bool {
        self.unbend
    }

    /// Set whether labels draw unbent.
    pub fn set_unbend(&mut self, unbend: bool) {
        self.unbend = unbend;
    }

    /// Whether the final label anchors exactly at the path end.
    #[must_use]
    pub fn last_label_on_end(&self) -> bool {
        self.last_label_on_end
    }

    /// Anchor the final label exactly at the path end.
    pub fn set_last_label_on_end(&mut self, on_end: bool) {
        self.last_label_on_end = on_end;
    }

    /// Whether font metrics refine the perpendicular label offset.
    #[must_use]
    pub fn metric_compensation(&self) -> bool {
        self.metric_compensation
    }

    /// Enable font-metric refinement of the perpendicular offset.
    pub fn set_metric_compensation(&mut self, enabled: bool) {
        self.metric_compensation = enabled;
    }

    /// Draw, invoking `on_token` for each label before it is committed.
    pub fn draw_with(
        &mut self,
        surface: Option<&mut dyn DecorationSurface>,
        on_token: &mut dyn FnMut(&mut TokenInfo),
    ) {
        if !self.ctx.visible() {
            return;
        }
        self.ctx.refresh();
        self.place_labels(surface, Some(on_token));
    }

    fn place_labels(
        &mut self,
        mut surface: Option<&mut dyn DecorationSurface>,
        mut on_token: Option<&mut dyn FnMut(&mut TokenInfo)>,
    ) {
        let total = self.ctx.measure().total_length();
        let len = self.labels.len();
        if len == 0 || total <= 0.0 {
            return;
        }
        let spacing = if self.last_label_on_end && len > 1 {
            total / (len - 1) as f64
        } else {
            total / len as f64
        };

        for (index, label) in self.labels.iter().enumerate() {
            let is_last = index == len - 1;
            let distance = if self.last_label_on_end && is_last {
                total
            } else {
                index as f64 * spacing
            };
            let Some(sample) = self.ctx.measure().point_and_tangent_at(distance) else {
                continue;
            };

            #[expect(clippy::cast_possible_truncation, reason = "label counts are small")]
            let index = index as u32;
            self.info = TokenInfo {
                index,
                text: label.clone(),
                distance,
                angle_degrees: normalize_degrees(sample.tangent_angle.to_degrees()),
                point: sample.point,
                offset: Vec2::ZERO,
                placement: self.placement,
                unbend: self.unbend,
                color: None,
                visible: true,
            };
            if let Some(cb) = on_token.as_mut() {
                (*cb)(&mut self.info);
            }
            if !self.info.visible || !self.ctx.window().contains(self.info.distance, total) {
                continue;
            }

            let Some(surface) = surface.as_mut() else {
                continue;
            };
            let font_size = self.ctx.style().font_size();
            let metrics = surface.text_metrics(&self.info.text, font_size);
            let v_offset = self.vertical_offset(metrics) + self.info.offset.y;
            let end_aligned = self.last_label_on_end && is_last;
            let lead = if end_aligned {
                -metrics.advance
            } else {
                -metrics.advance / 2.0
            };
            let h_offset = lead + self.info.offset.x;

            let mut paint = self.ctx.paint();
            paint.style = DrawStyle::Fill;
            if let Some(color) = self.info.color {
                paint.brush = Brush::Solid(color);
            }

            if self.info.unbend {
                let sample_for_draw = self
                    .ctx
                    .measure()
                    .point_and_tangent_at(self.info.distance)
                    .unwrap_or(sample);
                let tangent = sample_for_draw.tangent();
                let normal = sample_for_draw.normal();
                let origin = self.info.point + tangent * h_offset + normal * v_offset;
                surface.draw_text(&self.info.text, origin, sample_for_draw.tangent_angle, &paint);
            } else {
                surface.draw_text_on_path(
                    &self.info.text,
                    self.ctx.path().path(),
                    self.info.distance + h_offset,
                    v_offset,
                    &paint,
                );
            }
        }
    }

    /// Perpendicular offset of the baseline from the path.
    ///
    /// The placement contributes a text-height offset (nothing for
    /// `Outside`, half the height for `Middle`, the full height for
    /// `Inside`); metric compensation refines it by the font's ascent
    /// (inside) or descent (outside).
    fn vertical_offset(&self, metrics: TextMetrics) -> f64 {
        let base = match self.info.placement {
            EdgePlacement::Outside => 0.0,
            EdgePlacement::Middle => metrics.height() / 2.0,
            EdgePlacement::Inside => metrics.height(),
        };
        let compensation = if self.metric_compensation {
            match self.info.placement {
                EdgePlacement::Inside => metrics.ascent,
                EdgePlacement::Outside => metrics.descent,
                EdgePlacement::Middle => 0.0,
            }
        } else {
            0.0
        };
        base + compensation
    }
}

impl Decoration for TextDecoration {
    fn context(&self) -> &DecorationContext {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut DecorationContext {
        &mut self.ctx
    }

    fn place(&mut self, surface: Option<&mut dyn DecorationSurface>) {
        self.place_labels(surface, None);
    }
}
