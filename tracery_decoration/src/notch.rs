// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evenly spaced markers along a path.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use kurbo::Line;
use peniko::{Brush, Color};
use tracery_surface::{DecorationSurface, DrawStyle};

use crate::context::{Decoration, DecorationContext};
use crate::EdgePlacement;

/// Shape of a notch marker.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NotchKind {
    /// A line perpendicular to the path.
    #[default]
    Line,
    /// An outlined circle.
    Circle,
    /// A filled circle (filled and stroked).
    FilledCircle,
}

/// Per-notch parameters handed to the draw callback.
///
/// One record is owned by the decoration and reset to the configured
/// defaults before each notch; the callback may override any field, and the
/// overrides are honored for that notch only.
#[derive(Clone, Debug)]
pub struct NotchInfo {
    /// Index of the notch, starting at zero.
    pub index: u32,
    /// Distance of the notch from the path start.
    pub distance: f64,
    /// Stroke width of the marker, in logical units.
    pub width: f64,
    /// Extent of the marker perpendicular to the path (line length or
    /// circle diameter), in logical units.
    pub length: f64,
    /// Additional perpendicular offset from the path, in logical units.
    pub offset: f64,
    /// Marker shape.
    pub kind: NotchKind,
    /// Which side of the path the marker sits on.
    pub placement: EdgePlacement,
    /// Override of the decoration's paint color for this notch.
    pub color: Option<Color>,
    /// Whether this notch draws. ANDed with the visibility window test.
    pub visible: bool,
}

/// Evenly spaced line or circle markers along the decorated path.
///
/// `count` divides the path into equal spans. Open paths get `count + 1`
/// markers so both endpoints carry one; closed paths get `count`, since the
/// endpoint marker would coincide with the start.
#[derive(Debug)]
pub struct NotchDecoration {
    ctx: DecorationContext,
    count: u32,
    width: f64,
    length: f64,
    offset: f64,
    kind: NotchKind,
    placement: EdgePlacement,
    info: NotchInfo,
}

impl Default for NotchDecoration {
    fn default() -> Self {
        Self::new()
    }
}

impl NotchDecoration {
    /// A decoration with no notches configured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ctx: DecorationContext::new(),
            count: 0,
            width: 1.0,
            length: 8.0,
            offset: 0.0,
            kind: NotchKind::default(),
            placement: EdgePlacement::default(),
            info: NotchInfo {
                index: 0,
                distance: 0.0,
                width: 1.0,
                length: 8.0,
                offset: 0.0,
                kind: NotchKind::default(),
                placement: EdgePlacement::default(),
                color: None,
                visible: true,
            },
        }
    }

    /// Number of equal spans the path is divided into.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Set the number of spans.
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    /// Default marker stroke width, in logical units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the default marker stroke width.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Default marker extent, in logical units.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Set the default marker extent.
    pub fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    /// Default perpendicular offset from the path.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Set the default perpendicular offset.
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Default marker shape.
    #[must_use]
    pub fn kind(&self) -> NotchKind {
        self.kind
    }

    /// Set the default marker shape.
    pub fn set_kind(&mut self, kind: NotchKind) {
        self.kind = kind;
    }

    /// Default marker placement.
    #[must_use]
    pub fn placement(&self) -> EdgePlacement {
        self.placement
    }

    /// Set the default marker placement.
    pub fn set_placement(&mut self, placement: EdgePlacement) {
        self.placement = placement;
    }

    /// Round `value` to the nearest notch distance.
    ///
    /// Returns the input unchanged when no notches are configured or the
    /// path is empty, so callers can snap unconditionally.
    #[must_use]
    pub fn snap_to_nearest(&self, value: f64) -> f64 {
        let total = self.ctx.measure().total_length();
        if self.count == 0 || total <= 0.0 {
            return value;
        }
        let spacing = total / f64::from(self.count);
        (value / spacing).round() * spacing
    }

    /// Draw, invoking `on_notch` for each marker before it is committed.
    pub fn draw_with(
        &mut self,
        surface: Option<&mut dyn DecorationSurface>,
        on_notch: &mut dyn FnMut(&mut NotchInfo),
    ) {
        if !self.ctx.visible() {
            return;
        }
        self.ctx.refresh();
        self.place_notches(surface, Some(on_notch));
    }

    fn place_notches(
        &mut self,
        mut surface: Option<&mut dyn DecorationSurface>,
        mut on_notch: Option<&mut dyn FnMut(&mut NotchInfo)>,
    ) {
        let total = self.ctx.measure().total_length();
        if self.count == 0 || total <= 0.0 {
            return;
        }
        let spacing = total / f64::from(self.count);
        // Open paths take a marker on both endpoints; on closed paths the
        // endpoint marker would coincide with the start one.
        let last = if self.ctx.measure().is_closed() {
            self.count - 1
        } else {
            self.count
        };

        for index in 0..=last {
            self.info = NotchInfo {
                index,
                distance: f64::from(index) * spacing,
                width: self.width,
                length: self.length,
                offset: self.offset,
                kind: self.kind,
                placement: self.placement,
                color: None,
                visible: true,
            };
            if let Some(cb) = on_notch.as_mut() {
                (*cb)(&mut self.info);
            }
            if !self.info.visible || !self.ctx.window().contains(self.info.distance, total) {
                continue;
            }
            let Some(sample) = self.ctx.measure().point_and_tangent_at(self.info.distance)
            else {
                continue;
            };

            let Some(surface) = surface.as_mut() else {
                continue;
            };
            let scale = self.ctx.style().scale();
            let normal = sample.normal();
            let length = scale.apply(self.info.length);
            let offset = scale.apply(self.info.offset);

            let mut paint = self.ctx.paint();
            paint.stroke.width = scale.apply(self.info.width);
            if let Some(color) = self.info.color {
                paint.brush = Brush::Solid(color);
            }

            match self.info.kind {
                NotchKind::Line => {
                    paint.style = DrawStyle::Stroke;
                    let (from, to) = match self.info.placement {
                        EdgePlacement::Inside => (offset, offset + length),
                        EdgePlacement::Middle => {
                            (offset - length / 2.0, offset + length / 2.0)
                        }
                        EdgePlacement::Outside => (-offset, -(offset + length)),
                    };
                    let line = Line::new(
                        sample.point + normal * from,
                        sample.point + normal * to,
                    );
                    surface.draw_line(line, &paint);
                }
                NotchKind::Circle | NotchKind::FilledCircle => {
                    paint.style = if self.info.kind == NotchKind::FilledCircle {
                        DrawStyle::FillAndStroke
                    } else {
                        DrawStyle::Stroke
                    };
                    let along = match self.info.placement {
                        EdgePlacement::Inside => offset + length / 2.0,
                        EdgePlacement::Middle => offset,
                        EdgePlacement::Outside => -(offset + length / 2.0),
                    };
                    surface.draw_circle(sample.point + normal * along, length / 2.0, &paint);
                }
            }
        }
    }
}

impl Decoration for NotchDecoration {
    fn context(&self) -> &DecorationContext {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut DecorationContext {
        &mut self.ctx
    }

    fn place(&mut self, surface: Option<&mut dyn DecorationSurface>) {
        self.place_notches(surface, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{BezPath, Point};
    use tracery_surface_ref::{DrawEvent, RefSurface};

    fn line_decoration(length: f64, count: u32) -> NotchDecoration {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((length, 0.0));
        let mut deco = NotchDecoration::new();
        deco.context_mut().set_path(p, false);
        deco.set_count(count);
        deco
    }

    #[test]
    fn open_path_gets_count_plus_one_notches() {
        let mut deco = line_decoration(100.0, 4);
        let mut surface = RefSurface::new();
        deco.draw(Some(&mut surface));
        assert_eq!(surface.events().len(), 5);
        let distances: alloc::vec::Vec<f64> = surface
            .events()
            .iter()
            .map(|e| match e {
                DrawEvent::Line { line, .. } => line.p0.x,
                other => panic!("expected line event, got {other:?}"),
            })
            .collect();
        assert_eq!(distances, alloc::vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn closed_path_gets_count_notches() {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((100.0, 0.0));
        p.line_to((100.0, 100.0));
        p.line_to((0.0, 100.0));
        p.close_path();
        let mut deco = NotchDecoration::new();
        deco.context_mut().set_path(p, false);
        deco.set_count(4);
        let mut surface = RefSurface::new();
        deco.draw(Some(&mut surface));
        assert_eq!(surface.events().len(), 4);
    }

    #[test]
    fn callback_overrides_are_per_notch() {
        let mut deco = line_decoration(100.0, 4);
        deco.set_kind(NotchKind::Line);
        let mut surface = RefSurface::new();
        deco.draw_with(Some(&mut surface), &mut |info| {
            if info.index == 2 {
                info.kind = NotchKind::FilledCircle;
            }
        });
        assert_eq!(surface.events().len(), 5);
        assert!(matches!(surface.events()[2], DrawEvent::Circle { .. }));
        assert!(matches!(surface.events()[3], DrawEvent::Line { .. }));
    }

    #[test]
    fn callback_can_hide_a_notch() {
        let mut deco = line_decoration(100.0, 4);
        let mut surface = RefSurface::new();
        deco.draw_with(Some(&mut surface), &mut |info| {
            info.visible = info.index != 0;
        });
        assert_eq!(surface.events().len(), 4);
    }

    #[test]
    fn window_limits_notch_visibility() {
        let mut deco = line_decoration(100.0, 4);
        deco.context_mut().set_limits(20.0, 80.0);
        let mut surface = RefSurface::new();
        deco.draw(Some(&mut surface));
        // Only the notches at 25, 50, and 75 fall inside the window.
        assert_eq!(surface.events().len(), 3);
    }

    #[test]
    fn measure_only_mode_still_invokes_callbacks() {
        let mut deco = line_decoration(100.0, 4);
        let mut seen = 0_u32;
        deco.draw_with(None, &mut |_| seen += 1);
        assert_eq!(seen, 5);
    }

    #[test]
    fn middle_line_straddles_the_path() {
        let mut deco = line_decoration(100.0, 1);
        deco.set_length(10.0);
        deco.set_placement(EdgePlacement::Middle);
        let mut surface = RefSurface::new();
        deco.draw(Some(&mut surface));
        let DrawEvent::Line { line, .. } = &surface.events()[0] else {
            panic!("expected line event");
        };
        // Perpendicular to a horizontal path is vertical.
        assert_eq!(line.p0, Point::new(0.0, -5.0));
        assert_eq!(line.p1, Point::new(0.0, 5.0));
    }

    #[test]
    fn snap_rounds_to_notch_spacing() {
        let mut deco = line_decoration(100.0, 4);
        deco.context_mut().refresh();
        assert_eq!(deco.snap_to_nearest(23.0), 25.0);
        assert_eq!(deco.snap_to_nearest(88.0), 100.0);
        assert_eq!(deco.snap_to_nearest(5.0), 0.0);
    }

    #[test]
    fn snap_without_notches_returns_input() {
        let deco = line_decoration(100.0, 0);
        assert_eq!(deco.snap_to_nearest(42.0), 42.0);
    }

    #[test]
    fn invisible_decoration_draws_nothing() {
        let mut deco = line_decoration(100.0, 4);
        deco.context_mut().set_visible(false);
        let mut surface = RefSurface::new();
        deco.draw(Some(&mut surface));
        assert!(surface.events().is_empty());
    }
}
