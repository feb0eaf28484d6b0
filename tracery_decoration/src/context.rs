// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared decoration state and the dirty-check contract.

use bitflags::bitflags;

use kurbo::BezPath;
use peniko::Brush;
use tracery_measure::PathMeasure;
use tracery_surface::{DecorationSurface, PaintDesc};

use crate::{ColorSequence, DecorationStyle, TrackedPath, VisibilityWindow, synthesize_brush};

bitflags! {
    /// What [`DecorationContext::refresh`] rebuilt.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// The path geometry changed; the measure was rebuilt.
        const PATH = 1 << 0;
        /// The style or color sequence changed; the paint was rebuilt.
        const PAINT = 1 << 1;
    }
}

/// State shared by every decoration: the tracked path and its measure, the
/// style, the color sequence, and the visibility window.
///
/// The context owns the dirty-check contract, driven by the revision
/// counters on [`TrackedPath`], [`DecorationStyle`], and [`ColorSequence`]:
/// [`refresh`](Self::refresh) is called at the top of every draw and
/// re-derives exactly the state whose inputs changed. Nothing derived is
/// ever trusted across a mutation.
#[derive(Debug, Default)]
pub struct DecorationContext {
    path: TrackedPath,
    force_closed: bool,
    measure: PathMeasure,
    style: DecorationStyle,
    colors: ColorSequence,
    window: VisibilityWindow,
    visible: bool,
    tag: u32,
    seen_path: Option<u64>,
    seen_style: Option<u64>,
    seen_colors: Option<u64>,
    paint: Option<PaintDesc>,
}

impl DecorationContext {
    /// A visible context with an empty path and default style.
    #[must_use]
    pub fn new() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    /// Replace the decorated path.
    pub fn set_path(&mut self, path: BezPath, force_closed: bool) {
        self.force_closed = force_closed;
        self.path.set(path);
    }

    /// The tracked path.
    #[must_use]
    pub fn path(&self) -> &TrackedPath {
        &self.path
    }

    /// Mutable access to the tracked path (bumps its revision).
    pub fn path_mut(&mut self) -> &mut TrackedPath {
        &mut self.path
    }

    /// The current measure. Valid as of the last [`refresh`](Self::refresh).
    #[must_use]
    pub fn measure(&self) -> &PathMeasure {
        &self.measure
    }

    /// The decoration style.
    #[must_use]
    pub fn style(&self) -> &DecorationStyle {
        &self.style
    }

    /// Mutable access to the style (its setters bump the revision).
    pub fn style_mut(&mut self) -> &mut DecorationStyle {
        &mut self.style
    }

    /// The color sequence.
    #[must_use]
    pub fn colors(&self) -> &ColorSequence {
        &self.colors
    }

    /// Mutable access to the color sequence (its setters bump the revision).
    pub fn colors_mut(&mut self) -> &mut ColorSequence {
        &mut self.colors
    }

    /// The visibility window.
    #[must_use]
    pub fn window(&self) -> &VisibilityWindow {
        &self.window
    }

    /// Update the visibility window limits (non-finite values are ignored).
    pub fn set_limits(&mut self, start_percent: f64, end_percent: f64) {
        self.window.set_limits(start_percent, end_percent);
    }

    /// Whether the decoration draws at all.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the decoration.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Caller-supplied identification tag.
    #[must_use]
    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// Set the identification tag.
    pub fn set_tag(&mut self, tag: u32) {
        self.tag = tag;
    }

    /// Revalidate all derived state against the revision counters.
    ///
    /// Re-measures the path when its revision moved, and rebuilds the
    /// effective paint when the path, style, or colors moved (the
    /// synthesized texture depends on all three). Returns the set of
    /// channels that were rebuilt; empty means everything was already
    /// current.
    pub fn refresh(&mut self) -> DirtyFlags {
        let mut flags = DirtyFlags::empty();
        if self.seen_path != Some(self.path.revision()) {
            self.measure.set_path(self.path.path(), self.force_closed);
            self.seen_path = Some(self.path.revision());
            flags |= DirtyFlags::PATH;
        }
        if self.seen_style != Some(self.style.revision())
            || self.seen_colors != Some(self.colors.revision())
        {
            flags |= DirtyFlags::PAINT;
        }
        if !flags.is_empty() || self.paint.is_none() {
            self.paint = Some(self.build_paint());
            self.seen_style = Some(self.style.revision());
            self.seen_colors = Some(self.colors.revision());
        }
        flags
    }

    /// The effective paint as of the last [`refresh`](Self::refresh).
    ///
    /// Before the first refresh this is the style's solid paint.
    #[must_use]
    pub fn paint(&self) -> PaintDesc {
        self.paint.clone().unwrap_or_else(|| self.solid_paint())
    }

    /// Build the effective paint from the current style, colors, and measure.
    ///
    /// A single configured color overrides the style color directly; two or
    /// more colors synthesize the distance-mapped texture brush. When
    /// synthesis is not possible (empty path), the solid paint is used.
    fn build_paint(&self) -> PaintDesc {
        let mut paint = self.solid_paint();
        if let Some(color) = self.colors.single() {
            paint.brush = Brush::Solid(color);
        } else if let Some(brush) = synthesize_brush(&self.measure, &self.colors) {
            paint.brush = brush;
        }
        paint
    }

    fn solid_paint(&self) -> PaintDesc {
        PaintDesc {
            brush: Brush::Solid(self.style.color()),
            stroke: self.style.stroke(),
            style: self.style.draw_style(),
        }
    }
}

/// The capability shared by all decorations.
///
/// `draw` is the callback-free entry point used by heterogeneous decoration
/// stacks (`Vec<Box<dyn Decoration>>`); the concrete types additionally
/// offer `draw_with` variants that accept per-element callbacks.
pub trait Decoration {
    /// Shared state of this decoration.
    fn context(&self) -> &DecorationContext;

    /// Mutable shared state of this decoration.
    fn context_mut(&mut self) -> &mut DecorationContext;

    /// Place and emit elements. Called with refreshed state; implementations
    /// must tolerate `surface` being `None` (measure-only mode).
    fn place(&mut self, surface: Option<&mut dyn DecorationSurface>);

    /// Draw the decoration: skip when invisible, refresh, then place.
    fn draw(&mut self, surface: Option<&mut dyn DecorationSurface>) {
        if !self.context().visible() {
            return;
        }
        self.context_mut().refresh();
        self.place(surface);
    }
}
