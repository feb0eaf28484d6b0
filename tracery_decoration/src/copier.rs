// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Redrawn copies of a path sub-segment.

use kurbo::{Affine, BezPath, Vec2};
use tracery_surface::DecorationSurface;

use crate::context::{Decoration, DecorationContext};

/// Transform applied to a copied segment before it is drawn.
///
/// Reset to the identity (`scale == (1, 1)`, `offset == (0, 0)`) before the
/// per-draw callback; overrides are honored for that draw only. Scaling is
/// about the origin and is applied before the offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CopyInfo {
    /// Per-axis scale factor.
    pub scale: Vec2,
    /// Translation applied after scaling.
    pub offset: Vec2,
}

impl Default for CopyInfo {
    fn default() -> Self {
        Self {
            scale: Vec2::new(1.0, 1.0),
            offset: Vec2::ZERO,
        }
    }
}

impl CopyInfo {
    /// Whether the transform leaves the segment untouched.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale == Vec2::new(1.0, 1.0) && self.offset == Vec2::ZERO
    }

    /// The transform as an affine map.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }
}

/// Extracts the visibility window's sub-segment of the path and redraws it.
///
/// The window's percentages convert to absolute distances against the
/// current measure; the matching sub-segment (possibly spanning several
/// contours) is extracted and stroked with the decoration's paint. A
/// coincident window (`start% == end%`) or an empty path draws nothing.
#[derive(Debug, Default)]
pub struct SegmentDecoration {
    ctx: DecorationContext,
    info: CopyInfo,
}

impl SegmentDecoration {
    /// A decoration copying the full path (window `0%..100%`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            ctx: DecorationContext::new(),
            info: CopyInfo::default(),
        }
    }

    /// Draw, invoking `on_copy` on the transform before the copy is drawn.
    pub fn draw_with(
        &mut self,
        surface: Option<&mut dyn DecorationSurface>,
        on_copy: &mut dyn FnMut(&mut CopyInfo),
    ) {
        if !self.ctx.visible() {
            return;
        }
        self.ctx.refresh();
        self.place_copy(surface, Some(on_copy));
    }

    fn place_copy(
        &mut self,
        surface: Option<&mut dyn DecorationSurface>,
        mut on_copy: Option<&mut dyn FnMut(&mut CopyInfo)>,
    ) {
        let total = self.ctx.measure().total_length();
        if total <= 0.0 {
            return;
        }
        let (start, end) = self.ctx.window().to_distances(total);
        if start == end {
            return;
        }

        let mut segment = BezPath::new();
        if !self
            .ctx
            .measure()
            .extract_segment(start, end, &mut segment, true)
        {
            return;
        }

        self.info = CopyInfo::default();
        if let Some(cb) = on_copy.as_mut() {
            (*cb)(&mut self.info);
        }
        if !self.info.is_identity() {
            segment.apply_affine(self.info.to_affine());
        }

        if let Some(surface) = surface {
            surface.draw_path(&segment, &self.ctx.paint());
        }
    }
}

impl Decoration for SegmentDecoration {
    fn context(&self) -> &DecorationContext {
        &self.ctx
    }

    fn context_mut(&mut self) -> &mut DecorationContext {
        &mut self.ctx
    }

    fn place(&mut self, surface: Option<&mut dyn DecorationSurface>) {
        self.place_copy(surface, None);
    }
}
