// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance-to-color mapping along a path.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use peniko::Color;
use smallvec::SmallVec;

/// How a [`ColorSequence`] maps distance to color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Divide the path into `len` equal buckets of flat color.
    Solid,
    /// Interpolate per RGBA channel across `len - 1` equal sectors.
    #[default]
    Gradient,
}

/// An ordered sequence of colors spread over a path's length.
///
/// With a single color the sequence is constant and decorations use the
/// solid fast path (no texture synthesis). With two or more colors,
/// [`color_at`](Self::color_at) maps a distance to a bucketed or
/// interpolated color per the [`ColorMode`].
///
/// Mutations bump an internal revision counter, which is how the decoration
/// context notices that its cached paint is stale.
#[derive(Clone, Debug, Default)]
pub struct ColorSequence {
    colors: SmallVec<[Color; 4]>,
    mode: ColorMode,
    revision: u64,
}

impl ColorSequence {
    /// An empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence holding the given colors.
    #[must_use]
    pub fn from_colors(colors: impl IntoIterator<Item = Color>, mode: ColorMode) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            mode,
            revision: 0,
        }
    }

    /// Number of color stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the sequence has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors, in order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Current mapping mode.
    #[must_use]
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Revision counter; bumped by every mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace all colors.
    pub fn set_colors(&mut self, colors: impl IntoIterator<Item = Color>) {
        self.colors = colors.into_iter().collect();
        self.revision = self.revision.wrapping_add(1);
    }

    /// Append one color.
    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
        self.revision = self.revision.wrapping_add(1);
    }

    /// Set the mapping mode.
    pub fn set_mode(&mut self, mode: ColorMode) {
        self.mode = mode;
        self.revision = self.revision.wrapping_add(1);
    }

    /// The constant color, when the sequence has exactly one entry.
    #[must_use]
    pub fn single(&self) -> Option<Color> {
        match self.colors.as_slice() {
            [color] => Some(*color),
            _ => None,
        }
    }

    /// Color at `distance` along a path of length `total`.
    ///
    /// Returns `None` for an empty sequence. The distance is clamped into
    /// `[0, total]`; a non-positive total short-circuits to the first color.
    /// In gradient mode the first and last stops are returned exactly at the
    /// ends of the path.
    #[must_use]
    pub fn color_at(&self, distance: f64, total: f64) -> Option<Color> {
        let first = *self.colors.first()?;
        if self.colors.len() == 1 || total <= 0.0 {
            return Some(first);
        }
        let len = self.colors.len();
        let distance = distance.clamp(0.0, total);
        match self.mode {
            ColorMode::Solid => {
                let bucket_width = total / len as f64;
                if bucket_width <= 0.0 {
                    return Some(first);
                }
                let bucket = ((distance / bucket_width) as usize).min(len - 1);
                Some(self.colors[bucket])
            }
            ColorMode::Gradient => {
                let sector_width = total / (len - 1) as f64;
                if sector_width <= 0.0 {
                    return Some(first);
                }
                let sector = ((distance / sector_width) as usize).min(len - 2);
                let frac = (distance - sector as f64 * sector_width) / sector_width;
                Some(lerp_rgba8(
                    self.colors[sector],
                    self.colors[sector + 1],
                    frac,
                ))
            }
        }
    }
}

/// Per-channel linear interpolation in 8-bit RGBA.
fn lerp_rgba8(a: Color, b: Color, frac: f64) -> Color {
    let frac = frac.clamp(0.0, 1.0);
    let a = a.to_rgba8();
    let b = b.to_rgba8();
    let ch = |a: u8, b: u8| -> u8 {
        let v = f64::from(a) + (f64::from(b) - f64::from(a)) * frac;
        #[expect(clippy::cast_possible_truncation, reason = "rounded into u8 range")]
        let v = v.round().clamp(0.0, 255.0) as u8;
        v
    };
    Color::from_rgba8(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b), ch(a.a, b.a))
}
