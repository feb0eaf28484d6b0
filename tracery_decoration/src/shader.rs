// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient texture synthesis along a measured path.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use alloc::vec;

use peniko::{Blob, Brush, Extend, ImageAlphaType, ImageBrush, ImageData, ImageFormat, ImageSampler};
use tracery_measure::PathMeasure;

use crate::ColorSequence;

/// Build an image brush holding the path's distance-mapped colors.
///
/// The texture is sized to the measure's sampled bounds. Every integer
/// distance step from `0` to the total length is sampled for position and
/// tangent, mapped to its color per the sequence's mode, and plotted as one
/// texel under the sample, following the direction of travel through each
/// contour. The brush clamps at the texture edge on both axes, so strokes
/// wider than one unit pick up the nearest sampled color.
///
/// Returns `None` when the sequence has fewer than two colors or the path
/// is empty — callers fall back to the solid paint in both cases.
///
/// Cost is O(total length) in both time and texture memory. That is
/// acceptable because stroke widths are small relative to path length; it
/// is a documented property of this synthesis, not something to paper over
/// with a coarser sampling.
#[must_use]
pub fn synthesize_brush(measure: &PathMeasure, colors: &ColorSequence) -> Option<Brush> {
    if colors.len() < 2 {
        return None;
    }
    let total = measure.total_length();
    if total <= 0.0 {
        return None;
    }

    let bounds = measure.bounds();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "bounds are finite and non-negative after the emptiness check"
    )]
    let (width, height) = (
        (bounds.width().ceil() as u32 + 1).max(1),
        (bounds.height().ceil() as u32 + 1).max(1),
    );
    let mut pixels = vec![0_u8; width as usize * height as usize * 4];

    let mut distance = 0.0;
    loop {
        if let Some(sample) = measure.point_and_tangent_at(distance) {
            let color = colors.color_at(distance, total)?;
            #[expect(
                clippy::cast_possible_truncation,
                reason = "sample points lie inside the sampled bounds"
            )]
            let (x, y) = (
                (sample.point.x - bounds.x0).round() as i64,
                (sample.point.y - bounds.y0).round() as i64,
            );
            if (0..i64::from(width)).contains(&x) && (0..i64::from(height)).contains(&y) {
                let ix = (y as usize * width as usize + x as usize) * 4;
                let rgba = color.to_rgba8();
                pixels[ix] = rgba.r;
                pixels[ix + 1] = rgba.g;
                pixels[ix + 2] = rgba.b;
                pixels[ix + 3] = rgba.a;
            }
        }
        if distance >= total {
            break;
        }
        distance = (distance + 1.0).min(total);
    }

    let image = ImageData {
        data: Blob::from(pixels),
        format: ImageFormat::Rgba8,
        alpha_type: ImageAlphaType::Alpha,
        width,
        height,
    };
    let mut sampler = ImageSampler::default();
    sampler.x_extend = Extend::Pad;
    sampler.y_extend = Extend::Pad;
    Some(Brush::Image(ImageBrush { image, sampler }))
}
