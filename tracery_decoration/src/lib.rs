// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Decoration: notches, labels, and copied sub-segments placed along
//! a measured path.
//!
//! A decoration bundles a path, its [`tracery_measure::PathMeasure`], a
//! [`DecorationStyle`], a [`ColorSequence`], and a [`VisibilityWindow`] into
//! a [`DecorationContext`], and draws through the backend-agnostic
//! [`tracery_surface::DecorationSurface`] capability. Three concrete
//! decorations cover the placement strategies:
//!
//! - [`NotchDecoration`]: evenly spaced line/circle markers, each
//!   independently restyleable through a per-notch callback.
//! - [`TextDecoration`]: text labels along the path, curved or unbent.
//! - [`SegmentDecoration`]: a start%–end% copy of the path, optionally
//!   rescaled and offset before drawing.
//!
//! Mutable state carries revision counters ([`TrackedPath`],
//! [`DecorationStyle`], [`ColorSequence`]); every draw revalidates against
//! them through [`DecorationContext::refresh`], re-measuring the path and
//! regenerating the paint only when something actually changed. Drawing with
//! no surface (`None`) is the measure-only mode: placement math and
//! callbacks run, nothing is emitted.

#![no_std]

extern crate alloc;

mod color;
mod context;
mod copier;
mod notch;
mod path;
mod shader;
mod style;
mod token;
mod window;

pub use color::{ColorMode, ColorSequence};
pub use context::{Decoration, DecorationContext, DirtyFlags};
pub use copier::{CopyInfo, SegmentDecoration};
pub use notch::{NotchDecoration, NotchInfo, NotchKind};
pub use path::TrackedPath;
pub use shader::synthesize_brush;
pub use style::{DecorationStyle, DisplayScale};
pub use token::{TextDecoration, TokenInfo};
pub use window::VisibilityWindow;

/// Where a decoration element sits relative to the path it follows.
///
/// "Inside" and "outside" are the two sides of the path's travel direction;
/// `Middle` straddles the path itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EdgePlacement {
    /// On the near side of the path (to the right of travel, y-down).
    Inside,
    /// Centered on the path.
    #[default]
    Middle,
    /// On the far side of the path.
    Outside,
}
