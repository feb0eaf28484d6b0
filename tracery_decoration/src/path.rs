// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::BezPath;

/// A path plus a revision counter that tracks geometry mutations.
///
/// The decoration context compares revisions by equality to decide whether
/// its measurement tables are stale, so any mutable access counts as a
/// change: [`path_mut`](Self::path_mut) bumps the revision whether or not
/// the caller actually edits the geometry.
#[derive(Clone, Debug, Default)]
pub struct TrackedPath {
    path: BezPath,
    revision: u64,
}

impl TrackedPath {
    /// An empty path at revision zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the geometry.
    #[must_use]
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Mutable access to the geometry; bumps the revision.
    pub fn path_mut(&mut self) -> &mut BezPath {
        self.revision = self.revision.wrapping_add(1);
        &mut self.path
    }

    /// Replace the geometry; bumps the revision.
    pub fn set(&mut self, path: BezPath) {
        self.path = path;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Current revision.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutable_access_bumps_revision() {
        let mut tracked = TrackedPath::new();
        let r0 = tracked.revision();
        tracked.path_mut().move_to((0.0, 0.0));
        assert_ne!(tracked.revision(), r0);
        let r1 = tracked.revision();
        tracked.set(BezPath::new());
        assert_ne!(tracked.revision(), r1);
    }

    #[test]
    fn read_access_does_not_bump() {
        let tracked = TrackedPath::new();
        let r0 = tracked.revision();
        let _ = tracked.path();
        assert_eq!(tracked.revision(), r0);
    }
}
