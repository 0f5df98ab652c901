// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of a single integer zoom step.
///
/// Zoom is expressed in whole pixels of cell edge length, so each step
/// changes [`crate::CellViewport::cell_size`] by exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Shrink cells by one pixel, showing more of the grid.
    In,
    /// Grow cells by one pixel, showing less of the grid.
    Out,
}

impl ZoomDirection {
    /// Signed change applied to the cell size.
    #[must_use]
    pub const fn step(self) -> i32 {
        match self {
            Self::In => -1,
            Self::Out => 1,
        }
    }
}

/// Inclusive bounds on the cell edge length in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSizeLimits {
    /// Smallest allowed cell size. Never below `1`.
    pub min: u32,
    /// Largest allowed cell size.
    pub max: u32,
}

impl CellSizeLimits {
    /// Smallest cell size used by default.
    pub const DEFAULT_MIN: u32 = 1;
    /// Largest cell size used by default.
    pub const DEFAULT_MAX: u32 = 10;

    /// Creates limits, normalizing the order and lifting `min` to at least `1`.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let min = min.max(1);
        Self {
            min,
            max: max.max(min),
        }
    }

    /// Clamps `size` into the limits.
    #[must_use]
    pub fn clamp(self, size: u32) -> u32 {
        size.clamp(self.min, self.max)
    }
}

impl Default for CellSizeLimits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}
