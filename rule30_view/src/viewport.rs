// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor` / `ceil`
use kurbo::{Point, Rect, Size, Vec2};

use crate::modes::{CellSizeLimits, ZoomDirection};

/// Discrete `(row, column)` address of a cell.
///
/// `row` is the generation index; `column` is the position within the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellIndex {
    /// Generation index.
    pub row: usize,
    /// Cell position within the row.
    pub column: usize,
}

/// Cell rows and columns touched by the current screen.
///
/// `rows` is not limited by the number of generated rows; callers are
/// expected to extend the history before reading it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleCells {
    /// Generation indices, including one row of overscan at the bottom edge.
    pub rows: Range<usize>,
    /// Column indices, clamped to the grid width.
    pub columns: Range<usize>,
}

/// Scrollable, integer-zoomed view onto a grid of square cells.
///
/// Three coordinate spaces are involved:
/// - **world** pixels: unscaled content space where cell `(r, c)` covers
///   `[c * cell_size, (c + 1) * cell_size) × [r * cell_size, (r + 1) * cell_size)`,
/// - **screen** pixels: the visible surface, offset from world space by the
///   scroll position,
/// - **cell** coordinates: world pixels divided by the cell size.
///
/// The scroll offset is kept within
/// `[0, max(0, content - screen)]` on both axes by every mutator except
/// [`CellViewport::auto_scroll_step`], which is allowed to run ahead of the
/// content while the caller generates more rows.
#[derive(Clone, Debug)]
pub struct CellViewport {
    screen: Size,
    scroll: Vec2,
    cell_size: u32,
    limits: CellSizeLimits,
    columns: usize,
    rows: usize,
}

impl CellViewport {
    /// Creates a viewport at scroll `(0, 0)` over `columns × rows` cells.
    ///
    /// The cell size is clamped into the default [`CellSizeLimits`].
    #[must_use]
    pub fn new(screen: Size, columns: usize, rows: usize, cell_size: u32) -> Self {
        Self::with_limits(screen, columns, rows, cell_size, CellSizeLimits::default())
    }

    /// Creates a viewport like [`CellViewport::new`] with explicit zoom limits.
    ///
    /// The cell size is clamped into `limits`, so an initial size outside the
    /// default range survives when the limits allow it.
    #[must_use]
    pub fn with_limits(
        screen: Size,
        columns: usize,
        rows: usize,
        cell_size: u32,
        limits: CellSizeLimits,
    ) -> Self {
        Self {
            screen,
            scroll: Vec2::ZERO,
            cell_size: limits.clamp(cell_size),
            limits,
            columns,
            rows,
        }
    }

    /// Returns the screen size in pixels.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        self.screen
    }

    /// Sets the screen size and re-clamps the scroll position.
    pub fn set_screen_size(&mut self, screen: Size) {
        if self.screen == screen {
            return;
        }
        self.screen = screen;
        self.clamp();
    }

    /// Returns the current scroll offset in world pixels.
    #[must_use]
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Sets the scroll offset and clamps it into bounds.
    pub fn set_scroll(&mut self, scroll: Vec2) {
        self.scroll = scroll;
        self.clamp();
    }

    /// Returns the current cell edge length in pixels.
    #[must_use]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Returns the cell size limits.
    #[must_use]
    pub fn cell_size_limits(&self) -> CellSizeLimits {
        self.limits
    }

    /// Sets the cell size limits and clamps the current cell size into them.
    ///
    /// The limits are normalized as described in [`CellSizeLimits::new`].
    pub fn set_cell_size_limits(&mut self, min: u32, max: u32) {
        self.limits = CellSizeLimits::new(min, max);
        let clamped = self.limits.clamp(self.cell_size);
        if clamped != self.cell_size {
            self.cell_size = clamped;
            self.clamp();
        }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows of content currently available.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Updates the number of available rows.
    ///
    /// The scroll position is left untouched: growing content only raises
    /// the vertical bound.
    pub fn set_content_rows(&mut self, rows: usize) {
        self.rows = rows;
    }

    /// Largest allowed scroll offset on each axis.
    ///
    /// Content smaller than the screen yields `0` rather than a negative bound.
    #[must_use]
    pub fn max_scroll(&self) -> Vec2 {
        let cell = f64::from(self.cell_size);
        let max_x = self.columns as f64 * cell - self.screen.width;
        let max_y = self.rows as f64 * cell - self.screen.height;
        Vec2::new(max_x.max(0.0), max_y.max(0.0))
    }

    /// Clamps the scroll offset into `[0, max_scroll]`.
    ///
    /// Clamping an already clamped viewport leaves it unchanged.
    pub fn clamp(&mut self) {
        let max = self.max_scroll();
        self.scroll = Vec2::new(
            self.scroll.x.min(max.x).max(0.0),
            self.scroll.y.min(max.y).max(0.0),
        );
    }

    /// Pans by a delta in screen pixels, then clamps.
    pub fn pan(&mut self, delta: Vec2) {
        self.scroll += delta;
        self.clamp();
    }

    /// Zooms one step while keeping the cell under `anchor` fixed on screen.
    ///
    /// The world point under `anchor` is captured in cell coordinates before
    /// the cell size changes, then the scroll offset is re-derived from it at
    /// the new cell size and clamped. Returns `false`, leaving the viewport
    /// unchanged, when the cell size is already at the corresponding limit.
    pub fn zoom(&mut self, direction: ZoomDirection, anchor: Point) -> bool {
        let new_size = match direction {
            ZoomDirection::In if self.cell_size > self.limits.min => self.cell_size - 1,
            ZoomDirection::Out if self.cell_size < self.limits.max => self.cell_size + 1,
            _ => return false,
        };

        let anchor_cell = self.world_to_cell(self.screen_to_world(anchor));
        self.cell_size = new_size;
        let cell = f64::from(new_size);
        self.scroll = Vec2::new(anchor_cell.x * cell - anchor.x, anchor_cell.y * cell - anchor.y);
        self.clamp();
        tracing::debug!(cell_size = new_size, ?direction, "zoomed");
        true
    }

    /// Advances the vertical scroll by `speed` pixels without clamping.
    ///
    /// The caller is expected to generate rows ahead of the new position.
    pub fn auto_scroll_step(&mut self, speed: u32) {
        self.scroll.y += f64::from(speed);
    }

    /// Scrolls horizontally so that `column` is centered on screen, then clamps.
    pub fn center_on_column(&mut self, column: usize) {
        let cell = f64::from(self.cell_size);
        self.scroll.x = (column as f64 + 0.5) * cell - self.screen.width * 0.5;
        self.clamp();
    }

    /// Cell rows and columns that intersect the screen.
    ///
    /// Each range includes one extra cell to cover partially visible cells at
    /// the far edge.
    #[must_use]
    pub fn visible_cell_range(&self) -> VisibleCells {
        let cell = f64::from(self.cell_size);
        let row_start = floor_index(self.scroll.y / cell);
        let row_end = row_start
            .saturating_add(ceil_count(self.screen.height / cell))
            .saturating_add(1);
        let col_start = floor_index(self.scroll.x / cell).min(self.columns);
        let col_end = col_start
            .saturating_add(ceil_count(self.screen.width / cell))
            .saturating_add(1)
            .min(self.columns);
        VisibleCells {
            rows: row_start..row_end,
            columns: col_start..col_end,
        }
    }

    /// Highest generation index that must exist to draw the bottom screen edge.
    #[must_use]
    pub fn needed_generation_ceiling(&self) -> usize {
        floor_index((self.scroll.y + self.screen.height) / f64::from(self.cell_size))
    }

    /// Converts a screen point into world pixels.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        pt + self.scroll
    }

    /// Converts a world point into screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        pt - self.scroll
    }

    /// Converts a world point into real-valued cell coordinates.
    ///
    /// `x` is the column and `y` the row; the fractional part is the
    /// position within the cell.
    #[must_use]
    pub fn world_to_cell(&self, pt: Point) -> Point {
        let cell = f64::from(self.cell_size);
        Point::new(pt.x / cell, pt.y / cell)
    }

    /// Returns the cell under a screen point, if it lies on generated content.
    #[must_use]
    pub fn cell_at_screen(&self, pt: Point) -> Option<CellIndex> {
        let world = self.screen_to_world(pt);
        if world.x < 0.0 || world.y < 0.0 {
            return None;
        }
        let cell = self.world_to_cell(world);
        let index = CellIndex {
            row: floor_index(cell.y),
            column: floor_index(cell.x),
        };
        (index.row < self.rows && index.column < self.columns).then_some(index)
    }

    /// Screen-space rectangle covered by cell `(row, column)`.
    #[must_use]
    pub fn cell_rect_on_screen(&self, row: usize, column: usize) -> Rect {
        let cell = f64::from(self.cell_size);
        let origin = self.world_to_screen(Point::new(column as f64 * cell, row as f64 * cell));
        Rect::from_origin_size(origin, Size::new(cell, cell))
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CellViewportDebugInfo {
        CellViewportDebugInfo {
            screen: self.screen,
            scroll: self.scroll,
            max_scroll: self.max_scroll(),
            cell_size: self.cell_size,
            limits: self.limits,
            columns: self.columns,
            rows: self.rows,
            visible: self.visible_cell_range(),
        }
    }
}

/// Debug snapshot of a [`CellViewport`] state.
#[derive(Clone, Debug)]
pub struct CellViewportDebugInfo {
    /// Screen size in pixels.
    pub screen: Size,
    /// Scroll offset in world pixels.
    pub scroll: Vec2,
    /// Current upper scroll bound.
    pub max_scroll: Vec2,
    /// Cell edge length in pixels.
    pub cell_size: u32,
    /// Cell size limits.
    pub limits: CellSizeLimits,
    /// Grid columns.
    pub columns: usize,
    /// Available content rows.
    pub rows: usize,
    /// Visible cell range.
    pub visible: VisibleCells,
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "non-negative and floored before casting; saturates for huge values"
)]
fn floor_index(value: f64) -> usize {
    if value <= 0.0 { 0 } else { value.floor() as usize }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "non-negative and rounded up before casting; saturates for huge values"
)]
fn ceil_count(value: f64) -> usize {
    if value <= 0.0 { 0 } else { value.ceil() as usize }
}
