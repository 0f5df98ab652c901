// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule 30 View: a scrollable, integer-zoomed viewport over a grid of cells.
//!
//! This crate provides a small, headless model of the explorer's camera. It
//! focuses on:
//! - Scroll state in world pixels, bounded by the content extent.
//! - Integer zoom steps that keep the cell under the cursor in place.
//! - Conversion between world pixels, cell coordinates, and screen pixels.
//! - The visible cell range and the deepest generation the next frame needs.
//!
//! It does **not** own the automaton history or any rendering backend.
//! Callers are expected to:
//! - Feed the current history length in via [`CellViewport::set_content_rows`].
//! - Generate rows up to [`CellViewport::needed_generation_ceiling`] (plus
//!   some lookahead) before drawing.
//! - Translate input events into [`CellViewport::pan`] and
//!   [`CellViewport::zoom`] calls at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use rule30_view::{CellViewport, ZoomDirection};
//!
//! // 800x600 screen over a grid of 321 columns and 240 generated rows, 5px cells.
//! let mut view = CellViewport::new(Size::new(800.0, 600.0), 321, 240, 5);
//! view.center_on_column(160);
//!
//! // Drag the content up by 40px.
//! view.pan(Vec2::new(0.0, 40.0));
//!
//! // Zoom out one step around the cursor.
//! let cursor = Point::new(400.0, 300.0);
//! let cell_before = view.world_to_cell(view.screen_to_world(cursor));
//! view.zoom(ZoomDirection::Out, cursor);
//! let cell_after = view.world_to_cell(view.screen_to_world(cursor));
//! assert!((cell_before.x - cell_after.x).abs() < 1e-9);
//!
//! let visible = view.visible_cell_range();
//! assert!(visible.columns.start < visible.columns.end);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is the cell edge length in whole pixels, bounded by
//!   [`CellSizeLimits`]; there is no fractional zoom.
//! - Every mutator except [`CellViewport::auto_scroll_step`] leaves the scroll
//!   offset inside `[0, max(0, content - screen)]`.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod viewport;

pub use modes::{CellSizeLimits, ZoomDirection};
pub use viewport::{CellIndex, CellViewport, CellViewportDebugInfo, VisibleCells};
