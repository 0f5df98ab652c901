// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing seams between the explorer and a rendering backend.

use kurbo::{Point, Rect, Size};
use peniko::Color;

/// Something the explorer can paint a frame onto.
pub trait DisplaySurface {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Fills `rect`, given in screen pixels.
    fn draw_filled_rect(&mut self, rect: Rect, color: Color);
}

/// Renders short text labels on top of the frame.
pub trait TextOverlay {
    /// Lays out `text` and returns its size in pixels.
    fn render_label(&mut self, text: &str) -> Size;

    /// Draws `text` with its top-left corner at `origin`.
    fn blit_label(&mut self, text: &str, origin: Point, color: Color);
}
