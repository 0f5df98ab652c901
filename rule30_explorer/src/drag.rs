// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag tracking for panning.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use rule30_explorer::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! // Dragging right and down moves the content with the pointer, so the
//! // scroll offset moves left and up.
//! assert_eq!(drag.update(Point::new(15.0, 26.0)), Some(Vec2::new(-5.0, -6.0)));
//! ```

use kurbo::{Point, Vec2};

/// Tracks the pointer while the primary button is held.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    last_pos: Option<Point>,
}

impl DragState {
    /// Begins a drag at `pos`.
    pub fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Records a pointer move and returns the scroll change it implies.
    ///
    /// The result is `previous - current`, so dragging the content follows
    /// the pointer. Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last_pos.replace(pos)?;
        Some(last - pos)
    }

    /// Ends the drag. Later moves are ignored until [`DragState::start`].
    pub fn end(&mut self) {
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_pos.is_some()
    }
}
