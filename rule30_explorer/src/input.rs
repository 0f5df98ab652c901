// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend-neutral input events consumed by [`Explorer::handle_event`](crate::Explorer::handle_event).

use kurbo::Point;
use rule30_view::ZoomDirection;

/// Logical key actions. Windowing backends map physical keys onto these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Leave the explorer.
    Escape,
    /// Show or hide the backbone highlight.
    ToggleBackbone,
    /// Start or stop automatic scrolling.
    ToggleAutoScroll,
    /// Increase the auto-scroll speed.
    SpeedUp,
    /// Decrease the auto-scroll speed.
    SpeedDown,
    /// Export the backbone column.
    Save,
}

/// Pointer buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button; drags pan the view.
    Left,
    /// Secondary button.
    Right,
    /// Middle button.
    Middle,
    /// Any other button.
    Other,
}

/// Direction of a wheel notch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    /// Away from the user.
    Up,
    /// Toward the user.
    Down,
}

impl WheelDirection {
    /// Wheel up enlarges cells, wheel down shrinks them.
    #[must_use]
    pub const fn zoom(self) -> ZoomDirection {
        match self {
            Self::Up => ZoomDirection::Out,
            Self::Down => ZoomDirection::In,
        }
    }
}

/// A single input event, with positions in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,
    /// A bound key was pressed.
    KeyDown(Key),
    /// A pointer button was pressed.
    MouseDown {
        /// Button that went down.
        button: MouseButton,
        /// Pointer position.
        position: Point,
    },
    /// A pointer button was released.
    MouseUp {
        /// Button that went up.
        button: MouseButton,
    },
    /// The pointer moved.
    MouseMove {
        /// New pointer position.
        position: Point,
    },
    /// The wheel turned by one notch.
    Wheel {
        /// Direction of the notch.
        direction: WheelDirection,
        /// Pointer position at the time, used as the zoom anchor.
        position: Point,
    },
    /// The window changed size.
    Resized {
        /// New width in pixels.
        width: f64,
        /// New height in pixels.
        height: f64,
    },
}

/// What the frame loop should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Stop the loop and exit.
    Exit,
}
