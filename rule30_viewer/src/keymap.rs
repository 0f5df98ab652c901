// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation from reduced `ui-events` input to explorer events.

use rule30_explorer::{InputEvent, Key, MouseButton, WheelDirection};
use ui_events::ScrollDelta;
use ui_events::keyboard::{Key as UiKey, KeyboardEvent, NamedKey};
use ui_events::pointer::{PointerButton, PointerEvent};

/// Maps a pointer event onto the explorer's input model.
///
/// Positions are already logical; the reducer tracks the cursor, so button
/// and wheel events carry their own position.
pub(crate) fn pointer_input(event: &PointerEvent) -> Option<InputEvent> {
    match event {
        PointerEvent::Down(e) => Some(InputEvent::MouseDown {
            button: mouse_button(e.button),
            position: e.state.logical_point(),
        }),
        PointerEvent::Up(e) => Some(InputEvent::MouseUp {
            button: mouse_button(e.button),
        }),
        PointerEvent::Move(e) => Some(InputEvent::MouseMove {
            position: e.current.logical_point(),
        }),
        PointerEvent::Scroll(e) => wheel_direction(&e.delta).map(|direction| InputEvent::Wheel {
            direction,
            position: e.state.logical_point(),
        }),
        _ => None,
    }
}

/// Maps a fresh key press onto a bound key; releases and repeats are ignored.
pub(crate) fn keyboard_input(event: &KeyboardEvent) -> Option<InputEvent> {
    if !event.state.is_down() || event.repeat {
        return None;
    }
    key_action(&event.key).map(InputEvent::KeyDown)
}

/// Bound keys: Escape, Space, arrow up/down, `B`, and `S`.
pub(crate) fn key_action(key: &UiKey) -> Option<Key> {
    match key {
        UiKey::Named(NamedKey::Escape) => Some(Key::Escape),
        UiKey::Named(NamedKey::ArrowUp) => Some(Key::SpeedUp),
        UiKey::Named(NamedKey::ArrowDown) => Some(Key::SpeedDown),
        UiKey::Character(c) if c == " " => Some(Key::ToggleAutoScroll),
        UiKey::Character(c) if c.eq_ignore_ascii_case("b") => Some(Key::ToggleBackbone),
        UiKey::Character(c) if c.eq_ignore_ascii_case("s") => Some(Key::Save),
        _ => None,
    }
}

fn mouse_button(button: Option<PointerButton>) -> MouseButton {
    match button {
        Some(PointerButton::Primary) => MouseButton::Left,
        Some(PointerButton::Secondary) => MouseButton::Right,
        Some(PointerButton::Auxiliary) => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

/// One zoom step per wheel event, regardless of how far it scrolled.
fn wheel_direction(delta: &ScrollDelta) -> Option<WheelDirection> {
    let y = match delta {
        ScrollDelta::LineDelta(_, y) | ScrollDelta::PageDelta(_, y) => f64::from(*y),
        ScrollDelta::PixelDelta(pos) => pos.y,
    };
    if y > 0.0 {
        Some(WheelDirection::Up)
    } else if y < 0.0 {
        Some(WheelDirection::Down)
    } else {
        None
    }
}
