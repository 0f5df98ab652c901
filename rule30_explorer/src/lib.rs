// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule 30 Explorer: the frame-driven controller behind the viewer.
//!
//! [`Explorer`] owns the automaton [`History`](rule30_automaton::History)
//! and a [`CellViewport`](rule30_view::CellViewport), and turns
//! backend-neutral [`InputEvent`]s into panning, zooming, auto-scrolling,
//! and backbone exports. Drawing goes through the [`DisplaySurface`] and
//! [`TextOverlay`] traits, and exports through a [`PersistenceSink`], so the
//! whole loop can run headless.
//!
//! ## Frame loop
//!
//! ```
//! use std::time::Instant;
//!
//! use kurbo::{Point, Rect, Size};
//! use peniko::Color;
//! use rule30_explorer::{
//!     DisplaySurface, Explorer, ExplorerConfig, Flow, InputEvent, Key, TextOverlay,
//! };
//!
//! #[derive(Default)]
//! struct Count(usize);
//!
//! impl DisplaySurface for Count {
//!     fn clear(&mut self, _: Color) {
//!         self.0 = 0;
//!     }
//!     fn draw_filled_rect(&mut self, _: Rect, _: Color) {
//!         self.0 += 1;
//!     }
//! }
//!
//! impl TextOverlay for Count {
//!     fn render_label(&mut self, _: &str) -> Size {
//!         Size::new(100.0, 12.0)
//!     }
//!     fn blit_label(&mut self, _: &str, _: Point, _: Color) {}
//! }
//!
//! let mut explorer = Explorer::new(ExplorerConfig::default()).unwrap();
//! let now = Instant::now();
//! assert_eq!(explorer.handle_event(InputEvent::KeyDown(Key::ToggleAutoScroll), now), Flow::Continue);
//! explorer.update(now);
//!
//! let (mut surface, mut overlay) = (Count::default(), Count::default());
//! explorer.render(&mut surface, &mut overlay, now);
//! assert!(surface.0 > 0);
//!
//! assert_eq!(explorer.handle_event(InputEvent::KeyDown(Key::Escape), now), Flow::Exit);
//! ```

mod auto_scroll;
mod config;
pub mod drag;
mod error;
mod explorer;
mod export;
mod input;
mod lookahead;
mod message;
mod surface;

pub use auto_scroll::AutoScroll;
pub use config::{ExplorerConfig, Palette};
pub use error::ExplorerError;
pub use explorer::{Explorer, ExplorerDebugInfo};
pub use export::{FileSink, PersistenceSink, backbone_report, export_file_name, export_path};
pub use input::{Flow, InputEvent, Key, MouseButton, WheelDirection};
pub use lookahead::{ExtensionPlan, Lookahead};
pub use message::TransientMessage;
pub use surface::{DisplaySurface, TextOverlay};
