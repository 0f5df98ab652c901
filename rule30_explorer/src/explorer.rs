// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;
use std::time::Instant;

use kurbo::{Point, Size};
use rule30_automaton::History;
use rule30_view::{CellSizeLimits, CellViewport, CellViewportDebugInfo};

use crate::auto_scroll::AutoScroll;
use crate::config::{ExplorerConfig, Palette};
use crate::drag::DragState;
use crate::error::ExplorerError;
use crate::export::{FileSink, PersistenceSink, backbone_report, export_path};
use crate::input::{Flow, InputEvent, Key, MouseButton};
use crate::lookahead::Lookahead;
use crate::message::TransientMessage;
use crate::surface::{DisplaySurface, TextOverlay};

/// Distance from the window edge to the first label.
const LABEL_MARGIN: f64 = 10.0;
/// Vertical gap between stacked labels.
const LABEL_SPACING: f64 = 4.0;

/// The interactive explorer: automaton history, viewport, and UI modes.
///
/// A frame loop drives it in three steps: feed every pending event to
/// [`Explorer::handle_event`], call [`Explorer::update`] once, then
/// [`Explorer::render`]. The explorer never blocks and never talks to a
/// window system directly.
#[derive(Debug)]
pub struct Explorer<S = FileSink> {
    config: ExplorerConfig,
    history: History,
    viewport: CellViewport,
    drag: DragState,
    auto_scroll: AutoScroll,
    lookahead: Lookahead,
    show_backbone: bool,
    message: Option<TransientMessage>,
    sink: S,
}

impl Explorer<FileSink> {
    /// Creates an explorer that exports to the local file system.
    pub fn new(config: ExplorerConfig) -> Result<Self, ExplorerError> {
        Self::with_sink(config, FileSink)
    }
}

impl<S: PersistenceSink> Explorer<S> {
    /// Creates an explorer that writes exports through `sink`.
    ///
    /// Validates `config`, computes the initial generations, and centers the
    /// view horizontally on the seed column.
    pub fn with_sink(config: ExplorerConfig, sink: S) -> Result<Self, ExplorerError> {
        config.validate()?;
        let mut history = History::initialize(config.grid_width())?;
        history.extend(config.initial_generations());

        let mut viewport = CellViewport::with_limits(
            config.screen_size(),
            history.width(),
            history.len(),
            config.initial_cell_size,
            CellSizeLimits::new(config.min_cell_size, config.max_cell_size),
        );
        viewport.center_on_column(history.center());

        tracing::info!(
            width = history.width(),
            generations = history.len(),
            cell_size = viewport.cell_size(),
            "explorer initialized"
        );

        Ok(Self {
            lookahead: Lookahead::new(config.catch_up_batch(), config.auto_scroll_batch()),
            auto_scroll: AutoScroll::new(config.auto_scroll_speed),
            config,
            history,
            viewport,
            drag: DragState::default(),
            show_backbone: false,
            message: None,
            sink,
        })
    }

    /// Settings the explorer was created with.
    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Generated rows so far.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current view.
    #[must_use]
    pub fn viewport(&self) -> &CellViewport {
        &self.viewport
    }

    /// Auto-scroll state.
    #[must_use]
    pub fn auto_scroll(&self) -> AutoScroll {
        self.auto_scroll
    }

    /// Returns `true` if the backbone column is highlighted.
    #[must_use]
    pub fn show_backbone(&self) -> bool {
        self.show_backbone
    }

    /// Returns `true` while the primary button is dragging the view.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The current status message, if it has not expired at `now`.
    #[must_use]
    pub fn message(&self, now: Instant) -> Option<&TransientMessage> {
        self.message.as_ref().filter(|m| m.is_visible(now))
    }

    /// Export destination.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Applies one input event.
    pub fn handle_event(&mut self, event: InputEvent, now: Instant) -> Flow {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => return Flow::Exit,
            InputEvent::KeyDown(key) => self.handle_key(key, now),
            InputEvent::MouseDown {
                button: MouseButton::Left,
                position,
            } => self.drag.start(position),
            InputEvent::MouseUp {
                button: MouseButton::Left,
            } => self.drag.end(),
            InputEvent::MouseDown { .. } | InputEvent::MouseUp { .. } => {}
            InputEvent::MouseMove { position } => {
                if let Some(delta) = self.drag.update(position) {
                    self.viewport.pan(delta);
                }
            }
            InputEvent::Wheel {
                direction,
                position,
            } => {
                self.viewport.zoom(direction.zoom(), position);
            }
            InputEvent::Resized { width, height } => {
                self.viewport.set_screen_size(Size::new(width, height));
                tracing::debug!(width, height, "screen resized");
            }
        }
        Flow::Continue
    }

    fn handle_key(&mut self, key: Key, now: Instant) {
        match key {
            Key::Escape => {}
            Key::ToggleBackbone => {
                self.show_backbone = !self.show_backbone;
                tracing::debug!(enabled = self.show_backbone, "backbone highlight");
            }
            Key::ToggleAutoScroll => {
                let enabled = self.auto_scroll.toggle();
                tracing::info!(enabled, speed = self.auto_scroll.speed(), "auto-scroll");
            }
            Key::SpeedUp => {
                let speed = self.auto_scroll.faster();
                tracing::debug!(speed, "auto-scroll speed");
            }
            Key::SpeedDown => {
                let speed = self.auto_scroll.slower();
                tracing::debug!(speed, "auto-scroll speed");
            }
            Key::Save => {
                // Failures are reported through the status message.
                let _ = self.save_backbone(now);
            }
        }
    }

    /// Advances one frame: auto-scrolls, then grows the history if the view
    /// is within the lookahead margin of its end.
    ///
    /// Returns the number of generations appended.
    pub fn update(&mut self, now: Instant) -> usize {
        if self.message.as_ref().is_some_and(|m| !m.is_visible(now)) {
            self.message = None;
        }

        let auto_scrolling = self.auto_scroll.is_enabled();
        if auto_scrolling {
            self.viewport.auto_scroll_step(self.auto_scroll.speed());
        }

        let ceiling = self.viewport.needed_generation_ceiling();
        let Some(plan) = self
            .lookahead
            .plan(ceiling, self.history.len(), auto_scrolling)
        else {
            return 0;
        };
        let added = self.history.ensure_through(plan.target, plan.batch);
        self.viewport.set_content_rows(self.history.len());
        added
    }

    /// Draws the visible active cells and the overlay labels.
    pub fn render(
        &self,
        surface: &mut impl DisplaySurface,
        overlay: &mut impl TextOverlay,
        now: Instant,
    ) {
        let palette = &self.config.palette;
        surface.clear(palette.background_color());
        self.draw_cells(surface, palette);

        let text = palette.text_color();
        let mut y = LABEL_MARGIN;
        let mut label = |line: &str| {
            let size = overlay.render_label(line);
            overlay.blit_label(line, Point::new(LABEL_MARGIN, y), text);
            y += size.height + LABEL_SPACING;
        };
        label(&self.generation_label());
        if let Some(status) = self.status_label() {
            label(&status);
        }
        if let Some(message) = self.message(now) {
            label(message.text());
        }
    }

    fn draw_cells(&self, surface: &mut impl DisplaySurface, palette: &Palette) {
        let visible = self.viewport.visible_cell_range();
        let center = self.history.center();
        let cell = palette.cell_color();
        let backbone = palette.backbone_color();

        for generation in visible.rows {
            let Some(row) = self.history.row(generation) else {
                break;
            };
            let Some(cells) = row.cells().get(visible.columns.clone()) else {
                continue;
            };
            for (offset, _) in cells.iter().enumerate().filter(|&(_, &c)| c != 0) {
                let column = visible.columns.start + offset;
                let color = if self.show_backbone && column == center {
                    backbone
                } else {
                    cell
                };
                surface.draw_filled_rect(self.viewport.cell_rect_on_screen(generation, column), color);
            }
        }
    }

    /// Deepest generation currently on screen that has been computed.
    #[must_use]
    pub fn current_generation(&self) -> usize {
        self.viewport
            .needed_generation_ceiling()
            .min(self.history.len() - 1)
    }

    /// Label showing [`Explorer::current_generation`].
    #[must_use]
    pub fn generation_label(&self) -> String {
        format!("Generation: {}", self.current_generation())
    }

    /// Key binding summary, shown while auto-scroll is on.
    #[must_use]
    pub fn status_label(&self) -> Option<String> {
        self.auto_scroll.is_enabled().then(|| {
            format!(
                "Auto-scroll speed {} | Space: stop | Up/Down: speed | B: backbone | S: save | Esc: quit",
                self.auto_scroll.speed()
            )
        })
    }

    /// Writes the backbone of every stored generation and reports the
    /// outcome through the status message.
    pub fn save_backbone(&mut self, now: Instant) -> Result<PathBuf, ExplorerError> {
        let path = export_path(&self.config.export_dir, &chrono::Local::now());
        let lines = backbone_report(&self.history);
        let duration = self.config.message_duration();
        match self.sink.write_lines(&path, &lines) {
            Ok(written) => {
                tracing::info!(
                    path = %written.display(),
                    generations = self.history.len(),
                    "saved backbone"
                );
                self.message = Some(TransientMessage::new(
                    format!("Saved backbone to {}", written.display()),
                    now,
                    duration,
                ));
                Ok(written)
            }
            Err(source) => {
                tracing::warn!(path = %path.display(), error = %source, "backbone export failed");
                self.message = Some(TransientMessage::new(
                    format!("Save failed: {source}"),
                    now,
                    duration,
                ));
                Err(ExplorerError::Io { path, source })
            }
        }
    }

    /// Snapshot of the explorer state for debugging and tests.
    #[must_use]
    pub fn debug_info(&self) -> ExplorerDebugInfo {
        ExplorerDebugInfo {
            generations: self.history.len(),
            viewport: self.viewport.debug_info(),
            auto_scroll: self.auto_scroll,
            show_backbone: self.show_backbone,
            dragging: self.drag.is_dragging(),
        }
    }
}

/// Debug snapshot returned by [`Explorer::debug_info`].
#[derive(Clone, Debug)]
pub struct ExplorerDebugInfo {
    /// Stored generations.
    pub generations: usize,
    /// Viewport state.
    pub viewport: CellViewportDebugInfo,
    /// Auto-scroll mode.
    pub auto_scroll: AutoScroll,
    /// Whether the backbone is highlighted.
    pub show_backbone: bool,
    /// Whether a drag is in progress.
    pub dragging: bool,
}
