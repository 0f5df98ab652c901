// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless frame-loop tests driving `Explorer` through recorded surfaces.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;
use rule30_automaton::ConfigError;
use rule30_explorer::{
    DisplaySurface, Explorer, ExplorerConfig, ExplorerError, Flow, InputEvent, Key, MouseButton,
    PersistenceSink, TextOverlay, WheelDirection,
};
use rule30_view::CellIndex;

#[derive(Default)]
struct RecordingSurface {
    clears: usize,
    rects: Vec<(Rect, [f32; 4])>,
}

impl DisplaySurface for RecordingSurface {
    fn clear(&mut self, _color: Color) {
        self.clears += 1;
        self.rects.clear();
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        self.rects.push((rect, color.components));
    }
}

#[derive(Default)]
struct RecordingOverlay {
    labels: Vec<(String, Point)>,
}

impl TextOverlay for RecordingOverlay {
    fn render_label(&mut self, _text: &str) -> Size {
        Size::new(80.0, 10.0)
    }

    fn blit_label(&mut self, text: &str, origin: Point, _color: Color) {
        self.labels.push((text.to_owned(), origin));
    }
}

#[derive(Debug, Default)]
struct MemorySink {
    writes: Vec<(PathBuf, Vec<String>)>,
}

impl PersistenceSink for MemorySink {
    fn write_lines(&mut self, path: &Path, lines: &[String]) -> io::Result<PathBuf> {
        self.writes.push((path.to_path_buf(), lines.to_vec()));
        Ok(path.to_path_buf())
    }
}

struct FailingSink;

impl PersistenceSink for FailingSink {
    fn write_lines(&mut self, _path: &Path, _lines: &[String]) -> io::Result<PathBuf> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }
}

/// 41 columns, 17 initial rows, 5px cells on a 100x60 screen.
fn small_config() -> ExplorerConfig {
    ExplorerConfig {
        screen_width: 100,
        screen_height: 60,
        grid_width: Some(41),
        grid_height: Some(8),
        export_dir: PathBuf::from("out"),
        ..ExplorerConfig::default()
    }
}

fn explorer() -> Explorer<MemorySink> {
    Explorer::with_sink(small_config(), MemorySink::default()).unwrap()
}

fn left_down(x: f64, y: f64) -> InputEvent {
    InputEvent::MouseDown {
        button: MouseButton::Left,
        position: Point::new(x, y),
    }
}

fn move_to(x: f64, y: f64) -> InputEvent {
    InputEvent::MouseMove {
        position: Point::new(x, y),
    }
}

#[test]
fn startup_state() {
    let explorer = explorer();
    assert_eq!(explorer.history().width(), 41);
    assert_eq!(explorer.history().len(), 17);
    assert_eq!(explorer.viewport().cell_size(), 5);
    // Column 20 centered: 20.5 * 5 - 50.
    assert_eq!(explorer.viewport().scroll(), Vec2::new(52.5, 0.0));
    assert!(!explorer.auto_scroll().is_enabled());
    assert!(!explorer.show_backbone());
}

#[test]
fn configured_limits_wider_than_defaults_keep_initial_size() {
    let config = ExplorerConfig {
        initial_cell_size: 15,
        min_cell_size: 1,
        max_cell_size: 20,
        ..small_config()
    };
    let mut explorer = Explorer::with_sink(config, MemorySink::default()).unwrap();
    assert_eq!(explorer.viewport().cell_size(), 15);
    let limits = explorer.viewport().cell_size_limits();
    assert_eq!((limits.min, limits.max), (1, 20));

    // Zooming out may grow past the default maximum of 10.
    explorer.handle_event(
        InputEvent::Wheel {
            direction: WheelDirection::Up,
            position: Point::new(10.0, 10.0),
        },
        Instant::now(),
    );
    assert_eq!(explorer.viewport().cell_size(), 16);
}

#[test]
fn configured_minimum_above_default_maximum_is_honored() {
    let config = ExplorerConfig {
        initial_cell_size: 15,
        min_cell_size: 12,
        max_cell_size: 20,
        ..small_config()
    };
    let explorer = Explorer::with_sink(config, MemorySink::default()).unwrap();
    assert_eq!(explorer.viewport().cell_size(), 15);
    assert_eq!(explorer.viewport().cell_size_limits().min, 12);
}

#[test]
fn even_explicit_width_is_rejected() {
    let config = ExplorerConfig {
        grid_width: Some(40),
        ..small_config()
    };
    let err = Explorer::with_sink(config, MemorySink::default()).unwrap_err();
    assert!(
        matches!(
            err,
            ExplorerError::InvalidConfig(ConfigError::EvenWidth { width: 40 })
        ),
        "{err}"
    );
}

#[test]
fn idle_update_does_not_generate() {
    let mut explorer = explorer();
    // Ceiling 12 plus a margin of 4 is still inside 17 rows.
    assert_eq!(explorer.update(Instant::now()), 0);
    assert_eq!(explorer.history().len(), 17);
}

#[test]
fn drag_pans_opposite_to_pointer_motion() {
    let mut explorer = explorer();
    let now = Instant::now();
    explorer.handle_event(left_down(50.0, 30.0), now);
    assert!(explorer.is_dragging());

    explorer.handle_event(move_to(40.0, 30.0), now);
    assert_eq!(explorer.viewport().scroll(), Vec2::new(62.5, 0.0));
    explorer.handle_event(move_to(40.0, 20.0), now);
    assert_eq!(explorer.viewport().scroll(), Vec2::new(62.5, 10.0));

    explorer.handle_event(
        InputEvent::MouseUp {
            button: MouseButton::Left,
        },
        now,
    );
    explorer.handle_event(move_to(0.0, 0.0), now);
    assert_eq!(explorer.viewport().scroll(), Vec2::new(62.5, 10.0));
}

#[test]
fn drag_is_clamped_to_content() {
    let mut explorer = explorer();
    let now = Instant::now();
    explorer.handle_event(left_down(50.0, 30.0), now);
    explorer.handle_event(move_to(-5000.0, -5000.0), now);
    // 41 * 5 - 100 and 17 * 5 - 60.
    assert_eq!(explorer.viewport().scroll(), Vec2::new(105.0, 25.0));
    explorer.handle_event(move_to(5000.0, 5000.0), now);
    assert_eq!(explorer.viewport().scroll(), Vec2::ZERO);
}

#[test]
fn other_buttons_do_not_drag() {
    let mut explorer = explorer();
    let now = Instant::now();
    explorer.handle_event(
        InputEvent::MouseDown {
            button: MouseButton::Right,
            position: Point::new(50.0, 30.0),
        },
        now,
    );
    explorer.handle_event(move_to(10.0, 10.0), now);
    assert!(!explorer.is_dragging());
    assert_eq!(explorer.viewport().scroll(), Vec2::new(52.5, 0.0));
}

#[test]
fn wheel_zoom_keeps_cell_under_pointer() {
    let mut explorer = explorer();
    let now = Instant::now();
    let anchor = Point::new(50.0, 30.0);
    let before = explorer.viewport().cell_at_screen(anchor);
    assert_eq!(before, Some(CellIndex { row: 6, column: 20 }));

    explorer.handle_event(
        InputEvent::Wheel {
            direction: WheelDirection::Up,
            position: anchor,
        },
        now,
    );
    assert_eq!(explorer.viewport().cell_size(), 6);
    assert_eq!(explorer.viewport().scroll(), Vec2::new(73.0, 6.0));
    assert_eq!(explorer.viewport().cell_at_screen(anchor), before);
}

#[test]
fn wheel_down_stops_at_min_cell_size() {
    let mut explorer = explorer();
    let now = Instant::now();
    let wheel_down = InputEvent::Wheel {
        direction: WheelDirection::Down,
        position: Point::new(10.0, 10.0),
    };
    for _ in 0..4 {
        explorer.handle_event(wheel_down, now);
    }
    assert_eq!(explorer.viewport().cell_size(), 1);
    let scroll = explorer.viewport().scroll();
    explorer.handle_event(wheel_down, now);
    assert_eq!(explorer.viewport().cell_size(), 1);
    assert_eq!(explorer.viewport().scroll(), scroll);
}

#[test]
fn auto_scroll_keeps_generations_ahead_of_the_view() {
    let mut explorer = explorer();
    let now = Instant::now();
    explorer.handle_event(InputEvent::KeyDown(Key::ToggleAutoScroll), now);
    explorer.handle_event(InputEvent::KeyDown(Key::SpeedUp), now);
    assert_eq!(explorer.auto_scroll().speed(), 2);

    for frame in 1..=200_u32 {
        explorer.update(now);
        let viewport = explorer.viewport();
        assert_eq!(viewport.scroll().y, f64::from(frame * 2));
        assert!(
            explorer.history().len() > viewport.needed_generation_ceiling() + 2,
            "frame {frame}: history fell behind the view"
        );
        assert_eq!(viewport.rows(), explorer.history().len());
    }
}

#[test]
fn auto_scroll_speed_is_in_pixels_not_cells() {
    let config = ExplorerConfig {
        initial_cell_size: 8,
        auto_scroll_speed: 3,
        ..small_config()
    };
    let mut explorer = Explorer::with_sink(config, MemorySink::default()).unwrap();
    let now = Instant::now();
    explorer.handle_event(InputEvent::KeyDown(Key::ToggleAutoScroll), now);

    for frame in 1..=5_u32 {
        explorer.update(now);
        assert_eq!(explorer.viewport().scroll().y, f64::from(frame * 3));
    }
    // 15 pixels at 8px cells: the top row is still only partly scrolled past.
    assert_eq!(explorer.viewport().visible_cell_range().rows.start, 1);
}

#[test]
fn manual_jump_catches_up_in_batches() {
    let mut explorer = explorer();
    let now = Instant::now();
    // Scroll is clamped to the generated rows, so grab and pull up
    // repeatedly and let each update extend the history.
    for _ in 0..20 {
        explorer.handle_event(left_down(50.0, 30.0), now);
        explorer.handle_event(move_to(50.0, 0.0), now);
        explorer.handle_event(
            InputEvent::MouseUp {
                button: MouseButton::Left,
            },
            now,
        );
        explorer.update(now);
    }
    assert!(explorer.viewport().scroll().y > 0.0);
    let ceiling = explorer.viewport().needed_generation_ceiling();
    assert!(explorer.history().len() > ceiling + 4);
    // Rows are only ever added in whole batches of 4.
    assert_eq!((explorer.history().len() - 17) % 4, 0);
}

#[test]
fn speed_keys_saturate() {
    let mut explorer = explorer();
    let now = Instant::now();
    for _ in 0..15 {
        explorer.handle_event(InputEvent::KeyDown(Key::SpeedUp), now);
    }
    assert_eq!(explorer.auto_scroll().speed(), 10);
    for _ in 0..15 {
        explorer.handle_event(InputEvent::KeyDown(Key::SpeedDown), now);
    }
    assert_eq!(explorer.auto_scroll().speed(), 1);
}

#[test]
fn render_draws_only_visible_active_cells() {
    let explorer = explorer();
    let mut surface = RecordingSurface::default();
    let mut overlay = RecordingOverlay::default();
    explorer.render(&mut surface, &mut overlay, Instant::now());

    let visible = explorer.viewport().visible_cell_range();
    let expected: usize = visible
        .rows
        .clone()
        .filter_map(|g| explorer.history().row(g))
        .map(|row| row.cells()[visible.columns.clone()].iter().filter(|&&c| c != 0).count())
        .sum();
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.rects.len(), expected);

    let cell = explorer.config().palette.cell_color().components;
    assert!(surface.rects.iter().all(|(_, color)| *color == cell));

    let screen = Rect::new(-5.0, -5.0, 105.0, 65.0);
    assert!(surface.rects.iter().all(|(rect, _)| screen.union(*rect) == screen));
}

#[test]
fn backbone_highlight_recolors_center_column() {
    let mut explorer = explorer();
    let now = Instant::now();
    explorer.handle_event(InputEvent::KeyDown(Key::ToggleBackbone), now);
    assert!(explorer.show_backbone());

    let mut surface = RecordingSurface::default();
    let mut overlay = RecordingOverlay::default();
    explorer.render(&mut surface, &mut overlay, now);

    let highlight = explorer.config().palette.backbone_color().components;
    let highlighted = surface
        .rects
        .iter()
        .filter(|(_, color)| *color == highlight)
        .count();
    // Rows 0..=12 are visible at scroll y = 0.
    let expected = explorer
        .history()
        .backbone()
        .take(13)
        .filter(|sample| sample.bit == 1)
        .count();
    assert_eq!(highlighted, expected);
    assert!(highlighted > 0);

    // Every highlighted rect sits in column 20.
    let x = explorer.viewport().cell_rect_on_screen(0, 20).x0;
    assert!(
        surface
            .rects
            .iter()
            .filter(|(_, color)| *color == highlight)
            .all(|(rect, _)| rect.x0 == x)
    );
}

#[test]
fn labels_stack_generation_status_and_message() {
    let mut explorer = explorer();
    let now = Instant::now();

    let mut overlay = RecordingOverlay::default();
    explorer.render(&mut RecordingSurface::default(), &mut overlay, now);
    assert_eq!(overlay.labels.len(), 1);
    assert_eq!(overlay.labels[0].0, "Generation: 12");

    explorer.handle_event(InputEvent::KeyDown(Key::ToggleAutoScroll), now);
    explorer.handle_event(InputEvent::KeyDown(Key::Save), now);

    let mut overlay = RecordingOverlay::default();
    explorer.render(&mut RecordingSurface::default(), &mut overlay, now);
    let texts: Vec<&str> = overlay.labels.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(texts.len(), 3);
    assert!(texts[1].starts_with("Auto-scroll speed 1"), "{texts:?}");
    assert!(texts[2].starts_with("Saved backbone to "), "{texts:?}");
    let ys: Vec<f64> = overlay.labels.iter().map(|(_, p)| p.y).collect();
    assert!(ys.windows(2).all(|w| w[0] < w[1]), "labels overlap: {ys:?}");

    // After the message expires only the generation and status remain.
    let later = now + Duration::from_secs(3);
    explorer.update(later);
    let mut overlay = RecordingOverlay::default();
    explorer.render(&mut RecordingSurface::default(), &mut overlay, later);
    assert_eq!(overlay.labels.len(), 2);
}

#[test]
fn save_writes_report_through_sink() {
    let mut explorer = explorer();
    let path = explorer.save_backbone(Instant::now()).unwrap();

    assert!(path.starts_with("out"));
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("backbone_") && name.ends_with(".txt"), "{name}");

    let (written_path, lines) = &explorer.sink().writes[0];
    assert_eq!(written_path, &path);
    assert_eq!(lines[0], "# Rule 30 backbone");
    assert_eq!(lines[1], "# center column: 20");
    assert_eq!(lines[2], "# generations: 17");
    assert_eq!(lines.len(), 4 + 17);
    assert_eq!(lines[4], "0 1");
}

#[test]
fn failed_save_keeps_running_and_reports() {
    let mut explorer = Explorer::with_sink(small_config(), FailingSink).unwrap();
    let now = Instant::now();
    let err = explorer.save_backbone(now).unwrap_err();
    assert!(matches!(err, ExplorerError::Io { .. }), "{err}");

    let message = explorer.message(now).unwrap();
    assert!(message.text().starts_with("Save failed"), "{}", message.text());

    // The key binding swallows the error.
    assert_eq!(
        explorer.handle_event(InputEvent::KeyDown(Key::Save), now),
        Flow::Continue
    );
}

#[test]
fn save_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = ExplorerConfig {
        export_dir: dir.path().join("exports"),
        ..small_config()
    };
    let mut explorer = Explorer::new(config).unwrap();
    let path = explorer.save_backbone(Instant::now()).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("# Rule 30 backbone\n"));
    assert_eq!(text.lines().count(), 4 + 17);
}

#[test]
fn resize_updates_screen() {
    let mut explorer = explorer();
    explorer.handle_event(
        InputEvent::Resized {
            width: 150.0,
            height: 40.0,
        },
        Instant::now(),
    );
    assert_eq!(explorer.viewport().screen_size(), Size::new(150.0, 40.0));
    assert_eq!(explorer.viewport().scroll().x, 52.5);
}

#[test]
fn quit_and_escape_exit() {
    let mut explorer = explorer();
    let now = Instant::now();
    assert_eq!(explorer.handle_event(InputEvent::Quit, now), Flow::Exit);
    assert_eq!(
        explorer.handle_event(InputEvent::KeyDown(Key::Escape), now),
        Flow::Exit
    );
    assert_eq!(
        explorer.handle_event(InputEvent::KeyDown(Key::ToggleBackbone), now),
        Flow::Continue
    );
}
