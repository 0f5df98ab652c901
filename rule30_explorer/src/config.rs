// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explorer settings and the values derived from them.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use kurbo::Size;
use peniko::Color;
use rule30_view::CellSizeLimits;
use serde::{Deserialize, Serialize};

use crate::auto_scroll::AutoScroll;
use crate::error::ExplorerError;

/// Settings for an [`Explorer`](crate::Explorer).
///
/// Every field has a default, so a JSON file only needs the keys it wants to
/// change. Unknown keys are rejected.
///
/// Grid dimensions left as `None` are derived from the screen size and the
/// initial cell size so that the world is twice the screen in each direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    /// Initial window width in pixels.
    pub screen_width: u32,
    /// Initial window height in pixels.
    pub screen_height: u32,
    /// Number of cells per row. Must be odd when given.
    pub grid_width: Option<usize>,
    /// Nominal rows per screen-pair, used to size generation batches.
    pub grid_height: Option<usize>,
    /// Cell edge length in pixels at startup.
    pub initial_cell_size: u32,
    /// Smallest cell size reachable by zooming in.
    pub min_cell_size: u32,
    /// Largest cell size reachable by zooming out.
    pub max_cell_size: u32,
    /// Frames per second.
    pub frame_rate: u32,
    /// Auto-scroll speed in pixels per frame, `1..=10`.
    pub auto_scroll_speed: u32,
    /// Directory that backbone exports are written to.
    pub export_dir: PathBuf,
    /// How long status messages stay on screen.
    pub message_seconds: f64,
    /// Drawing colors.
    pub palette: Palette,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            grid_width: None,
            grid_height: None,
            initial_cell_size: 5,
            min_cell_size: CellSizeLimits::DEFAULT_MIN,
            max_cell_size: CellSizeLimits::DEFAULT_MAX,
            frame_rate: 60,
            auto_scroll_speed: AutoScroll::MIN_SPEED,
            export_dir: PathBuf::from("exports"),
            message_seconds: 3.0,
            palette: Palette::default(),
        }
    }
}

impl ExplorerConfig {
    /// Parses settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON settings file.
    pub fn load(path: &Path) -> Result<Self, ExplorerError> {
        let text = fs::read_to_string(path).map_err(|source| ExplorerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text).map_err(|source| ExplorerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Checks ranges and cross-field consistency.
    ///
    /// Grid width parity is checked when the automaton is created.
    pub fn validate(&self) -> Result<(), ExplorerError> {
        let invalid = |msg: String| -> Result<(), ExplorerError> {
            Err(ExplorerError::InvalidSettings(msg))
        };
        if self.screen_width == 0 || self.screen_height == 0 {
            return invalid(format!(
                "screen size must be non-zero, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.min_cell_size == 0 {
            return invalid("min_cell_size must be at least 1".into());
        }
        if self.min_cell_size > self.max_cell_size {
            return invalid(format!(
                "min_cell_size {} exceeds max_cell_size {}",
                self.min_cell_size, self.max_cell_size
            ));
        }
        if !(self.min_cell_size..=self.max_cell_size).contains(&self.initial_cell_size) {
            return invalid(format!(
                "initial_cell_size {} outside {}..={}",
                self.initial_cell_size, self.min_cell_size, self.max_cell_size
            ));
        }
        if self.frame_rate == 0 {
            return invalid("frame_rate must be at least 1".into());
        }
        if !(AutoScroll::MIN_SPEED..=AutoScroll::MAX_SPEED).contains(&self.auto_scroll_speed) {
            return invalid(format!(
                "auto_scroll_speed {} outside {}..={}",
                self.auto_scroll_speed,
                AutoScroll::MIN_SPEED,
                AutoScroll::MAX_SPEED
            ));
        }
        if self.grid_height == Some(0) {
            return invalid("grid_height must be at least 1".into());
        }
        if !self.message_seconds.is_finite() || self.message_seconds < 0.0 {
            return invalid(format!(
                "message_seconds must be a non-negative number, got {}",
                self.message_seconds
            ));
        }
        Ok(())
    }

    /// Number of cells per row.
    ///
    /// A derived width that comes out even is bumped by one so the seed cell
    /// has a true center. An explicit width is returned unchanged.
    #[must_use]
    pub fn grid_width(&self) -> usize {
        self.grid_width.unwrap_or_else(|| {
            let derived = self.screen_width as usize * 2 / self.initial_cell_size.max(1) as usize;
            derived.max(1) | 1
        })
    }

    /// Nominal grid height in rows.
    #[must_use]
    pub fn grid_height(&self) -> usize {
        self.grid_height.unwrap_or_else(|| {
            (self.screen_height as usize * 2 / self.initial_cell_size.max(1) as usize).max(1)
        })
    }

    /// Generations computed before the first frame.
    #[must_use]
    pub fn initial_generations(&self) -> usize {
        self.grid_height() * 2
    }

    /// Lookahead used while the view is moved by hand.
    #[must_use]
    pub fn catch_up_batch(&self) -> usize {
        (self.grid_height() / 2).max(1)
    }

    /// Lookahead used while auto-scrolling.
    #[must_use]
    pub fn auto_scroll_batch(&self) -> usize {
        (self.grid_height() / 4).max(1)
    }

    /// Initial screen size in pixels.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        Size::new(f64::from(self.screen_width), f64::from(self.screen_height))
    }

    /// Time between frames.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    /// How long a status message stays visible.
    #[must_use]
    pub fn message_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.message_seconds).unwrap_or(Duration::ZERO)
    }
}

/// Colors used when drawing a frame, as `[r, g, b]` bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Frame background.
    pub background: [u8; 3],
    /// Active cells.
    pub cell: [u8; 3],
    /// Active cells on the backbone column when highlighting is on.
    pub backbone: [u8; 3],
    /// Overlay label text.
    pub text: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [255, 255, 255],
            cell: [0, 0, 0],
            backbone: [220, 30, 30],
            text: [20, 20, 160],
        }
    }
}

impl Palette {
    /// Background color.
    #[must_use]
    pub fn background_color(&self) -> Color {
        rgb(self.background)
    }

    /// Active cell color.
    #[must_use]
    pub fn cell_color(&self) -> Color {
        rgb(self.cell)
    }

    /// Backbone highlight color.
    #[must_use]
    pub fn backbone_color(&self) -> Color {
        rgb(self.backbone)
    }

    /// Label text color.
    #[must_use]
    pub fn text_color(&self) -> Color {
        rgb(self.text)
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgb8(r, g, b)
}
