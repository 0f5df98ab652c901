// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use clap::Parser;
use rule30_explorer::{ExplorerConfig, ExplorerError};

/// Interactive Rule 30 explorer.
///
/// Settings are layered: built-in defaults, then the `--config` file, then
/// individual flags.
#[derive(Debug, Parser)]
#[command(name = "rule30", version, about, long_about = None)]
pub(crate) struct Cli {
    /// JSON settings file.
    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,
    /// Window width in logical pixels.
    #[arg(long)]
    pub(crate) width: Option<u32>,
    /// Window height in logical pixels.
    #[arg(long)]
    pub(crate) height: Option<u32>,
    /// Cells per row; must be odd.
    #[arg(long)]
    pub(crate) grid_width: Option<usize>,
    /// Initial cell size in pixels.
    #[arg(long)]
    pub(crate) cell_size: Option<u32>,
    /// Frames per second.
    #[arg(long)]
    pub(crate) frame_rate: Option<u32>,
    /// Directory for backbone exports.
    #[arg(long, value_name = "DIR")]
    pub(crate) export_dir: Option<PathBuf>,
    /// TrueType or OpenType font for on-screen labels.
    ///
    /// Without it a common system font is tried, then the window title.
    #[arg(long, value_name = "FILE")]
    pub(crate) font: Option<PathBuf>,
    /// Render with Vello's CPU path.
    #[arg(long)]
    pub(crate) cpu: bool,
}

impl Cli {
    /// Builds the effective settings.
    pub(crate) fn load_config(&self) -> Result<ExplorerConfig, ExplorerError> {
        let mut config = match &self.config {
            Some(path) => ExplorerConfig::load(path)?,
            None => ExplorerConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut ExplorerConfig) {
        if let Some(width) = self.width {
            config.screen_width = width;
        }
        if let Some(height) = self.height {
            config.screen_height = height;
        }
        if let Some(grid_width) = self.grid_width {
            config.grid_width = Some(grid_width);
        }
        if let Some(cell_size) = self.cell_size {
            config.initial_cell_size = cell_size;
        }
        if let Some(frame_rate) = self.frame_rate {
            config.frame_rate = frame_rate;
        }
        if let Some(dir) = &self.export_dir {
            config.export_dir.clone_from(dir);
        }
    }
}
