// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `rule30`: an interactive, infinitely scrolling view of the Rule 30 automaton.
//!
//! Drag with the left button to pan and use the wheel to zoom. Space toggles
//! auto-scroll, the arrow keys change its speed, `B` highlights the
//! backbone column, `S` exports it, and Escape quits.
//!
//! Logging follows `RUST_LOG` and defaults to `info`.

mod app;
mod cli;
mod keymap;
mod overlay;
mod scene;

use anyhow::Context as _;
use clap::Parser;
use rule30_explorer::Explorer;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use crate::app::ViewerApp;
use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let config = cli.load_config().context("failed to load settings")?;
    tracing::info!(
        screen_width = config.screen_width,
        screen_height = config.screen_height,
        grid_width = config.grid_width(),
        frame_rate = config.frame_rate,
        export_dir = %config.export_dir.display(),
        "configuration loaded"
    );

    let explorer = Explorer::new(config).context("failed to start explorer")?;
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = ViewerApp::new(explorer, cli.font.as_deref(), cli.cpu);
    event_loop.run_app(&mut app).context("event loop failed")?;
    app.finish()
}
