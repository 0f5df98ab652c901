// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use kurbo::Affine;
use rule30_explorer::{Explorer, Flow, InputEvent};
use ui_events_winit::{WindowEventReducer, WindowEventTranslation};
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu;
use vello::{AaConfig, AaSupport, Renderer, RendererOptions, Scene};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use crate::keymap::{keyboard_input, pointer_input};
use crate::overlay::ViewerOverlay;
use crate::scene::SceneSurface;

const WINDOW_TITLE: &str = "Rule 30";

enum RenderState<'s> {
    /// Suspended; keeps the window if one was created.
    Suspended(Option<Arc<Window>>),
    Active {
        surface: Box<RenderSurface<'s>>,
        window: Arc<Window>,
    },
}

/// Winit application driving an [`Explorer`] at a fixed frame rate.
pub(crate) struct ViewerApp<'s> {
    context: RenderContext,
    renderer: Option<Renderer>,
    state: RenderState<'s>,
    scene: Scene,
    explorer: Explorer,
    overlay: ViewerOverlay,
    reducer: WindowEventReducer,
    frame_interval: Duration,
    next_frame: Instant,
    use_cpu: bool,
    failure: Option<anyhow::Error>,
}

impl core::fmt::Debug for ViewerApp<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewerApp")
            .field("explorer", &self.explorer)
            .field("overlay", &self.overlay)
            .field("use_cpu", &self.use_cpu)
            .finish_non_exhaustive()
    }
}

impl ViewerApp<'_> {
    pub(crate) fn new(explorer: Explorer, font: Option<&Path>, use_cpu: bool) -> Self {
        Self {
            context: RenderContext::new(),
            renderer: None,
            state: RenderState::Suspended(None),
            scene: Scene::new(),
            frame_interval: explorer.config().frame_interval(),
            explorer,
            overlay: ViewerOverlay::new(WINDOW_TITLE, font),
            reducer: WindowEventReducer::default(),
            next_frame: Instant::now(),
            use_cpu,
            failure: None,
        }
    }

    /// Consumes the app after the event loop returns, surfacing any fatal error.
    pub(crate) fn finish(self) -> anyhow::Result<()> {
        self.failure.map_or(Ok(()), Err)
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!(error = %err, "fatal render error");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: InputEvent) {
        if self.explorer.handle_event(event, Instant::now()) == Flow::Exit {
            tracing::info!("exit requested");
            event_loop.exit();
        }
    }

    fn resume(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let RenderState::Suspended(cached_window) = &mut self.state else {
            return Ok(());
        };

        let window = match cached_window.take() {
            Some(window) => window,
            None => {
                let screen = self.explorer.config().screen_size();
                let attr = Window::default_attributes()
                    .with_inner_size(LogicalSize::new(screen.width, screen.height))
                    .with_resizable(true)
                    .with_title(WINDOW_TITLE);
                Arc::new(event_loop.create_window(attr).context("create window")?)
            }
        };

        let size = window.inner_size();
        let surface_future = self.context.create_surface(
            window.clone(),
            size.width,
            size.height,
            wgpu::PresentMode::AutoVsync,
        );
        let surface = pollster::block_on(surface_future).context("create surface")?;

        if self.renderer.is_none() {
            let renderer = Renderer::new(
                &self.context.devices[surface.dev_id].device,
                RendererOptions {
                    use_cpu: self.use_cpu,
                    antialiasing_support: AaSupport::area_only(),
                    num_init_threads: NonZeroUsize::new(1),
                    pipeline_cache: None,
                },
            )
            .context("create renderer")?;
            self.renderer = Some(renderer);
        }

        // The platform may not honor the requested size exactly.
        let logical = size.to_logical::<f64>(window.scale_factor());
        self.explorer.handle_event(
            InputEvent::Resized {
                width: logical.width,
                height: logical.height,
            },
            Instant::now(),
        );

        tracing::info!(width = size.width, height = size.height, use_cpu = self.use_cpu, "window ready");
        self.state = RenderState::Active {
            surface: Box::new(surface),
            window,
        };
        Ok(())
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let RenderState::Active { surface, window } = &mut self.state else {
            return Ok(());
        };

        self.scene.reset();
        self.overlay.begin_frame();
        let screen = self.explorer.viewport().screen_size();
        let scale = window.scale_factor();
        let mut target = SceneSurface::new(&mut self.scene, scale, screen);
        self.explorer
            .render(&mut target, &mut self.overlay, Instant::now());
        // Labels go on top of the cells.
        if let Some(title) = self
            .overlay
            .finish_frame(&mut self.scene, Affine::scale(scale))
        {
            window.set_title(&title);
        }

        let wgpu::SurfaceConfiguration { width, height, .. } = surface.config;
        let surface_texture = match surface.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                tracing::debug!("surface outdated; reconfiguring");
                self.context.resize_surface(surface, width, height);
                return Ok(());
            }
            Err(err) => return Err(err).context("get surface texture"),
        };
        let device_handle = &self.context.devices[surface.dev_id];

        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(());
        };
        renderer
            .render_to_texture(
                &device_handle.device,
                &device_handle.queue,
                &self.scene,
                &surface.target_view,
                &vello::RenderParams {
                    base_color: self.explorer.config().palette.background_color(),
                    width,
                    height,
                    antialiasing_method: AaConfig::Area,
                },
            )
            .context("render to texture")?;

        let mut encoder = device_handle
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Surface Blit"),
            });
        surface.blitter.copy(
            &device_handle.device,
            &mut encoder,
            &surface.target_view,
            &surface_texture
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default()),
        );
        device_handle.queue.submit([encoder.finish()]);
        surface_texture.present();

        let _ = device_handle.device.poll(wgpu::PollType::Poll);
        Ok(())
    }
}

impl ApplicationHandler for ViewerApp<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(err) = self.resume(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let RenderState::Active { window, .. } = &self.state {
            self.state = RenderState::Suspended(Some(window.clone()));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let scale = match &mut self.state {
            RenderState::Active { window, .. } if window.id() == window_id => {
                window.scale_factor()
            }
            _ => return,
        };

        let translated = match self.reducer.reduce(scale, &event) {
            Some(WindowEventTranslation::Pointer(e)) => pointer_input(&e),
            Some(WindowEventTranslation::Keyboard(k)) => keyboard_input(&k),
            None => None,
        };
        if let Some(input) = translated {
            self.dispatch(event_loop, input);
        }

        match event {
            WindowEvent::CloseRequested => self.dispatch(event_loop, InputEvent::Quit),
            WindowEvent::Resized(size) => {
                if let RenderState::Active { surface, .. } = &mut self.state {
                    self.context
                        .resize_surface(surface, size.width, size.height);
                }
                let logical = size.to_logical::<f64>(scale);
                self.dispatch(
                    event_loop,
                    InputEvent::Resized {
                        width: logical.width,
                        height: logical.height,
                    },
                );
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.render() {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let RenderState::Active { window, .. } = &self.state else {
            return;
        };
        let now = Instant::now();
        if now >= self.next_frame {
            let added = self.explorer.update(now);
            if added > 0 {
                tracing::trace!(added, "generated rows");
            }
            window.request_redraw();
            self.next_frame = now + self.frame_interval;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
