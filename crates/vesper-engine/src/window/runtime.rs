use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::coords::{Mat4, Vec2};
use crate::device::{Gpu, GpuConfig, SurfaceErrorAction};
use crate::render::{Canvas, CanvasOptions, RenderCtx, RenderTarget};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Forwarded to [`CanvasOptions`].
    pub sample_count: u32,
    pub gpu: GpuConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "vesper".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            sample_count: 4,
            gpu: GpuConfig::default(),
        }
    }
}

/// Per-frame metadata handed to the sketch.
#[derive(Debug, Copy, Clone)]
pub struct FrameInfo {
    /// Drawable size in pixels (the canvas coordinate space).
    pub width: f32,
    pub height: f32,
    /// Frames rendered so far.
    pub frame: u64,
    /// Seconds since the runtime started.
    pub elapsed: f32,
}

impl FrameInfo {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Application contract: record shapes on the canvas each frame; the runtime
/// handles tessellation, submission, and presentation.
pub trait Sketch {
    /// Called once before the first frame.
    fn setup(&mut self, canvas: &mut Canvas, info: &FrameInfo) {
        let _ = (canvas, info);
    }

    /// Called once per rendered frame.
    fn frame(&mut self, canvas: &mut Canvas, info: &FrameInfo);
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    pub fn run<S>(config: RuntimeConfig, sketch: S) -> Result<()>
    where
        S: Sketch + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, sketch);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

enum FrameOutcome {
    Drawn,
    Skipped,
    Exit,
}

struct AppState<S>
where
    S: Sketch + 'static,
{
    config: RuntimeConfig,
    sketch: S,

    entry: Option<WindowEntry>,
    canvas: Option<Canvas>,

    started: Instant,
    frame: u64,
    needs_setup: bool,
}

impl<S> AppState<S>
where
    S: Sketch + 'static,
{
    fn new(config: RuntimeConfig, sketch: S) -> Self {
        Self {
            config,
            sketch,
            entry: None,
            canvas: None,
            started: Instant::now(),
            frame: 0,
            needs_setup: true,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_config = self.config.gpu.clone();
        let entry = WindowEntryBuilder {
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_config))
                    .expect("GPU initialization failed for window")
            },
        }
        .build();

        let canvas = entry.with_gpu(|gpu| {
            let mut canvas = Canvas::new(
                gpu.device(),
                gpu.queue(),
                gpu.surface_format(),
                CanvasOptions { sample_count: self.config.sample_count },
            );
            // Default mapping: draw in pixels, top-left origin.
            let size = gpu.size();
            canvas.set_transform(
                gpu.queue(),
                Mat4::pixel_to_ndc(size.width as f32, size.height as f32),
            );
            canvas
        });

        self.entry = Some(entry);
        self.canvas = Some(canvas);
        log::info!("window + canvas ready");
        Ok(())
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(entry), Some(canvas)) = (self.entry.as_mut(), self.canvas.as_mut()) else {
            return;
        };

        let size = entry.with_gpu(|gpu| gpu.size());
        if size.width == 0 || size.height == 0 {
            return; // minimized
        }

        let info = FrameInfo {
            width: size.width as f32,
            height: size.height as f32,
            frame: self.frame,
            elapsed: self.started.elapsed().as_secs_f32(),
        };

        if self.needs_setup {
            self.sketch.setup(canvas, &info);
            self.needs_setup = false;
        }
        self.sketch.frame(canvas, &info);

        let outcome = entry.with_gpu_mut(|gpu| {
            let mut frame = match gpu.begin_frame() {
                Ok(f) => f,
                Err(err) => {
                    log::warn!("surface error: {err}");
                    return match gpu.handle_surface_error(err) {
                        SurfaceErrorAction::Fatal => FrameOutcome::Exit,
                        _ => FrameOutcome::Skipped,
                    };
                }
            };

            let ctx = RenderCtx::new(
                gpu.device(),
                gpu.queue(),
                gpu.surface_format(),
                size.width,
                size.height,
            );

            // RenderTarget borrows the encoder; dropped before submit takes
            // the frame.
            {
                let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
                canvas.draw(&ctx, &mut target);
            }

            gpu.submit(frame);
            FrameOutcome::Drawn
        });

        match outcome {
            FrameOutcome::Drawn => self.frame += 1,
            FrameOutcome::Skipped => {
                // The skipped frame's geometry would otherwise pile onto the
                // next frame's recording.
                canvas.clear();
            }
            FrameOutcome::Exit => event_loop.exit(),
        }
    }
}

impl<S> ApplicationHandler for AppState<S>
where
    S: Sketch + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_none() {
            if let Err(err) = self.create_window(event_loop) {
                log::error!("window creation failed: {err:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(new_size) => {
                if let (Some(entry), Some(canvas)) = (self.entry.as_mut(), self.canvas.as_mut()) {
                    entry.with_gpu_mut(|gpu| {
                        gpu.resize(new_size);
                        canvas.set_transform(
                            gpu.queue(),
                            Mat4::pixel_to_ndc(new_size.width as f32, new_size.height as f32),
                        );
                    });
                }
            }

            WindowEvent::RedrawRequested => self.render_frame(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(entry) = &self.entry {
            entry.borrow_window().request_redraw();
        }
    }
}
