//! Orbiting camera over a grid of textured, spinning cubes.
//!
//! UP/DOWN (on release) step the cube count through perfect squares;
//! Escape closes the window.

mod grid;
mod layout;
mod renderer;

use glam::Mat4;
use winit::dpi::LogicalSize;

use glimpse_engine::core::{App, AppControl, FrameCtx};
use glimpse_engine::device::GpuInit;
use glimpse_engine::input::Key;
use glimpse_engine::logging::{init_logging, LoggingConfig};
use glimpse_engine::overlay::{DebugOverlay, PanelLayout};
use glimpse_engine::paint::Color;
use glimpse_engine::window::{Runtime, RuntimeConfig};

use grid::GridState;
use renderer::{CameraUniforms, CubeRenderer};

const SCR_WIDTH: u32 = 800;
const SCR_HEIGHT: u32 = 600;
const TITLE: &str = "LearnOpenGL";

fn clear_color() -> Color {
    Color::from_straight(0.2, 0.3, 0.3, 1.0)
}

struct GridApp {
    grid: GridState,
    overlay: DebugOverlay,
    panel: PanelLayout,
    /// Framebuffer size from the last resize, applied on the next frame.
    pending_resize: Option<(u32, u32)>,
    renderer: Option<CubeRenderer>,
    models: Vec<Mat4>,
}

impl GridApp {
    fn new() -> Self {
        Self {
            grid: GridState::default(),
            overlay: DebugOverlay::new(),
            panel: PanelLayout::initial(SCR_WIDTH as f32),
            pending_resize: None,
            renderer: None,
            models: Vec::new(),
        }
    }
}

impl App for GridApp {
    fn on_resize(&mut self, width: u32, height: u32) {
        self.pending_resize = Some((width, height));
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        if self.grid.update(ctx.input.key_state(Key::ArrowUp), ctx.input.key_state(Key::ArrowDown)) {
            log::debug!("grid size is now {}", self.grid.grid_size());
        }

        if let Some((w, h)) = self.pending_resize.take() {
            let scale = ctx.window.scale_factor();
            self.panel = PanelLayout::fit(w as f32 / scale, h as f32 / scale);
        }

        let elapsed = ctx.time.elapsed;
        let grid_size = self.grid.grid_size();
        layout::model_matrices(grid_size, ctx.time.seconds(), &mut self.models);

        let lines = [
            format!("glfwTime: {elapsed:.3}"),
            format!("Grid Size: {grid_size}"),
            "Press UP/DOWN to change grid size".to_string(),
        ];

        let mut setup_failed = false;
        let control = ctx.render(clear_color(), |rctx, target| {
            if self.renderer.is_none() {
                match CubeRenderer::new(rctx) {
                    Ok(r) => {
                        let max_side = CubeRenderer::max_side(&rctx.device.limits());
                        log::debug!("grid side capped at {max_side}");
                        self.grid.set_max_side(max_side);
                        self.renderer = Some(r);
                    }
                    Err(e) => {
                        log::error!("failed to set up cube renderer: {e:#}");
                        setup_failed = true;
                        return;
                    }
                }
            }

            if let Some(renderer) = self.renderer.as_mut() {
                if !self.models.is_empty() {
                    let camera = CameraUniforms::new(
                        layout::view_matrix(grid_size, elapsed),
                        layout::projection_matrix(rctx.viewport.aspect()),
                    );
                    renderer.render(rctx, target, &camera, &self.models);
                }
            }

            self.overlay.begin_frame();
            self.overlay.panel(&self.panel, "Details", &lines);
            self.overlay.render(rctx, target);
        });

        if setup_failed { AppControl::Exit } else { control }
    }
}

fn main() {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: TITLE.to_string(),
        initial_size: LogicalSize::new(SCR_WIDTH as f64, SCR_HEIGHT as f64),
        ..RuntimeConfig::default()
    };

    if let Err(e) = Runtime::run(config, GpuInit::default(), GridApp::new()) {
        log::error!("{e:#}");
        std::process::exit(-1);
    }
}
