//! Spinning quad blending two textures.
//!
//! Hold UP/DOWN to shift the blend toward the second or first texture;
//! Escape closes the window.

mod mix;
mod renderer;

use winit::dpi::LogicalSize;

use glimpse_engine::core::{App, AppControl, FrameCtx};
use glimpse_engine::device::GpuInit;
use glimpse_engine::input::Key;
use glimpse_engine::logging::{init_logging, LoggingConfig};
use glimpse_engine::overlay::{DebugOverlay, PanelLayout};
use glimpse_engine::paint::Color;
use glimpse_engine::window::{Runtime, RuntimeConfig};

use mix::MixState;
use renderer::{QuadRenderer, QuadUniforms};

const SCR_WIDTH: u32 = 800;
const SCR_HEIGHT: u32 = 600;
const TITLE: &str = "LearnOpenGL";

fn clear_color() -> Color {
    Color::from_straight(0.2, 0.3, 0.3, 1.0)
}

struct MixApp {
    mix: MixState,
    overlay: DebugOverlay,
    panel: PanelLayout,
    pending_resize: Option<(u32, u32)>,
    renderer: Option<QuadRenderer>,
}

impl MixApp {
    fn new() -> Self {
        Self {
            mix: MixState::default(),
            overlay: DebugOverlay::new(),
            panel: PanelLayout::initial(SCR_WIDTH as f32),
            pending_resize: None,
            renderer: None,
        }
    }
}

impl App for MixApp {
    fn on_resize(&mut self, width: u32, height: u32) {
        self.pending_resize = Some((width, height));
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input.key_down(Key::Escape) {
            return AppControl::Exit;
        }

        let up = ctx.input.key_down(Key::ArrowUp);
        let down = ctx.input.key_down(Key::ArrowDown);
        if self.mix.update(up, down) && ctx.time.frame_index % 60 == 0 {
            log::debug!("mix factor {:.3}", self.mix.mix_factor());
        }

        if let Some((w, h)) = self.pending_resize.take() {
            let scale = ctx.window.scale_factor();
            self.panel = PanelLayout::fit(w as f32 / scale, h as f32 / scale);
        }

        let elapsed = ctx.time.elapsed;
        let mix_factor = self.mix.mix_factor();
        let uniforms = QuadUniforms::at(ctx.time.seconds(), mix_factor);

        let lines = [
            format!("glfwTime: {elapsed:.3}"),
            format!("Mix: {mix_factor:.3}"),
            "Press UP/DOWN to change mix".to_string(),
        ];

        let mut setup_failed = false;
        let control = ctx.render(clear_color(), |rctx, target| {
            if self.renderer.is_none() {
                match QuadRenderer::new(rctx) {
                    Ok(r) => self.renderer = Some(r),
                    Err(e) => {
                        log::error!("failed to set up quad renderer: {e:#}");
                        setup_failed = true;
                        return;
                    }
                }
            }

            if let Some(renderer) = self.renderer.as_ref() {
                renderer.render(rctx, target, &uniforms);
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

    if let Err(e) = Runtime::run(config, GpuInit::default(), MixApp::new()) {
        log::error!("{e:#}");
        std::process::exit(-1);
    }
}
